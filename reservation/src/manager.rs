use std::{fmt, sync::Arc};

use abi::{
    MonthSummary, NewReservation, Reservation, ReservationError, ReservationFilter,
    ReservationId, ReservationPatch, ToCalendarDate, Validator,
};
use tracing::debug;

use crate::{demo_reservations, ReservationManager, Rsvp};

impl Rsvp for ReservationManager {
    fn add(&mut self, rsvp: NewReservation) -> Result<Reservation, ReservationError> {
        rsvp.validate()?;

        let rsvp = Reservation::new(self.next_id(), rsvp);

        let mut next = Vec::with_capacity(self.reservations.len() + 1);
        next.extend(self.reservations.iter().cloned());
        next.push(rsvp.clone());
        self.replace(next);

        debug!(id = %rsvp.id, guest = %rsvp.guest_name, check_in = %rsvp.check_in, check_out = %rsvp.check_out, "reservation added");
        Ok(rsvp)
    }

    fn update(
        &mut self,
        id: &ReservationId,
        patch: ReservationPatch,
    ) -> Result<Option<Reservation>, ReservationError> {
        let Some(pos) = self.position(id) else {
            debug!(%id, "update ignored, reservation not found");
            return Ok(None);
        };

        let updated = self.reservations[pos].clone().merge(patch);
        updated.validate()?;

        let mut next = self.reservations.as_ref().clone();
        next[pos] = updated.clone();
        self.replace(next);

        debug!(%id, status = %updated.status, "reservation updated");
        Ok(Some(updated))
    }

    fn delete(&mut self, id: &ReservationId) -> Option<Reservation> {
        let Some(pos) = self.position(id) else {
            debug!(%id, "delete ignored, reservation not found");
            return None;
        };

        let removed = self.reservations[pos].clone();
        let next = self
            .reservations
            .iter()
            .filter(|rsvp| &rsvp.id != id)
            .cloned()
            .collect();
        self.replace(next);

        debug!(%id, "reservation deleted");
        Some(removed)
    }

    fn get(&self, id: &ReservationId) -> Option<Reservation> {
        self.reservations.iter().find(|rsvp| &rsvp.id == id).cloned()
    }

    fn get_for_date(&self, date: impl ToCalendarDate) -> Vec<Reservation> {
        let date = date.to_calendar_date();
        self.reservations
            .iter()
            .filter(|rsvp| rsvp.covers(date))
            .cloned()
            .collect()
    }

    fn filter(&self, filter: &ReservationFilter) -> Vec<Reservation> {
        filter.apply(self.reservations.iter())
    }

    fn month_summary(&self, year: i32, month: u32) -> MonthSummary {
        MonthSummary::collect(year, month, self.reservations.iter())
    }
}

impl ReservationManager {
    pub fn new() -> Self {
        Self {
            reservations: Arc::new(Vec::new()),
            subscribers: Vec::new(),
        }
    }

    /// Store preloaded with the sample bookings.
    pub fn with_demo_data() -> Result<Self, ReservationError> {
        let mut manager = Self::new();
        manager.seed_demo()?;
        Ok(manager)
    }

    pub fn seed_demo(&mut self) -> Result<Vec<Reservation>, ReservationError> {
        demo_reservations()?
            .into_iter()
            .map(|rsvp| self.add(rsvp))
            .collect()
    }

    /// Current snapshot in insertion order. Later mutations do not touch it.
    pub fn reservations(&self) -> Arc<Vec<Reservation>> {
        Arc::clone(&self.reservations)
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Called with the new collection after every successful mutation.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&[Reservation]) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    fn replace(&mut self, next: Vec<Reservation>) {
        self.reservations = Arc::new(next);
        for subscriber in &self.subscribers {
            subscriber(&self.reservations);
        }
    }

    fn position(&self, id: &ReservationId) -> Option<usize> {
        self.reservations.iter().position(|rsvp| &rsvp.id == id)
    }

    fn next_id(&self) -> ReservationId {
        loop {
            let id = ReservationId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

impl Default for ReservationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReservationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReservationManager")
            .field("reservations", &self.reservations)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
