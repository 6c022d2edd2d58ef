use std::sync::Arc;

use abi::{
    Config, MonthSummary, Reservation, ReservationError, ReservationFilter, ReservationId,
    ToCalendarDate,
};
use reservation::{ReservationManager, Rsvp};
use tracing::{info, warn};

use crate::{CalendarDay, CalendarMonth, DateSelection, FormError, ReservationForm, RsvpService};

impl RsvpService {
    pub fn new(manager: ReservationManager) -> Self {
        Self { manager }
    }

    pub fn from_config(config: &Config) -> Result<Self, ReservationError> {
        let manager = if config.store.seed_demo {
            ReservationManager::with_demo_data()?
        } else {
            ReservationManager::new()
        };
        info!(reservations = manager.len(), "reservation service ready");

        Ok(Self::new(manager))
    }

    pub fn manager(&self) -> &ReservationManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut ReservationManager {
        &mut self.manager
    }

    pub fn reservations(&self) -> Arc<Vec<Reservation>> {
        self.manager.reservations()
    }

    /// submit the "new reservation" dialog
    pub fn create(&mut self, form: &ReservationForm) -> Result<Reservation, FormError> {
        let rsvp = form
            .to_new_reservation()
            .and_then(|rsvp| self.manager.add(rsvp).map_err(FormError::from))
            .inspect_err(|e| warn!(error = %e, "create reservation rejected"))?;

        info!(id = %rsvp.id, guest = %rsvp.guest_name, "reservation created");
        Ok(rsvp)
    }

    /// submit the "edit reservation" dialog, `None` when the reservation is gone
    pub fn edit(
        &mut self,
        id: &ReservationId,
        form: &ReservationForm,
    ) -> Result<Option<Reservation>, FormError> {
        let updated = form
            .to_patch()
            .and_then(|patch| self.manager.update(id, patch).map_err(FormError::from))
            .inspect_err(|e| warn!(%id, error = %e, "edit reservation rejected"))?;

        if let Some(rsvp) = &updated {
            info!(id = %rsvp.id, status = %rsvp.status, "reservation edited");
        }
        Ok(updated)
    }

    /// confirmed deletion from the day view
    pub fn remove(&mut self, id: &ReservationId) -> Option<Reservation> {
        let removed = self.manager.delete(id);
        if removed.is_some() {
            info!(%id, "reservation removed");
        }
        removed
    }

    /// Days of `month` with the number of reservations staying over each one.
    pub fn calendar(&self, month: CalendarMonth) -> Vec<CalendarDay> {
        month
            .days()
            .into_iter()
            .map(|day| CalendarDay {
                reservations: self.manager.get_for_date(day.date).len(),
                ..day
            })
            .collect()
    }

    /// Occupied days open the reservation list, free days a new-reservation form.
    pub fn select_date(&self, date: impl ToCalendarDate) -> DateSelection {
        let date = date.to_calendar_date();
        let rsvps = self.manager.get_for_date(date);
        if rsvps.is_empty() {
            DateSelection::Create(ReservationForm::for_date(date))
        } else {
            DateSelection::View(rsvps)
        }
    }

    pub fn list(&self, filter: &ReservationFilter) -> Vec<Reservation> {
        self.manager.filter(filter)
    }

    /// Figures for the month `today` falls in.
    pub fn dashboard(&self, today: impl ToCalendarDate) -> MonthSummary {
        let month = CalendarMonth::containing(today);
        self.manager.month_summary(month.year(), month.month())
    }
}
