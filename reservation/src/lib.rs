use std::sync::Arc;

use abi::{
    MonthSummary, NewReservation, Reservation, ReservationError, ReservationFilter,
    ReservationId, ReservationPatch, ToCalendarDate,
};

mod demo;
mod manager;

pub use demo::demo_reservations;

type Subscriber = Box<dyn Fn(&[Reservation]) + Send + Sync>;

/// In-memory reservation store. The collection is never edited in place:
/// every mutation swaps in a new snapshot and notifies subscribers.
pub struct ReservationManager {
    reservations: Arc<Vec<Reservation>>,
    subscribers: Vec<Subscriber>,
}

pub trait Rsvp {
    /// make a reservation
    fn add(&mut self, rsvp: NewReservation) -> Result<Reservation, ReservationError>;
    /// merge the given fields into a reservation, unknown ids are ignored
    fn update(
        &mut self,
        id: &ReservationId,
        patch: ReservationPatch,
    ) -> Result<Option<Reservation>, ReservationError>;
    /// delete reservation, unknown ids are ignored
    fn delete(&mut self, id: &ReservationId) -> Option<Reservation>;
    /// get reservation by id
    fn get(&self, id: &ReservationId) -> Option<Reservation>;
    /// reservations staying over the given day, check-out day excluded
    fn get_for_date(&self, date: impl ToCalendarDate) -> Vec<Reservation>;
    /// search reservations for the list view
    fn filter(&self, filter: &ReservationFilter) -> Vec<Reservation>;
    /// dashboard figures for a month
    fn month_summary(&self, year: i32, month: u32) -> MonthSummary;
}
