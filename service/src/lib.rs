mod calendar;
mod form;
mod logging;
mod service;

use reservation::ReservationManager;

pub use calendar::*;
pub use form::*;
pub use logging::init_tracing;

/// Booking operations behind the calendar, list and dialogs. The store is
/// handed in by the caller; nothing looks it up globally.
#[derive(Debug)]
pub struct RsvpService {
    manager: ReservationManager,
}
