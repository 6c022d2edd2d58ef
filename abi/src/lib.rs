mod config;
mod error;
mod types;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

pub use config::*;
pub use error::*;
pub use types::*;

pub trait Validator {
    fn validate(&self) -> Result<(), ReservationError>;
}

/// Anything that carries a calendar day. Conversions build a new `NaiveDate`
/// and drop the time of day, the source value is left as it was.
pub trait ToCalendarDate {
    fn to_calendar_date(&self) -> NaiveDate;
}

impl ToCalendarDate for NaiveDate {
    fn to_calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl ToCalendarDate for NaiveDateTime {
    fn to_calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> ToCalendarDate for DateTime<Tz> {
    fn to_calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: ToCalendarDate + ?Sized> ToCalendarDate for &T {
    fn to_calendar_date(&self) -> NaiveDate {
        (**self).to_calendar_date()
    }
}
