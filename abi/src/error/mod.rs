use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("invalid guest name: {0:?}")]
    InvalidGuestName(String),

    #[error("invalid phone: {0:?}")]
    InvalidPhone(String),

    #[error("invalid daily rate: {0}")]
    InvalidDailyRate(Decimal),

    #[error("invalid timespan: check-out {check_out} is not after check-in {check_in}")]
    InvalidTimespan {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid status: {0}")]
    InvalidStatus(String),
}
