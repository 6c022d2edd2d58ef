mod month_summary;
mod reservation;
mod reservation_filter;
mod reservation_status;

use chrono::NaiveDate;
pub use month_summary::*;
pub use reservation::*;
pub use reservation_filter::*;
pub use reservation_status::*;
use rust_decimal::Decimal;

use crate::ReservationError;

/// check-out must be strictly after check-in
pub fn validate_range(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), ReservationError> {
    if check_out <= check_in {
        return Err(ReservationError::InvalidTimespan {
            check_in,
            check_out,
        });
    }

    Ok(())
}

/// Highest accepted daily rate. Times the longest representable stay it
/// still fits in a `Decimal`.
pub const MAX_DAILY_RATE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

pub fn validate_daily_rate(rate: Decimal) -> Result<(), ReservationError> {
    if (rate.is_sign_negative() && !rate.is_zero()) || rate > MAX_DAILY_RATE {
        return Err(ReservationError::InvalidDailyRate(rate));
    }

    Ok(())
}

/// Build a date, reporting impossible ones instead of panicking.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ReservationError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ReservationError::InvalidDate {
        year,
        month,
        day,
    })
}
