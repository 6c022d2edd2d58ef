use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Reservation, ReservationStatus};

/// Dashboard figures for the reservations checking in during one month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub reservations: usize,
    pub confirmed: usize,
    /// total of the confirmed stays only
    pub revenue: Decimal,
}

impl MonthSummary {
    pub fn collect<'a>(
        year: i32,
        month: u32,
        rsvps: impl IntoIterator<Item = &'a Reservation>,
    ) -> Self {
        rsvps
            .into_iter()
            .filter(|rsvp| rsvp.check_in.year() == year && rsvp.check_in.month() == month)
            .fold(
                Self {
                    year,
                    month,
                    ..Default::default()
                },
                |mut summary, rsvp| {
                    summary.reservations += 1;
                    if rsvp.status == ReservationStatus::Confirmed {
                        summary.confirmed += 1;
                        summary.revenue = summary.revenue.saturating_add(rsvp.total());
                    }
                    summary
                },
            )
    }
}
