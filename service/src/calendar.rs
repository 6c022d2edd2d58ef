use abi::{calendar_date, Reservation, ReservationError, ToCalendarDate};
use chrono::{Datelike, Days, Months, NaiveDate};

use crate::ReservationForm;

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// six full weeks, so every month fits
pub const GRID_DAYS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
    /// reservations staying over this day
    pub reservations: usize,
}

/// What clicking a day opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSelection {
    View(Vec<Reservation>),
    Create(ReservationForm),
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ReservationError> {
        Ok(Self {
            first: calendar_date(year, month, 1)?,
        })
    }

    pub fn containing(date: impl ToCalendarDate) -> Self {
        let date = date.to_calendar_date();
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn previous(&self) -> Self {
        Self {
            first: self
                .first
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first: self
                .first
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    /// e.g. "Janeiro 2024"
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.first.month0() as usize], self.year())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The grid starts on the Sunday on or before the 1st and pads with the
    /// neighbouring months up to six weeks.
    pub fn days(&self) -> Vec<CalendarDay> {
        let lead = self.first.weekday().num_days_from_sunday() as u64;
        let start = self
            .first
            .checked_sub_days(Days::new(lead))
            .unwrap_or(self.first);

        start
            .iter_days()
            .take(GRID_DAYS)
            .map(|date| CalendarDay {
                date,
                in_month: self.contains(date),
                reservations: 0,
            })
            .collect()
    }
}
