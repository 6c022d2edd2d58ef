use core::fmt;

use chrono::NaiveDate;
use derive_builder::Builder;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    validate_daily_rate, validate_range, ReservationError, ReservationStatus, ToCalendarDate,
    Validator,
};

/// Opaque reservation identifier, assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReservationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ReservationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reservation that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct NewReservation {
    pub guest_name: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub daily_rate: Decimal,
    #[builder(setter(into, strip_option), default)]
    pub observations: Option<String>,
    #[builder(default)]
    pub status: ReservationStatus,
}

/// Fields to change on an existing reservation. `None` leaves a field as is;
/// an empty `observations` clears the note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct ReservationPatch {
    pub guest_name: Option<String>,
    pub phone: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub daily_rate: Option<Decimal>,
    pub observations: Option<String>,
    pub status: Option<ReservationStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest_name: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub daily_rate: Decimal,
    pub observations: Option<String>,
    pub status: ReservationStatus,
}

// half away from zero, as prices are displayed
fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn normalize_note(note: String) -> Option<String> {
    if note.trim().is_empty() {
        None
    } else {
        Some(note)
    }
}

fn validate_fields(
    guest_name: &str,
    phone: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    daily_rate: Decimal,
) -> Result<(), ReservationError> {
    if guest_name.trim().is_empty() {
        return Err(ReservationError::InvalidGuestName(guest_name.to_string()));
    }

    if phone.trim().is_empty() {
        return Err(ReservationError::InvalidPhone(phone.to_string()));
    }

    validate_daily_rate(daily_rate)?;
    validate_range(check_in, check_out)
}

impl Validator for NewReservation {
    fn validate(&self) -> Result<(), ReservationError> {
        validate_fields(
            &self.guest_name,
            &self.phone,
            self.check_in,
            self.check_out,
            self.daily_rate,
        )
    }
}

impl Validator for Reservation {
    fn validate(&self) -> Result<(), ReservationError> {
        validate_fields(
            &self.guest_name,
            &self.phone,
            self.check_in,
            self.check_out,
            self.daily_rate,
        )
    }
}

impl ReservationPatch {
    pub fn status(status: ReservationStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Reservation {
    pub fn new(id: ReservationId, rsvp: NewReservation) -> Self {
        Self {
            id,
            guest_name: rsvp.guest_name,
            phone: rsvp.phone,
            check_in: rsvp.check_in,
            check_out: rsvp.check_out,
            daily_rate: round_cents(rsvp.daily_rate),
            observations: rsvp.observations.and_then(normalize_note),
            status: rsvp.status,
        }
    }

    /// Shallow merge: only the fields set in `patch` change, the id never does.
    pub fn merge(mut self, patch: ReservationPatch) -> Self {
        if let Some(guest_name) = patch.guest_name {
            self.guest_name = guest_name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(check_in) = patch.check_in {
            self.check_in = check_in;
        }
        if let Some(check_out) = patch.check_out {
            self.check_out = check_out;
        }
        if let Some(daily_rate) = patch.daily_rate {
            self.daily_rate = round_cents(daily_rate);
        }
        if let Some(observations) = patch.observations {
            self.observations = normalize_note(observations);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self
    }

    /// `check_in <= date < check_out`, compared by calendar day only
    pub fn covers(&self, date: impl ToCalendarDate) -> bool {
        let date = date.to_calendar_date();
        self.check_in <= date && date < self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// saturates instead of overflowing on out-of-range rates
    pub fn total(&self) -> Decimal {
        self.daily_rate.saturating_mul(Decimal::from(self.nights()))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calendar_date;

    fn maria() -> Reservation {
        let rsvp = NewReservationBuilder::default()
            .guest_name("Maria Silva")
            .phone("+55 11 99999-9999")
            .check_in(calendar_date(2024, 1, 15).unwrap())
            .check_out(calendar_date(2024, 1, 18).unwrap())
            .daily_rate(dec!(250))
            .observations("Cliente preferencial")
            .build()
            .unwrap();
        Reservation::new("1".into(), rsvp)
    }

    #[test]
    fn new_reservation_builder_should_default_status() {
        let rsvp = maria();
        assert_eq!(rsvp.status, ReservationStatus::Confirmed);
        assert_eq!(rsvp.observations.as_deref(), Some("Cliente preferencial"));
        assert!(rsvp.validate().is_ok());
    }

    #[test]
    fn new_reservation_builder_should_reject_missing_fields() {
        let err = NewReservationBuilder::default()
            .guest_name("Maria")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("phone"));
    }

    #[test]
    fn reservation_should_cover_half_open_range() {
        let rsvp = maria();
        assert!(!rsvp.covers(calendar_date(2024, 1, 14).unwrap()));
        assert!(rsvp.covers(calendar_date(2024, 1, 15).unwrap()));
        assert!(rsvp.covers(calendar_date(2024, 1, 17).unwrap()));
        assert!(!rsvp.covers(calendar_date(2024, 1, 18).unwrap()));
    }

    #[test]
    fn nights_and_total_should_work() {
        let rsvp = maria();
        assert_eq!(rsvp.nights(), 3);
        assert_eq!(rsvp.total(), dec!(750));
    }

    #[test]
    fn daily_rate_should_round_to_cents() {
        let rsvp = maria().merge(
            ReservationPatchBuilder::default()
                .daily_rate(dec!(199.999))
                .build()
                .unwrap(),
        );
        assert_eq!(rsvp.daily_rate, dec!(200.00));
    }

    #[test]
    fn daily_rate_should_round_half_away_from_zero() {
        let rsvp = maria().merge(
            ReservationPatchBuilder::default()
                .daily_rate(dec!(0.125))
                .build()
                .unwrap(),
        );
        assert_eq!(rsvp.daily_rate, dec!(0.13));
    }

    #[test]
    fn total_should_saturate_on_huge_rate() {
        let mut rsvp = maria();
        rsvp.daily_rate = Decimal::MAX;
        assert_eq!(rsvp.total(), Decimal::MAX);
    }

    #[test]
    fn merge_should_only_change_named_fields() {
        let before = maria();
        let after = before
            .clone()
            .merge(ReservationPatch::status(ReservationStatus::Cancelled));

        assert_eq!(after.status, ReservationStatus::Cancelled);
        assert_eq!(
            Reservation {
                status: before.status,
                ..after
            },
            before
        );
    }

    #[test]
    fn empty_observations_should_clear_note() {
        let rsvp = maria().merge(
            ReservationPatchBuilder::default()
                .observations("")
                .build()
                .unwrap(),
        );
        assert_eq!(rsvp.observations, None);
    }

    #[test]
    fn validate_should_reject_blank_guest_name() {
        let mut rsvp = maria();
        rsvp.guest_name = "  ".to_string();
        assert_eq!(
            rsvp.validate(),
            Err(ReservationError::InvalidGuestName("  ".to_string()))
        );
    }

    #[test]
    fn validate_should_reject_inverted_dates() {
        let rsvp = maria().merge(
            ReservationPatchBuilder::default()
                .check_out(calendar_date(2024, 1, 10).unwrap())
                .build()
                .unwrap(),
        );
        assert!(matches!(
            rsvp.validate(),
            Err(ReservationError::InvalidTimespan { .. })
        ));
    }

    #[test]
    fn empty_patch_should_be_empty() {
        assert!(ReservationPatch::default().is_empty());
        assert!(!ReservationPatch::status(ReservationStatus::Pending).is_empty());
    }
}
