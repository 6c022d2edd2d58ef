use derive_builder::Builder;

use crate::{Reservation, ReservationStatus};

/// Search, status filter and ordering used by the reservation list.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ReservationFilter {
    /// matched against the guest name (ignoring case) or the phone
    #[builder(setter(into), default)]
    pub search: String,
    #[builder(setter(into, strip_option), default)]
    pub status: Option<ReservationStatus>,
    /// newest check-in first
    #[builder(default = "true")]
    pub desc: bool,
}

impl Default for ReservationFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            desc: true,
        }
    }
}

impl ReservationFilter {
    pub fn matches(&self, rsvp: &Reservation) -> bool {
        let term = self.search.trim();
        let matches_term = term.is_empty()
            || rsvp
                .guest_name
                .to_lowercase()
                .contains(&term.to_lowercase())
            || rsvp.phone.contains(term);
        let matches_status = self.status.map_or(true, |status| rsvp.status == status);

        matches_term && matches_status
    }

    pub fn apply<'a>(&self, rsvps: impl IntoIterator<Item = &'a Reservation>) -> Vec<Reservation> {
        let mut found: Vec<Reservation> = rsvps
            .into_iter()
            .filter(|rsvp| self.matches(rsvp))
            .cloned()
            .collect();

        if self.desc {
            found.sort_by(|a, b| b.check_in.cmp(&a.check_in));
        } else {
            found.sort_by(|a, b| a.check_in.cmp(&b.check_in));
        }
        found
    }
}
