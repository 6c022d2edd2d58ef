use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ReservationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Confirmed,
    Pending,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 3] = [
        ReservationStatus::Confirmed,
        ReservationStatus::Pending,
        ReservationStatus::Cancelled,
    ];

    /// badge text shown next to a reservation
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "Confirmada",
            ReservationStatus::Pending => "Pendente",
            ReservationStatus::Cancelled => "Cancelada",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Confirmed => write!(f, "confirmed"),
            ReservationStatus::Pending => write!(f, "pending"),
            ReservationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = ReservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "pending" => Ok(ReservationStatus::Pending),
            "cancelled" | "canceled" => Ok(ReservationStatus::Cancelled),
            _ => Err(ReservationError::InvalidStatus(s.to_string())),
        }
    }
}
