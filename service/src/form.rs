use std::str::FromStr;

use abi::{
    validate_daily_rate, NewReservation, Reservation, ReservationError, ReservationPatch,
    ReservationStatus,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reservation fields as typed into the create/edit dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub guest_name: String,
    pub phone: String,
    /// `yyyy-mm-dd`
    pub check_in: String,
    /// `yyyy-mm-dd`
    pub check_out: String,
    pub daily_rate: String,
    pub observations: String,
    /// empty keeps the current status (or confirmed for new reservations)
    pub status: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("required fields missing: {0:?}")]
    MissingFields(Vec<&'static str>),

    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    #[error("invalid daily rate: {0:?}")]
    InvalidDailyRate(String),

    #[error("check-out must be after check-in")]
    CheckOutNotAfterCheckIn,

    #[error("invalid status: {0:?}")]
    InvalidStatus(String),

    #[error(transparent)]
    Rejected(#[from] ReservationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Short message shown to the user after a form action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

struct ParsedForm {
    guest_name: String,
    phone: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    daily_rate: Decimal,
    observations: String,
    status: Option<ReservationStatus>,
}

impl ReservationForm {
    /// Blank form for a one-night stay starting on `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            check_in: date.format(DATE_FORMAT).to_string(),
            check_out: date.succ_opt().unwrap_or(date).format(DATE_FORMAT).to_string(),
            ..Default::default()
        }
    }

    pub fn from_reservation(rsvp: &Reservation) -> Self {
        Self {
            guest_name: rsvp.guest_name.clone(),
            phone: rsvp.phone.clone(),
            check_in: rsvp.check_in.format(DATE_FORMAT).to_string(),
            check_out: rsvp.check_out.format(DATE_FORMAT).to_string(),
            daily_rate: rsvp.daily_rate.to_string(),
            observations: rsvp.observations.clone().unwrap_or_default(),
            status: rsvp.status.to_string(),
        }
    }

    pub fn to_new_reservation(&self) -> Result<NewReservation, FormError> {
        let form = self.parse()?;
        Ok(NewReservation {
            guest_name: form.guest_name,
            phone: form.phone,
            check_in: form.check_in,
            check_out: form.check_out,
            daily_rate: form.daily_rate,
            observations: Some(form.observations),
            status: form.status.unwrap_or_default(),
        })
    }

    /// Every field of the form replaces the stored one, except an empty status.
    pub fn to_patch(&self) -> Result<ReservationPatch, FormError> {
        let form = self.parse()?;
        Ok(ReservationPatch {
            guest_name: Some(form.guest_name),
            phone: Some(form.phone),
            check_in: Some(form.check_in),
            check_out: Some(form.check_out),
            daily_rate: Some(form.daily_rate),
            observations: Some(form.observations),
            status: form.status,
        })
    }

    fn parse(&self) -> Result<ParsedForm, FormError> {
        let missing: Vec<&'static str> = [
            ("guest_name", &self.guest_name),
            ("phone", &self.phone),
            ("daily_rate", &self.daily_rate),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let check_in = parse_date(&self.check_in)?;
        let check_out = parse_date(&self.check_out)?;
        let daily_rate = parse_rate(&self.daily_rate)?;

        if check_out <= check_in {
            return Err(FormError::CheckOutNotAfterCheckIn);
        }

        let status = match self.status.trim() {
            "" => None,
            s => Some(
                ReservationStatus::from_str(s)
                    .map_err(|_| FormError::InvalidStatus(self.status.clone()))?,
            ),
        };

        Ok(ParsedForm {
            guest_name: self.guest_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            check_in,
            check_out,
            daily_rate,
            observations: self.observations.trim().to_string(),
            status,
        })
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| FormError::InvalidDate(s.to_string()))
}

// accepts "250,50" as well as "250.50"
fn parse_rate(s: &str) -> Result<Decimal, FormError> {
    let rate = Decimal::from_str(&s.trim().replace(',', "."))
        .map_err(|_| FormError::InvalidDailyRate(s.to_string()))?;
    validate_daily_rate(rate).map_err(|_| FormError::InvalidDailyRate(s.to_string()))?;
    Ok(rate)
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Erro".to_string(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn created(rsvp: &Reservation) -> Self {
        Self::success(
            "Reserva criada com sucesso!",
            format!("Reserva para {} foi registrada.", rsvp.guest_name),
        )
    }

    pub fn updated(rsvp: &Reservation) -> Self {
        Self::success(
            "Reserva atualizada com sucesso!",
            format!("Reserva de {} foi atualizada.", rsvp.guest_name),
        )
    }

    pub fn deleted() -> Self {
        Self::success("Reserva cancelada", "A reserva foi removida com sucesso.")
    }
}

impl From<&FormError> for Notice {
    fn from(err: &FormError) -> Self {
        match err {
            FormError::MissingFields(_) => {
                Notice::error("Por favor, preencha todos os campos obrigatórios.")
            }
            FormError::InvalidDate(_) => {
                Notice::error("Informe as datas no formato AAAA-MM-DD.")
            }
            FormError::InvalidDailyRate(_) => Notice::error("Informe um valor de diária válido."),
            FormError::CheckOutNotAfterCheckIn
            | FormError::Rejected(ReservationError::InvalidTimespan { .. }) => {
                Notice::error("A data de saída deve ser posterior à data de entrada.")
            }
            FormError::InvalidStatus(_) => Notice::error("Selecione um status válido."),
            FormError::Rejected(_) => Notice::error("Ocorreu um erro ao salvar a reserva."),
        }
    }
}

#[cfg(test)]
mod tests {
    use abi::calendar_date;
    use rust_decimal_macros::dec;

    use super::*;

    fn filled() -> ReservationForm {
        ReservationForm {
            guest_name: " Maria Silva ".to_string(),
            phone: "+55 11 99999-9999".to_string(),
            check_in: "2024-01-15".to_string(),
            check_out: "2024-01-18".to_string(),
            daily_rate: "250,50".to_string(),
            observations: "".to_string(),
            status: "".to_string(),
        }
    }

    #[test]
    fn for_date_should_prefill_one_night() {
        let form = ReservationForm::for_date(calendar_date(2024, 1, 31).unwrap());
        assert_eq!(form.check_in, "2024-01-31");
        assert_eq!(form.check_out, "2024-02-01");
        assert!(form.guest_name.is_empty());
    }

    #[test]
    fn filled_form_should_build_new_reservation() {
        let rsvp = filled().to_new_reservation().unwrap();
        assert_eq!(rsvp.guest_name, "Maria Silva");
        assert_eq!(rsvp.daily_rate, dec!(250.50));
        assert_eq!(rsvp.check_in, calendar_date(2024, 1, 15).unwrap());
        assert_eq!(rsvp.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn missing_fields_should_reject() {
        let form = ReservationForm {
            phone: " ".to_string(),
            daily_rate: String::new(),
            ..filled()
        };
        let err = form.to_new_reservation().unwrap_err();
        assert_eq!(err, FormError::MissingFields(vec!["phone", "daily_rate"]));
        assert_eq!(
            Notice::from(&err).description,
            "Por favor, preencha todos os campos obrigatórios."
        );
    }

    #[test]
    fn check_out_before_check_in_should_reject() {
        let form = ReservationForm {
            check_out: "2024-01-15".to_string(),
            ..filled()
        };
        let err = form.to_new_reservation().unwrap_err();
        assert_eq!(err, FormError::CheckOutNotAfterCheckIn);

        let notice = Notice::from(&err);
        assert_eq!(notice.title, "Erro");
        assert_eq!(notice.variant, NoticeVariant::Destructive);
        assert_eq!(
            notice.description,
            "A data de saída deve ser posterior à data de entrada."
        );
    }

    #[test]
    fn bad_date_and_rate_should_reject() {
        let form = ReservationForm {
            check_in: "15/01/2024".to_string(),
            ..filled()
        };
        assert_eq!(
            form.to_new_reservation(),
            Err(FormError::InvalidDate("15/01/2024".to_string()))
        );

        let form = ReservationForm {
            daily_rate: "-10".to_string(),
            ..filled()
        };
        assert_eq!(
            form.to_new_reservation(),
            Err(FormError::InvalidDailyRate("-10".to_string()))
        );
    }

    #[test]
    fn huge_rate_should_reject() {
        let form = ReservationForm {
            daily_rate: "10000000000000000000000000000".to_string(),
            ..filled()
        };
        let err = form.to_new_reservation().unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidDailyRate("10000000000000000000000000000".to_string())
        );
        assert_eq!(
            Notice::from(&err).description,
            "Informe um valor de diária válido."
        );
    }

    #[test]
    fn status_should_parse_for_edit() {
        let form = ReservationForm {
            status: "pending".to_string(),
            ..filled()
        };
        let patch = form.to_patch().unwrap();
        assert_eq!(patch.status, Some(ReservationStatus::Pending));

        let form = ReservationForm {
            status: "blocked".to_string(),
            ..filled()
        };
        assert_eq!(
            form.to_patch(),
            Err(FormError::InvalidStatus("blocked".to_string()))
        );
    }

    #[test]
    fn edit_form_should_round_trip_reservation() {
        let rsvp = Reservation::new("1".into(), filled().to_new_reservation().unwrap());
        let form = ReservationForm::from_reservation(&rsvp);
        assert_eq!(form.check_out, "2024-01-18");
        assert_eq!(form.status, "confirmed");
        assert_eq!(rsvp.clone().merge(form.to_patch().unwrap()), rsvp);
    }
}
