use abi::{calendar_date, NewReservation, ReservationError, ReservationStatus};
use rust_decimal::Decimal;

/// The two sample bookings the interface starts with.
pub fn demo_reservations() -> Result<Vec<NewReservation>, ReservationError> {
    Ok(vec![
        NewReservation {
            guest_name: "Maria Silva".to_string(),
            phone: "+55 11 99999-9999".to_string(),
            check_in: calendar_date(2024, 1, 15)?,
            check_out: calendar_date(2024, 1, 18)?,
            daily_rate: Decimal::new(250, 0),
            observations: Some("Cliente preferencial, quarto com vista para o mar".to_string()),
            status: ReservationStatus::Confirmed,
        },
        NewReservation {
            guest_name: "João Santos".to_string(),
            phone: "+55 11 88888-8888".to_string(),
            check_in: calendar_date(2024, 1, 20)?,
            check_out: calendar_date(2024, 1, 22)?,
            daily_rate: Decimal::new(180, 0),
            observations: None,
            status: ReservationStatus::Pending,
        },
    ])
}
