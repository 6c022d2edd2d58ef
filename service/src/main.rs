use std::env;

use abi::{Config, ReservationFilter};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use service::{init_tracing, CalendarMonth, RsvpService, WEEKDAY_LABELS};

/// Usage: `rsvp-demo [yyyy-mm]`, config path from `RSVP_CONFIG`.
fn main() -> Result<()> {
    let path =
        env::var("RSVP_CONFIG").unwrap_or_else(|_| "service/fixtures/config.yml".to_string());
    let config = Config::load(&path)?;
    init_tracing(&config.log)?;

    let service = RsvpService::from_config(&config)?;

    let month = match env::args().nth(1) {
        Some(arg) => {
            let first = NaiveDate::parse_from_str(&format!("{arg}-01"), "%Y-%m-%d")
                .with_context(|| format!("expected a month like 2024-01, got {arg:?}"))?;
            CalendarMonth::containing(first)
        }
        None => CalendarMonth::containing(Local::now().date_naive()),
    };

    println!("{}", month.title());
    println!("{}", WEEKDAY_LABELS.map(|d| format!("{d:>4}")).join(""));
    for week in service.calendar(month).chunks(7) {
        let line: String = week
            .iter()
            .map(|day| match (day.in_month, day.reservations) {
                (false, _) => "    ".to_string(),
                (true, 0) => format!("{:>4}", day.date.format("%d").to_string()),
                (true, _) => format!("{:>3}*", day.date.format("%d").to_string()),
            })
            .collect();
        println!("{line}");
    }

    let summary = service.dashboard(month.first_day());
    println!(
        "\n{} reserva(s), {} confirmada(s), receita R$ {:.2}",
        summary.reservations, summary.confirmed, summary.revenue
    );

    println!();
    for rsvp in service.list(&ReservationFilter::default()) {
        println!(
            "{:<20} {:<18} {} - {} {:>2} noite(s) R$ {:>8} {}",
            rsvp.guest_name,
            rsvp.phone,
            rsvp.check_in.format("%d/%m/%Y"),
            rsvp.check_out.format("%d/%m/%Y"),
            rsvp.nights(),
            format!("{:.2}", rsvp.total()),
            rsvp.status.label(),
        );
    }

    Ok(())
}
