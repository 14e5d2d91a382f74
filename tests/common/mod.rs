#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};
use flight_booking::{Airline, Airport, DirectFlight, Price, ReferenceId, Result};
use rust_decimal::Decimal;

pub fn at(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).unwrap()
}

pub fn eur(amount: i64) -> Price {
    Price::new(Decimal::new(amount, 0), "EUR").unwrap()
}

pub fn direct_flight(from: &str, to: &str, departure: &str, arrival: &str) -> Result<DirectFlight> {
    DirectFlight::new(
        ReferenceId::new(format!("{}-{}", from, to))?,
        Airport::new(from)?,
        Airport::new(to)?,
        at(departure),
        at(arrival),
        Airline::new("FB")?,
        eur(100),
    )
}
