use crate::domain::ports::Flight;
use crate::domain::values::{Airline, Airport, Price, ReferenceId};
use crate::utils::error::{BookingError, Result};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// 直飛航班 (單一航段)。出發與抵達機場必須不同。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectFlight {
    reference_id: ReferenceId,
    departure_airport: Airport,
    arrival_airport: Airport,
    departure_time: DateTime<FixedOffset>,
    arrival_time: DateTime<FixedOffset>,
    airline: Airline,
    price: Price,
}

impl DirectFlight {
    pub fn new(
        reference_id: ReferenceId,
        departure_airport: Airport,
        arrival_airport: Airport,
        departure_time: DateTime<FixedOffset>,
        arrival_time: DateTime<FixedOffset>,
        airline: Airline,
        price: Price,
    ) -> Result<Self> {
        if departure_airport == arrival_airport {
            tracing::warn!(
                "Rejected flight {}: departs from and arrives at {}",
                reference_id,
                departure_airport
            );
            return Err(BookingError::SameAirportError {
                code: departure_airport.code().to_string(),
            });
        }

        tracing::debug!(
            "Direct flight {} {} -> {} ({} - {})",
            reference_id,
            departure_airport,
            arrival_airport,
            departure_time,
            arrival_time
        );

        Ok(Self {
            reference_id,
            departure_airport,
            arrival_airport,
            departure_time,
            arrival_time,
            airline,
            price,
        })
    }

    pub fn reference_id(&self) -> &ReferenceId {
        &self.reference_id
    }

    pub fn airline(&self) -> &Airline {
        &self.airline
    }
}

impl Flight for DirectFlight {
    fn departure_airport(&self) -> &Airport {
        &self.departure_airport
    }

    fn arrival_airport(&self) -> &Airport {
        &self.arrival_airport
    }

    fn departure_time(&self) -> DateTime<FixedOffset> {
        self.departure_time
    }

    fn arrival_time(&self) -> DateTime<FixedOffset> {
        self.arrival_time
    }

    fn price(&self) -> &Price {
        &self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn at(value: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(value).unwrap()
    }

    fn flight(from: &str, to: &str) -> Result<DirectFlight> {
        DirectFlight::new(
            ReferenceId::new("FB1001").unwrap(),
            Airport::new(from).unwrap(),
            Airport::new(to).unwrap(),
            at("2017-01-01T02:30:00+02:00"),
            at("2017-01-01T03:30:00+02:00"),
            Airline::new("FB").unwrap(),
            Price::new(Decimal::new(9900, 2), "EUR").unwrap(),
        )
    }

    #[test]
    fn test_same_airport_is_rejected() {
        let err = flight("SOF", "SOF").unwrap_err();
        assert!(matches!(err, BookingError::SameAirportError { ref code } if code == "SOF"));
    }

    #[test]
    fn test_same_airport_with_different_spelling_is_rejected() {
        assert!(matches!(
            flight("sof", "SOF"),
            Err(BookingError::SameAirportError { .. })
        ));
    }

    #[test]
    fn test_duration_of_single_leg() {
        let flight = flight("SOF", "MUC").unwrap();
        let duration = flight.duration();
        assert_eq!(duration.hours, 1);
        assert_eq!(duration.minutes, 0);
        assert!(!duration.invert);
    }
}
