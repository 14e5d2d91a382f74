use crate::domain::composite::{check_connections, CompositeFlight};
use crate::domain::flight::DirectFlight;
use crate::domain::ports::Flight;
use crate::domain::values::{Airport, Price};
use crate::utils::error::{BookingError, Result};
use chrono::{DateTime, FixedOffset};

/// A bookable trip: one direct flight or a connecting one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Itinerary {
    Direct(DirectFlight),
    Composite(CompositeFlight),
}

impl Itinerary {
    /// 沒有指定總價時，轉機行程以各航段價格相加。
    pub fn from_legs(price: Option<Price>, mut legs: Vec<DirectFlight>) -> Result<Self> {
        match legs.len() {
            0 => Err(BookingError::InsufficientLegsError { count: 0 }),
            1 => {
                if let Some(price) = price {
                    tracing::warn!(
                        "Ignoring itinerary price {} for a single-leg trip, leg price applies",
                        price
                    );
                }
                let leg = legs.remove(0);
                Ok(Itinerary::Direct(leg))
            }
            _ => {
                check_connections(&legs)?;
                let price = match price {
                    Some(price) => price,
                    None => Price::total(legs.iter().map(|leg| leg.price()))?,
                };
                Ok(Itinerary::Composite(CompositeFlight::from_legs(price, legs)?))
            }
        }
    }

    pub fn legs(&self) -> &[DirectFlight] {
        match self {
            Itinerary::Direct(flight) => std::slice::from_ref(flight),
            Itinerary::Composite(composite) => composite.legs(),
        }
    }

    pub fn is_direct(&self) -> bool {
        matches!(self, Itinerary::Direct(_))
    }

    fn as_flight(&self) -> &dyn Flight {
        match self {
            Itinerary::Direct(flight) => flight,
            Itinerary::Composite(composite) => composite,
        }
    }
}

impl Flight for Itinerary {
    fn departure_airport(&self) -> &Airport {
        self.as_flight().departure_airport()
    }

    fn arrival_airport(&self) -> &Airport {
        self.as_flight().arrival_airport()
    }

    fn departure_time(&self) -> DateTime<FixedOffset> {
        self.as_flight().departure_time()
    }

    fn arrival_time(&self) -> DateTime<FixedOffset> {
        self.as_flight().arrival_time()
    }

    fn price(&self) -> &Price {
        self.as_flight().price()
    }
}
