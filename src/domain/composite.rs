use crate::domain::flight::DirectFlight;
use crate::domain::interval::FlightInterval;
use crate::domain::ports::Flight;
use crate::domain::values::{Airport, Price};
use crate::utils::error::{BookingError, Result};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// 轉機行程：依搭乘順序排列的兩個以上航段。
///
/// 每一段的抵達時間不得晚於下一段的出發時間，
/// 建構時檢查，第一個違規即回傳錯誤。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeFlight {
    price: Price,
    legs: Vec<DirectFlight>,
}

/// Ground time between two consecutive legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layover {
    pub airport: Airport,
    pub arrival: DateTime<FixedOffset>,
    pub departure: DateTime<FixedOffset>,
    pub duration: FlightInterval,
}

impl CompositeFlight {
    pub fn new(price: Price, first: DirectFlight, second: DirectFlight) -> Result<Self> {
        Self::from_legs(price, vec![first, second])
    }

    pub fn from_legs(price: Price, legs: Vec<DirectFlight>) -> Result<Self> {
        check_connections(&legs)?;

        tracing::debug!("Composite flight with {} legs, price {}", legs.len(), price);

        Ok(Self { price, legs })
    }

    pub fn legs(&self) -> &[DirectFlight] {
        &self.legs
    }

    pub fn first_leg(&self) -> &DirectFlight {
        &self.legs[0]
    }

    pub fn last_leg(&self) -> &DirectFlight {
        &self.legs[self.legs.len() - 1]
    }

    /// Sum of the individual leg prices.
    pub fn leg_price_total(&self) -> Result<Price> {
        Price::total(self.legs.iter().map(|leg| leg.price()))
    }

    pub fn layovers(&self) -> Vec<Layover> {
        self.legs
            .windows(2)
            .map(|pair| Layover {
                airport: pair[0].arrival_airport().clone(),
                arrival: pair[0].arrival_time(),
                departure: pair[1].departure_time(),
                duration: FlightInterval::between(
                    &pair[0].arrival_time(),
                    &pair[1].departure_time(),
                ),
            })
            .collect()
    }
}

/// 至少兩段，且每段抵達不晚於下一段出發；回傳第一個違規。
pub(crate) fn check_connections(legs: &[DirectFlight]) -> Result<()> {
    if legs.len() < 2 {
        return Err(BookingError::InsufficientLegsError { count: legs.len() });
    }

    for (leg, pair) in legs.windows(2).enumerate() {
        let arrival = pair[0].arrival_time();
        let next_departure = pair[1].departure_time();
        if arrival > next_departure {
            tracing::warn!(
                "Rejected connection: {} arrives at {} after {} departs at {}",
                pair[0].reference_id(),
                arrival,
                pair[1].reference_id(),
                next_departure
            );
            return Err(BookingError::DepartureArrivalError {
                leg,
                arrival,
                next_departure,
            });
        }
    }

    Ok(())
}

impl Flight for CompositeFlight {
    fn departure_airport(&self) -> &Airport {
        self.first_leg().departure_airport()
    }

    fn arrival_airport(&self) -> &Airport {
        self.last_leg().arrival_airport()
    }

    fn departure_time(&self) -> DateTime<FixedOffset> {
        self.first_leg().departure_time()
    }

    fn arrival_time(&self) -> DateTime<FixedOffset> {
        self.last_leg().arrival_time()
    }

    fn price(&self) -> &Price {
        &self.price
    }
}
