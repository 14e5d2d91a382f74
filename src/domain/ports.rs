use crate::domain::interval::FlightInterval;
use crate::domain::values::{Airport, Price};
use chrono::{DateTime, FixedOffset};

/// Common read surface of direct and connecting flights.
pub trait Flight {
    fn departure_airport(&self) -> &Airport;
    fn arrival_airport(&self) -> &Airport;
    fn departure_time(&self) -> DateTime<FixedOffset>;
    fn arrival_time(&self) -> DateTime<FixedOffset>;
    fn price(&self) -> &Price;

    fn duration(&self) -> FlightInterval {
        FlightInterval::between(&self.departure_time(), &self.arrival_time())
    }
}
