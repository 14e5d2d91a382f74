// Domain layer: value objects, flights and the Flight port. Only std/serde/chrono/rust_decimal.

pub mod composite;
pub mod flight;
pub mod interval;
pub mod itinerary;
pub mod ports;
pub mod values;
