pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::summary::ItinerarySummary;
pub use config::itinerary_config::ItineraryConfig;
pub use domain::composite::{CompositeFlight, Layover};
pub use domain::flight::DirectFlight;
pub use domain::interval::FlightInterval;
pub use domain::itinerary::Itinerary;
pub use domain::ports::Flight;
pub use domain::values::{Airline, Airport, Price, ReferenceId};
pub use utils::error::{BookingError, Result};
