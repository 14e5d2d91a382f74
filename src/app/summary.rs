use crate::domain::composite::Layover;
use crate::domain::itinerary::Itinerary;
use crate::domain::ports::Flight;
use crate::domain::values::Price;
use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct ItinerarySummary {
    pub name: Option<String>,
    pub references: Vec<String>,
    pub origin: String,
    pub destination: String,
    pub departure: DateTime<FixedOffset>,
    pub arrival: DateTime<FixedOffset>,
    pub duration: String,
    pub total_minutes: i64,
    pub stops: usize,
    pub layovers: Vec<LayoverSummary>,
    pub price: Price,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoverSummary {
    pub airport: String,
    pub duration: String,
    pub minutes: i64,
}

impl From<&Layover> for LayoverSummary {
    fn from(layover: &Layover) -> Self {
        Self {
            airport: layover.airport.code().to_string(),
            duration: layover.duration.to_string(),
            minutes: layover.duration.total_minutes(),
        }
    }
}

impl ItinerarySummary {
    pub fn new(name: Option<&str>, itinerary: &Itinerary) -> Self {
        let duration = itinerary.duration();
        let layovers = match itinerary {
            Itinerary::Direct(_) => Vec::new(),
            Itinerary::Composite(composite) => composite
                .layovers()
                .iter()
                .map(LayoverSummary::from)
                .collect(),
        };

        Self {
            name: name.map(str::to_string),
            references: itinerary
                .legs()
                .iter()
                .map(|leg| leg.reference_id().to_string())
                .collect(),
            origin: itinerary.departure_airport().code().to_string(),
            destination: itinerary.arrival_airport().code().to_string(),
            departure: itinerary.departure_time(),
            arrival: itinerary.arrival_time(),
            duration: duration.to_string(),
            total_minutes: duration.total_minutes(),
            stops: layovers.len(),
            layovers,
            price: itinerary.price().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ItinerarySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "✈️  {} {} -> {}",
            self.name.as_deref().unwrap_or("Itinerary"),
            self.origin,
            self.destination
        )?;
        writeln!(f, "   Legs:      {}", self.references.join(", "))?;
        writeln!(f, "   Departure: {}", self.departure.to_rfc3339())?;
        writeln!(f, "   Arrival:   {}", self.arrival.to_rfc3339())?;
        writeln!(f, "   Duration:  {} ({} min)", self.duration, self.total_minutes)?;
        if self.layovers.is_empty() {
            writeln!(f, "   Stops:     nonstop")?;
        } else {
            writeln!(f, "   Stops:     {}", self.stops)?;
            for layover in &self.layovers {
                writeln!(f, "     - {} ({} min)", layover.airport, layover.minutes)?;
            }
        }
        write!(f, "   Price:     {}", self.price)
    }
}
