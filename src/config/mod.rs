pub mod itinerary_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_one_of, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "flight-booking")]
#[command(about = "Validate a flight itinerary and print its summary")]
pub struct CliConfig {
    /// Path to the itinerary TOML file
    #[arg(short, long, default_value = "itinerary.toml")]
    pub itinerary: String,

    #[arg(long, default_value = "text", help = "Output format: text or json")]
    pub format: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("itinerary", &self.itinerary)?;
        validate_one_of("format", &self.format, &OUTPUT_FORMATS)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["flight-booking"]);
        assert_eq!(config.itinerary, "itinerary.toml");
        assert_eq!(config.format, "text");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let config =
            CliConfig::parse_from(["flight-booking", "--format", "xml", "-i", "trip.toml"]);
        assert!(config.validate().is_err());
    }
}
