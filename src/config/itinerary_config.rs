use crate::domain::flight::DirectFlight;
use crate::domain::itinerary::Itinerary;
use crate::domain::values::{Airline, Airport, Price, ReferenceId};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{
    validate_currency_code, validate_non_empty_string, validate_required_field, Validate,
};
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryConfig {
    pub itinerary: ItinerarySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItinerarySection {
    pub name: Option<String>,
    pub price: Option<PriceConfig>,
    pub legs: Option<Vec<LegConfig>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceConfig {
    pub amount: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegConfig {
    pub reference: String,
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
    pub airline: String,
    pub price: PriceConfig,
}

impl ItineraryConfig {
    /// 從 TOML 檔案載入行程
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析行程
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FLIGHT_DATE})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookingError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> Option<&str> {
        self.itinerary.name.as_deref()
    }

    pub fn legs(&self) -> &[LegConfig] {
        self.itinerary.legs.as_deref().unwrap_or(&[])
    }

    /// 建立領域物件；航段與時間檢查由領域層負責
    pub fn build(&self) -> Result<Itinerary> {
        self.validate()?;

        let price = self
            .itinerary
            .price
            .as_ref()
            .map(|price| price.build("itinerary.price"))
            .transpose()?;

        let legs = self
            .legs()
            .iter()
            .enumerate()
            .map(|(index, leg)| leg.build(&format!("itinerary.legs[{}]", index)))
            .collect::<Result<Vec<DirectFlight>>>()?;

        tracing::info!(
            "Loaded itinerary {} with {} leg(s)",
            self.name().unwrap_or("<unnamed>"),
            legs.len()
        );

        Itinerary::from_legs(price, legs)
    }
}

impl Validate for ItineraryConfig {
    fn validate(&self) -> Result<()> {
        let legs = validate_required_field("itinerary.legs", &self.itinerary.legs)?;
        if legs.is_empty() {
            return Err(BookingError::InsufficientLegsError { count: 0 });
        }

        if let Some(price) = &self.itinerary.price {
            price.check("itinerary.price")?;
        }

        for (index, leg) in legs.iter().enumerate() {
            leg.check(&format!("itinerary.legs[{}]", index))?;
        }

        Ok(())
    }
}

impl PriceConfig {
    fn check(&self, field: &str) -> Result<()> {
        parse_amount(&format!("{}.amount", field), &self.amount)?;
        validate_currency_code(&format!("{}.currency", field), &self.currency)
    }

    fn build(&self, field: &str) -> Result<Price> {
        let amount = parse_amount(&format!("{}.amount", field), &self.amount)?;
        Price::new(amount, &self.currency)
    }
}

impl LegConfig {
    fn check(&self, field: &str) -> Result<()> {
        validate_non_empty_string(&format!("{}.reference", field), &self.reference)?;
        validate_non_empty_string(&format!("{}.from", field), &self.from)?;
        validate_non_empty_string(&format!("{}.to", field), &self.to)?;
        validate_non_empty_string(&format!("{}.airline", field), &self.airline)?;
        parse_time(&format!("{}.departure", field), &self.departure)?;
        parse_time(&format!("{}.arrival", field), &self.arrival)?;
        self.price.check(&format!("{}.price", field))
    }

    fn build(&self, field: &str) -> Result<DirectFlight> {
        DirectFlight::new(
            ReferenceId::new(&self.reference)?,
            Airport::new(&self.from)?,
            Airport::new(&self.to)?,
            parse_time(&format!("{}.departure", field), &self.departure)?,
            parse_time(&format!("{}.arrival", field), &self.arrival)?,
            Airline::new(&self.airline)?,
            self.price.build(&format!("{}.price", field))?,
        )
    }
}

fn parse_time(field: &str, value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).map_err(|e| BookingError::InvalidValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("Expected an RFC 3339 timestamp with offset: {}", e),
    })
}

fn parse_amount(field: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|e| BookingError::InvalidValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("Invalid amount: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Flight;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_LEGS: &str = r#"
[itinerary]
name = "SOF-JFK"
price = { amount = "420.00", currency = "EUR" }

[[itinerary.legs]]
reference = "FB1001"
from = "SOF"
to = "MUC"
departure = "2017-01-01T02:30:00+02:00"
arrival = "2017-01-01T03:30:00+02:00"
airline = "LH"
price = { amount = "180.00", currency = "EUR" }

[[itinerary.legs]]
reference = "FB1002"
from = "MUC"
to = "JFK"
departure = "2017-01-01T04:00:00+02:00"
arrival = "2017-01-01T07:30:00+02:00"
airline = "LH"
price = { amount = "300.00", currency = "EUR" }
"#;

    #[test]
    fn test_parse_two_leg_itinerary() {
        let config = ItineraryConfig::from_toml_str(TWO_LEGS).unwrap();

        assert_eq!(config.name(), Some("SOF-JFK"));
        assert_eq!(config.legs().len(), 2);
        assert!(config.validate().is_ok());

        let itinerary = config.build().unwrap();
        assert!(!itinerary.is_direct());
        assert_eq!(itinerary.price().amount(), Decimal::new(42000, 2));
        assert_eq!(itinerary.duration().hours, 5);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FLIGHT_BOOKING_TEST_DAY", "2017-01-01");

        let toml_content = r#"
[itinerary]

[[itinerary.legs]]
reference = "FB1001"
from = "SOF"
to = "MUC"
departure = "${FLIGHT_BOOKING_TEST_DAY}T02:30:00+02:00"
arrival = "${FLIGHT_BOOKING_TEST_DAY}T03:30:00+02:00"
airline = "LH"
price = { amount = "180", currency = "EUR" }
"#;

        let config = ItineraryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.legs()[0].departure, "2017-01-01T02:30:00+02:00");

        std::env::remove_var("FLIGHT_BOOKING_TEST_DAY");
    }

    #[test]
    fn test_unset_env_var_is_left_untouched() {
        let line = "x = \"${FLIGHT_BOOKING_SURELY_UNSET}\"";
        let content = ItineraryConfig::substitute_env_vars(line).unwrap();
        assert_eq!(content, line);
    }

    #[test]
    fn test_missing_legs() {
        let config = ItineraryConfig::from_toml_str("[itinerary]\nname = \"empty\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(BookingError::MissingConfigError { ref field }) if field == "itinerary.legs"
        ));
    }

    #[test]
    fn test_invalid_timestamp_reports_field_path() {
        let broken = TWO_LEGS.replace("2017-01-01T04:00:00+02:00", "tomorrow morning");
        let config = ItineraryConfig::from_toml_str(&broken).unwrap();
        let err = config.validate().unwrap_err();
        match err {
            BookingError::InvalidValueError { field, .. } => {
                assert_eq!(field, "itinerary.legs[1].departure")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_timestamp_without_offset_is_rejected() {
        let broken = TWO_LEGS.replace("2017-01-01T03:30:00+02:00", "2017-01-01T03:30:00");
        let config = ItineraryConfig::from_toml_str(&broken).unwrap();
        assert!(config.build().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ItineraryConfig::from_toml_str("[itinerary"),
            Err(BookingError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(TWO_LEGS.as_bytes()).unwrap();

        let config = ItineraryConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.name(), Some("SOF-JFK"));
    }
}
