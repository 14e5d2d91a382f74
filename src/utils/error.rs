use chrono::{DateTime, FixedOffset};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Departure and arrival airport are the same: {code}")]
    SameAirportError { code: String },

    #[error(
        "Leg {leg} arrives at {arrival}, after leg {next} departs at {next_departure}",
        next = .leg + 1
    )]
    DepartureArrivalError {
        leg: usize,
        arrival: DateTime<FixedOffset>,
        next_departure: DateTime<FixedOffset>,
    },

    #[error("A composite flight needs at least two legs, got {count}")]
    InsufficientLegsError { count: usize },

    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatchError { expected: String, found: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BookingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookingError::SameAirportError { .. }
            | BookingError::DepartureArrivalError { .. }
            | BookingError::InsufficientLegsError { .. }
            | BookingError::CurrencyMismatchError { .. }
            | BookingError::InvalidValueError { .. } => ErrorCategory::Validation,
            BookingError::MissingConfigError { .. }
            | BookingError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            BookingError::IoError(_) | BookingError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修正建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BookingError::SameAirportError { .. } => {
                "Pick a different arrival airport for the leg"
            }
            BookingError::DepartureArrivalError { .. } => {
                "List the legs in travel order; each leg must land before the next departs"
            }
            BookingError::InsufficientLegsError { .. } => {
                "Add legs to the itinerary; a connecting trip needs at least two"
            }
            BookingError::CurrencyMismatchError { .. } => {
                "Use the same currency for every price in the itinerary"
            }
            BookingError::InvalidValueError { .. } => "Fix the reported field and try again",
            BookingError::MissingConfigError { .. } => {
                "Add the missing field to the itinerary file"
            }
            BookingError::ConfigValidationError { .. } => {
                "Check the itinerary file for TOML syntax errors"
            }
            BookingError::IoError(_) => "Check that the file exists and is readable",
            BookingError::SerializationError(_) => "This is a bug, please report it",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Invalid itinerary: {}", self),
            ErrorCategory::Configuration => format!("Bad itinerary file: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
