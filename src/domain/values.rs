use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{validate_currency_code, validate_non_empty_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 機場，以代碼識別 (SOF, MUC...)。代碼相同即為同一機場。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Airport {
    code: String,
}

impl Airport {
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref();
        validate_non_empty_string("airport.code", code)?;
        Ok(Self {
            code: code.trim().to_ascii_uppercase(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl TryFrom<String> for Airport {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Airport> for String {
    fn from(airport: Airport) -> Self {
        airport.code
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Airline(String);

impl Airline {
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref();
        validate_non_empty_string("airline", code)?;
        Ok(Self(code.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Airline {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Airline> for String {
    fn from(airline: Airline) -> Self {
        airline.0
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Booking reference of a single leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceId(String);

impl ReferenceId {
    pub fn new(reference: impl AsRef<str>) -> Result<Self> {
        let reference = reference.as_ref();
        validate_non_empty_string("reference", reference)?;
        Ok(Self(reference.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ReferenceId {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ReferenceId> for String {
    fn from(reference: ReferenceId) -> Self {
        reference.0
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 價格：金額 + 幣別。只有相同幣別可以相加。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Price {
    amount: Decimal,
    currency: String,
}

impl Price {
    pub fn new(amount: Decimal, currency: impl AsRef<str>) -> Result<Self> {
        let currency = currency.as_ref();
        validate_currency_code("price.currency", currency)?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(BookingError::InvalidValueError {
                field: "price.amount".to_string(),
                value: amount.to_string(),
                reason: "Price cannot be negative".to_string(),
            });
        }

        Ok(Self {
            amount,
            currency: currency.trim().to_ascii_uppercase(),
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn checked_add(&self, other: &Price) -> Result<Price> {
        if self.currency != other.currency {
            return Err(BookingError::CurrencyMismatchError {
                expected: self.currency.clone(),
                found: other.currency.clone(),
            });
        }

        Ok(Price {
            amount: self.amount + other.amount,
            currency: self.currency.clone(),
        })
    }

    /// Sums the prices; all of them must share one currency.
    pub fn total<'a, I>(prices: I) -> Result<Price>
    where
        I: IntoIterator<Item = &'a Price>,
    {
        let mut prices = prices.into_iter();
        let first = prices
            .next()
            .ok_or_else(|| BookingError::InvalidValueError {
                field: "price".to_string(),
                value: String::new(),
                reason: "No prices to add up".to_string(),
            })?;
        prices.try_fold(first.clone(), |sum, price| sum.checked_add(price))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
