//! Amount type for transaction and budget values
//!
//! Amounts are plain floating-point numbers, matching how the dashboard sums
//! them, but an `Amount` can only hold a positive finite value. The check runs
//! wherever one is built, including deserialization, so records that reach the
//! analytics functions already satisfy it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strictly positive, finite monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting zero, negative and non-finite values
    ///
    /// # Examples
    /// ```
    /// use finsight::models::Amount;
    /// assert!(Amount::new(10.5).is_ok());
    /// assert!(Amount::new(0.0).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value <= 0.0 {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Parse an amount from user input
    ///
    /// Accepts "10.50", "$10.50", "₹1,200" and "1200"; thousands separators
    /// and a leading currency symbol are ignored.
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        let trimmed = s.trim();
        let unsigned = trimmed
            .strip_prefix('$')
            .or_else(|| trimmed.strip_prefix('₹'))
            .unwrap_or(trimmed);
        let digits: String = unsigned.chars().filter(|c| *c != ',').collect();

        let value: f64 = digits
            .parse()
            .map_err(|_| AmountError::InvalidFormat(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Error type for amount construction
#[derive(Debug, Clone, PartialEq)]
pub enum AmountError {
    InvalidFormat(String),
    NotPositive(f64),
    NotFinite,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            AmountError::NotPositive(v) => write!(f, "Amount must be greater than 0, got {}", v),
            AmountError::NotFinite => write!(f, "Amount must be a finite number"),
        }
    }
}

impl std::error::Error for AmountError {}
