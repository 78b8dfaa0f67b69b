//! Display formatting for amounts, months and dates
//!
//! These helpers never fail. Input that cannot be parsed is rendered as
//! "Invalid Date" and non-finite amounts as `NaN` or `∞`, so a bad value shows
//! up on screen instead of aborting a whole report.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::MonthKey;

/// Placeholder rendered for unparsable dates and months
pub const INVALID_DATE: &str = "Invalid Date";

/// Locale and currency pairing used for every amount the app displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyFormat {
    /// US dollars, `en-US` grouping: $1,234,567.89
    #[default]
    Usd,
    /// Indian rupees, `en-IN` grouping: ₹12,34,567.89
    Inr,
}

impl CurrencyFormat {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Inr => "₹",
        }
    }

    pub fn locale(&self) -> &'static str {
        match self {
            Self::Usd => "en-US",
            Self::Inr => "en-IN",
        }
    }

    /// Insert thousands separators into a string of integer digits
    fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        if len <= 3 {
            return digits.to_string();
        }

        let (head, last_three) = digits.split_at(len - 3);
        let group = match self {
            Self::Usd => 3,
            Self::Inr => 2,
        };

        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(group);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();

        format!("{},{}", groups.join(","), last_three)
    }
}

impl fmt::Display for CurrencyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usd => write!(f, "usd"),
            Self::Inr => write!(f, "inr"),
        }
    }
}

impl FromStr for CurrencyFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "usd" | "en-us" => Ok(Self::Usd),
            "inr" | "en-in" => Ok(Self::Inr),
            other => Err(format!("Unsupported currency: {} (expected usd or inr)", other)),
        }
    }
}

/// Split a non-negative amount into whole-unit digits and cents
///
/// Rounds half away from zero from the shortest decimal form of the value,
/// so `1.005` gives `("1", 1)` even though its binary value is below 1.005.
fn whole_and_cents(magnitude: f64) -> (String, u32) {
    // f64 `Display` prints the shortest round-trip digits and never an exponent
    let shortest = magnitude.to_string();

    match Decimal::from_str(&shortest) {
        Ok(value) => {
            let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            let whole = rounded.trunc();
            let cents = ((rounded - whole) * Decimal::ONE_HUNDRED)
                .to_u32()
                .unwrap_or(0);
            (whole.to_u128().unwrap_or(0).to_string(), cents)
        }
        // Out of Decimal's range: either a whole number or too small to reach a cent
        Err(_) => match shortest.split_once('.') {
            Some((whole, _)) => (whole.to_string(), 0),
            None => (shortest, 0),
        },
    }
}

/// Render an amount with two decimals, grouped digits and a currency symbol
///
/// Negative amounts get a leading minus before the symbol (`-$12.50`), even
/// when they round to zero (`-0.001` renders as `-$0.00`).
pub fn format_currency(amount: f64, currency: CurrencyFormat) -> String {
    let symbol = currency.symbol();

    if amount.is_nan() {
        return format!("{}NaN", symbol);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, symbol);
    }

    let (whole, cents) = whole_and_cents(amount.abs());
    let sign = if amount < 0.0 { "-" } else { "" };

    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        currency.group_digits(&whole),
        cents
    )
}

/// Render a `YYYY-MM` key as "January 2024"
pub fn format_month(month_key: &str) -> String {
    match MonthKey::parse(month_key) {
        Ok(key) => key.first_day().format("%B %Y").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Render a `YYYY-MM-DD` date as "05 Jan 2024"
pub fn format_full_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// The month containing `today`, as a zero-padded `YYYY-MM` string
pub fn current_month_string(today: NaiveDate) -> String {
    MonthKey::from_date(today).to_string()
}
