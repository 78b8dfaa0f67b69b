//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;

use crate::analytics::CurrencyFormat;
use crate::error::{FinsightError, FinsightResult};
use crate::models::{Amount, MonthKey, TransactionType};

/// Per-invocation values shared by every command handler
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    /// Currency every amount is displayed in
    pub currency: CurrencyFormat,
    /// The date the invocation treats as today
    pub today: NaiveDate,
    /// Default number of rows for transaction listings
    pub recent_limit: usize,
}

pub(crate) fn parse_amount(input: &str) -> FinsightResult<Amount> {
    Amount::parse(input).map_err(|e| {
        FinsightError::Validation(format!(
            "{}. Use a positive number like '50' or '1,250.00'",
            e
        ))
    })
}

/// Parse a `YYYY-MM-DD` date with a year between 0001 and 9999
pub fn parse_date(input: &str) -> FinsightResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FinsightError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })?;
    if !MonthKey::supports(date) {
        return Err(FinsightError::Validation(format!(
            "Date out of range: '{}'. Years must be between 0001 and 9999",
            input
        )));
    }
    Ok(date)
}

pub(crate) fn parse_month(input: &str) -> FinsightResult<MonthKey> {
    MonthKey::parse(input.trim()).map_err(|e| {
        FinsightError::Validation(format!("{}. Use YYYY-MM (e.g., 2025-01)", e))
    })
}

pub(crate) fn parse_kind(input: &str) -> FinsightResult<TransactionType> {
    input.parse().map_err(FinsightError::Validation)
}

/// Create an output file for CSV export
pub(crate) fn create_export_file(path: &Path) -> FinsightResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        FinsightError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
