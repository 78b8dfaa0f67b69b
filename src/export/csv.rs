//! CSV export functionality
//!
//! Writes transactions and report summaries as spreadsheet-friendly CSV.
//! Amounts are plain decimals without currency symbols.

use std::io::Write;

use csv::Writer;
use serde::Serialize;

use crate::analytics::{CategorySummary, MonthlySummary};
use crate::error::FinsightResult;
use crate::models::Transaction;

#[derive(Serialize)]
struct TransactionRecord<'a> {
    id: String,
    date: String,
    #[serde(rename = "type")]
    kind: String,
    amount: String,
    category: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct CategoryRecord<'a> {
    category: &'a str,
    total: String,
    count: usize,
}

#[derive(Serialize)]
struct MonthlyRecord {
    month: String,
    income: String,
    expenses: String,
    total: String,
}

fn decimal(value: f64) -> String {
    format!("{:.2}", value)
}

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinsightResult<()> {
    let mut wtr = Writer::from_writer(writer);

    for txn in transactions {
        wtr.serialize(TransactionRecord {
            id: txn.id.as_uuid().to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.to_string(),
            amount: decimal(txn.amount.value()),
            category: &txn.category,
            description: &txn.description,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export a per-category spending breakdown to CSV
pub fn export_category_summary_csv<W: Write>(
    summaries: &[CategorySummary],
    writer: W,
) -> FinsightResult<()> {
    let mut wtr = Writer::from_writer(writer);

    for summary in summaries {
        wtr.serialize(CategoryRecord {
            category: &summary.category,
            total: decimal(summary.total),
            count: summary.count,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export the month-by-month trend to CSV
pub fn export_monthly_summary_csv<W: Write>(
    summaries: &[MonthlySummary],
    writer: W,
) -> FinsightResult<()> {
    let mut wtr = Writer::from_writer(writer);

    for summary in summaries {
        wtr.serialize(MonthlyRecord {
            month: summary.month.to_string(),
            income: decimal(summary.income),
            expenses: decimal(summary.expenses),
            total: decimal(summary.total),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
