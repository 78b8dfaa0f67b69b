//! Expense totals per category
//!
//! Only expense transactions count. Categories are grouped by exact string
//! equality and ordered by total, largest first. Ties keep the order in which
//! each category was first seen.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::Transaction;

/// Aggregated expense total and count for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    /// Sum of expense amounts, unrounded
    pub total: f64,
    /// Number of contributing transactions
    pub count: usize,
}

/// Summarize expense spending by category
///
/// Income transactions are skipped entirely. An input without expenses
/// produces an empty vector.
pub fn category_summary<'a, I>(transactions: I) -> Vec<CategorySummary>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut summaries: Vec<CategorySummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in transactions.into_iter().filter(|t| t.is_expense()) {
        let slot = *index.entry(txn.category.as_str()).or_insert_with(|| {
            summaries.push(CategorySummary {
                category: txn.category.clone(),
                total: 0.0,
                count: 0,
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        summary.total += txn.amount.value();
        summary.count += 1;
    }

    // sort_by is stable, so equal totals stay in first-seen order
    summaries.sort_by(|a, b| b.total.total_cmp(&a.total));
    summaries
}
