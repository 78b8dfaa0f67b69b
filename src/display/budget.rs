//! Budget display formatting

use tabled::Tabled;

use super::report::{render, truncate};
use crate::analytics::{format_currency, format_month, CurrencyFormat};
use crate::models::Budget;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format budgets as a table
pub fn format_budget_list(budgets: &[Budget], currency: CurrencyFormat) -> String {
    if budgets.is_empty() {
        return "No budgets found.".to_string();
    }

    let rows = budgets
        .iter()
        .map(|b| BudgetRow {
            id: b.id.to_string(),
            month: format_month(&b.month.to_string()),
            category: truncate(&b.category, 30),
            amount: format_currency(b.amount.value(), currency),
        })
        .collect();

    render(rows)
}
