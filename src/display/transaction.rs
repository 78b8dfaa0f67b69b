//! Transaction display formatting
//!
//! Provides the register table and the detail view for transactions.

use tabled::Tabled;

use super::report::{render, truncate};
use crate::analytics::{format_currency, format_full_date, CurrencyFormat};
use crate::models::{Transaction, TransactionType};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Signed display amount: expenses are shown negative
fn signed_amount(txn: &Transaction, currency: CurrencyFormat) -> String {
    let value = txn.amount.value();
    match txn.kind {
        TransactionType::Income => format_currency(value, currency),
        TransactionType::Expense => format_currency(-value, currency),
    }
}

/// Format a list of transactions as a register table
pub fn format_transaction_register(transactions: &[Transaction], currency: CurrencyFormat) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions
        .iter()
        .map(|t| TransactionRow {
            id: t.id.to_string(),
            date: t.date.format("%Y-%m-%d").to_string(),
            kind: t.kind.to_string(),
            amount: signed_amount(t, currency),
            category: truncate(&t.category, 20),
            description: truncate(&t.description, 32),
        })
        .collect();

    render(rows)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency: CurrencyFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        format_full_date(&txn.date.to_string())
    ));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_currency(txn.amount.value(), currency)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));

    output
}
