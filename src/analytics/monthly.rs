//! Income and expense totals per calendar month

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{MonthKey, Transaction, TransactionType};

/// Aggregated income, expenses and net result for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// Month key, serialized as `YYYY-MM`
    pub month: MonthKey,
    pub income: f64,
    pub expenses: f64,
    /// `income - expenses`; negative when the month ran a deficit
    pub total: f64,
}

/// Summarize transactions by the month of their date, oldest month first
///
/// Only months that actually contain transactions appear in the output.
pub fn monthly_summary<'a, I>(transactions: I) -> Vec<MonthlySummary>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut months: BTreeMap<MonthKey, (f64, f64)> = BTreeMap::new();

    for txn in transactions {
        let (income, expenses) = months.entry(MonthKey::from_date(txn.date)).or_default();
        match txn.kind {
            TransactionType::Income => *income += txn.amount.value(),
            TransactionType::Expense => *expenses += txn.amount.value(),
        }
    }

    months
        .into_iter()
        .map(|(month, (income, expenses))| MonthlySummary {
            month,
            income,
            expenses,
            total: income - expenses,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::txn;
    use crate::models::TransactionType::{Expense, Income};

    #[test]
    fn test_scenario_from_dashboard() {
        let transactions = vec![
            txn(100.0, "2024-01-05", "Food", Expense),
            txn(50.0, "2024-01-10", "Food", Expense),
            txn(2000.0, "2024-01-01", "Salary", Income),
        ];

        let summary = monthly_summary(&transactions);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].month.to_string(), "2024-01");
        assert_eq!(summary[0].income, 2000.0);
        assert_eq!(summary[0].expenses, 150.0);
        assert_eq!(summary[0].total, 1850.0);
    }

    #[test]
    fn test_empty() {
        let empty: Vec<Transaction> = Vec::new();
        assert!(monthly_summary(&empty).is_empty());
    }

    #[test]
    fn test_sorted_by_month_across_years() {
        let transactions = vec![
            txn(10.0, "2025-01-03", "Food", Expense),
            txn(10.0, "2024-11-20", "Food", Expense),
            txn(10.0, "2024-12-31", "Food", Expense),
            txn(10.0, "2024-02-01", "Food", Expense),
        ];

        let months: Vec<String> = monthly_summary(&transactions)
            .iter()
            .map(|s| s.month.to_string())
            .collect();
        assert_eq!(months, vec!["2024-02", "2024-11", "2024-12", "2025-01"]);
    }

    #[test]
    fn test_net_can_be_negative() {
        let transactions = vec![
            txn(300.0, "2024-03-01", "Salary", Income),
            txn(450.25, "2024-03-02", "Rent", Expense),
        ];

        let summary = monthly_summary(&transactions);
        assert_eq!(summary[0].total, 300.0 - 450.25);
        assert!(summary[0].total < 0.0);
    }

    #[test]
    fn test_total_is_income_minus_expenses() {
        let transactions = vec![
            txn(0.1, "2024-01-01", "A", Income),
            txn(0.2, "2024-01-02", "A", Income),
            txn(0.3, "2024-01-03", "B", Expense),
            txn(19.99, "2024-02-03", "B", Expense),
            txn(1234.56, "2024-02-04", "C", Income),
        ];

        for entry in monthly_summary(&transactions) {
            assert_eq!(entry.total, entry.income - entry.expenses);
        }
    }

    #[test]
    fn test_month_only_income_has_zero_expenses() {
        let transactions = vec![txn(500.0, "2024-06-15", "Salary", Income)];
        let summary = monthly_summary(&transactions);
        assert_eq!(summary[0].expenses, 0.0);
        assert_eq!(summary[0].total, 500.0);
    }

    #[test]
    fn test_serializes_month_as_key_string() {
        let transactions = vec![txn(5.0, "2024-07-04", "Food", Expense)];
        let json = serde_json::to_value(monthly_summary(&transactions)).unwrap();
        assert_eq!(json[0]["month"], "2024-07");
    }

    #[test]
    fn test_idempotent() {
        let transactions = vec![
            txn(40.0, "2024-05-02", "Food", Expense),
            txn(900.0, "2024-05-01", "Salary", Income),
            txn(15.0, "2024-04-30", "Fun", Expense),
        ];
        assert_eq!(monthly_summary(&transactions), monthly_summary(&transactions));
    }
}
