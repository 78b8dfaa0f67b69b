//! Dashboard overview
//!
//! Everything the dashboard shows at once: this month's totals, the top
//! spending category, the monthly trend and how the month's budgets are doing.

use chrono::NaiveDate;
use serde::Serialize;

use super::budget::{budget_comparison, budget_status, BudgetComparison, BudgetStatus};
use super::category::{category_summary, CategorySummary};
use super::monthly::{monthly_summary, MonthlySummary};
use crate::models::{Budget, MonthKey, Transaction};

/// Aggregated dashboard figures for the month containing `today`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub month: MonthKey,
    pub income: f64,
    pub expenses: f64,
    /// `income - expenses` for the month
    pub net: f64,
    /// Number of categories with spending this month
    pub active_categories: usize,
    pub top_category: Option<CategorySummary>,
    /// Monthly trend across all transactions
    pub monthly: Vec<MonthlySummary>,
    /// Category breakdown across all transactions
    pub categories: Vec<CategorySummary>,
    /// Category breakdown for this month only
    pub month_categories: Vec<CategorySummary>,
    pub budget_comparison: Vec<BudgetComparison>,
    pub budget_status: Vec<BudgetStatus>,
}

impl DashboardSummary {
    /// Compute the dashboard from a snapshot of transactions and budgets
    pub fn generate(transactions: &[Transaction], budgets: &[Budget], today: NaiveDate) -> Self {
        let month = MonthKey::from_date(today);
        let in_month: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| month.contains(t.date))
            .collect();

        let income: f64 = in_month
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount.value())
            .sum();
        let expenses: f64 = in_month
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount.value())
            .sum();

        let month_categories = category_summary(in_month.iter().copied());
        let month_budgets: Vec<Budget> = budgets
            .iter()
            .filter(|b| b.month == month)
            .cloned()
            .collect();

        Self {
            month,
            income,
            expenses,
            net: income - expenses,
            active_categories: month_categories.len(),
            top_category: month_categories.first().cloned(),
            monthly: monthly_summary(transactions),
            categories: category_summary(transactions),
            budget_comparison: budget_comparison(&month_budgets, &month_categories),
            budget_status: budget_status(budgets, &month_categories, month),
            month_categories,
        }
    }
}
