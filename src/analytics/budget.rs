//! Budget versus actual spending

use serde::Serialize;

use super::category::CategorySummary;
use crate::models::{Budget, MonthKey};

/// Budgeted and actual spending for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetComparison {
    pub category: String,
    /// Budgeted amount, 0 when the category has spending but no budget
    pub budget: f64,
    /// Actual spending, 0 when nothing was spent
    pub actual: f64,
    /// Budget left over, never negative
    pub remaining: f64,
}

/// How far one budget has been used up
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub budget: f64,
    pub actual: f64,
    /// `actual / budget * 100`
    pub percentage: f64,
    pub over_budget: bool,
}

fn actual_for(actual: &[CategorySummary], category: &str) -> f64 {
    actual
        .iter()
        .find(|s| s.category == category)
        .map_or(0.0, |s| s.total)
}

/// Pair each category's budget with its actual spending
///
/// Categories come from the budgets first, then from any spending without a
/// budget, each listed once in first-seen order. Callers pass the budgets and
/// spending of a single month.
pub fn budget_comparison(budgets: &[Budget], actual: &[CategorySummary]) -> Vec<BudgetComparison> {
    let mut categories: Vec<&str> = Vec::new();
    for category in budgets
        .iter()
        .map(|b| b.category.as_str())
        .chain(actual.iter().map(|a| a.category.as_str()))
    {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    categories
        .into_iter()
        .map(|category| {
            let budget = budgets
                .iter()
                .find(|b| b.category == category)
                .map_or(0.0, |b| b.amount.value());
            let actual = actual_for(actual, category);
            BudgetComparison {
                category: category.to_string(),
                budget,
                actual,
                remaining: (budget - actual).max(0.0),
            }
        })
        .collect()
}

/// Usage of every budget declared for `month`
pub fn budget_status(
    budgets: &[Budget],
    actual: &[CategorySummary],
    month: MonthKey,
) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .filter(|b| b.month == month)
        .map(|b| {
            let budget = b.amount.value();
            let spent = actual_for(actual, &b.category);
            let percentage = spent / budget * 100.0;
            BudgetStatus {
                category: b.category.clone(),
                budget,
                actual: spent,
                percentage,
                over_budget: percentage > 100.0,
            }
        })
        .collect()
}
