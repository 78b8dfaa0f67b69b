//! Report formatting for terminal output
//!
//! Renders the analytics summaries as tables. Every amount goes through
//! `format_currency` so the configured locale applies everywhere.

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::analytics::{
    format_currency, format_month, BudgetComparison, BudgetStatus, CategorySummary,
    CurrencyFormat, DashboardSummary, MonthOption, MonthlySummary,
};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if !pct.is_finite() {
        return "n/a".to_string();
    }
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

pub(crate) fn render<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format the per-category spending breakdown
pub fn format_category_table(summaries: &[CategorySummary], currency: CurrencyFormat) -> String {
    if summaries.is_empty() {
        return "No expenses recorded for this period.".to_string();
    }

    let grand_total: f64 = summaries.iter().map(|s| s.total).sum();
    let max = summaries.first().map_or(0.0, |s| s.total);

    let rows = summaries
        .iter()
        .map(|s| CategoryRow {
            category: truncate(&s.category, 30),
            total: format_currency(s.total, currency),
            count: s.count,
            share: format_percentage(s.total / grand_total * 100.0),
            bar: format_bar(s.total, max, 20),
        })
        .collect();

    format!(
        "{}\nTotal spending: {}",
        render(rows),
        format_currency(grand_total, currency)
    )
}

#[derive(Tabled)]
struct MonthlyRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Net")]
    total: String,
}

/// Format the month-by-month income and expense trend
pub fn format_monthly_table(summaries: &[MonthlySummary], currency: CurrencyFormat) -> String {
    if summaries.is_empty() {
        return "No transactions recorded yet.".to_string();
    }

    let rows = summaries
        .iter()
        .map(|s| MonthlyRow {
            month: format_month(&s.month.to_string()),
            income: format_currency(s.income, currency),
            expenses: format_currency(s.expenses, currency),
            total: format_currency(s.total, currency),
        })
        .collect();

    render(rows)
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Format budgeted against actual spending per category
pub fn format_budget_comparison_table(
    comparisons: &[BudgetComparison],
    currency: CurrencyFormat,
) -> String {
    if comparisons.is_empty() {
        return "No budgets or spending for this month.".to_string();
    }

    let rows = comparisons
        .iter()
        .map(|c| ComparisonRow {
            category: truncate(&c.category, 30),
            budget: format_currency(c.budget, currency),
            actual: format_currency(c.actual, currency),
            remaining: format_currency(c.remaining, currency),
        })
        .collect();

    render(rows)
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    actual: String,
    #[tabled(rename = "Used")]
    percentage: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format how far each budget of a month has been used
pub fn format_budget_status_table(statuses: &[BudgetStatus], currency: CurrencyFormat) -> String {
    if statuses.is_empty() {
        return "No budgets set for this month.".to_string();
    }

    let rows = statuses
        .iter()
        .map(|s| StatusRow {
            category: truncate(&s.category, 30),
            budget: format_currency(s.budget, currency),
            actual: format_currency(s.actual, currency),
            percentage: format_percentage(s.percentage),
            bar: format_bar(s.percentage.min(100.0), 100.0, 20),
            status: if s.over_budget { "OVER" } else { "ok" },
        })
        .collect();

    render(rows)
}

#[derive(Tabled)]
struct PeriodRow {
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
}

/// Format the selectable reporting windows
pub fn format_month_options_table(options: &[MonthOption]) -> String {
    let bound = |d: Option<chrono::NaiveDate>| d.map_or_else(|| "-".to_string(), |d| d.to_string());

    let rows: Vec<PeriodRow> = options
        .iter()
        .map(|o| PeriodRow {
            value: o.value.clone(),
            label: o.label.clone(),
            from: bound(o.from),
            to: bound(o.to),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the dashboard overview
pub fn format_dashboard(summary: &DashboardSummary, currency: CurrencyFormat) -> String {
    let mut output = String::new();
    let month = format_month(&summary.month.to_string());

    output.push_str(&format!("Dashboard for {}\n\n", month));
    output.push_str(&format!(
        "  Income:             {}\n",
        format_currency(summary.income, currency)
    ));
    output.push_str(&format!(
        "  Expenses:           {}\n",
        format_currency(summary.expenses, currency)
    ));
    output.push_str(&format!(
        "  Net:                {}\n",
        format_currency(summary.net, currency)
    ));
    output.push_str(&format!(
        "  Active categories:  {}\n",
        summary.active_categories
    ));
    match &summary.top_category {
        Some(top) => output.push_str(&format!(
            "  Top category:       {} ({})\n",
            top.category,
            format_currency(top.total, currency)
        )),
        None => output.push_str("  Top category:       -\n"),
    }

    output.push_str("\nSpending this month\n");
    output.push_str(&format_category_table(&summary.month_categories, currency));
    output.push_str("\n\nBudgets\n");
    output.push_str(&format_budget_comparison_table(
        &summary.budget_comparison,
        currency,
    ));
    output.push_str("\n\nMonthly trend\n");
    output.push_str(&format_monthly_table(&summary.monthly, currency));
    output.push('\n');

    output
}
