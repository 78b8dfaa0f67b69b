//! Spending analytics
//!
//! Pure functions that turn a snapshot of transactions (and optionally
//! budgets) into the summaries the dashboard and reports display. Nothing in
//! here performs I/O, reads the clock or keeps state between calls: anything
//! time-dependent takes `today` as an argument, and inputs are only borrowed.

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod format;
pub mod monthly;
pub mod options;

pub use budget::{budget_comparison, budget_status, BudgetComparison, BudgetStatus};
pub use category::{category_summary, CategorySummary};
pub use dashboard::DashboardSummary;
pub use format::{
    current_month_string, format_currency, format_full_date, format_month, CurrencyFormat,
    INVALID_DATE,
};
pub use monthly::{monthly_summary, MonthlySummary};
pub use options::{
    find_month_option, month_options, MonthOption, ALL_TIME_VALUE, CURRENT_MONTH_VALUE,
};
