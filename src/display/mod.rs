//! Display formatting for terminal output
//!
//! Provides utilities for rendering records and reports as tables.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::format_budget_list;
pub use report::{
    format_bar, format_budget_comparison_table, format_budget_status_table,
    format_category_table, format_dashboard, format_month_options_table, format_monthly_table,
    format_percentage, truncate,
};
pub use transaction::{format_transaction_details, format_transaction_register};
