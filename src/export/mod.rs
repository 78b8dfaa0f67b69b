//! Export module for finsight
//!
//! CSV output for transactions and report summaries.

pub mod csv;

pub use self::csv::{
    export_category_summary_csv, export_monthly_summary_csv, export_transactions_csv,
};
