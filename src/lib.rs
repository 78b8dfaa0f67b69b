//! finsight - personal finance tracking from the terminal
//!
//! This library records income and expense transactions and monthly category
//! budgets, and turns them into the summaries a finance dashboard shows:
//! spending per category, income and expenses per month, selectable reporting
//! windows and budget usage.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `analytics`: Pure aggregation and formatting functions
//! - `cli`: Command handlers for the `finsight` binary
//! - `config`: Configuration and path management
//! - `display`: Terminal tables
//! - `error`: Custom error types
//! - `export`: CSV export
//! - `models`: Core data models (transactions, budgets, amounts, months)
//! - `services`: Business logic layer
//! - `storage`: JSON file storage layer
//!
//! # Example
//!
//! ```rust,ignore
//! use finsight::analytics::{category_summary, format_currency, CurrencyFormat};
//!
//! for summary in category_summary(&transactions) {
//!     println!("{}: {}", summary.category, format_currency(summary.total, CurrencyFormat::Usd));
//! }
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinsightError, FinsightResult};
