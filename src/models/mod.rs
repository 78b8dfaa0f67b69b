//! Core data models for finsight
//!
//! This module contains the records that enter the system (transactions and
//! budgets) together with the value types they are built from.

pub mod amount;
pub mod budget;
pub mod ids;
pub mod month;
pub mod transaction;

pub use amount::{Amount, AmountError};
pub use budget::{Budget, BudgetValidationError};
pub use ids::{BudgetId, TransactionId};
pub use month::{MonthKey, MonthParseError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
