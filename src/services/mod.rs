//! Service layer for finsight
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, uniqueness rules and persistence of every mutation.

pub mod budget;
pub mod transaction;

pub use budget::{BudgetService, BudgetUpdate};
pub use transaction::{NewTransaction, TransactionService, TransactionUpdate};
