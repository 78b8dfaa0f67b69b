//! Storage layer for finsight
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each record kind lives in its own file under `<base>/data/`.

pub mod budget;
pub mod file_io;
pub mod transactions;

pub use budget::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::FinsightPaths;
use crate::error::FinsightError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinsightPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinsightPaths) -> Result<Self, FinsightError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinsightPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinsightError> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinsightError> {
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Transaction, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_save_all_and_load_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        storage
            .transactions
            .upsert(Transaction::new(
                Amount::new(42.0).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                "Food",
                TransactionType::Expense,
                "Groceries",
            ))
            .unwrap();
        storage.save_all().unwrap();

        assert!(paths.transactions_file().exists());
        assert!(paths.budgets_file().exists());

        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert_eq!(reopened.transactions.count().unwrap(), 1);
        assert_eq!(reopened.budgets.count().unwrap(), 0);
    }
}
