//! Transaction service
//!
//! Provides business logic for transaction management: validated creation,
//! partial edits, deletion and newest-first listing.

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Amount, Transaction, TransactionType};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: Amount,
    pub date: NaiveDate,
    pub category: String,
    pub kind: TransactionType,
    pub description: String,
}

/// Partial edit of a transaction; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub amount: Option<Amount>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub kind: Option<TransactionType>,
    pub description: Option<String>,
}

impl TransactionUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.kind.is_none()
            && self.description.is_none()
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, input: NewTransaction) -> FinsightResult<Transaction> {
        let txn = Transaction::new(
            input.amount,
            input.date,
            input.category.trim(),
            input.kind,
            input.description.trim(),
        );

        txn.validate()
            .map_err(|e| FinsightError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, category = %txn.category, "transaction created");
        Ok(txn)
    }

    /// Find a transaction by full ID, short ID or unique ID prefix
    pub fn find(&self, reference: &str) -> FinsightResult<Transaction> {
        let mut matches = self.storage.transactions.find_matching(reference)?;
        match matches.len() {
            0 => Err(FinsightError::transaction_not_found(reference)),
            1 => Ok(matches.remove(0)),
            n => Err(FinsightError::Validation(format!(
                "Transaction reference '{}' is ambiguous ({} matches)",
                reference, n
            ))),
        }
    }

    /// List transactions newest first, optionally capped at `limit`
    pub fn list(&self, limit: Option<usize>) -> FinsightResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;
        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    /// All stored transactions, newest first
    pub fn all(&self) -> FinsightResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Apply a partial edit to a transaction
    pub fn update(&self, reference: &str, update: TransactionUpdate) -> FinsightResult<Transaction> {
        let mut txn = self.find(reference)?;

        if update.is_empty() {
            return Ok(txn);
        }

        if let Some(amount) = update.amount {
            txn.amount = amount;
        }
        if let Some(date) = update.date {
            txn.date = date;
        }
        if let Some(category) = update.category {
            txn.category = category.trim().to_string();
        }
        if let Some(kind) = update.kind {
            txn.kind = kind;
        }
        if let Some(description) = update.description {
            txn.description = description.trim().to_string();
        }

        txn.validate()
            .map_err(|e| FinsightError::Validation(e.to_string()))?;
        txn.updated_at = Utc::now();

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        info!(id = %txn.id, "transaction updated");
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, reference: &str) -> FinsightResult<Transaction> {
        let txn = self.find(reference)?;

        self.storage.transactions.delete(txn.id)?;
        self.storage.transactions.save()?;

        info!(id = %txn.id, "transaction deleted");
        Ok(txn)
    }

    /// Delete every transaction, returning how many were removed
    pub fn delete_all(&self) -> FinsightResult<usize> {
        let count = self.storage.transactions.clear()?;
        self.storage.transactions.save()?;

        info!(count, "all transactions deleted");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinsightPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(amount: f64, date: &str, category: &str) -> NewTransaction {
        NewTransaction {
            amount: Amount::new(amount).unwrap(),
            date: date.parse().unwrap(),
            category: category.to_string(),
            kind: TransactionType::Expense,
            description: "Test".to_string(),
        }
    }

    #[test]
    fn test_create_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.create(input(12.5, "2024-03-04", "  Food ")).unwrap();
        assert_eq!(txn.category, "Food");
        assert_eq!(service.all().unwrap().len(), 1);
    }

    #[test]
    fn test_create_requires_category_and_description() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service.create(input(1.0, "2024-03-04", "   ")).unwrap_err();
        assert!(err.is_validation());

        let mut no_description = input(1.0, "2024-03-04", "Food");
        no_description.description = String::new();
        assert!(service.create(no_description).unwrap_err().is_validation());

        assert!(service.all().unwrap().is_empty());
    }

    #[test]
    fn test_list_newest_first_with_limit() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.create(input(1.0, "2024-01-10", "A")).unwrap();
        service.create(input(2.0, "2024-03-10", "B")).unwrap();
        service.create(input(3.0, "2024-02-10", "C")).unwrap();

        let listed = service.list(Some(2)).unwrap();
        let categories: Vec<_> = listed.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, vec!["B", "C"]);
        assert_eq!(service.list(None).unwrap().len(), 3);
    }

    #[test]
    fn test_update_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.create(input(10.0, "2024-01-10", "Food")).unwrap();
        let updated = service
            .update(
                &txn.id.to_string(),
                TransactionUpdate {
                    amount: Some(Amount::new(25.0).unwrap()),
                    kind: Some(TransactionType::Income),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, txn.id);
        assert_eq!(updated.amount.value(), 25.0);
        assert!(updated.is_income());
        assert_eq!(updated.category, "Food");
    }

    #[test]
    fn test_update_rejects_blank_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.create(input(10.0, "2024-01-10", "Food")).unwrap();
        let err = service
            .update(
                &txn.id.to_string(),
                TransactionUpdate {
                    category: Some(" ".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.find(&txn.id.to_string()).unwrap().category, "Food");
    }

    #[test]
    fn test_delete_and_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.create(input(10.0, "2024-01-10", "Food")).unwrap();
        let reference = txn.id.as_uuid().to_string();

        service.delete(&reference).unwrap();
        assert!(service.delete(&reference).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_all() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.create(input(1.0, "2024-01-10", "A")).unwrap();
        service.create(input(2.0, "2024-01-11", "B")).unwrap();

        assert_eq!(service.delete_all().unwrap(), 2);
        assert!(service.all().unwrap().is_empty());
    }
}
