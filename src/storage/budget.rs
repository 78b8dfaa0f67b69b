//! Budget repository for JSON storage
//!
//! Manages loading and saving monthly budgets to budgets.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::FinsightError;
use crate::models::{Budget, BudgetId, MonthKey};

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget file layout
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<HashMap<BudgetId, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), FinsightError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.clear();
        for budget in file_data.budgets {
            budgets.insert(budget.id, budget);
        }

        debug!(count = budgets.len(), "loaded budgets");
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), FinsightError> {
        let budgets = self.get_all()?;
        write_json_atomic(&self.path, &BudgetData { budgets })
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> Result<Option<Budget>, FinsightError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.get(&id).cloned())
    }

    /// Get all budgets ordered by month, then category
    pub fn get_all(&self) -> Result<Vec<Budget>, FinsightError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        list.sort_by(|a, b| a.month.cmp(&b.month).then_with(|| a.category.cmp(&b.category)));
        Ok(list)
    }

    /// Get the budgets for one month, ordered by category
    pub fn get_for_month(&self, month: MonthKey) -> Result<Vec<Budget>, FinsightError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|b| b.month == month)
            .collect())
    }

    /// Find the budget covering a category in a month
    pub fn find_by_category_month(
        &self,
        category: &str,
        month: MonthKey,
    ) -> Result<Option<Budget>, FinsightError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.values().find(|b| b.covers(category, month)).cloned())
    }

    /// Find budgets whose ID matches a full or partial reference
    pub fn find_matching(&self, reference: &str) -> Result<Vec<Budget>, FinsightError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets
            .values()
            .filter(|b| b.id.matches(reference))
            .cloned()
            .collect())
    }

    /// Insert or update a budget
    pub fn upsert(&self, budget: Budget) -> Result<(), FinsightError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.insert(budget.id, budget);
        Ok(())
    }

    /// Delete a budget, returning it if it existed
    pub fn delete(&self, id: BudgetId) -> Result<Option<Budget>, FinsightError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.remove(&id))
    }

    /// Delete every budget, returning how many were removed
    pub fn clear(&self) -> Result<usize, FinsightError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let count = budgets.len();
        budgets.clear();
        Ok(count)
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, FinsightError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        let repo = BudgetRepository::new(path);
        (temp_dir, repo)
    }

    fn budget(category: &str, month: u32, amount: f64) -> Budget {
        Budget::new(
            category,
            MonthKey::new(2024, month).unwrap(),
            Amount::new(amount).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let b = budget("Food", 1, 300.0);
        let id = b.id;
        repo.upsert(b).unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo2.load().unwrap();
        let loaded = repo2.get(id).unwrap().unwrap();
        assert_eq!(loaded.category, "Food");
        assert_eq!(loaded.amount.value(), 300.0);
    }

    #[test]
    fn test_get_all_ordered_by_month_then_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(budget("Rent", 2, 1200.0)).unwrap();
        repo.upsert(budget("Rent", 1, 1200.0)).unwrap();
        repo.upsert(budget("Food", 1, 300.0)).unwrap();

        let order: Vec<(String, u32)> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|b| (b.category, b.month.month()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Food".to_string(), 1),
                ("Rent".to_string(), 1),
                ("Rent".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_month_and_category_lookup() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(budget("Food", 1, 300.0)).unwrap();
        repo.upsert(budget("Food", 2, 350.0)).unwrap();

        let jan = MonthKey::new(2024, 1).unwrap();
        assert_eq!(repo.get_for_month(jan).unwrap().len(), 1);
        assert!(repo.find_by_category_month("Food", jan).unwrap().is_some());
        assert!(repo.find_by_category_month("food", jan).unwrap().is_none());
    }

    #[test]
    fn test_delete_and_clear() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let b = budget("Food", 1, 300.0);
        let id = b.id;
        repo.upsert(b).unwrap();
        repo.upsert(budget("Rent", 1, 1200.0)).unwrap();

        assert!(repo.delete(id).unwrap().is_some());
        assert_eq!(repo.clear().unwrap(), 1);
        assert_eq!(repo.count().unwrap(), 0);
    }
}
