//! Budget service
//!
//! Provides business logic for monthly budgets. A category can carry at most
//! one budget per month.

use chrono::Utc;
use tracing::info;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Amount, Budget, MonthKey};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// Partial edit of a budget; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct BudgetUpdate {
    pub category: Option<String>,
    pub month: Option<MonthKey>,
    pub amount: Option<Amount>,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a budget for a category in a month
    pub fn create(&self, category: &str, month: MonthKey, amount: Amount) -> FinsightResult<Budget> {
        let budget = Budget::new(category.trim(), month, amount);

        budget
            .validate()
            .map_err(|e| FinsightError::Validation(e.to_string()))?;

        if self
            .storage
            .budgets
            .find_by_category_month(&budget.category, month)?
            .is_some()
        {
            return Err(FinsightError::duplicate_budget(&budget.category, month));
        }

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        info!(id = %budget.id, category = %budget.category, month = %budget.month, amount = %budget.amount, "budget created");
        Ok(budget)
    }

    /// Find a budget by full ID, short ID or unique ID prefix
    pub fn find(&self, reference: &str) -> FinsightResult<Budget> {
        let mut matches = self.storage.budgets.find_matching(reference)?;
        match matches.len() {
            0 => Err(FinsightError::budget_not_found(reference)),
            1 => Ok(matches.remove(0)),
            n => Err(FinsightError::Validation(format!(
                "Budget reference '{}' is ambiguous ({} matches)",
                reference, n
            ))),
        }
    }

    /// List budgets, optionally restricted to one month
    pub fn list(&self, month: Option<MonthKey>) -> FinsightResult<Vec<Budget>> {
        match month {
            Some(month) => self.storage.budgets.get_for_month(month),
            None => self.storage.budgets.get_all(),
        }
    }

    /// Apply a partial edit to a budget
    pub fn update(&self, reference: &str, update: BudgetUpdate) -> FinsightResult<Budget> {
        let mut budget = self.find(reference)?;

        if let Some(category) = update.category {
            budget.category = category.trim().to_string();
        }
        if let Some(month) = update.month {
            budget.month = month;
        }
        if let Some(amount) = update.amount {
            budget.amount = amount;
        }

        budget
            .validate()
            .map_err(|e| FinsightError::Validation(e.to_string()))?;

        if let Some(existing) = self
            .storage
            .budgets
            .find_by_category_month(&budget.category, budget.month)?
        {
            if existing.id != budget.id {
                return Err(FinsightError::duplicate_budget(&budget.category, budget.month));
            }
        }

        budget.updated_at = Utc::now();
        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        info!(id = %budget.id, "budget updated");
        Ok(budget)
    }

    /// Delete a budget
    pub fn delete(&self, reference: &str) -> FinsightResult<Budget> {
        let budget = self.find(reference)?;

        self.storage.budgets.delete(budget.id)?;
        self.storage.budgets.save()?;

        info!(id = %budget.id, "budget deleted");
        Ok(budget)
    }

    /// Delete every budget, returning how many were removed
    pub fn delete_all(&self) -> FinsightResult<usize> {
        let count = self.storage.budgets.clear()?;
        self.storage.budgets.save()?;

        info!(count, "all budgets deleted");
        Ok(count)
    }
}
