//! Budget model
//!
//! A budget is a spending ceiling for one category in one calendar month.
//! At most one budget exists per (category, month); the budget service
//! enforces that when budgets are created or edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::BudgetId;
use super::month::MonthKey;

/// A monthly spending ceiling for a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category this budget limits
    pub category: String,

    /// The month the budget applies to
    pub month: MonthKey,

    /// Budgeted amount
    pub amount: Amount,

    /// When this budget was created
    pub created_at: DateTime<Utc>,

    /// When this budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: impl Into<String>, month: MonthKey, amount: Amount) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category: category.into(),
            month,
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this budget covers the given category and month
    pub fn covers(&self, category: &str, month: MonthKey) -> bool {
        self.category == category && self.month == month
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::MissingCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month, self.category, self.amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    MissingCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
