//! Budget model
//!
//! A budget is a per-category monthly spending ceiling. The category string
//! is the natural key: at most one budget exists per category, and setting a
//! budget for an existing category replaces the prior entry.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A per-category monthly spending ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Natural key; free-text category label
    pub category: String,

    /// Positive spending limit for a calendar month
    pub limit: Money,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }
}

/// Progress of one budget within the active month
#[derive(Debug, Clone, Serialize)]
pub struct BudgetProgress {
    pub category: String,
    pub limit: Money,
    /// Expense + card spending matching the category in the active month
    pub spent: Money,
    /// `min(spent / limit * 100, 100)`
    pub percentage: f64,
}

impl BudgetProgress {
    /// Whether spending exceeded the ceiling
    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }
}
