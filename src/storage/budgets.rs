//! Budget repository for JSON storage
//!
//! Budgets are keyed by category: inserting for an existing category
//! replaces the prior entry rather than appending.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketError;
use crate::models::{Budget, Money};

use super::file_io::{read_json_or_default, write_json_atomic};
use super::poisoned;

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), PocketError> {
        let loaded: Vec<Budget> = read_json_or_default(&self.path);
        let mut data = self.data.write().map_err(poisoned)?;
        *data = loaded;
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        write_json_atomic(&self.path, &*data)
    }

    /// Upsert by category: at most one budget per category survives
    pub fn upsert(&self, category: &str, limit: Money) -> Result<(), PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.retain(|b| b.category != category);
        data.push(Budget::new(category, limit));
        Ok(())
    }

    /// Remove the budget for a category
    pub fn remove(&self, category: &str) -> Result<bool, PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        let before = data.len();
        data.retain(|b| b.category != category);
        Ok(data.len() != before)
    }

    /// Get the budget for a category
    pub fn get(&self, category: &str) -> Result<Option<Budget>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.iter().find(|b| b.category == category).cloned())
    }

    /// Snapshot of all budgets
    pub fn all(&self) -> Result<Vec<Budget>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.clone())
    }

    /// Replace the collection (backup import)
    pub fn replace_all(&self, budgets: Vec<Budget>) -> Result<(), PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        *data = budgets;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_upsert_replaces_by_category() {
        let temp = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp.path().join("budgets.json"));

        repo.upsert("Food", Money::from_units(1000)).unwrap();
        repo.upsert("Food", Money::from_units(1500)).unwrap();

        let all = repo.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category, "Food");
        assert_eq!(all[0].limit, Money::from_units(1500));
    }

    #[test]
    fn test_remove() {
        let temp = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp.path().join("budgets.json"));

        repo.upsert("Food", Money::from_units(1000)).unwrap();
        assert!(repo.remove("Food").unwrap());
        assert!(!repo.remove("Food").unwrap());
    }
}
