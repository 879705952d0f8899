//! Custom category repository for JSON storage
//!
//! Holds the user-added category labels as a simple deduplicated list.
//! Categories appearing only in transaction history are not stored here;
//! the derivation service unions the two views.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketError;

use super::file_io::{read_json_or_default, write_json_atomic};
use super::poisoned;

/// Repository for user-added category labels
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<Vec<String>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), PocketError> {
        let loaded: Vec<String> = read_json_or_default(&self.path);
        let mut data = self.data.write().map_err(poisoned)?;
        *data = loaded;
        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        write_json_atomic(&self.path, &*data)
    }

    /// Add a category if not already present. Returns false on duplicates.
    pub fn add(&self, category: &str) -> Result<bool, PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        if data.iter().any(|c| c == category) {
            return Ok(false);
        }
        data.push(category.to_string());
        Ok(true)
    }

    /// Remove a category label
    pub fn remove(&self, category: &str) -> Result<bool, PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        let before = data.len();
        data.retain(|c| c != category);
        Ok(data.len() != before)
    }

    /// Snapshot of all user-added categories
    pub fn all(&self) -> Result<Vec<String>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.clone())
    }

    /// Replace the collection (backup import)
    pub fn replace_all(&self, categories: Vec<String>) -> Result<(), PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        *data = categories;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_deduplicates() {
        let temp = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp.path().join("categories.json"));

        assert!(repo.add("Coffee").unwrap());
        assert!(!repo.add("Coffee").unwrap());
        assert_eq!(repo.all().unwrap(), vec!["Coffee"]);
    }

    #[test]
    fn test_remove() {
        let temp = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp.path().join("categories.json"));

        repo.add("Coffee").unwrap();
        assert!(repo.remove("Coffee").unwrap());
        assert!(!repo.remove("Coffee").unwrap());
    }
}
