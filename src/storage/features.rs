//! Feature flag repository for JSON storage

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketError;
use crate::models::Features;

use super::file_io::{read_json_or_default, write_json_atomic};
use super::poisoned;

/// Repository for the persisted feature flag set
pub struct FeatureRepository {
    path: PathBuf,
    data: RwLock<Features>,
}

impl FeatureRepository {
    /// Create a new feature repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Features::default()),
        }
    }

    /// Load flags from disk; missing or corrupt data means all-enabled
    pub fn load(&self) -> Result<(), PocketError> {
        let loaded: Features = read_json_or_default(&self.path);
        let mut data = self.data.write().map_err(poisoned)?;
        *data = loaded;
        Ok(())
    }

    /// Save flags to disk
    pub fn save(&self) -> Result<(), PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        write_json_atomic(&self.path, &*data)
    }

    /// Current flag set
    pub fn get(&self) -> Result<Features, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(*data)
    }

    /// Replace the flag set (settings toggle or backup import)
    pub fn set(&self, features: Features) -> Result<(), PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        *data = features;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_defaults_enabled() {
        let temp = TempDir::new().unwrap();
        let repo = FeatureRepository::new(temp.path().join("features.json"));
        repo.load().unwrap();
        assert!(repo.get().unwrap().budgets);
    }

    #[test]
    fn test_set_and_persist() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("features.json");
        let repo = FeatureRepository::new(path.clone());

        let mut features = Features::default();
        features.goals = false;
        repo.set(features).unwrap();
        repo.save().unwrap();

        let reloaded = FeatureRepository::new(path);
        reloaded.load().unwrap();
        assert!(!reloaded.get().unwrap().goals);
    }
}
