//! Saving goal repository for JSON storage
//!
//! Goals store only the target; the saved-so-far amount is derived from the
//! transaction log on every read.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketError;
use crate::models::{GoalId, SavingGoal};

use super::file_io::{read_json_or_default, write_json_atomic};
use super::poisoned;

/// Repository for saving goal persistence
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<Vec<SavingGoal>>,
}

impl GoalRepository {
    /// Create a new goal repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), PocketError> {
        let loaded: Vec<SavingGoal> = read_json_or_default(&self.path);
        let mut data = self.data.write().map_err(poisoned)?;
        *data = loaded;
        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> Result<(), PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        write_json_atomic(&self.path, &*data)
    }

    /// Append a goal
    pub fn insert(&self, goal: SavingGoal) -> Result<(), PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.push(goal);
        Ok(())
    }

    /// Get a goal by id
    pub fn get(&self, id: GoalId) -> Result<Option<SavingGoal>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.iter().find(|g| g.id == id).cloned())
    }

    /// Find a goal by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Result<Option<SavingGoal>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Snapshot of all goals
    pub fn all(&self) -> Result<Vec<SavingGoal>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.clone())
    }

    /// Replace the collection (backup import)
    pub fn replace_all(&self, goals: Vec<SavingGoal>) -> Result<(), PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        *data = goals;
        Ok(())
    }
}
