//! Transaction repository for JSON storage
//!
//! Manages loading and saving the append-mostly transaction log to
//! transactions.json. New transactions are prepended so the stored order is
//! newest-first; insertion order is preserved as a secondary sort key.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketError;
use crate::models::{AccountId, Transaction, TransactionId};

use super::file_io::{read_json_or_default, write_json_atomic};
use super::poisoned;

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk; missing or corrupt data becomes an
    /// empty log.
    pub fn load(&self) -> Result<(), PocketError> {
        let loaded: Vec<Transaction> = read_json_or_default(&self.path);
        let mut data = self.data.write().map_err(poisoned)?;
        *data = loaded;
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        write_json_atomic(&self.path, &*data)
    }

    /// Prepend a transaction (most recent first)
    pub fn insert(&self, transaction: Transaction) -> Result<(), PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.insert(0, transaction);
        Ok(())
    }

    /// Remove a transaction by id. Returns false when the id is unknown;
    /// removal is an idempotent no-op in that case.
    pub fn remove(&self, id: TransactionId) -> Result<bool, PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        let before = data.len();
        data.retain(|t| t.id != id);
        Ok(data.len() != before)
    }

    /// Get a transaction by id
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Snapshot of the full log, newest first
    pub fn all(&self) -> Result<Vec<Transaction>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.clone())
    }

    /// Number of stored transactions
    pub fn count(&self) -> Result<usize, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.len())
    }

    /// Re-point transactions from one account to another (used when the
    /// referenced account is deleted). Returns how many were touched.
    pub fn reassign_account(
        &self,
        from: AccountId,
        to: AccountId,
    ) -> Result<usize, PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        let mut touched = 0;
        for t in data.iter_mut() {
            if t.account_id == Some(from) {
                t.account_id = Some(to);
                touched += 1;
            }
        }
        Ok(touched)
    }

    /// Replace the entire log (backup import)
    pub fn replace_all(&self, transactions: Vec<Transaction>) -> Result<(), PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        *data = transactions;
        Ok(())
    }
}
