//! Payment account repository for JSON storage
//!
//! On first run (or when accounts.json is missing/corrupt) a single default
//! CASH account is seeded so the ledger always has somewhere to point.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketError;
use crate::models::{AccountId, PaymentAccount};

use super::file_io::{read_json_or_default, write_json_atomic};
use super::poisoned;

/// Repository for payment account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<Vec<PaymentAccount>>,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load accounts from disk, seeding the default Cash account when the
    /// file is missing, corrupt, or empty.
    pub fn load(&self) -> Result<(), PocketError> {
        let mut loaded: Vec<PaymentAccount> = read_json_or_default(&self.path);
        if loaded.is_empty() {
            loaded.push(PaymentAccount::seeded_default());
        }
        let mut data = self.data.write().map_err(poisoned)?;
        *data = loaded;
        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        write_json_atomic(&self.path, &*data)
    }

    /// Append an account
    pub fn insert(&self, account: PaymentAccount) -> Result<(), PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.push(account);
        Ok(())
    }

    /// Remove an account by id, returning it when found
    pub fn remove(&self, id: AccountId) -> Result<Option<PaymentAccount>, PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        let pos = data.iter().position(|a| a.id == id);
        Ok(pos.map(|i| data.remove(i)))
    }

    /// Get an account by id
    pub fn get(&self, id: AccountId) -> Result<Option<PaymentAccount>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.iter().find(|a| a.id == id).cloned())
    }

    /// Find an account by name (exact match)
    pub fn find_by_name(&self, name: &str) -> Result<Option<PaymentAccount>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.iter().find(|a| a.name == name).cloned())
    }

    /// The account flagged as default.
    ///
    /// Deleting accounts can in principle leave the flag unset; callers fall
    /// back to the first account in that case.
    pub fn default_account(&self) -> Result<Option<PaymentAccount>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data
            .iter()
            .find(|a| a.is_default)
            .or_else(|| data.first())
            .cloned())
    }

    /// Snapshot of all accounts
    pub fn all(&self) -> Result<Vec<PaymentAccount>, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.clone())
    }

    /// Number of accounts
    pub fn count(&self) -> Result<usize, PocketError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.len())
    }

    /// Replace the collection (backup import)
    pub fn replace_all(&self, accounts: Vec<PaymentAccount>) -> Result<(), PocketError> {
        let mut data = self.data.write().map_err(poisoned)?;
        *data = accounts;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountKind;
    use tempfile::TempDir;

    fn repo() -> (AccountRepository, TempDir) {
        let temp = TempDir::new().unwrap();
        let repo = AccountRepository::new(temp.path().join("accounts.json"));
        (repo, temp)
    }

    #[test]
    fn test_load_seeds_default_cash_account() {
        let (repo, _temp) = repo();
        repo.load().unwrap();

        let all = repo.all().unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_default);
        assert_eq!(all[0].kind, AccountKind::Cash);
    }

    #[test]
    fn test_load_corrupt_file_seeds_default() {
        let (repo, temp) = repo();
        std::fs::write(temp.path().join("accounts.json"), "][").unwrap();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_default_account_falls_back_to_first() {
        let (repo, _temp) = repo();
        repo.insert(PaymentAccount::new("Bank", AccountKind::Bank))
            .unwrap();
        repo.insert(PaymentAccount::new("Wallet", AccountKind::Wallet))
            .unwrap();

        // Nothing flagged; first account wins
        let fallback = repo.default_account().unwrap().unwrap();
        assert_eq!(fallback.name, "Bank");
    }

    #[test]
    fn test_remove_returns_account() {
        let (repo, _temp) = repo();
        let acc = PaymentAccount::new("Bank", AccountKind::Bank);
        let id = acc.id;
        repo.insert(acc).unwrap();

        assert!(repo.remove(id).unwrap().is_some());
        assert!(repo.remove(id).unwrap().is_none());
    }
}
