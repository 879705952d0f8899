//! Storage layer for My Pocket
//!
//! One JSON file per collection with atomic writes. Files are independent:
//! each mutation persists only the collections it touched, and there is no
//! cross-file transactional atomicity.

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod features;
pub mod file_io;
pub mod goals;
pub mod transactions;

pub use accounts::AccountRepository;
pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use features::FeatureRepository;
pub use file_io::{read_json_or_default, write_json_atomic};
pub use goals::GoalRepository;
pub use transactions::TransactionRepository;

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::paths::PocketPaths;
use crate::error::PocketError;

/// Map a poisoned-lock error onto the storage error variant
pub(crate) fn poisoned<E: std::fmt::Display>(e: E) -> PocketError {
    PocketError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PocketPaths,
    audit: AuditLogger,
    pub transactions: TransactionRepository,
    pub accounts: AccountRepository,
    pub budgets: BudgetRepository,
    pub goals: GoalRepository,
    pub categories: CategoryRepository,
    pub features: FeatureRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PocketPaths) -> Result<Self, PocketError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            accounts: AccountRepository::new(paths.accounts_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            goals: GoalRepository::new(paths.goals_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            features: FeatureRepository::new(paths.features_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PocketPaths {
        &self.paths
    }

    /// Access the audit log
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a create operation in the audit log
    pub fn log_create(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        detail: Option<String>,
    ) -> Result<(), PocketError> {
        self.audit
            .log(&AuditEntry::new(Operation::Create, entity_type, entity_id, detail))
    }

    /// Record a delete operation in the audit log
    pub fn log_delete(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        detail: Option<String>,
    ) -> Result<(), PocketError> {
        self.audit
            .log(&AuditEntry::new(Operation::Delete, entity_type, entity_id, detail))
    }

    /// Record a backup operation in the audit log
    pub fn log_backup(&self, operation: Operation, detail: Option<String>) -> Result<(), PocketError> {
        self.audit
            .log(&AuditEntry::new(operation, EntityType::Backup, "bundle", detail))
    }

    /// Load all collections from disk. Each collection loads independently;
    /// a missing or corrupt file falls back to its seeded default.
    pub fn load_all(&self) -> Result<(), PocketError> {
        self.transactions.load()?;
        self.accounts.load()?;
        self.budgets.load()?;
        self.goals.load()?;
        self.categories.load()?;
        self.features.load()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());

        storage.load_all().unwrap();
        // Seeded default account, everything else empty
        assert_eq!(storage.accounts.count().unwrap(), 1);
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
