//! Backup bundle export and restore
//!
//! The bundle is a single JSON document holding every collection plus the
//! feature flags, using the original export's field names (amounts are cent
//! counts here, so only bundles written by this app restore). Restore is
//! per-field: a collection
//! present in the bundle fully replaces the stored one, an absent collection
//! is left untouched, and an unparsable bundle changes nothing at all.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::audit::Operation;
use crate::error::{PocketError, PocketResult};
use crate::models::{Budget, Features, PaymentAccount, SavingGoal, Transaction};
use crate::storage::Storage;

/// Bundle schema version written on export
pub const BUNDLE_VERSION: u32 = 3;

/// The full-backup document
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PocketBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<PaymentAccount>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub budgets: Option<Vec<Budget>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub saving_goals: Option<Vec<SavingGoal>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_categories: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Features>,

    #[serde(default)]
    pub version: u32,

    pub timestamp: DateTime<Utc>,
}

/// Which collections a restore replaced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestoreResult {
    pub transactions: bool,
    pub accounts: bool,
    pub budgets: bool,
    pub saving_goals: bool,
    pub custom_categories: bool,
    pub features: bool,
}

impl RestoreResult {
    /// One-line summary for the CLI
    pub fn summary(&self) -> String {
        let mut restored = Vec::new();
        if self.transactions {
            restored.push("transactions");
        }
        if self.accounts {
            restored.push("accounts");
        }
        if self.budgets {
            restored.push("budgets");
        }
        if self.saving_goals {
            restored.push("goals");
        }
        if self.custom_categories {
            restored.push("categories");
        }
        if self.features {
            restored.push("features");
        }
        if restored.is_empty() {
            "Nothing to restore".to_string()
        } else {
            format!("Restored: {}", restored.join(", "))
        }
    }
}

/// Snapshot the whole store into a bundle
pub fn create_bundle(storage: &Storage) -> PocketResult<PocketBundle> {
    Ok(PocketBundle {
        transactions: Some(storage.transactions.all()?),
        accounts: Some(storage.accounts.all()?),
        budgets: Some(storage.budgets.all()?),
        saving_goals: Some(storage.goals.all()?),
        custom_categories: Some(storage.categories.all()?),
        features: Some(storage.features.get()?),
        version: BUNDLE_VERSION,
        timestamp: Utc::now(),
    })
}

/// Export the store to a bundle file. Exporting is a premium feature.
pub fn export(storage: &Storage, path: &Path, premium: bool) -> PocketResult<()> {
    if !premium {
        return Err(PocketError::Upgrade(
            "Exporting backups requires a premium plan".into(),
        ));
    }

    let bundle = create_bundle(storage)?;
    let json = serde_json::to_string_pretty(&bundle)
        .map_err(|e| PocketError::Export(format!("Failed to serialize bundle: {}", e)))?;
    fs::write(path, json)
        .map_err(|e| PocketError::Export(format!("Failed to write bundle: {}", e)))?;

    storage.log_backup(Operation::Export, Some(path.display().to_string()))?;
    Ok(())
}

/// Restore from a bundle file.
///
/// The bundle is parsed and validated in full before anything is written,
/// so a malformed file leaves the store exactly as it was.
pub fn import(storage: &Storage, path: &Path) -> PocketResult<RestoreResult> {
    let contents = fs::read_to_string(path)
        .map_err(|e| PocketError::Import(format!("Failed to read bundle: {}", e)))?;

    let bundle: PocketBundle = serde_json::from_str(&contents)
        .map_err(|e| PocketError::Import(format!("Failed to parse bundle: {}", e)))?;

    restore(storage, bundle)
}

/// Apply a parsed bundle: each present collection fully replaces the stored
/// one and is persisted immediately.
pub fn restore(storage: &Storage, bundle: PocketBundle) -> PocketResult<RestoreResult> {
    let mut result = RestoreResult::default();

    if let Some(transactions) = bundle.transactions {
        storage.transactions.replace_all(transactions)?;
        storage.transactions.save()?;
        result.transactions = true;
    }
    if let Some(accounts) = bundle.accounts {
        storage.accounts.replace_all(accounts)?;
        storage.accounts.save()?;
        result.accounts = true;
    }
    if let Some(budgets) = bundle.budgets {
        storage.budgets.replace_all(budgets)?;
        storage.budgets.save()?;
        result.budgets = true;
    }
    if let Some(goals) = bundle.saving_goals {
        storage.goals.replace_all(goals)?;
        storage.goals.save()?;
        result.saving_goals = true;
    }
    if let Some(categories) = bundle.custom_categories {
        storage.categories.replace_all(categories)?;
        storage.categories.save()?;
        result.custom_categories = true;
    }
    if let Some(features) = bundle.features {
        storage.features.set(features)?;
        storage.features.save()?;
        result.features = true;
    }

    storage.log_backup(Operation::Import, Some(result.summary()))?;
    Ok(result)
}
