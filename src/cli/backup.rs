//! Backup CLI commands

use std::path::Path;

use crate::backup;
use crate::error::PocketResult;
use crate::storage::Storage;

/// Export the store to a bundle file
pub fn handle_export_command(storage: &Storage, premium: bool, file: &str) -> PocketResult<()> {
    backup::export(storage, Path::new(file), premium)?;
    println!("Exported backup to {}", file);
    Ok(())
}

/// Restore the store from a bundle file
pub fn handle_import_command(storage: &Storage, file: &str) -> PocketResult<()> {
    let result = backup::import(storage, Path::new(file))?;
    println!("{}", result.summary());
    Ok(())
}
