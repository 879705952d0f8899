//! Category CLI commands

use clap::Subcommand;

use crate::error::PocketResult;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a custom category label
    Add {
        /// Category label
        name: String,
    },
    /// List all known categories (history, defaults, and custom)
    List,
    /// Remove a custom category label
    Remove {
        /// Category label
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    premium: bool,
    cmd: CategoryCommands,
) -> PocketResult<()> {
    let service = LedgerService::new(storage, premium);

    match cmd {
        CategoryCommands::Add { name } => {
            if service.add_category(&name)? {
                println!("Added category: {}", name);
            } else {
                println!("Category already exists: {}", name);
            }
        }

        CategoryCommands::List => {
            for category in service.categories()? {
                println!("{}", category);
            }
        }

        CategoryCommands::Remove { name } => {
            if service.remove_category(&name)? {
                println!("Removed category: {}", name);
            } else {
                println!("No custom category named: {}", name);
            }
        }
    }

    Ok(())
}
