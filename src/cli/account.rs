//! Account CLI commands

use clap::Subcommand;

use crate::error::{PocketError, PocketResult};
use crate::models::AccountKind;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new payment account
    Add {
        /// Account name
        name: String,
        /// Account kind (cash, bank, wallet)
        #[arg(short, long, default_value = "cash")]
        kind: String,
    },
    /// List all accounts with their derived balances
    List,
    /// Delete an account; its transactions move to the default account
    Delete {
        /// Account name
        name: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    premium: bool,
    cmd: AccountCommands,
) -> PocketResult<()> {
    let service = LedgerService::new(storage, premium);

    match cmd {
        AccountCommands::Add { name, kind } => {
            let kind = AccountKind::parse(&kind).ok_or_else(|| {
                PocketError::Validation(format!(
                    "Invalid account kind: '{}'. Valid kinds: cash, bank, wallet",
                    kind
                ))
            })?;

            let account = service.add_account(&name, kind)?;
            println!("Created account: {}", account.name);
            println!("  Kind: {}", account.kind);
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let (per_account, total) = service.balances()?;
            for (account, balance) in &per_account {
                let marker = if account.is_default { " (default)" } else { "" };
                println!("{:<20} {:>12}  {}{}", account.name, balance.to_string(), account.kind, marker);
            }
            println!("{:<20} {:>12}", "Total", total.to_string());
        }

        AccountCommands::Delete { name } => {
            let account = storage
                .accounts
                .find_by_name(&name)?
                .ok_or_else(|| PocketError::account_not_found(&name))?;

            let deleted = service.delete_account(account.id)?;
            println!("Deleted account: {}", deleted.name);
        }
    }

    Ok(())
}
