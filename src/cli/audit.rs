//! Audit log CLI commands

use clap::Subcommand;

use crate::error::PocketResult;
use crate::storage::Storage;

/// Audit log subcommands
#[derive(Subcommand)]
pub enum AuditCommands {
    /// Show the most recent audit log entries
    Show {
        /// Maximum number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an audit command
pub fn handle_audit_command(storage: &Storage, cmd: AuditCommands) -> PocketResult<()> {
    match cmd {
        AuditCommands::Show { limit } => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("Audit log is empty");
                return Ok(());
            }
            for entry in &entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
