//! Saving goal CLI commands

use clap::Subcommand;

use crate::error::{PocketError, PocketResult};
use crate::models::Money;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a saving goal
    Add {
        /// Goal name
        name: String,
        /// Target amount, e.g. "2000"
        target: String,
        /// Display color (hex string)
        #[arg(long)]
        color: Option<String>,
    },
    /// List goals with derived progress
    List,
}

/// Handle a goal command
pub fn handle_goal_command(storage: &Storage, premium: bool, cmd: GoalCommands) -> PocketResult<()> {
    let service = LedgerService::new(storage, premium);

    match cmd {
        GoalCommands::Add { name, target, color } => {
            let target = Money::parse(&target).map_err(|e| {
                PocketError::Validation(format!("Invalid target '{}': {}", target, e))
            })?;
            let goal = service.add_goal(&name, target, color)?;
            println!("Created goal: {} (target {})", goal.name, goal.target_amount);
        }

        GoalCommands::List => {
            let overview = service.goal_overview()?;
            if overview.is_empty() {
                println!("No saving goals");
                return Ok(());
            }
            for p in &overview {
                let status = if p.is_complete() { " ✓" } else { "" };
                println!(
                    "{:<20} {:>12} / {:>12}{}",
                    p.goal.name,
                    p.current_amount.to_string(),
                    p.goal.target_amount.to_string(),
                    status
                );
            }
        }
    }

    Ok(())
}
