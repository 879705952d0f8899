//! Budget CLI commands

use clap::Subcommand;

use crate::error::{PocketError, PocketResult};
use crate::models::Money;
use crate::services::LedgerService;
use crate::storage::Storage;

use super::transaction::parse_month;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a monthly spending ceiling for a category
    Set {
        /// Category label
        category: String,
        /// Monthly limit, e.g. "1500"
        limit: String,
    },
    /// Show budget progress for a month (default: current month)
    List {
        /// Month to show, YYYY-MM
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Remove the budget for a category
    Remove {
        /// Category label
        category: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    premium: bool,
    cmd: BudgetCommands,
) -> PocketResult<()> {
    let service = LedgerService::new(storage, premium);

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let limit = Money::parse(&limit).map_err(|e| {
                PocketError::Validation(format!("Invalid limit '{}': {}", limit, e))
            })?;
            let budget = service.set_budget(&category, limit)?;
            println!("Budget set for {}: {}", budget.category, budget.limit);
        }

        BudgetCommands::List { month } => {
            let (year, month) = parse_month(month.as_deref())?;
            let progress = service.budget_overview(year, month)?;

            if progress.is_empty() {
                println!("No budgets set");
                return Ok(());
            }
            for p in &progress {
                let flag = if p.is_over() { " OVER" } else { "" };
                println!(
                    "{:<16} {:>12} / {:>12}  {:>5.1}%{}",
                    p.category,
                    p.spent.to_string(),
                    p.limit.to_string(),
                    p.percentage,
                    flag
                );
            }
        }

        BudgetCommands::Remove { category } => {
            if service.remove_budget(&category)? {
                println!("Removed budget for {}", category);
            } else {
                println!("No budget set for {}", category);
            }
        }
    }

    Ok(())
}
