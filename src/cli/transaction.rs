//! Transaction CLI commands

use chrono::{Datelike, Utc};
use clap::Subcommand;

use crate::error::{PocketError, PocketResult};
use crate::models::{Money, TransactionType};
use crate::services::{LedgerService, TransactionInput};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// Amount, e.g. "50" or "10.50"
        amount: String,
        /// Transaction type (income, expense, saving, credit, debt-in, debt-out)
        #[arg(short = 't', long = "type", default_value = "expense")]
        transaction_type: String,
        /// Category label
        #[arg(short, long, default_value = "General")]
        category: String,
        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
        /// Account name; defaults to the default account
        #[arg(short, long)]
        account: Option<String>,
        /// Saving goal name (saving transactions only)
        #[arg(short, long)]
        goal: Option<String>,
        /// Payment reminder date, YYYY-MM-DD (debt-out only)
        #[arg(long)]
        remind_on: Option<String>,
    },
    /// List transactions for a month (default: current month)
    List {
        /// Month to show, YYYY-MM
        #[arg(short, long)]
        month: Option<String>,
        /// Maximum number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Delete a transaction by id
    Delete {
        /// Transaction id
        id: String,
    },
}

/// Parse a user-facing transaction type name or wire tag
fn parse_type(s: &str) -> Option<TransactionType> {
    match s.to_lowercase().as_str() {
        "income" => Some(TransactionType::Income),
        "expense" => Some(TransactionType::Expense),
        "saving" => Some(TransactionType::Saving),
        "credit" => Some(TransactionType::CreditSpend),
        "debt-in" => Some(TransactionType::DebtOwedToMe),
        "debt-out" => Some(TransactionType::DebtOwedByMe),
        _ => TransactionType::parse_tag(s),
    }
}

/// Parse "YYYY-MM" into (year, month); defaults to the current month
pub fn parse_month(s: Option<&str>) -> PocketResult<(i32, u32)> {
    match s {
        None => {
            let now = Utc::now();
            Ok((now.year(), now.month()))
        }
        Some(s) => {
            let date = chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
                .map_err(|_| {
                    PocketError::Validation(format!("Invalid month '{}', expected YYYY-MM", s))
                })?;
            Ok((date.year(), date.month()))
        }
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    premium: bool,
    cmd: TransactionCommands,
) -> PocketResult<()> {
    let service = LedgerService::new(storage, premium);

    match cmd {
        TransactionCommands::Add {
            amount,
            transaction_type,
            category,
            description,
            account,
            goal,
            remind_on,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                PocketError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;
            let transaction_type = parse_type(&transaction_type).ok_or_else(|| {
                PocketError::Validation(format!(
                    "Invalid type: '{}'. Valid types: income, expense, saving, credit, debt-in, debt-out",
                    transaction_type
                ))
            })?;

            let mut input = TransactionInput::new(amount, transaction_type, category);
            input.description = description.unwrap_or_default();

            if let Some(name) = account {
                let account = storage
                    .accounts
                    .find_by_name(&name)?
                    .ok_or_else(|| PocketError::account_not_found(&name))?;
                input.account_id = Some(account.id);
            }
            if let Some(name) = goal {
                let goal = storage
                    .goals
                    .find_by_name(&name)?
                    .ok_or_else(|| PocketError::goal_not_found(&name))?;
                input.goal_id = Some(goal.id);
            }
            if let Some(date) = remind_on {
                input.reminder_date = Some(date.parse().map_err(|_| {
                    PocketError::Validation(format!(
                        "Invalid date '{}', expected YYYY-MM-DD",
                        date
                    ))
                })?);
            }

            let outcome = service.add_transaction(input)?;
            let txn = &outcome.transaction;
            println!("Recorded {}: {} ({})", txn.transaction_type, txn.amount, txn.category);
            println!("  ID: {}", txn.id);
            if let Some(goal) = outcome.completed_goal {
                println!("🎉 Goal reached: {}", goal.name);
            }
        }

        TransactionCommands::List { month, limit } => {
            let (year, month) = parse_month(month.as_deref())?;
            let mut transactions = service.month_transactions(year, month)?;
            transactions.truncate(limit);

            if transactions.is_empty() {
                println!("No transactions for {}-{:02}", year, month);
                return Ok(());
            }
            for txn in &transactions {
                println!(
                    "{}  {:<10} {:>12}  {:<16} {}",
                    txn.date.format("%Y-%m-%d"),
                    txn.id.to_string(),
                    txn.signed_amount().to_string(),
                    txn.category,
                    txn.description
                );
            }
        }

        TransactionCommands::Delete { id } => {
            let id = id
                .parse()
                .map_err(|_| PocketError::transaction_not_found(&id))?;
            match service.delete_transaction(id)? {
                Some(txn) => println!("Deleted {}: {} ({})", txn.transaction_type, txn.amount, txn.category),
                None => println!("Nothing to delete; transaction is already gone"),
            }
        }
    }

    Ok(())
}
