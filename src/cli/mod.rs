//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod account;
pub mod assistant;
pub mod audit;
pub mod backup;
pub mod budget;
pub mod category;
pub mod goal;
pub mod remind;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use assistant::{handle_advise_command, handle_say_command};
pub use audit::{handle_audit_command, AuditCommands};
pub use backup::{handle_export_command, handle_import_command};
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use remind::handle_remind_command;
pub use transaction::{handle_transaction_command, TransactionCommands};
