//! Business logic services
//!
//! `derive` holds the pure fold from the transaction log to every derived
//! view; `ledger` orchestrates validated mutations; `reminder` evaluates
//! payment reminders.

pub mod derive;
pub mod ledger;
pub mod reminder;

pub use ledger::{AddOutcome, LedgerService, TransactionInput, FREE_ACCOUNT_LIMIT};
pub use reminder::{evaluate as evaluate_reminders, ReminderNotice, REMINDER_TAG};
