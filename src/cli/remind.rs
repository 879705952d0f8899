//! Reminder CLI command

use chrono::Utc;

use crate::config::Settings;
use crate::error::PocketResult;
use crate::services::{evaluate_reminders, REMINDER_TAG};
use crate::storage::Storage;

/// Evaluate payment reminders for today and print the batched notice
pub fn handle_remind_command(storage: &Storage, settings: &Settings) -> PocketResult<()> {
    let transactions = storage.transactions.all()?;
    let today = Utc::now().date_naive();

    match evaluate_reminders(&transactions, today, settings.language) {
        Some(notice) => {
            println!("[{}] {}", REMINDER_TAG, notice.title);
            println!("{}", notice.body);
        }
        None => println!("No payments due"),
    }

    Ok(())
}
