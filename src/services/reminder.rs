//! Reminder evaluator
//!
//! Scans the log for debts owed by the user whose reminder date has arrived
//! and folds them into a single batched notice. The evaluator is pure: it
//! never mutates the log, so the same due set produces the same notice until
//! a debt is deleted or settled.

use chrono::NaiveDate;

use crate::config::Language;
use crate::models::{Transaction, TransactionType};

/// Stable tag identifying payment-reminder notices, so re-evaluation
/// replaces the prior notice instead of stacking a new one.
pub const REMINDER_TAG: &str = "payment-reminder";

/// A batched payment reminder covering every due debt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderNotice {
    /// Number of due, unpaid debts
    pub count: usize,
    pub title: String,
    pub body: String,
}

/// Debts owed by the user that are due on or before `today` and not yet
/// settled. Debts without a reminder date never become due.
pub fn due_debts(transactions: &[Transaction], today: NaiveDate) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| {
            t.transaction_type == TransactionType::DebtOwedByMe
                && !t.is_paid
                && t.reminder_date.is_some_and(|d| d <= today)
        })
        .collect()
}

/// Evaluate the reminder state for `today`. Returns `None` when nothing is
/// due; otherwise one notice covering all due debts.
pub fn evaluate(
    transactions: &[Transaction],
    today: NaiveDate,
    language: Language,
) -> Option<ReminderNotice> {
    let due = due_debts(transactions, today);
    if due.is_empty() {
        return None;
    }

    let count = due.len();
    let (title, body) = match language {
        Language::Ar => (
            "تذكير بالدفع".to_string(),
            format!("لديك {} من الديون المستحقة للسداد", count),
        ),
        Language::En => (
            "Payment reminder".to_string(),
            if count == 1 {
                "You have 1 debt due for payment".to_string()
            } else {
                format!("You have {} debts due for payment", count)
            },
        ),
    };

    Some(ReminderNotice { count, title, body })
}
