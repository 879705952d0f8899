//! Transaction model
//!
//! A transaction is an immutable financial event: once created it can be
//! deleted but never edited in place. Its amount is a non-negative magnitude;
//! the direction of the money flow is determined entirely by the type.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, GoalId, TransactionId};
use super::money::Money;

/// The closed set of transaction kinds.
///
/// Wire tags match the original export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money received
    #[serde(rename = "INCOME")]
    Income,
    /// Money spent
    #[serde(rename = "EXPENSE")]
    Expense,
    /// Money lent out; cash leaves now
    #[serde(rename = "DEBT_IN")]
    DebtOwedToMe,
    /// Money borrowed; cash is received now
    #[serde(rename = "DEBT_OUT")]
    DebtOwedByMe,
    /// Card spending
    #[serde(rename = "CREDIT")]
    CreditSpend,
    /// Money set aside toward a saving goal
    #[serde(rename = "SAVING")]
    Saving,
}

impl TransactionType {
    /// Signed contribution of one unit of this type to an account balance.
    ///
    /// Debt is cashflow accounting, not double-entry bookkeeping: borrowing
    /// increases the balance because the cash arrives now, lending decreases
    /// it because the cash leaves now.
    pub fn balance_factor(&self) -> i64 {
        match self {
            Self::Income | Self::DebtOwedByMe => 1,
            Self::Expense | Self::DebtOwedToMe | Self::CreditSpend | Self::Saving => -1,
        }
    }

    /// Types counted as spending for budget tracking
    pub fn counts_toward_budget(&self) -> bool {
        matches!(self, Self::Expense | Self::CreditSpend)
    }

    /// Parse the wire tag used by the assistant and the export format
    pub fn parse_tag(s: &str) -> Option<Self> {
        match s {
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            "DEBT_IN" => Some(Self::DebtOwedToMe),
            "DEBT_OUT" => Some(Self::DebtOwedByMe),
            "CREDIT" => Some(Self::CreditSpend),
            "SAVING" => Some(Self::Saving),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::DebtOwedToMe => write!(f, "Debt owed to me"),
            Self::DebtOwedByMe => write!(f, "Debt owed by me"),
            Self::CreditSpend => write!(f, "Card spend"),
            Self::Saving => write!(f, "Saving"),
        }
    }
}

/// A financial event in the ledger.
///
/// Serialized in camelCase with the original field names and type tags.
/// Amounts serialize as cent counts, not the unit floats the original
/// app wrote, so its bundles are not binary-compatible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Non-negative magnitude; sign is implied by `transaction_type`
    pub amount: Money,

    /// Kind of event
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Free-text category label, user- or assistant-assigned
    pub category: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Creation timestamp, used for month bucketing and ordering
    pub date: DateTime<Utc>,

    /// Owning account; `None` means the default account
    pub account_id: Option<AccountId>,

    /// Linked saving goal, only meaningful for `Saving`
    pub goal_id: Option<GoalId>,

    /// Due date for payment reminders, only meaningful for `DebtOwedByMe`
    pub reminder_date: Option<NaiveDate>,

    /// Marks a debt as settled. Reserved: nothing flips it yet.
    #[serde(default)]
    pub is_paid: bool,
}

impl Transaction {
    /// Create a new transaction dated now
    pub fn new(amount: Money, transaction_type: TransactionType, category: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            transaction_type,
            category: category.into(),
            description: String::new(),
            date: Utc::now(),
            account_id: None,
            goal_id: None,
            reminder_date: None,
            is_paid: false,
        }
    }

    /// Signed balance contribution of this transaction
    pub fn signed_amount(&self) -> Money {
        if self.transaction_type.balance_factor() < 0 {
            -self.amount
        } else {
            self.amount
        }
    }

    /// Whether this transaction belongs to the given account, treating a
    /// missing account reference as the default account.
    pub fn belongs_to(&self, account_id: AccountId, default_account: AccountId) -> bool {
        self.account_id.unwrap_or(default_account) == account_id
    }

    /// Whether this transaction falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        use chrono::Datelike;
        self.date.year() == year && self.date.month() == month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_factor_sign_table() {
        assert_eq!(TransactionType::Income.balance_factor(), 1);
        assert_eq!(TransactionType::DebtOwedByMe.balance_factor(), 1);
        assert_eq!(TransactionType::Expense.balance_factor(), -1);
        assert_eq!(TransactionType::DebtOwedToMe.balance_factor(), -1);
        assert_eq!(TransactionType::CreditSpend.balance_factor(), -1);
        assert_eq!(TransactionType::Saving.balance_factor(), -1);
    }

    #[test]
    fn test_wire_tags() {
        let json = serde_json::to_string(&TransactionType::DebtOwedByMe).unwrap();
        assert_eq!(json, "\"DEBT_OUT\"");
        let parsed: TransactionType = serde_json::from_str("\"DEBT_IN\"").unwrap();
        assert_eq!(parsed, TransactionType::DebtOwedToMe);
        assert_eq!(TransactionType::parse_tag("SAVING"), Some(TransactionType::Saving));
        assert_eq!(TransactionType::parse_tag("TRANSFER"), None);
    }

    #[test]
    fn test_signed_amount() {
        let tx = Transaction::new(Money::from_units(100), TransactionType::Expense, "Food");
        assert_eq!(tx.signed_amount(), Money::from_units(-100));

        let tx = Transaction::new(Money::from_units(100), TransactionType::Income, "Salary");
        assert_eq!(tx.signed_amount(), Money::from_units(100));
    }

    #[test]
    fn test_belongs_to_defaults_missing_account() {
        let default_acc = AccountId::new();
        let other_acc = AccountId::new();

        let tx = Transaction::new(Money::from_units(10), TransactionType::Expense, "Food");
        assert!(tx.belongs_to(default_acc, default_acc));
        assert!(!tx.belongs_to(other_acc, default_acc));
    }

    #[test]
    fn test_in_month() {
        let mut tx = Transaction::new(Money::from_units(10), TransactionType::Expense, "Food");
        tx.date = "2024-03-15T12:00:00Z".parse().unwrap();
        assert!(tx.in_month(2024, 3));
        assert!(!tx.in_month(2024, 4));
    }

    #[test]
    fn test_serde_round_trip_keeps_optional_fields() {
        let mut tx = Transaction::new(Money::from_units(500), TransactionType::DebtOwedByMe, "Loan");
        tx.reminder_date = Some("2024-06-01".parse().unwrap());

        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back.reminder_date, tx.reminder_date);
        assert!(!back.is_paid);
    }
}
