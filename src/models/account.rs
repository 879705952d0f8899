//! Payment account model
//!
//! A payment account is a named money container (cash, bank, wallet).
//! Balances are never stored on the account; they are derived from the
//! transaction log.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;

/// Kind of payment account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    #[serde(rename = "CASH")]
    Cash,
    #[serde(rename = "BANK")]
    Bank,
    #[serde(rename = "WALLET")]
    Wallet,
}

impl AccountKind {
    /// Parse an account kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "bank" => Some(Self::Bank),
            "wallet" => Some(Self::Wallet),
            _ => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Bank => write!(f, "Bank"),
            Self::Wallet => write!(f, "Wallet"),
        }
    }
}

/// A named money container
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccount {
    /// Unique identifier
    pub id: AccountId,

    /// Display name
    pub name: String,

    /// Kind of account
    #[serde(rename = "type")]
    pub kind: AccountKind,

    /// Exactly one account should carry this flag; transactions without an
    /// explicit account reference fall back to it.
    #[serde(default)]
    pub is_default: bool,
}

impl PaymentAccount {
    /// Create a new non-default account
    pub fn new(name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            kind,
            is_default: false,
        }
    }

    /// The seeded first-run account: a single default CASH account
    pub fn seeded_default() -> Self {
        Self {
            id: AccountId::new(),
            name: "Cash".to_string(),
            kind: AccountKind::Cash,
            is_default: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(AccountKind::parse("cash"), Some(AccountKind::Cash));
        assert_eq!(AccountKind::parse("Bank"), Some(AccountKind::Bank));
        assert_eq!(AccountKind::parse("crypto"), None);
    }

    #[test]
    fn test_seeded_default() {
        let acc = PaymentAccount::seeded_default();
        assert!(acc.is_default);
        assert_eq!(acc.kind, AccountKind::Cash);
        assert_eq!(acc.name, "Cash");
    }

    #[test]
    fn test_wire_tags() {
        let json = serde_json::to_string(&AccountKind::Wallet).unwrap();
        assert_eq!(json, "\"WALLET\"");
    }
}
