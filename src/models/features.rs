//! Feature flag set
//!
//! Users can hide whole areas of the app (budgets, goals, the two debt
//! directions). The interpreter consults these flags before applying
//! assistant commands.

use serde::{Deserialize, Serialize};

/// Togglable application features, all enabled by default.
///
/// Serialized in camelCase to match the original export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default = "on")]
    pub budgets: bool,
    #[serde(default = "on")]
    pub goals: bool,
    #[serde(default = "on")]
    pub debts_in: bool,
    #[serde(default = "on")]
    pub debts_out: bool,
}

fn on() -> bool {
    true
}

impl Default for Features {
    fn default() -> Self {
        Self {
            budgets: true,
            goals: true,
            debts_in: true,
            debts_out: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_all_on() {
        let f = Features::default();
        assert!(f.budgets && f.goals && f.debts_in && f.debts_out);
    }

    #[test]
    fn test_missing_fields_default_on() {
        let f: Features = serde_json::from_str(r#"{"budgets": false}"#).unwrap();
        assert!(!f.budgets);
        assert!(f.goals);
    }
}
