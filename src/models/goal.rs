//! Saving goal model
//!
//! A saving goal is a named target. The amount saved toward it is never
//! stored: it is recomputed on every read as the sum of SAVING transactions
//! referencing the goal, so the log and the total cannot drift apart.

use serde::{Deserialize, Serialize};

use super::ids::GoalId;
use super::money::Money;

/// A named saving target
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingGoal {
    /// Unique identifier
    pub id: GoalId,

    /// Display name, also what the assistant matches free text against
    pub name: String,

    /// Target amount to reach
    pub target_amount: Money,

    /// Display color (hex string)
    pub color: String,

    /// Optional display icon
    pub icon: Option<String>,
}

impl SavingGoal {
    /// Create a new goal
    pub fn new(name: impl Into<String>, target_amount: Money, color: impl Into<String>) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            color: color.into(),
            icon: None,
        }
    }
}

/// A goal together with its derived saved-so-far total
#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub goal: SavingGoal,
    /// Sum of SAVING transactions referencing this goal
    pub current_amount: Money,
}

impl GoalProgress {
    /// Whether the accumulated total has reached the target
    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.goal.target_amount
    }
}
