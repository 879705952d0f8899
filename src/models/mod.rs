//! Core data models for My Pocket
//!
//! All entities are created through explicit user or assistant actions and
//! destroyed only by explicit deletes. Derived values (balances, goal
//! totals, budget progress) live in the derivation service, never here.

pub mod account;
pub mod budget;
pub mod features;
pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{AccountKind, PaymentAccount};
pub use budget::{Budget, BudgetProgress};
pub use features::Features;
pub use goal::{GoalProgress, SavingGoal};
pub use ids::{AccountId, GoalId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionType};
