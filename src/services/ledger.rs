//! Ledger service
//!
//! Business logic for the append-only transaction log and the entities that
//! hang off it: accounts, budgets, saving goals, and category labels. Every
//! mutation validates first, persists the touched collection, then writes an
//! audit entry.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{PocketError, PocketResult};
use crate::models::{
    AccountId, AccountKind, Budget, BudgetProgress, GoalId, GoalProgress, Money, PaymentAccount,
    SavingGoal, Transaction, TransactionId, TransactionType,
};
use crate::storage::Storage;

use super::derive;

/// Accounts allowed on the free plan
pub const FREE_ACCOUNT_LIMIT: usize = 2;

/// Default display color for goals created without one
const DEFAULT_GOAL_COLOR: &str = "#a855f7";

/// Input for appending a transaction to the log
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub amount: Money,
    pub transaction_type: TransactionType,
    pub category: String,
    pub description: String,
    pub account_id: Option<AccountId>,
    pub goal_id: Option<GoalId>,
    pub reminder_date: Option<NaiveDate>,
}

impl TransactionInput {
    /// Minimal input: amount, type, category
    pub fn new(amount: Money, transaction_type: TransactionType, category: impl Into<String>) -> Self {
        Self {
            amount,
            transaction_type,
            category: category.into(),
            description: String::new(),
            account_id: None,
            goal_id: None,
            reminder_date: None,
        }
    }
}

/// Result of appending a transaction.
///
/// `completed_goal` is set only when this append pushed a saving goal across
/// its target for the first time; callers surface the celebration exactly
/// once per crossing.
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub transaction: Transaction,
    pub completed_goal: Option<SavingGoal>,
}

/// Service for ledger mutations and derived views
pub struct LedgerService<'a> {
    storage: &'a Storage,
    premium: bool,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage, premium: bool) -> Self {
        Self { storage, premium }
    }

    /// Append a transaction to the log.
    ///
    /// The goal-completion edge is evaluated against the log as it stood
    /// before the append, so only the transaction that crosses the target
    /// reports a completed goal.
    pub fn add_transaction(&self, input: TransactionInput) -> PocketResult<AddOutcome> {
        if input.amount.cents() <= 0 {
            return Err(PocketError::Validation("Amount must be positive".into()));
        }
        let category = input.category.trim().to_string();
        if category.is_empty() {
            return Err(PocketError::Validation("Category is required".into()));
        }

        let features = self.storage.features.get()?;
        match input.transaction_type {
            TransactionType::DebtOwedToMe if !features.debts_in => {
                return Err(PocketError::Validation(
                    "Debts owed to me are disabled in settings".into(),
                ));
            }
            TransactionType::DebtOwedByMe if !features.debts_out => {
                return Err(PocketError::Validation(
                    "Debts owed by me are disabled in settings".into(),
                ));
            }
            _ => {}
        }

        if let Some(account_id) = input.account_id {
            self.storage
                .accounts
                .get(account_id)?
                .ok_or_else(|| PocketError::account_not_found(account_id.to_string()))?;
        }

        if input.reminder_date.is_some()
            && input.transaction_type != TransactionType::DebtOwedByMe
        {
            return Err(PocketError::Validation(
                "Reminders only apply to debts owed by me".into(),
            ));
        }

        let mut completed_goal = None;
        if let Some(goal_id) = input.goal_id {
            if input.transaction_type != TransactionType::Saving {
                return Err(PocketError::Validation(
                    "Only saving transactions can reference a goal".into(),
                ));
            }
            let goal = self
                .storage
                .goals
                .get(goal_id)?
                .ok_or_else(|| PocketError::goal_not_found(goal_id.to_string()))?;

            // Evaluated before the append: level-triggered reads never fire
            let saved = derive::goal_saved_total(&self.storage.transactions.all()?, goal_id);
            if derive::crosses_target(saved, goal.target_amount, input.amount) {
                completed_goal = Some(goal);
            }
        }

        let mut txn = Transaction::new(input.amount, input.transaction_type, category);
        txn.description = input.description.trim().to_string();
        txn.account_id = input.account_id;
        txn.goal_id = input.goal_id;
        txn.reminder_date = input.reminder_date;

        self.storage.transactions.insert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {} ({})", txn.transaction_type, txn.amount, txn.category)),
        )?;

        Ok(AddOutcome {
            transaction: txn,
            completed_goal,
        })
    }

    /// Delete a transaction. Unknown ids are an idempotent no-op and return
    /// `None`; derived balances and goal totals shrink on the next read.
    pub fn delete_transaction(&self, id: TransactionId) -> PocketResult<Option<Transaction>> {
        let Some(txn) = self.storage.transactions.get(id)? else {
            return Ok(None);
        };

        self.storage.transactions.remove(id)?;
        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            id.to_string(),
            Some(format!("{} {} ({})", txn.transaction_type, txn.amount, txn.category)),
        )?;

        Ok(Some(txn))
    }

    /// Create a payment account. The free plan is capped at
    /// [`FREE_ACCOUNT_LIMIT`] accounts.
    pub fn add_account(&self, name: &str, kind: AccountKind) -> PocketResult<PaymentAccount> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PocketError::Validation("Account name is required".into()));
        }
        if self.storage.accounts.find_by_name(name)?.is_some() {
            return Err(PocketError::Validation(format!(
                "An account named '{}' already exists",
                name
            )));
        }
        if !self.premium && self.storage.accounts.count()? >= FREE_ACCOUNT_LIMIT {
            return Err(PocketError::Upgrade(format!(
                "The free plan allows up to {} accounts",
                FREE_ACCOUNT_LIMIT
            )));
        }

        let account = PaymentAccount::new(name, kind);
        self.storage.accounts.insert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_create(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
        )?;

        Ok(account)
    }

    /// Delete a payment account. The default account cannot be deleted;
    /// transactions referencing the deleted account are re-pointed at the
    /// default so no balance history is orphaned.
    pub fn delete_account(&self, id: AccountId) -> PocketResult<PaymentAccount> {
        let account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| PocketError::account_not_found(id.to_string()))?;

        if account.is_default {
            return Err(PocketError::Validation(
                "The default account cannot be deleted".into(),
            ));
        }

        let default = self
            .storage
            .accounts
            .default_account()?
            .ok_or_else(|| PocketError::Storage("No default account present".into()))?;

        let touched = self.storage.transactions.reassign_account(id, default.id)?;
        self.storage.accounts.remove(id)?;

        self.storage.accounts.save()?;
        if touched > 0 {
            self.storage.transactions.save()?;
        }

        self.storage.log_delete(
            EntityType::Account,
            id.to_string(),
            Some(format!("{} ({} transactions reassigned)", account.name, touched)),
        )?;

        Ok(account)
    }

    /// Set a monthly spending ceiling for a category. The category is the
    /// natural key; setting it again replaces the prior limit.
    pub fn set_budget(&self, category: &str, limit: Money) -> PocketResult<Budget> {
        if !self.storage.features.get()?.budgets {
            return Err(PocketError::Validation(
                "Budgets are disabled in settings".into(),
            ));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(PocketError::Validation("Category is required".into()));
        }
        if limit.cents() <= 0 {
            return Err(PocketError::Validation("Budget limit must be positive".into()));
        }

        self.storage.budgets.upsert(category, limit)?;
        self.storage.budgets.save()?;

        self.storage.log_create(
            EntityType::Budget,
            category,
            Some(format!("limit {}", limit)),
        )?;

        Ok(Budget::new(category, limit))
    }

    /// Remove a budget by category. Returns false when no budget existed.
    pub fn remove_budget(&self, category: &str) -> PocketResult<bool> {
        let removed = self.storage.budgets.remove(category)?;
        if removed {
            self.storage.budgets.save()?;
            self.storage.log_delete(EntityType::Budget, category, None)?;
        }
        Ok(removed)
    }

    /// Create a saving goal
    pub fn add_goal(
        &self,
        name: &str,
        target_amount: Money,
        color: Option<String>,
    ) -> PocketResult<SavingGoal> {
        if !self.storage.features.get()?.goals {
            return Err(PocketError::Validation(
                "Saving goals are disabled in settings".into(),
            ));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(PocketError::Validation("Goal name is required".into()));
        }
        if target_amount.cents() <= 0 {
            return Err(PocketError::Validation("Target amount must be positive".into()));
        }
        if self.storage.goals.find_by_name(name)?.is_some() {
            return Err(PocketError::Validation(format!(
                "A goal named '{}' already exists",
                name
            )));
        }

        let goal = SavingGoal::new(
            name,
            target_amount,
            color.unwrap_or_else(|| DEFAULT_GOAL_COLOR.to_string()),
        );
        self.storage.goals.insert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(format!("{} target {}", goal.name, goal.target_amount)),
        )?;

        Ok(goal)
    }

    /// Add a user category label. Returns false on duplicates.
    pub fn add_category(&self, category: &str) -> PocketResult<bool> {
        let category = category.trim();
        if category.is_empty() {
            return Err(PocketError::Validation("Category name is required".into()));
        }
        let added = self.storage.categories.add(category)?;
        if added {
            self.storage.categories.save()?;
            self.storage.log_create(EntityType::Category, category, None)?;
        }
        Ok(added)
    }

    /// Remove a user category label
    pub fn remove_category(&self, category: &str) -> PocketResult<bool> {
        let removed = self.storage.categories.remove(category)?;
        if removed {
            self.storage.categories.save()?;
            self.storage.log_delete(EntityType::Category, category, None)?;
        }
        Ok(removed)
    }

    /// Every account with its derived balance, default first, plus the total
    pub fn balances(&self) -> PocketResult<(Vec<(PaymentAccount, Money)>, Money)> {
        let transactions = self.storage.transactions.all()?;
        let mut accounts = self.storage.accounts.all()?;
        accounts.sort_by_key(|a| !a.is_default);

        let Some(default) = self.storage.accounts.default_account()? else {
            return Ok((Vec::new(), Money::zero()));
        };

        let per_account: Vec<(PaymentAccount, Money)> = accounts
            .iter()
            .map(|a| {
                let balance = derive::account_balance(&transactions, a.id, default.id);
                (a.clone(), balance)
            })
            .collect();
        let total = derive::total_balance(&transactions, &accounts);

        Ok((per_account, total))
    }

    /// Transactions in the given month, newest first
    pub fn month_transactions(&self, year: i32, month: u32) -> PocketResult<Vec<Transaction>> {
        Ok(derive::month_filter(
            &self.storage.transactions.all()?,
            year,
            month,
        ))
    }

    /// Budget progress for the given month, most at-risk first
    pub fn budget_overview(&self, year: i32, month: u32) -> PocketResult<Vec<BudgetProgress>> {
        let month_txns = self.month_transactions(year, month)?;
        Ok(derive::budget_progress(&self.storage.budgets.all()?, &month_txns))
    }

    /// Every goal with its derived saved-so-far total
    pub fn goal_overview(&self) -> PocketResult<Vec<GoalProgress>> {
        Ok(derive::goal_progress(
            &self.storage.goals.all()?,
            &self.storage.transactions.all()?,
        ))
    }

    /// Union of known category labels
    pub fn categories(&self) -> PocketResult<Vec<String>> {
        Ok(derive::unique_categories(
            &self.storage.transactions.all()?,
            &self.storage.categories.all()?,
        ))
    }
}
