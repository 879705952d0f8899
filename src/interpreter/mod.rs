//! AI command interpreter
//!
//! Turns free-text input (Arabic or English) into validated ledger
//! mutations: build a context-rich prompt, send it to the hosted model,
//! validate the untrusted reply, then apply it through the ledger service.
//! A reply that cannot be validated becomes `Command::Unknown` and nothing
//! is written.

pub mod client;
pub mod command;
pub mod prompt;

pub use client::{GeminiClient, ModelClient, DEFAULT_MODEL};
pub use command::{parse_response, Command, ParsedTransaction};
pub use prompt::{build_advice_prompt, build_parse_prompt};

use chrono::{Datelike, Utc};

use crate::error::{PocketError, PocketResult};
use crate::models::{Budget, SavingGoal};
use crate::services::derive;
use crate::services::ledger::{AddOutcome, LedgerService, TransactionInput};

/// What applying a command actually changed
#[derive(Debug, Clone)]
pub enum Applied {
    Transaction(AddOutcome),
    Budget(Budget),
    Goal(SavingGoal),
    /// `Command::Unknown`: nothing was written
    Nothing,
}

/// Interpreter facade tying the model client to the ledger
pub struct CommandInterpreter<'a> {
    client: &'a dyn ModelClient,
    ledger: &'a LedgerService<'a>,
}

impl<'a> CommandInterpreter<'a> {
    /// Create a new interpreter
    pub fn new(client: &'a dyn ModelClient, ledger: &'a LedgerService<'a>) -> Self {
        Self { client, ledger }
    }

    /// Interpret one piece of free text into a validated command.
    ///
    /// Transport failures surface as [`PocketError::AssistantUnreachable`];
    /// a reply the validator rejects comes back as `Command::Unknown`.
    pub fn interpret(&self, input: &str, goals: &[SavingGoal]) -> PocketResult<Command> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PocketError::Validation("Nothing to interpret".into()));
        }

        let categories = self.ledger.categories()?;
        let prompt = build_parse_prompt(input, &categories, goals);
        let reply = self.client.generate(&prompt)?;
        Ok(parse_response(&reply, goals))
    }

    /// Apply a validated command through the ledger. Feature flags and all
    /// regular validation still apply; the assistant gets no side door.
    pub fn apply(&self, command: &Command) -> PocketResult<Applied> {
        match command {
            Command::Transaction { parsed, .. } => {
                let mut input = TransactionInput::new(
                    parsed.amount,
                    parsed.transaction_type,
                    parsed.category.clone(),
                );
                input.description = parsed.description.clone();
                input.goal_id = parsed.goal_id;
                Ok(Applied::Transaction(self.ledger.add_transaction(input)?))
            }
            Command::Budget {
                category, limit, ..
            } => Ok(Applied::Budget(self.ledger.set_budget(category, *limit)?)),
            Command::Goal { name, target, .. } => {
                Ok(Applied::Goal(self.ledger.add_goal(name, *target, None)?))
            }
            Command::Unknown { .. } => Ok(Applied::Nothing),
        }
    }

    /// Ask the advisor for a take on the current month
    pub fn advise(&self, goals: &[SavingGoal]) -> PocketResult<String> {
        let now = Utc::now();
        let month_txns = self.ledger.month_transactions(now.year(), now.month())?;
        let summary = derive::monthly_summary(&month_txns, goals);
        self.client.generate(&build_advice_prompt(&summary))
    }
}
