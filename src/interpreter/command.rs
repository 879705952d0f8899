//! Assistant command parsing
//!
//! The model's reply is untrusted input: every field is validated before it
//! can reach the ledger. Anything the validator cannot vouch for collapses
//! to `Command::Unknown` with the model's message preserved, so a confused
//! reply never mutates the store.

use serde_json::Value;

use crate::models::{GoalId, Money, SavingGoal, TransactionType};

/// A transaction the assistant asked to record
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTransaction {
    pub amount: Money,
    pub transaction_type: TransactionType,
    pub category: String,
    pub description: String,
    /// Only ever set when it resolves to an existing goal
    pub goal_id: Option<GoalId>,
}

/// A validated assistant command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Transaction {
        parsed: ParsedTransaction,
        message: String,
    },
    Budget {
        category: String,
        limit: Money,
        message: String,
    },
    Goal {
        name: String,
        target: Money,
        message: String,
    },
    /// The model's reply could not be validated into an actionable command
    Unknown { message: String },
}

impl Command {
    /// The human-readable feedback carried by every variant
    pub fn message(&self) -> &str {
        match self {
            Command::Transaction { message, .. }
            | Command::Budget { message, .. }
            | Command::Goal { message, .. }
            | Command::Unknown { message } => message,
        }
    }
}

/// Strip markdown code fences the model sometimes wraps around JSON
fn strip_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

fn unknown(message: impl Into<String>) -> Command {
    Command::Unknown {
        message: message.into(),
    }
}

/// Pull a positive money amount out of an untrusted JSON field
fn read_amount(data: &Value, key: &str) -> Option<Money> {
    data.get(key)?
        .as_f64()
        .and_then(Money::from_assistant_number)
        .filter(|m| m.is_positive())
}

fn read_string(data: &Value, key: &str) -> Option<String> {
    data.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse and validate the raw model reply into a command.
///
/// `goals` is the set of goals that existed when the prompt was built; a
/// goal reference that does not resolve against it is dropped rather than
/// trusted.
pub fn parse_response(raw: &str, goals: &[SavingGoal]) -> Command {
    let cleaned = strip_fences(raw);

    let value: Value = match serde_json::from_str(&cleaned) {
        Ok(v) => v,
        Err(_) => return unknown("Sorry, I could not understand that"),
    };

    let message = read_string(&value, "message")
        .unwrap_or_else(|| "Done".to_string());

    let Some(action) = value.get("action").and_then(|v| v.as_str()) else {
        return unknown(message);
    };
    let data = value.get("data").cloned().unwrap_or(Value::Null);

    match action {
        "TRANSACTION" => {
            let Some(amount) = read_amount(&data, "amount") else {
                return unknown(message);
            };
            let Some(transaction_type) = data
                .get("type")
                .and_then(|v| v.as_str())
                .and_then(TransactionType::parse_tag)
            else {
                return unknown(message);
            };

            let category =
                read_string(&data, "category").unwrap_or_else(|| "General".to_string());
            let description = read_string(&data, "description").unwrap_or_default();

            // A goal link is only honored for savings and only when the id
            // resolves against the goals the prompt advertised
            let goal_id = data
                .get("goalId")
                .and_then(|v| v.as_str())
                .and_then(|s| s.parse::<GoalId>().ok())
                .filter(|id| {
                    transaction_type == TransactionType::Saving
                        && goals.iter().any(|g| g.id == *id)
                });

            Command::Transaction {
                parsed: ParsedTransaction {
                    amount,
                    transaction_type,
                    category,
                    description,
                    goal_id,
                },
                message,
            }
        }
        "BUDGET" => {
            let (Some(category), Some(limit)) =
                (read_string(&data, "category"), read_amount(&data, "amount"))
            else {
                return unknown(message);
            };
            Command::Budget {
                category,
                limit,
                message,
            }
        }
        "GOAL" => {
            let Some(name) = read_string(&data, "name") else {
                return unknown(message);
            };
            let Some(target) =
                read_amount(&data, "amount").or_else(|| read_amount(&data, "target"))
            else {
                return unknown(message);
            };
            Command::Goal {
                name,
                target,
                message,
            }
        }
        _ => unknown(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_expense_transaction() {
        let raw = r#"{"action":"TRANSACTION","data":{"type":"EXPENSE","amount":50,"category":"مواصلات"},"message":"سجلت 50 مواصلات"}"#;
        let cmd = parse_response(raw, &[]);
        match cmd {
            Command::Transaction { parsed, message } => {
                assert_eq!(parsed.amount, Money::from_units(50));
                assert_eq!(parsed.transaction_type, TransactionType::Expense);
                assert_eq!(parsed.category, "مواصلات");
                assert!(parsed.goal_id.is_none());
                assert_eq!(message, "سجلت 50 مواصلات");
            }
            other => panic!("expected transaction, got {:?}", other),
        }
    }

    #[test]
    fn test_strips_markdown_fences() {
        let raw = "```json\n{\"action\":\"BUDGET\",\"data\":{\"category\":\"Food\",\"amount\":3000},\"message\":\"ok\"}\n```";
        let cmd = parse_response(raw, &[]);
        assert!(matches!(cmd, Command::Budget { ref category, limit, .. }
            if category == "Food" && limit == Money::from_units(3000)));
    }

    #[test]
    fn test_unknown_action_collapses() {
        let raw = r#"{"action":"TRANSFER","data":{},"message":"?"}"#;
        assert!(matches!(parse_response(raw, &[]), Command::Unknown { .. }));
    }

    #[test]
    fn test_missing_action_collapses_keeping_message() {
        let raw = r#"{"data":{"type":"EXPENSE","amount":50},"message":"مش فاهم قصدك"}"#;
        match parse_response(raw, &[]) {
            Command::Unknown { message } => assert_eq!(message, "مش فاهم قصدك"),
            other => panic!("expected unknown, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let raw = r#"{"action":"TRANSACTION","data":{"type":"EXPENSE","amount":"fifty","category":"Food"},"message":"m"}"#;
        assert!(matches!(parse_response(raw, &[]), Command::Unknown { .. }));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let raw = r#"{"action":"TRANSACTION","data":{"type":"EXPENSE","amount":-50,"category":"Food"},"message":"m"}"#;
        assert!(matches!(parse_response(raw, &[]), Command::Unknown { .. }));
    }

    #[test]
    fn test_unknown_type_tag_rejected() {
        let raw = r#"{"action":"TRANSACTION","data":{"type":"REFUND","amount":50},"message":"m"}"#;
        assert!(matches!(parse_response(raw, &[]), Command::Unknown { .. }));
    }

    #[test]
    fn test_non_json_reply_collapses() {
        let cmd = parse_response("I think you spent money on food?", &[]);
        assert!(matches!(cmd, Command::Unknown { .. }));
    }

    #[test]
    fn test_missing_category_defaults_to_general() {
        let raw = r#"{"action":"TRANSACTION","data":{"type":"INCOME","amount":5000},"message":"m"}"#;
        match parse_response(raw, &[]) {
            Command::Transaction { parsed, .. } => assert_eq!(parsed.category, "General"),
            other => panic!("expected transaction, got {:?}", other),
        }
    }

    #[test]
    fn test_goal_reference_resolves_against_known_goals() {
        let goal = SavingGoal::new("iPhone", Money::from_units(2000), "#fff");
        let goals = vec![goal.clone()];

        let raw = format!(
            r#"{{"action":"TRANSACTION","data":{{"type":"SAVING","amount":1000,"category":"تحويش","goalId":"{}"}},"message":"m"}}"#,
            goal.id.as_uuid()
        );
        match parse_response(&raw, &goals) {
            Command::Transaction { parsed, .. } => assert_eq!(parsed.goal_id, Some(goal.id)),
            other => panic!("expected transaction, got {:?}", other),
        }

        // Fabricated id is dropped, not trusted
        let raw = r#"{"action":"TRANSACTION","data":{"type":"SAVING","amount":1000,"goalId":"goal-ffffffff"},"message":"m"}"#;
        match parse_response(raw, &goals) {
            Command::Transaction { parsed, .. } => assert!(parsed.goal_id.is_none()),
            other => panic!("expected transaction, got {:?}", other),
        }
    }

    #[test]
    fn test_goal_creation_command() {
        let raw = r#"{"action":"GOAL","data":{"name":"Car","amount":9000},"message":"m"}"#;
        assert!(matches!(parse_response(raw, &[]), Command::Goal { ref name, target, .. }
            if name == "Car" && target == Money::from_units(9000)));
    }

    #[test]
    fn test_fractional_amount() {
        let raw = r#"{"action":"TRANSACTION","data":{"type":"EXPENSE","amount":10.5,"category":"Food"},"message":"m"}"#;
        match parse_response(raw, &[]) {
            Command::Transaction { parsed, .. } => {
                assert_eq!(parsed.amount, Money::from_cents(1050))
            }
            other => panic!("expected transaction, got {:?}", other),
        }
    }
}
