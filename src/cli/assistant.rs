//! Assistant CLI commands: free-text input and financial advice

use crate::config::Settings;
use crate::error::{PocketError, PocketResult};
use crate::interpreter::{Applied, Command, CommandInterpreter, GeminiClient};
use crate::services::LedgerService;
use crate::storage::Storage;

fn client_from_settings(settings: &Settings) -> PocketResult<GeminiClient> {
    let api_key = settings.resolved_api_key().ok_or_else(|| {
        PocketError::Config(
            "No assistant API key configured. Set MY_POCKET_API_KEY or run 'pocket config set-key'"
                .into(),
        )
    })?;
    Ok(GeminiClient::new(api_key))
}

/// Interpret free text into a ledger mutation and apply it
pub fn handle_say_command(storage: &Storage, settings: &Settings, input: &str) -> PocketResult<()> {
    let client = client_from_settings(settings)?;
    let service = LedgerService::new(storage, settings.premium);
    let interpreter = CommandInterpreter::new(&client, &service);

    let goals = storage.goals.all()?;
    let command = interpreter.interpret(input, &goals)?;

    if let Command::Unknown { message } = &command {
        println!("{}", message);
        return Ok(());
    }

    let applied = interpreter.apply(&command)?;
    println!("{}", command.message());

    if let Applied::Transaction(outcome) = applied {
        if let Some(goal) = outcome.completed_goal {
            println!("🎉 Goal reached: {}", goal.name);
        }
    }

    Ok(())
}

/// Ask the advisor for a take on the current month
pub fn handle_advise_command(storage: &Storage, settings: &Settings) -> PocketResult<()> {
    if storage.transactions.count()? == 0 {
        println!("Add some transactions first, then ask again");
        return Ok(());
    }

    let client = client_from_settings(settings)?;
    let service = LedgerService::new(storage, settings.premium);
    let interpreter = CommandInterpreter::new(&client, &service);

    let goals = storage.goals.all()?;
    let advice = interpreter.advise(&goals)?;
    println!("{}", advice);

    Ok(())
}
