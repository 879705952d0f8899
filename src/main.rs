use anyhow::Result;
use clap::{Parser, Subcommand};

use mypocket::cli::{
    handle_account_command, handle_advise_command, handle_audit_command, handle_budget_command,
    handle_category_command, handle_export_command, handle_goal_command, handle_import_command,
    handle_remind_command, handle_say_command, handle_transaction_command,
};
use mypocket::config::{paths::PocketPaths, settings::Settings, Language};
use mypocket::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Personal finance tracker with an AI assistant",
    long_about = "My Pocket tracks income, expenses, debts, and savings from the \
                  command line. Balances and progress are always derived from the \
                  transaction log, and free-text commands (Arabic or English) can \
                  be interpreted by the built-in assistant."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(mypocket::cli::AccountCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(mypocket::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(mypocket::cli::BudgetCommands),

    /// Saving goal commands
    #[command(subcommand)]
    Goal(mypocket::cli::GoalCommands),

    /// Category commands
    #[command(subcommand)]
    Category(mypocket::cli::CategoryCommands),

    /// Tell the assistant what happened, in plain Arabic or English
    Say {
        /// Free-text input, e.g. "صرفت 50 مواصلات" or "spent 50 on transport"
        text: Vec<String>,
    },

    /// Ask the advisor for a take on this month's finances
    Advise,

    /// Check for due payment reminders
    Remind,

    /// Export all data to a backup bundle (premium)
    Export {
        /// Bundle file path
        file: String,
    },

    /// Restore data from a backup bundle
    Import {
        /// Bundle file path
        file: String,
    },

    /// Inspect the audit log
    #[command(subcommand)]
    Audit(mypocket::cli::AuditCommands),

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration and paths
    Show,
    /// Store the assistant API key
    SetKey {
        /// API key (MY_POCKET_API_KEY overrides this when set)
        key: String,
    },
    /// Set the interface language (ar, en)
    SetLanguage {
        /// Language code
        language: String,
    },
    /// Toggle the premium entitlement
    SetPremium {
        /// "on" or "off"
        state: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PocketPaths::new()?;
    let mut settings = Settings::load_or_create(&paths);

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let premium = settings.premium;

    match cli.command {
        Some(Commands::Account(cmd)) => handle_account_command(&storage, premium, cmd)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, premium, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, premium, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, premium, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, premium, cmd)?,
        Some(Commands::Say { text }) => {
            handle_say_command(&storage, &settings, &text.join(" "))?;
        }
        Some(Commands::Advise) => handle_advise_command(&storage, &settings)?,
        Some(Commands::Remind) => handle_remind_command(&storage, &settings)?,
        Some(Commands::Export { file }) => handle_export_command(&storage, premium, &file)?,
        Some(Commands::Import { file }) => handle_import_command(&storage, &file)?,
        Some(Commands::Audit(cmd)) => handle_audit_command(&storage, cmd)?,
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => {
                println!("My Pocket Configuration");
                println!("=======================");
                println!("Base directory: {}", paths.base_dir().display());
                println!("Data directory: {}", paths.data_dir().display());
                println!();
                println!("Settings:");
                println!("  Language: {:?}", settings.language);
                println!("  Theme:    {:?}", settings.theme);
                println!("  Premium:  {}", settings.premium);
                println!(
                    "  API key:  {}",
                    if settings.resolved_api_key().is_some() {
                        "configured"
                    } else {
                        "not set"
                    }
                );
            }
            ConfigCommands::SetKey { key } => {
                settings.api_key = Some(key);
                settings.save(&paths)?;
                println!("API key saved");
            }
            ConfigCommands::SetLanguage { language } => {
                settings.language = match language.to_lowercase().as_str() {
                    "ar" => Language::Ar,
                    "en" => Language::En,
                    other => anyhow::bail!("Unknown language '{}'. Valid: ar, en", other),
                };
                settings.save(&paths)?;
                println!("Language set to {}", language.to_lowercase());
            }
            ConfigCommands::SetPremium { state } => {
                settings.premium = match state.as_str() {
                    "on" => true,
                    "off" => false,
                    other => anyhow::bail!("Unknown state '{}'. Valid: on, off", other),
                };
                settings.save(&paths)?;
                println!("Premium {}", if settings.premium { "enabled" } else { "disabled" });
            }
        },
        None => {
            println!("My Pocket - personal finance tracker");
            println!();
            println!("Run 'pocket --help' for usage information.");
            println!("Try: pocket say \"spent 50 on transport\"");
        }
    }

    Ok(())
}
