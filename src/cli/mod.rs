pub mod client;
pub mod commands;
pub mod config;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "finance")]
#[command(about = "Finance CLI - Command-line client for the personal finance API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Server selection and status")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },

    #[command(about = "Registration, login and session")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Show every collection the preferences allow")]
    Dashboard,

    #[command(about = "Savings goals")]
    Goals {
        #[command(subcommand)]
        cmd: commands::records::GoalCommands,
    },

    #[command(about = "Income sources")]
    Income {
        #[command(subcommand)]
        cmd: commands::records::IncomeCommands,
    },

    #[command(about = "Expenses")]
    Expenses {
        #[command(subcommand)]
        cmd: commands::records::ExpenseCommands,
    },

    #[command(about = "Loans")]
    Loans {
        #[command(subcommand)]
        cmd: commands::records::LoanCommands,
    },

    #[command(about = "Tuition, scholarships and grants")]
    Tuition {
        #[command(subcommand)]
        cmd: commands::records::TuitionCommands,
    },

    #[command(about = "Dashboard visibility preferences")]
    Prefs {
        #[command(subcommand)]
        cmd: commands::prefs::PrefsCommands,
    },

    #[command(about = "Change credentials or delete the account")]
    Account {
        #[command(subcommand)]
        cmd: commands::account::AccountCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Server { cmd } => commands::server::handle(cmd, output_format).await,
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Dashboard => commands::records::dashboard(output_format).await,
        Commands::Goals { cmd } => commands::records::handle_goals(cmd, output_format).await,
        Commands::Income { cmd } => commands::records::handle_income(cmd, output_format).await,
        Commands::Expenses { cmd } => commands::records::handle_expenses(cmd, output_format).await,
        Commands::Loans { cmd } => commands::records::handle_loans(cmd, output_format).await,
        Commands::Tuition { cmd } => commands::records::handle_tuition(cmd, output_format).await,
        Commands::Prefs { cmd } => commands::prefs::handle(cmd, output_format).await,
        Commands::Account { cmd } => commands::account::handle(cmd, output_format).await,
    }
}
