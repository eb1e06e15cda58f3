use chrono::NaiveDate;
use clap::Subcommand;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::cli::client::ApiClient;
use crate::cli::config::load_session;
use crate::cli::utils::{output_sections, output_success, output_value};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum GoalCommands {
    #[command(about = "Add a savings goal")]
    Add {
        #[arg(help = "Target amount, e.g. 5000.00")]
        target_amount: Decimal,
        #[arg(help = "Deadline as YYYY-MM-DD")]
        deadline: NaiveDate,
    },

    #[command(about = "Remove a savings goal")]
    Rm {
        #[arg(help = "Goal id")]
        id: Uuid,
    },
}

#[derive(Subcommand)]
pub enum IncomeCommands {
    #[command(about = "Add an income source")]
    Add {
        #[arg(help = "Where the money comes from")]
        source: String,
        #[arg(help = "Amount per period")]
        amount: Decimal,
        #[arg(help = "How often it is paid, e.g. monthly")]
        frequency: String,
    },

    #[command(about = "Remove an income source")]
    Rm {
        #[arg(help = "Income source id")]
        id: Uuid,
    },
}

#[derive(Subcommand)]
pub enum ExpenseCommands {
    #[command(about = "Record an expense")]
    Add {
        #[arg(help = "Category, e.g. groceries")]
        category: String,
        #[arg(help = "Amount spent")]
        amount: Decimal,
        #[arg(help = "Date as YYYY-MM-DD")]
        date: NaiveDate,
        #[arg(long, help = "Free-form notes")]
        notes: Option<String>,
    },

    #[command(about = "Remove an expense")]
    Rm {
        #[arg(help = "Expense id")]
        id: Uuid,
    },
}

#[derive(Subcommand)]
pub enum LoanCommands {
    #[command(about = "List loans")]
    List,

    #[command(about = "Add a loan")]
    Add {
        #[arg(help = "Amount originally borrowed")]
        original_debt: Decimal,
        #[arg(help = "Amount still owed")]
        current_debt: Decimal,
        #[arg(help = "Annual interest rate in percent")]
        interest_rate: Decimal,
    },

    #[command(about = "Set the amount still owed on a loan")]
    Update {
        #[arg(help = "Loan id")]
        id: Uuid,
        #[arg(help = "New current debt")]
        current_debt: Decimal,
    },

    #[command(about = "Remove a loan")]
    Rm {
        #[arg(help = "Loan id")]
        id: Uuid,
    },
}

#[derive(Subcommand)]
pub enum TuitionCommands {
    #[command(about = "List tuition entries")]
    List,

    #[command(about = "Add a tuition, scholarship or grant entry")]
    Add {
        #[arg(value_parser = ["tuition", "scholarship", "grant"], help = "Entry type")]
        kind: String,
        #[arg(help = "Institution or awarding body")]
        source: String,
        #[arg(help = "Amount")]
        amount: Decimal,
    },

    #[command(about = "Remove a tuition entry")]
    Rm {
        #[arg(help = "Entry id")]
        id: Uuid,
    },
}

fn client() -> anyhow::Result<ApiClient> {
    ApiClient::authenticated(&load_session()?)
}

async fn create(path: &str, body: Value, output_format: &OutputFormat) -> anyhow::Result<()> {
    let created = client()?.post(path, &body).await?.into_value();
    output_value(output_format, &created)
}

async fn remove(collection: &str, id: Uuid, output_format: &OutputFormat) -> anyhow::Result<()> {
    let reply = client()?
        .delete(&format!("/{}/{}", collection, id))
        .await?
        .into_value();
    let message = reply
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Removed")
        .to_string();
    output_success(output_format, &message, Some(json!({ "id": id })))
}

async fn list(path: &str, output_format: &OutputFormat) -> anyhow::Result<()> {
    let rows = client()?.get(path).await?.into_value();
    output_value(output_format, &rows)
}

pub async fn dashboard(output_format: OutputFormat) -> anyhow::Result<()> {
    let dashboard = client()?.get("/dashboard").await?.into_value();
    output_sections(&output_format, &dashboard)
}

pub async fn handle_goals(cmd: GoalCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        GoalCommands::Add {
            target_amount,
            deadline,
        } => {
            let body = json!({ "targetAmount": target_amount, "deadline": deadline });
            create("/savings-goals", body, &output_format).await
        }
        GoalCommands::Rm { id } => remove("savings-goals", id, &output_format).await,
    }
}

pub async fn handle_income(cmd: IncomeCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        IncomeCommands::Add {
            source,
            amount,
            frequency,
        } => {
            let body = json!({ "source": source, "amount": amount, "frequency": frequency });
            create("/income-sources", body, &output_format).await
        }
        IncomeCommands::Rm { id } => remove("income-sources", id, &output_format).await,
    }
}

pub async fn handle_expenses(cmd: ExpenseCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            date,
            notes,
        } => {
            let body = json!({
                "category": category,
                "amount": amount,
                "date": date,
                "notes": notes,
            });
            create("/expenses", body, &output_format).await
        }
        ExpenseCommands::Rm { id } => remove("expenses", id, &output_format).await,
    }
}

pub async fn handle_loans(cmd: LoanCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        LoanCommands::List => list("/loans", &output_format).await,
        LoanCommands::Add {
            original_debt,
            current_debt,
            interest_rate,
        } => {
            let body = json!({
                "originalDebt": original_debt,
                "currentDebt": current_debt,
                "interestRate": interest_rate,
            });
            create("/loans", body, &output_format).await
        }
        LoanCommands::Update { id, current_debt } => {
            let updated = client()?
                .put(&format!("/loans/{}", id), &json!({ "currentDebt": current_debt }))
                .await?
                .into_value();
            output_value(&output_format, &updated)
        }
        LoanCommands::Rm { id } => remove("loans", id, &output_format).await,
    }
}

pub async fn handle_tuition(cmd: TuitionCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        TuitionCommands::List => list("/tuition", &output_format).await,
        TuitionCommands::Add {
            kind,
            source,
            amount,
        } => {
            let body = json!({ "type": kind, "source": source, "amount": amount });
            create("/tuition", body, &output_format).await
        }
        TuitionCommands::Rm { id } => remove("tuition", id, &output_format).await,
    }
}
