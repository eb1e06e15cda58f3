use clap::{Args, Subcommand};
use serde_json::{Map, Value};

use crate::cli::client::ApiClient;
use crate::cli::config::load_session;
use crate::cli::utils::output_value;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum PrefsCommands {
    #[command(about = "Show which collections the dashboard includes")]
    Show,

    #[command(about = "Change dashboard visibility; unspecified flags keep their current value")]
    Set(PrefsFlags),
}

#[derive(Args, Debug, Default)]
pub struct PrefsFlags {
    #[arg(long)]
    pub savings_goals: Option<bool>,
    #[arg(long)]
    pub income_sources: Option<bool>,
    #[arg(long)]
    pub expenses: Option<bool>,
    #[arg(long)]
    pub loans: Option<bool>,
    #[arg(long)]
    pub tuition: Option<bool>,
}

impl PrefsFlags {
    /// Overlay the given flags onto the stored preferences.
    pub fn apply(&self, current: &Value) -> Value {
        let mut merged = current.as_object().cloned().unwrap_or_else(Map::new);
        let flags = [
            ("savingsGoals", self.savings_goals),
            ("incomeSources", self.income_sources),
            ("expenses", self.expenses),
            ("loans", self.loans),
            ("tuition", self.tuition),
        ];
        for (key, flag) in flags {
            if let Some(value) = flag {
                merged.insert(key.to_string(), Value::Bool(value));
            }
        }
        Value::Object(merged)
    }
}

pub async fn handle(cmd: PrefsCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::authenticated(&load_session()?)?;

    match cmd {
        PrefsCommands::Show => {
            let prefs = client.get("/preferences").await?.into_value();
            output_value(&output_format, &prefs)
        }
        PrefsCommands::Set(flags) => {
            // The server treats missing flags as visible, so send the full set
            let current = client.get("/preferences").await?.into_value();
            let stored = client
                .post("/preferences", &flags.apply(&current))
                .await?
                .into_value();
            output_value(&output_format, &stored)
        }
    }
}
