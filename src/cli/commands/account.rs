use clap::Subcommand;
use serde_json::{json, Value};

use super::auth::resolve_password;
use crate::cli::client::ApiClient;
use crate::cli::config::{load_session, save_session};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum AccountCommands {
    #[command(about = "Change the account password")]
    ChangePassword {
        #[arg(long, help = "Current password")]
        original: String,
        #[arg(long, help = "New password (falls back to FINANCE_PASSWORD)")]
        new: Option<String>,
    },

    #[command(about = "Change the account email")]
    ChangeEmail {
        #[arg(help = "Current email")]
        original: String,
        #[arg(help = "New email")]
        new: String,
    },

    #[command(about = "Delete the account and everything it owns")]
    Delete {
        #[arg(long, help = "Confirm deletion")]
        yes: bool,
    },
}

pub async fn handle(cmd: AccountCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut session = load_session()?;
    let client = ApiClient::authenticated(&session)?;

    match cmd {
        AccountCommands::ChangePassword { original, new } => {
            let new = resolve_password(new)?;
            let reply = client
                .post(
                    "/change-password",
                    &json!({ "originalPassword": original, "newPassword": new }),
                )
                .await?
                .into_value();
            let length = reply.get("passwordLength").cloned().unwrap_or(Value::Null);
            output_success(
                &output_format,
                "Password updated",
                Some(json!({ "passwordLength": length })),
            )
        }
        AccountCommands::ChangeEmail { original, new } => {
            let reply = client
                .post(
                    "/change-email",
                    &json!({ "originalEmail": original, "newEmail": new }),
                )
                .await?
                .into_value();
            session.email = Some(new.clone());
            save_session(&session)?;
            let message = reply.as_str().unwrap_or("Email updated successfully.").to_string();
            output_success(&output_format, &message, Some(json!({ "email": new })))
        }
        AccountCommands::Delete { yes } => {
            if !yes {
                anyhow::bail!("Refusing to delete the account without --yes");
            }
            let reply = client.delete("/delete-account").await?.into_value();
            session.logout();
            save_session(&session)?;
            let message = reply.as_str().unwrap_or("Account deleted successfully.").to_string();
            output_success(&output_format, &message, None)
        }
    }
}
