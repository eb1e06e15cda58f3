use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::config::{load_session, save_session};
use crate::cli::utils::{output_success, output_value};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Point the CLI at a server (clears the login if the server changes)")]
    Set {
        #[arg(help = "Server URL, e.g. http://localhost:3001")]
        url: String,
    },

    #[command(about = "Show the configured server")]
    Current,

    #[command(about = "Check server health status from the /health endpoint")]
    Health,

    #[command(about = "Show server information from the API root endpoint")]
    Info,
}

pub async fn handle(cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Set { url } => {
            let mut session = load_session()?;
            session.set_server(&url)?;
            save_session(&session)?;
            output_success(
                &output_format,
                &format!("Using server {}", session.server_url),
                Some(json!({ "server_url": session.server_url })),
            )
        }
        ServerCommands::Current => {
            let session = load_session()?;
            output_value(
                &output_format,
                &json!({
                    "server_url": session.server_url,
                    "email": session.email,
                    "logged_in": session.token.is_some(),
                }),
            )
        }
        ServerCommands::Health => {
            let client = ApiClient::new(&load_session()?)?;
            let reply = client.get("/health").await?;
            output_value(&output_format, &reply.into_value())
        }
        ServerCommands::Info => {
            let client = ApiClient::new(&load_session()?)?;
            let reply = client.get("/").await?;
            output_value(&output_format, &reply.into_value())
        }
    }
}
