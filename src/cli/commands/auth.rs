use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::client::ApiClient;
use crate::cli::config::{load_session, save_session};
use crate::cli::utils::{output_sections, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Create an account")]
    Register {
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "Password (falls back to FINANCE_PASSWORD)")]
        password: Option<String>,
    },

    #[command(about = "Login and store the token")]
    Login {
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "Password (falls back to FINANCE_PASSWORD)")]
        password: Option<String>,
    },

    #[command(about = "Forget the stored token")]
    Logout,

    #[command(about = "Show current authentication status")]
    Status,

    #[command(about = "Show the profile and preferences of the logged-in user")]
    Whoami,
}

/// Password from the flag, else from `FINANCE_PASSWORD`.
pub fn resolve_password(flag: Option<String>) -> anyhow::Result<String> {
    flag.or_else(|| std::env::var("FINANCE_PASSWORD").ok())
        .filter(|p| !p.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Password required: pass --password or set FINANCE_PASSWORD"))
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Register { email, password } => {
            let password = resolve_password(password)?;
            let client = ApiClient::new(&load_session()?)?;
            let reply = client
                .post("/register", &json!({ "email": email, "password": password }))
                .await?;
            let message = match reply.into_value() {
                Value::String(text) => text,
                _ => "User registered successfully.".to_string(),
            };
            output_success(&output_format, &message, Some(json!({ "email": email })))
        }
        AuthCommands::Login { email, password } => {
            let password = resolve_password(password)?;
            let mut session = load_session()?;
            let client = ApiClient::new(&session)?;
            let reply = client
                .post("/login", &json!({ "email": email, "password": password }))
                .await?
                .into_value();

            let token = reply
                .get("token")
                .and_then(Value::as_str)
                .ok_or_else(|| anyhow::anyhow!("Login response did not include a token"))?
                .to_string();

            session.login(email.clone(), token);
            save_session(&session)?;
            output_success(
                &output_format,
                &format!("Logged in as {}", email),
                Some(json!({ "email": email, "server_url": session.server_url })),
            )
        }
        AuthCommands::Logout => {
            let mut session = load_session()?;
            session.logout();
            save_session(&session)?;
            output_success(&output_format, "Logged out", None)
        }
        AuthCommands::Status => {
            let session = load_session()?;
            let message = match &session.email {
                Some(email) if session.token.is_some() => {
                    format!("Logged in as {} on {}", email, session.server_url)
                }
                _ => format!("Not logged in ({})", session.server_url),
            };
            output_success(
                &output_format,
                &message,
                Some(json!({
                    "logged_in": session.token.is_some(),
                    "email": session.email,
                    "logged_in_at": session.logged_in_at,
                })),
            )
        }
        AuthCommands::Whoami => {
            let client = ApiClient::authenticated(&load_session()?)?;
            let reply = client.get("/profile").await?;
            output_sections(&output_format, &reply.into_value())
        }
    }
}
