use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3001";

/// Everything the CLI remembers between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub server_url: String,
    pub email: Option<String>,
    pub token: Option<String>,
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            email: None,
            token: None,
            logged_in_at: None,
        }
    }
}

impl Session {
    pub fn login(&mut self, email: String, token: String) {
        self.email = Some(email);
        self.token = Some(token);
        self.logged_in_at = Some(Utc::now());
    }

    pub fn logout(&mut self) {
        self.email = None;
        self.token = None;
        self.logged_in_at = None;
    }

    pub fn set_server(&mut self, url: &str) -> anyhow::Result<()> {
        let parsed = url::Url::parse(url)
            .map_err(|e| anyhow::anyhow!("Invalid server URL '{}': {}", url, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("Server URL must use http or https");
        }
        // Tokens are only valid on the server that issued them
        if self.server_url != url.trim_end_matches('/') {
            self.logout();
        }
        self.server_url = url.trim_end_matches('/').to_string();
        Ok(())
    }
}

pub fn get_config_dir() -> anyhow::Result<PathBuf> {
    let config_dir = if let Ok(custom_dir) = std::env::var("FINANCE_CLI_CONFIG_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = std::env::var("HOME")
            .map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("finance").join("cli")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

pub fn load_session() -> anyhow::Result<Session> {
    let session_file = get_config_dir()?.join("session.json");

    if !session_file.exists() {
        return Ok(Session::default());
    }

    let content = fs::read_to_string(session_file)?;
    let session: Session = serde_json::from_str(&content)?;
    Ok(session)
}

pub fn save_session(session: &Session) -> anyhow::Result<()> {
    let session_file = get_config_dir()?.join("session.json");

    let content = serde_json::to_string_pretty(session)?;
    fs::write(session_file, content)?;
    Ok(())
}
