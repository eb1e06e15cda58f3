use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::cli::config::Session;

/// Body of a successful response. Some endpoints answer in plain text.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Text(String),
}

impl Reply {
    pub fn into_value(self) -> Value {
        match self {
            Reply::Json(value) => value,
            Reply::Text(text) => Value::String(text),
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(session: &Session) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: session.server_url.clone(),
            token: session.token.clone(),
        })
    }

    /// Client for endpoints that need a bearer token.
    pub fn authenticated(session: &Session) -> anyhow::Result<Self> {
        if session.token.is_none() {
            anyhow::bail!("Not logged in. Run `finance auth login <email>` first");
        }
        Self::new(session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> anyhow::Result<Reply> {
        self.send(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> anyhow::Result<Reply> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> anyhow::Result<Reply> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> anyhow::Result<Reply> {
        self.send(Method::DELETE, path, None).await
    }

    pub async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> anyhow::Result<Reply> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Request to {} failed: {}", url, e))?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));
        let text = response.text().await?;

        if !status.is_success() {
            anyhow::bail!(error_message(status, &text));
        }

        if is_json {
            Ok(Reply::Json(serde_json::from_str(&text)?))
        } else {
            Ok(Reply::Text(text))
        }
    }
}

/// Prefer the server's `message` field; fall back to the raw body.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    if message.is_empty() {
        format!("Server returned {}", status)
    } else {
        format!("{} ({})", message, status)
    }
}
