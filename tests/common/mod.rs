#![allow(dead_code)]

use std::sync::{mpsc, OnceLock};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use finance_api::{
    app,
    config::{AppConfig, DisabledCollections, Environment},
    database::{schema, DatabaseManager},
    state::AppState,
};

/// Secret the test server signs with, so tests can mint their own tokens.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

static SERVER: OnceLock<Option<TestServer>> = OnceLock::new();

/// The API served from a background thread with its own runtime. The thread
/// lives exactly as long as the test binary, so nothing is left running.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub database_url: String,
}

impl TestServer {
    fn start(database_url: String) -> Result<Self> {
        let mut config = AppConfig::preset(Environment::Development);
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.database.url = database_url.clone();
        config.database.max_connections = 20;
        config.database.enable_query_logging = false;
        config.api.enable_request_logging = false;
        config.security.jwt_secret = TEST_JWT_SECRET.to_string();
        config.security.bcrypt_cost = 4;
        config.dashboard.disabled_collections = DisabledCollections::Omit;
        config.validate()?;

        let (ready_tx, ready_rx) = mpsc::channel::<Result<u16, String>>();

        std::thread::Builder::new()
            .name("finance-api-test-server".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_multi_thread()
                    .worker_threads(2)
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        let _ = ready_tx.send(Err(format!("failed to build runtime: {}", e)));
                        return;
                    }
                };

                runtime.block_on(async move {
                    let (listener, state) = match serve_prepare(&config).await {
                        Ok(prepared) => prepared,
                        Err(e) => {
                            let _ = ready_tx.send(Err(format!("{:#}", e)));
                            return;
                        }
                    };
                    let port = match listener.local_addr() {
                        Ok(addr) => addr.port(),
                        Err(e) => {
                            let _ = ready_tx.send(Err(e.to_string()));
                            return;
                        }
                    };
                    let _ = ready_tx.send(Ok(port));
                    let _ = axum::serve(listener, app::router(state)).await;
                });
            })
            .context("failed to spawn server thread")?;

        let port = ready_rx
            .recv_timeout(Duration::from_secs(30))
            .context("test server did not start")?
            .map_err(|e| anyhow::anyhow!("test server failed to start: {}", e))?;

        Ok(Self {
            port,
            base_url: format!("http://127.0.0.1:{}", port),
            database_url,
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        let url = format!("{}/health", self.base_url);
        while Instant::now() < deadline {
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn serve_prepare(config: &AppConfig) -> Result<(tokio::net::TcpListener, AppState)> {
    let db = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    schema::initialize(db.pool())
        .await
        .context("failed to initialize schema")?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .context("failed to bind test listener")?;
    Ok((listener, AppState::new(config.clone(), db)))
}

/// The shared server, or `None` when no database is configured.
pub async fn ensure_server() -> Result<Option<&'static TestServer>> {
    let server = SERVER.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let database_url = std::env::var("DATABASE_URL").ok()?;
        Some(TestServer::start(database_url).expect("failed to start test server"))
    });

    match server {
        Some(server) => {
            server.wait_ready(Duration::from_secs(15)).await?;
            Ok(Some(server))
        }
        None => {
            eprintln!("DATABASE_URL not set; skipping integration test");
            Ok(None)
        }
    }
}

/// Early-return from a test when there is no database to run against.
macro_rules! server_or_skip {
    () => {
        match common::ensure_server().await? {
            Some(server) => server,
            None => return Ok(()),
        }
    };
}

pub fn unique_email() -> String {
    format!("user-{}@example.com", uuid::Uuid::new_v4().simple())
}

/// A registered and logged-in user.
pub struct TestUser {
    pub email: String,
    pub password: String,
    pub token: String,
}

impl TestUser {
    pub async fn create(server: &TestServer) -> Result<Self> {
        let client = reqwest::Client::new();
        let email = unique_email();
        let password = "correct-horse-battery".to_string();

        let res = client
            .post(server.url("/register"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "register failed: {}", res.status());

        let token = login(server, &email, &password).await?;
        Ok(Self {
            email,
            password,
            token,
        })
    }

    pub async fn get(&self, server: &TestServer, path: &str) -> Result<reqwest::Response> {
        Ok(reqwest::Client::new()
            .get(server.url(path))
            .bearer_auth(&self.token)
            .send()
            .await?)
    }

    pub async fn post(&self, server: &TestServer, path: &str, body: Value) -> Result<reqwest::Response> {
        Ok(reqwest::Client::new()
            .post(server.url(path))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?)
    }

    pub async fn put(&self, server: &TestServer, path: &str, body: Value) -> Result<reqwest::Response> {
        Ok(reqwest::Client::new()
            .put(server.url(path))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?)
    }

    pub async fn delete(&self, server: &TestServer, path: &str) -> Result<reqwest::Response> {
        Ok(reqwest::Client::new()
            .delete(server.url(path))
            .bearer_auth(&self.token)
            .send()
            .await?)
    }
}

pub async fn login(server: &TestServer, email: &str, password: &str) -> Result<String> {
    let res = reqwest::Client::new()
        .post(server.url("/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

    let body = res.json::<Value>().await?;
    body["token"]
        .as_str()
        .map(str::to_string)
        .context("login response has no token")
}
