use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::database::DatabaseManager;

/// Everything a handler needs, built once at startup and cloned per request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: DatabaseManager,
    pub tokens: TokenService,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseManager) -> Self {
        let tokens = TokenService::from_config(&config.security);
        Self {
            db,
            tokens,
            config: Arc::new(config),
        }
    }

    pub fn pool(&self) -> &PgPool {
        self.db.pool()
    }
}
