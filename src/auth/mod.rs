use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{SecurityConfig, MAX_JWT_EXPIRY_HOURS};

pub mod password;

pub use password::{hash_password, verify_password};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingToken,

    #[error("{0}")]
    MalformedHeader(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token generation error: {0}")]
    TokenGeneration(String),

    #[error("Password hashing error: {0}")]
    Hashing(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, lifetime: Duration) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// Issues and verifies the bearer tokens handed out by `/login`.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime,
        }
    }

    pub fn from_config(security: &SecurityConfig) -> Self {
        Self::new(
            &security.jwt_secret,
            Duration::hours(security.jwt_expiry_hours.min(MAX_JWT_EXPIRY_HOURS) as i64),
        )
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        self.encode(&Claims::new(user_id, self.lifetime))
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::MissingToken)?;

    let token = value.strip_prefix("Bearer ").ok_or_else(|| {
        AuthError::MalformedHeader("Authorization header must use Bearer token format".to_string())
    })?;

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MalformedHeader("Empty bearer token".to_string()));
    }
    Ok(token)
}
