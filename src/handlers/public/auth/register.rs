// handlers/public/auth/register.rs - POST /register handler

use axum::extract::State;

use crate::error::ApiError;
use crate::middleware::{TextResponse, ValidJson};
use crate::services::account::{AccountService, RegisterRequest};
use crate::state::AppState;

/// POST /register - Create an account
///
/// Responds with plain text; a second registration of the same email is 409.
pub async fn register_post(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<RegisterRequest>,
) -> Result<TextResponse, ApiError> {
    AccountService::new(&state).register(request).await?;
    Ok(TextResponse::created("User registered successfully."))
}
