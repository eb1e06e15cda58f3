// handlers/public/auth/login.rs - POST /login handler

use axum::extract::State;
use serde::Serialize;

use crate::middleware::{ApiResponse, ApiResult, ValidJson};
use crate::services::account::{AccountService, LoginRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /login - Exchange email and password for a bearer token
///
/// Unknown email is 404, wrong password is 401.
pub async fn login_post(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let token = AccountService::new(&state).login(request).await?;
    Ok(ApiResponse::success(LoginResponse { token }))
}
