// handlers/protected/account.rs - credential changes and account removal

use axum::{extract::State, Extension};
use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, TextResponse, ValidJson};
use crate::services::account::{AccountService, ChangeEmailRequest, ChangePasswordRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChanged {
    pub password_length: i32,
}

/// POST /change-password
pub async fn change_password(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidJson(request): ValidJson<ChangePasswordRequest>,
) -> ApiResult<PasswordChanged> {
    let password_length = AccountService::new(&state)
        .change_password(user.user_id, request)
        .await?;
    Ok(ApiResponse::success(PasswordChanged { password_length }))
}

/// POST /change-email
pub async fn change_email(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidJson(request): ValidJson<ChangeEmailRequest>,
) -> Result<TextResponse, ApiError> {
    AccountService::new(&state)
        .change_email(user.user_id, request)
        .await?;
    Ok(TextResponse::ok("Email updated successfully."))
}

/// DELETE /delete-account - removes the user and every row they own
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<TextResponse, ApiError> {
    AccountService::new(&state).delete_account(user.user_id).await?;
    Ok(TextResponse::ok("Account deleted successfully."))
}
