use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::auth::{hash_password, verify_password, AuthError, TokenService};
use crate::database::models::User;
use crate::database::service as users;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub original_password: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEmailRequest {
    pub original_email: String,

    #[validate(email(message = "Invalid email format"))]
    pub new_email: String,
}

/// Credential flows: registration, login, and changes to an existing account.
pub struct AccountService<'a> {
    pool: &'a PgPool,
    tokens: &'a TokenService,
    bcrypt_cost: u32,
}

impl<'a> AccountService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            pool: state.pool(),
            tokens: &state.tokens,
            bcrypt_cost: state.config.security.bcrypt_cost,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<User, ApiError> {
        request.validate()?;

        let email = request.email.trim();
        let length = password_length(&request.password);
        let hash = hash_password(request.password, self.bcrypt_cost).await?;

        let user = users::create_user(self.pool, email, &hash, length).await?;
        tracing::info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Returns a signed token for the user behind `email`.
    pub async fn login(&self, request: LoginRequest) -> Result<String, ApiError> {
        request.validate()?;

        let user = users::find_user_by_email(self.pool, request.email.trim())
            .await?
            .ok_or_else(|| ApiError::not_found("User not found."))?;

        if !verify_password(request.password, user.password.clone()).await? {
            tracing::warn!("Failed login for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(self.tokens.issue(user.id)?)
    }

    /// Returns the stored length of the new password. Tokens issued before
    /// the change stay valid until they expire.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        request: ChangePasswordRequest,
    ) -> Result<i32, ApiError> {
        request.validate()?;

        let user = users::find_user_by_id(self.pool, user_id).await?;
        if !verify_password(request.original_password, user.password).await? {
            return Err(ApiError::unauthorized("Original password is incorrect."));
        }

        let length = password_length(&request.new_password);
        let hash = hash_password(request.new_password, self.bcrypt_cost).await?;
        users::update_password(self.pool, user_id, &hash, length).await?;

        tracing::info!("Password changed for user {}", user_id);
        Ok(length)
    }

    pub async fn change_email(&self, user_id: Uuid, request: ChangeEmailRequest) -> Result<(), ApiError> {
        request.validate()?;

        let user = users::find_user_by_id(self.pool, user_id).await?;
        if user.email != request.original_email.trim() {
            return Err(ApiError::unauthorized("Original email does not match."));
        }

        users::update_email(self.pool, user_id, request.new_email.trim()).await?;
        tracing::info!("Email changed for user {}", user_id);
        Ok(())
    }

    pub async fn delete_account(&self, user_id: Uuid) -> Result<(), ApiError> {
        users::delete_user_with_dependents(self.pool, user_id).await?;
        tracing::info!("Deleted account {}", user_id);
        Ok(())
    }
}

/// Counted in characters, which is what the profile page displays.
fn password_length(password: &str) -> i32 {
    password.chars().count().min(i32::MAX as usize) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_requires_valid_email_and_length() {
        let ok = RegisterRequest {
            email: "ada@example.com".to_string(),
            password: "longenough".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "longenough".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short = RegisterRequest {
            email: "ada@example.com".to_string(),
            password: "short".to_string(),
        };
        let err: ApiError = short.validate().unwrap_err().into();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn change_requests_use_camel_case_keys() {
        let req: ChangePasswordRequest = serde_json::from_value(serde_json::json!({
            "originalPassword": "old-password",
            "newPassword": "new-password"
        }))
        .unwrap();
        assert_eq!(req.original_password, "old-password");

        let req: ChangeEmailRequest = serde_json::from_value(serde_json::json!({
            "originalEmail": "a@example.com",
            "newEmail": "b@example.com"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn password_length_counts_characters() {
        assert_eq!(password_length("pässwörd"), 8);
    }
}
