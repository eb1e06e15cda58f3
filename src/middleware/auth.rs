use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::{bearer_token, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from the bearer token. Its `user_id` is the
/// only owner id handlers ever pass to the database.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str())
        .transpose()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    let token = bearer_token(header).map_err(|e| {
        tracing::debug!("Rejected request to {}: {}", request.uri().path(), e);
        ApiError::from(e)
    })?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Token verification failed for {}: {}", request.uri().path(), e);
        ApiError::from(e)
    })?;

    // Convert claims to AuthUser and inject into request
    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}
