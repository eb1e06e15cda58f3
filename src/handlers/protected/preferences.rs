// handlers/protected/preferences.rs - GET/POST /preferences

use axum::{extract::State, Extension};

use crate::database::models::Preferences;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, ValidJson};
use crate::state::AppState;

/// First read creates the all-visible default row.
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Preferences> {
    let prefs = Preferences::get_or_create(state.pool(), user.user_id).await?;
    Ok(ApiResponse::success(prefs))
}

/// Flags missing from the body are stored as visible.
pub async fn set(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidJson(prefs): ValidJson<Preferences>,
) -> ApiResult<Preferences> {
    let stored = prefs.upsert(state.pool(), user.user_id).await?;
    Ok(ApiResponse::success(stored))
}
