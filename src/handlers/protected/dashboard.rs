// handlers/protected/dashboard.rs - GET /dashboard, GET /profile

use axum::{extract::State, Extension};

use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{Dashboard, Profile};
use crate::state::AppState;

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Dashboard> {
    let mode = state.config.dashboard.disabled_collections;
    let dashboard = Dashboard::load(state.pool(), user.user_id, mode).await?;
    Ok(ApiResponse::success(dashboard))
}

pub async fn profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Profile> {
    let profile = Profile::load(state.pool(), user.user_id).await?;
    Ok(ApiResponse::success(profile))
}
