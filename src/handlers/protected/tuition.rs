// handlers/protected/tuition.rs - POST /tuition

use axum::{extract::State, Extension};
use validator::Validate;

use crate::database::models::{NewTuitionEntry, TuitionEntry};
use crate::middleware::{ApiResponse, ApiResult, AuthUser, ValidJson};
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidJson(entry): ValidJson<NewTuitionEntry>,
) -> ApiResult<TuitionEntry> {
    entry.validate()?;
    let created = entry.insert(state.pool(), user.user_id).await?;
    Ok(ApiResponse::created(created))
}
