// handlers/protected/income_sources.rs - POST /income-sources

use axum::{extract::State, Extension};
use validator::Validate;

use crate::database::models::{IncomeSource, NewIncomeSource};
use crate::middleware::{ApiResponse, ApiResult, AuthUser, ValidJson};
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidJson(source): ValidJson<NewIncomeSource>,
) -> ApiResult<IncomeSource> {
    source.validate()?;
    let created = source.insert(state.pool(), user.user_id).await?;
    Ok(ApiResponse::created(created))
}
