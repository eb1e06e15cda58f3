// handlers/protected/savings_goals.rs - POST /savings-goals

use axum::{extract::State, Extension};
use validator::Validate;

use crate::database::models::{NewSavingsGoal, SavingsGoal};
use crate::middleware::{ApiResponse, ApiResult, AuthUser, ValidJson};
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidJson(goal): ValidJson<NewSavingsGoal>,
) -> ApiResult<SavingsGoal> {
    goal.validate()?;
    let created = goal.insert(state.pool(), user.user_id).await?;
    Ok(ApiResponse::created(created))
}
