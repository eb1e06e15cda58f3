// handlers/protected/expenses.rs - POST /expenses

use axum::{extract::State, Extension};
use validator::Validate;

use crate::database::models::{Expense, NewExpense};
use crate::middleware::{ApiResponse, ApiResult, AuthUser, ValidJson};
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidJson(expense): ValidJson<NewExpense>,
) -> ApiResult<Expense> {
    expense.validate()?;
    let created = expense.insert(state.pool(), user.user_id).await?;
    Ok(ApiResponse::created(created))
}
