// handlers/protected/loans.rs - POST /loans, PUT /loans/:id
//
// Listing and deletion go through the generic handlers in `records`.

use axum::{
    extract::{Path, State},
    Extension,
};
use validator::Validate;

use super::records::parse_id;
use crate::database::models::{Loan, LoanDebtUpdate, NewLoan};
use crate::middleware::{ApiResponse, ApiResult, AuthUser, ValidJson};
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidJson(loan): ValidJson<NewLoan>,
) -> ApiResult<Loan> {
    loan.validate()?;
    let created = loan.insert(state.pool(), user.user_id).await?;
    Ok(ApiResponse::created(created))
}

/// PUT /loans/:id - replace current_debt on a loan the caller owns
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    ValidJson(update): ValidJson<LoanDebtUpdate>,
) -> ApiResult<Loan> {
    let id = parse_id::<Loan>(&id)?;
    update.validate()?;

    let loan = update.apply(state.pool(), id, user.user_id).await?;
    if loan.exceeds_original() {
        tracing::debug!("Loan {} now exceeds its original debt", loan.id);
    }
    Ok(ApiResponse::success(loan))
}
