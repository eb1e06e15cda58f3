use axum::extract::{Path, State};
use axum::Extension;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::{OwnedRecord, Repository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// Path ids that are not UUIDs cannot name any row, so they are reported
/// the same way as a missing one.
pub fn parse_id<T: OwnedRecord>(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found(format!("{} not found.", T::LABEL)))
}

/// DELETE /<collection>/:id - remove one row owned by the caller
///
/// Rows belonging to another user are indistinguishable from missing ones.
pub async fn remove<T: OwnedRecord>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id::<T>(&id)?;

    Repository::<T>::new(state.pool().clone())
        .delete_owned(id, user.user_id)
        .await?;

    tracing::debug!("Removed {} {} for {}", T::TABLE, id, user.user_id);
    Ok(ApiResponse::message(format!("{} removed successfully.", T::LABEL)))
}

/// GET /<collection> - every row owned by the caller
pub async fn list<T: OwnedRecord + Serialize>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<T>> {
    let rows = Repository::<T>::new(state.pool().clone())
        .list_for_owner(user.user_id)
        .await?;
    Ok(ApiResponse::success(rows))
}
