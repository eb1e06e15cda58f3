use sqlx::{self, postgres::PgRow, FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

/// A table whose rows all belong to exactly one user via `user_id`.
pub trait OwnedRecord: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const TABLE: &'static str;
    /// Column list used for every SELECT / RETURNING
    const COLUMNS: &'static str;
    /// Human name used in response messages, e.g. "Savings goal"
    const LABEL: &'static str;
}

/// Owner-scoped access to one table. Every read and delete is constrained to
/// `user_id = owner`, so a caller can never see or remove another user's rows.
pub struct Repository<T> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: OwnedRecord> Repository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<T>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE user_id = $1 ORDER BY created_at, id",
            T::COLUMNS,
            T::TABLE
        );
        let rows = sqlx::query_as::<_, T>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Missing rows and rows owned by someone else are both NotFound.
    pub async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 AND user_id = $2", T::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!("Delete of {} {} for {} matched nothing", T::TABLE, id, owner);
            return Err(not_found::<T>());
        }
        Ok(())
    }
}

pub(crate) fn not_found<T: OwnedRecord>() -> DatabaseError {
    DatabaseError::NotFound(format!("{} not found.", T::LABEL))
}
