use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::user::User;
use crate::database::schema::DEPENDENT_TABLES;

const USER_COLUMNS: &str = "id, email, password, password_length";

/// Insert a new user; a taken email surfaces as `DatabaseError::Conflict`
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    password_length: i32,
) -> Result<User, DatabaseError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (id, email, password, password_length)
         VALUES ($1, $2, $3, $4)
         RETURNING {}",
        USER_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(password_hash)
    .bind(password_length)
    .fetch_one(pool)
    .await
    .map_err(|e| match DatabaseError::from(e) {
        DatabaseError::Conflict(_) => DatabaseError::Conflict("Email already registered.".to_string()),
        other => other,
    })?;

    Ok(user)
}

pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE email = $1",
        USER_COLUMNS
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_user_by_id(pool: &PgPool, user_id: Uuid) -> Result<User, DatabaseError> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound("User not found.".to_string()))
}

pub async fn update_password(
    pool: &PgPool,
    user_id: Uuid,
    password_hash: &str,
    password_length: i32,
) -> Result<(), DatabaseError> {
    let result = sqlx::query("UPDATE users SET password = $1, password_length = $2 WHERE id = $3")
        .bind(password_hash)
        .bind(password_length)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound("User not found.".to_string()));
    }
    Ok(())
}

pub async fn update_email(pool: &PgPool, user_id: Uuid, email: &str) -> Result<(), DatabaseError> {
    let result = sqlx::query("UPDATE users SET email = $1 WHERE id = $2")
        .bind(email)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| match DatabaseError::from(e) {
            DatabaseError::Conflict(_) => DatabaseError::Conflict("Email already in use.".to_string()),
            other => other,
        })?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound("User not found.".to_string()));
    }
    Ok(())
}

/// Remove every row the user owns, then the user, in one transaction.
/// Nothing is deleted unless all statements succeed.
pub async fn delete_user_with_dependents(pool: &PgPool, user_id: Uuid) -> Result<(), DatabaseError> {
    let mut tx = pool.begin().await?;

    for table in DEPENDENT_TABLES {
        let removed = sqlx::query(&format!("DELETE FROM {} WHERE user_id = $1", table))
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tracing::debug!("Removed {} rows from {} for {}", removed, table, user_id);
    }

    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        // Dropping the transaction rolls it back
        return Err(DatabaseError::NotFound("User not found.".to_string()));
    }

    tx.commit().await?;
    Ok(())
}
