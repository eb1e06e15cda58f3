use sqlx::PgPool;
use tracing::info;

use super::DatabaseError;

/// Table definitions in dependency order. Every statement is idempotent.
const SCHEMA: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            email VARCHAR(255) UNIQUE NOT NULL,
            password VARCHAR(255) NOT NULL,
            password_length INT NOT NULL
        )
        "#,
    ),
    (
        "savings_goals",
        r#"
        CREATE TABLE IF NOT EXISTS savings_goals (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES users(id),
            target_amount NUMERIC(12, 2) NOT NULL CHECK (target_amount > 0),
            deadline DATE NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    ),
    (
        "income_sources",
        r#"
        CREATE TABLE IF NOT EXISTS income_sources (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES users(id),
            source VARCHAR(255) NOT NULL,
            amount NUMERIC(12, 2) NOT NULL,
            frequency VARCHAR(50) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    ),
    (
        "expenses",
        r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES users(id),
            category VARCHAR(255) NOT NULL,
            amount NUMERIC(12, 2) NOT NULL,
            date DATE NOT NULL,
            notes TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    ),
    (
        "loans",
        r#"
        CREATE TABLE IF NOT EXISTS loans (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES users(id),
            original_debt NUMERIC(12, 2) NOT NULL,
            current_debt NUMERIC(12, 2) NOT NULL,
            interest_rate NUMERIC(6, 3) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    ),
    (
        "tuition",
        r#"
        CREATE TABLE IF NOT EXISTS tuition (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES users(id),
            entry_type VARCHAR(20) NOT NULL CHECK (entry_type IN ('tuition', 'scholarship', 'grant')),
            source VARCHAR(255) NOT NULL,
            amount NUMERIC(12, 2) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    ),
    (
        "preferences",
        r#"
        CREATE TABLE IF NOT EXISTS preferences (
            user_id UUID PRIMARY KEY REFERENCES users(id),
            savings_goals BOOLEAN NOT NULL DEFAULT TRUE,
            income_sources BOOLEAN NOT NULL DEFAULT TRUE,
            expenses BOOLEAN NOT NULL DEFAULT TRUE,
            loans BOOLEAN NOT NULL DEFAULT TRUE,
            tuition BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    ),
];

/// Tables holding rows owned by a user, in the order they must be cleared
/// before the user row itself can go.
pub const DEPENDENT_TABLES: &[&str] = &[
    "tuition",
    "loans",
    "expenses",
    "income_sources",
    "savings_goals",
    "preferences",
];

/// Create every table if it does not exist yet
pub async fn initialize(pool: &PgPool) -> Result<(), DatabaseError> {
    for (table, ddl) in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!("Ensured table {}", table);
    }
    info!("Database initialized ({} tables)", SCHEMA.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dependent_table_is_created_after_users() {
        let names: Vec<&str> = SCHEMA.iter().map(|(name, _)| *name).collect();
        assert_eq!(names[0], "users");
        for table in DEPENDENT_TABLES {
            assert!(names.contains(table), "{} missing from schema", table);
        }
        assert_eq!(DEPENDENT_TABLES.len(), SCHEMA.len() - 1);
    }
}
