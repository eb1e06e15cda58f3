use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::DatabaseError;

/// Per-user visibility flags for each resource collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "visible")]
    pub savings_goals: bool,
    #[serde(default = "visible")]
    pub income_sources: bool,
    #[serde(default = "visible")]
    pub expenses: bool,
    #[serde(default = "visible")]
    pub loans: bool,
    #[serde(default = "visible")]
    pub tuition: bool,
}

fn visible() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            savings_goals: true,
            income_sources: true,
            expenses: true,
            loans: true,
            tuition: true,
        }
    }
}

const COLUMNS: &str = "savings_goals, income_sources, expenses, loans, tuition";

impl Preferences {
    /// Existing row, or the all-visible default row inserted on first access.
    ///
    /// Two first reads racing each other both end up selecting the single row:
    /// the loser's insert is a no-op through `ON CONFLICT DO NOTHING`.
    pub async fn get_or_create(pool: &PgPool, owner: Uuid) -> Result<Self, DatabaseError> {
        sqlx::query("INSERT INTO preferences (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
            .bind(owner)
            .execute(pool)
            .await?;

        let prefs = sqlx::query_as::<_, Preferences>(&format!(
            "SELECT {} FROM preferences WHERE user_id = $1",
            COLUMNS
        ))
        .bind(owner)
        .fetch_one(pool)
        .await?;

        Ok(prefs)
    }

    /// Insert or overwrite the owner's row and return what was stored.
    pub async fn upsert(&self, pool: &PgPool, owner: Uuid) -> Result<Self, DatabaseError> {
        let prefs = sqlx::query_as::<_, Preferences>(&format!(
            "INSERT INTO preferences (user_id, {cols})
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (user_id) DO UPDATE SET
                savings_goals = EXCLUDED.savings_goals,
                income_sources = EXCLUDED.income_sources,
                expenses = EXCLUDED.expenses,
                loans = EXCLUDED.loans,
                tuition = EXCLUDED.tuition
             RETURNING {cols}",
            cols = COLUMNS
        ))
        .bind(owner)
        .bind(self.savings_goals)
        .bind(self.income_sources)
        .bind(self.expenses)
        .bind(self.loans)
        .bind(self.tuition)
        .fetch_one(pool)
        .await?;

        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_flags_default_to_visible() {
        let prefs: Preferences = serde_json::from_value(json!({ "loans": false })).unwrap();
        assert!(!prefs.loans);
        assert!(prefs.savings_goals && prefs.income_sources && prefs.expenses && prefs.tuition);
    }

    #[test]
    fn serializes_with_client_keys() {
        let value = serde_json::to_value(Preferences::default()).unwrap();
        for key in ["savingsGoals", "incomeSources", "expenses", "loans", "tuition"] {
            assert_eq!(value[key], true, "{} should be true", key);
        }
    }
}
