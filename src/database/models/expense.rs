use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use super::{non_negative_amount, plain_text};
use crate::database::repository::OwnedRecord;
use crate::database::DatabaseError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

impl OwnedRecord for Expense {
    const TABLE: &'static str = "expenses";
    const COLUMNS: &'static str = "id, user_id, category, amount, date, notes";
    const LABEL: &'static str = "Expense";
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    #[validate(
        length(min = 1, max = 255, message = "category must be 1 to 255 characters"),
        custom(function = "plain_text")
    )]
    pub category: String,
    #[validate(custom(function = "non_negative_amount"))]
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    #[validate(custom(function = "plain_text"))]
    pub notes: Option<String>,
}

impl NewExpense {
    pub async fn insert(&self, pool: &PgPool, owner: Uuid) -> Result<Expense, DatabaseError> {
        // Blank notes are stored as NULL
        let notes = self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty());

        let expense = sqlx::query_as::<_, Expense>(
            "INSERT INTO expenses (id, user_id, category, amount, date, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, user_id, category, amount, date, notes",
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(&self.category)
        .bind(self.amount)
        .bind(self.date)
        .bind(notes)
        .fetch_one(pool)
        .await?;

        Ok(expense)
    }
}
