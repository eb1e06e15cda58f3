use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use super::{non_negative_amount, plain_text};
use crate::database::repository::OwnedRecord;
use crate::database::DatabaseError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IncomeSource {
    pub id: Uuid,
    pub user_id: Uuid,
    pub source: String,
    pub amount: Decimal,
    pub frequency: String,
}

impl OwnedRecord for IncomeSource {
    const TABLE: &'static str = "income_sources";
    const COLUMNS: &'static str = "id, user_id, source, amount, frequency";
    const LABEL: &'static str = "Income source";
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewIncomeSource {
    #[validate(
        length(min = 1, max = 255, message = "source must be 1 to 255 characters"),
        custom(function = "plain_text")
    )]
    pub source: String,
    #[validate(custom(function = "non_negative_amount"))]
    pub amount: Decimal,
    #[validate(
        length(min = 1, max = 50, message = "frequency must be 1 to 50 characters"),
        custom(function = "plain_text")
    )]
    pub frequency: String,
}

impl NewIncomeSource {
    pub async fn insert(&self, pool: &PgPool, owner: Uuid) -> Result<IncomeSource, DatabaseError> {
        let income = sqlx::query_as::<_, IncomeSource>(
            "INSERT INTO income_sources (id, user_id, source, amount, frequency)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, source, amount, frequency",
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(&self.source)
        .bind(self.amount)
        .bind(&self.frequency)
        .fetch_one(pool)
        .await?;

        Ok(income)
    }
}
