use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use super::{non_negative_amount, plain_text};
use crate::database::repository::OwnedRecord;
use crate::database::DatabaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TuitionKind {
    Tuition,
    Scholarship,
    Grant,
}

impl TuitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TuitionKind::Tuition => "tuition",
            TuitionKind::Scholarship => "scholarship",
            TuitionKind::Grant => "grant",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown tuition entry type '{0}'")]
pub struct UnknownTuitionKind(String);

impl TryFrom<String> for TuitionKind {
    type Error = UnknownTuitionKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "tuition" => Ok(TuitionKind::Tuition),
            "scholarship" => Ok(TuitionKind::Scholarship),
            "grant" => Ok(TuitionKind::Grant),
            _ => Err(UnknownTuitionKind(value)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TuitionEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "entry_type", try_from = "String")]
    pub kind: TuitionKind,
    pub source: String,
    pub amount: Decimal,
}

impl OwnedRecord for TuitionEntry {
    const TABLE: &'static str = "tuition";
    const COLUMNS: &'static str = "id, user_id, entry_type, source, amount";
    const LABEL: &'static str = "Tuition entry";
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTuitionEntry {
    #[serde(rename = "type")]
    pub kind: TuitionKind,
    #[validate(
        length(min = 1, max = 255, message = "source must be 1 to 255 characters"),
        custom(function = "plain_text")
    )]
    pub source: String,
    #[validate(custom(function = "non_negative_amount"))]
    pub amount: Decimal,
}

impl NewTuitionEntry {
    pub async fn insert(&self, pool: &PgPool, owner: Uuid) -> Result<TuitionEntry, DatabaseError> {
        let entry = sqlx::query_as::<_, TuitionEntry>(
            "INSERT INTO tuition (id, user_id, entry_type, source, amount)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, entry_type, source, amount",
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(self.kind.as_str())
        .bind(&self.source)
        .bind(self.amount)
        .fetch_one(pool)
        .await?;

        Ok(entry)
    }
}
