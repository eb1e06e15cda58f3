use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use super::{interest_rate, non_negative_amount};
use crate::database::repository::{not_found, OwnedRecord};
use crate::database::DatabaseError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Loan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub original_debt: Decimal,
    pub current_debt: Decimal,
    pub interest_rate: Decimal,
}

impl OwnedRecord for Loan {
    const TABLE: &'static str = "loans";
    const COLUMNS: &'static str = "id, user_id, original_debt, current_debt, interest_rate";
    const LABEL: &'static str = "Loan";
}

impl Loan {
    /// current_debt is allowed to exceed original_debt (accrued interest);
    /// this only reports it.
    pub fn exceeds_original(&self) -> bool {
        self.current_debt > self.original_debt
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewLoan {
    #[validate(custom(function = "non_negative_amount"))]
    pub original_debt: Decimal,
    #[validate(custom(function = "non_negative_amount"))]
    pub current_debt: Decimal,
    #[validate(custom(function = "interest_rate"))]
    pub interest_rate: Decimal,
}

impl NewLoan {
    pub async fn insert(&self, pool: &PgPool, owner: Uuid) -> Result<Loan, DatabaseError> {
        let loan = sqlx::query_as::<_, Loan>(
            "INSERT INTO loans (id, user_id, original_debt, current_debt, interest_rate)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, original_debt, current_debt, interest_rate",
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(self.original_debt)
        .bind(self.current_debt)
        .bind(self.interest_rate)
        .fetch_one(pool)
        .await?;

        Ok(loan)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoanDebtUpdate {
    #[validate(custom(function = "non_negative_amount"))]
    pub current_debt: Decimal,
}

impl LoanDebtUpdate {
    /// Only touches the row when both id and owner match.
    pub async fn apply(&self, pool: &PgPool, id: Uuid, owner: Uuid) -> Result<Loan, DatabaseError> {
        sqlx::query_as::<_, Loan>(
            "UPDATE loans SET current_debt = $1
             WHERE id = $2 AND user_id = $3
             RETURNING id, user_id, original_debt, current_debt, interest_rate",
        )
        .bind(self.current_debt)
        .bind(id)
        .bind(owner)
        .fetch_optional(pool)
        .await?
        .ok_or_else(not_found::<Loan>)
    }
}
