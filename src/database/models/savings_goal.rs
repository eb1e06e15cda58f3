use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use super::positive_amount;
use crate::database::repository::OwnedRecord;
use crate::database::DatabaseError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub target_amount: Decimal,
    pub deadline: NaiveDate,
}

impl OwnedRecord for SavingsGoal {
    const TABLE: &'static str = "savings_goals";
    const COLUMNS: &'static str = "id, user_id, target_amount, deadline";
    const LABEL: &'static str = "Savings goal";
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsGoal {
    #[validate(custom(function = "positive_amount"))]
    pub target_amount: Decimal,
    pub deadline: NaiveDate,
}

impl NewSavingsGoal {
    pub async fn insert(&self, pool: &PgPool, owner: Uuid) -> Result<SavingsGoal, DatabaseError> {
        let goal = sqlx::query_as::<_, SavingsGoal>(
            "INSERT INTO savings_goals (id, user_id, target_amount, deadline)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, target_amount, deadline",
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(self.target_amount)
        .bind(self.deadline)
        .fetch_one(pool)
        .await?;

        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_camel_case_body() {
        let goal: NewSavingsGoal =
            serde_json::from_value(json!({ "targetAmount": "2500.00", "deadline": "2027-06-30" })).unwrap();
        assert_eq!(goal.target_amount, Decimal::new(250000, 2));
        assert_eq!(goal.deadline, NaiveDate::from_ymd_opt(2027, 6, 30).unwrap());
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn accepts_numeric_amounts() {
        let goal: NewSavingsGoal =
            serde_json::from_value(json!({ "targetAmount": 100, "deadline": "2027-01-01" })).unwrap();
        assert_eq!(goal.target_amount, Decimal::from(100));
    }

    #[test]
    fn rejects_non_positive_target() {
        let goal: NewSavingsGoal =
            serde_json::from_value(json!({ "targetAmount": "0", "deadline": "2027-01-01" })).unwrap();
        assert!(goal.validate().is_err());
    }
}
