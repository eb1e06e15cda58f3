use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::DisabledCollections;
use crate::database::models::{
    Expense, IncomeSource, Loan, Preferences, SavingsGoal, TuitionEntry, UserSummary,
};
use crate::database::service as users;
use crate::database::{DatabaseError, OwnedRecord, Repository};

/// Combined view of everything a user owns. Collections switched off in
/// preferences are `None` and left out of the JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_goals: Option<Vec<SavingsGoal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_sources: Option<Vec<IncomeSource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expenses: Option<Vec<Expense>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loans: Option<Vec<Loan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuition: Option<Vec<TuitionEntry>>,
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub user: UserSummary,
    pub preferences: Preferences,
}

/// Which collections the dashboard should fetch for these preferences.
pub fn collections_to_load(prefs: &Preferences, mode: DisabledCollections) -> Preferences {
    match mode {
        DisabledCollections::Include => Preferences::default(),
        DisabledCollections::Omit => *prefs,
    }
}

async fn collect<T: OwnedRecord>(
    pool: &PgPool,
    owner: Uuid,
    include: bool,
) -> Result<Option<Vec<T>>, DatabaseError> {
    if !include {
        return Ok(None);
    }
    Repository::<T>::new(pool.clone())
        .list_for_owner(owner)
        .await
        .map(Some)
}

impl Dashboard {
    pub async fn load(
        pool: &PgPool,
        owner: Uuid,
        mode: DisabledCollections,
    ) -> Result<Self, DatabaseError> {
        let prefs = Preferences::get_or_create(pool, owner).await?;
        let load = collections_to_load(&prefs, mode);

        let (savings_goals, income_sources, expenses, loans, tuition) = futures::try_join!(
            collect::<SavingsGoal>(pool, owner, load.savings_goals),
            collect::<IncomeSource>(pool, owner, load.income_sources),
            collect::<Expense>(pool, owner, load.expenses),
            collect::<Loan>(pool, owner, load.loans),
            collect::<TuitionEntry>(pool, owner, load.tuition),
        )?;

        Ok(Self {
            user_id: owner,
            savings_goals,
            income_sources,
            expenses,
            loans,
            tuition,
        })
    }
}

impl Profile {
    pub async fn load(pool: &PgPool, owner: Uuid) -> Result<Self, DatabaseError> {
        let user = users::find_user_by_id(pool, owner).await?;
        let preferences = Preferences::get_or_create(pool, owner).await?;

        Ok(Self {
            user: user.into(),
            preferences,
        })
    }
}
