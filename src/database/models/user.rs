use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// bcrypt hash, never serialized
    pub password: String,
    pub password_length: i32,
}

/// Identity fields returned by `/profile`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: Uuid,
    pub email: String,
    pub password_length: i32,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            password_length: user.password_length,
        }
    }
}
