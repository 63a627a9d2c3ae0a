use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Профиль посетителя, один-к-одному с пользователем. Создаётся при
/// регистрации и дальше приложением не изменяется.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub async fn find_by_user(
        user_id: Uuid,
        db: &crate::database::Database,
    ) -> Result<Option<Profile>, sqlx::Error> {
        sqlx::query_as::<_, Profile>(
            "SELECT id, email, full_name, created_at FROM profiles WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&db.pool)
        .await
    }
}
