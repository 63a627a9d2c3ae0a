use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

// Статусы бронирования. Создаётся как confirmed, после оплаты один раз
// переводится в paid; других переходов нет.
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_PAID: &str = "paid";

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub adult_tickets: i32,
    pub senior_tickets: i32,
    pub student_tickets: i32,
    pub child_tickets: i32,
    pub total_amount: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    // История бронирований пользователя, ближайшие визиты первыми
    pub async fn for_user(
        user_id: Uuid,
        db: &crate::database::Database,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, user_id, event_date, event_time,
                   adult_tickets, senior_tickets, student_tickets, child_tickets,
                   total_amount, status, created_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY event_date
            "#,
        )
        .bind(user_id)
        .fetch_all(&db.pool)
        .await
    }
}
