use chrono::NaiveDate;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache::{to_cache_json, CacheService};
use crate::models::ticket::TicketSelection;

/// Платёжная эстафета: данные бронирования, переданные со страницы
/// мастера на страницу оплаты. Живёт до успешной оплаты или до TTL;
/// при ошибке оплаты остаётся на месте, чтобы повтор использовал тот же
/// предикат обновления.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentHandoff {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub tickets: TicketSelection,
    pub total_amount: i64,
}

fn handoff_key(token: &str) -> String {
    format!("handoff:{}", token)
}

impl CacheService {
    pub async fn store_handoff(
        &self,
        token: &str,
        handoff: &PaymentHandoff,
        ttl_seconds: u64,
    ) -> Result<(), redis::RedisError> {
        let payload = to_cache_json(handoff)?;
        let mut conn = self.conn();
        conn.set_ex(handoff_key(token), payload, ttl_seconds).await
    }

    pub async fn load_handoff(
        &self,
        token: &str,
    ) -> Result<Option<PaymentHandoff>, redis::RedisError> {
        let mut conn = self.conn();
        let data: Option<String> = conn.get(handoff_key(token)).await?;
        Ok(data.and_then(|json| serde_json::from_str(&json).ok()))
    }

    /// Убрать эстафету после успешной оплаты.
    pub async fn clear_handoff(&self, token: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.conn();
        let _: () = conn.del(handoff_key(token)).await?;
        Ok(())
    }
}
