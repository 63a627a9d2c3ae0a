use redis::AsyncCommands;

use crate::cache::{to_cache_json, CacheService};
use crate::services::wizard::BookingWizard;

fn wizard_key(token: &str) -> String {
    format!("wizard:{}", token)
}

impl CacheService {
    /// Состояние мастера для сессии; свежее, если ещё не сохранялось
    /// или запись истекла.
    pub async fn load_wizard(&self, token: &str) -> Result<BookingWizard, redis::RedisError> {
        let mut conn = self.conn();
        let data: Option<String> = conn.get(wizard_key(token)).await?;
        Ok(data
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default())
    }

    pub async fn save_wizard(
        &self,
        token: &str,
        wizard: &BookingWizard,
        ttl_seconds: u64,
    ) -> Result<(), redis::RedisError> {
        let payload = to_cache_json(wizard)?;
        let mut conn = self.conn();
        conn.set_ex(wizard_key(token), payload, ttl_seconds).await
    }

    /// Сбросить мастер после отправки бронирования.
    pub async fn clear_wizard(&self, token: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.conn();
        let _: () = conn.del(wizard_key(token)).await?;
        Ok(())
    }
}
