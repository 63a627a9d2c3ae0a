use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use crate::cache::{to_cache_json, CacheService};

/// Личность посетителя, привязанная к токену сессии. Хранится в Redis
/// как JSON и читается обёрткой аутентификации на каждом запросе.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub email: String,
}

fn session_key(token: &str) -> String {
    format!("session:{}", token)
}

// Непрозрачный токен: sha256 от случайного uuid и email, hex-строка
fn generate_session_token(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(Uuid::new_v4().as_bytes());
    hasher.update(email.as_bytes());
    format!("{:x}", hasher.finalize())
}

impl CacheService {
    /// Создать сессию после входа и вернуть её токен.
    pub async fn create_session(
        &self,
        user: &SessionUser,
        ttl_seconds: u64,
    ) -> Result<String, redis::RedisError> {
        let token = generate_session_token(&user.email);
        let payload = to_cache_json(user)?;
        let mut conn = self.conn();
        let _: () = conn.set_ex(session_key(&token), payload, ttl_seconds).await?;
        Ok(token)
    }

    /// Личность по токену; TTL продлевается при каждом обращении.
    pub async fn session_user(
        &self,
        token: &str,
        ttl_seconds: u64,
    ) -> Result<Option<SessionUser>, redis::RedisError> {
        let mut conn = self.conn();
        let data: Option<String> = conn.get(session_key(token)).await?;
        let Some(json) = data else {
            return Ok(None);
        };
        match serde_json::from_str::<SessionUser>(&json) {
            Ok(user) => {
                let _: () = conn.expire(session_key(token), ttl_seconds as i64).await?;
                Ok(Some(user))
            }
            // Нечитаемая запись равнозначна отсутствию сессии
            Err(_) => Ok(None),
        }
    }

    /// Инвалидировать сессию (logout).
    pub async fn invalidate_session(&self, token: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.conn();
        let _: () = conn.del(session_key(token)).await?;
        info!("Invalidated session {}", &token[..token.len().min(8)]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_64_hex_chars() {
        let token = generate_session_token("visitor@example.com");
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_do_not_repeat_for_the_same_email() {
        let first = generate_session_token("visitor@example.com");
        let second = generate_session_token("visitor@example.com");
        assert_ne!(first, second);
    }
}
