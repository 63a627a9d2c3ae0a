use crate::redis_client::RedisClient;

pub mod handoff;
pub mod sessions;
pub mod wizard;

/// Фасад над Redis для короткоживущего состояния: сессии посетителей,
/// формы мастера бронирования и платёжные эстафеты. Всё с TTL, ничего
/// из этого не переживает срок своей сессии.
#[derive(Clone)]
pub struct CacheService {
    redis: RedisClient,
}

impl CacheService {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    pub(crate) fn conn(&self) -> redis::aio::MultiplexedConnection {
        self.redis.conn.clone()
    }
}

// Сериализация в JSON перед записью в Redis; ошибки приводим к RedisError,
// чтобы у вызывающих был один тип ошибки хранилища
pub(crate) fn to_cache_json<T: serde::Serialize>(value: &T) -> Result<String, redis::RedisError> {
    serde_json::to_string(value)
        .map_err(|_| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialize error")))
}
