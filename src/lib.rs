pub mod cache;
pub mod config;
pub mod content;
pub mod controllers;
pub mod database;
pub mod middleware;
pub mod models;
pub mod redis_client;
pub mod services;

use std::sync::Arc;

use crate::services::payment::{PaymentGateway, SimulatedGateway};

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub cache: cache::CacheService,
    pub config: config::Config,
    pub payments: Arc<dyn PaymentGateway>,
}

impl AppState {
    pub async fn new(config: config::Config) -> Result<Arc<Self>, Box<dyn std::error::Error>> {
        let db = database::Database::new(&config.database.url, config.database.pool_size).await?;

        db.run_migrations().await?;

        let redis = redis_client::RedisClient::new(&config.redis.url).await?;
        redis.ping().await?;

        let cache = cache::CacheService::new(redis);
        let payments: Arc<dyn PaymentGateway> =
            Arc::new(SimulatedGateway::from_config(&config.payment));

        Ok(Arc::new(Self {
            db,
            cache,
            config,
            payments,
        }))
    }
}
