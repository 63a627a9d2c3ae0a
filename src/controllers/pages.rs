use axum::{routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

use crate::content;

// Контентные страницы публичные, личность посетителя не требуется
pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .route("/exhibitions", get(exhibitions))
        .route("/events", get(events))
        .route("/collection", get(collection))
}

// GET /api/exhibitions
async fn exhibitions() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "current": content::EXHIBITIONS,
        "upcoming": content::UPCOMING_EXHIBITIONS,
    }))
}

// GET /api/events
async fn events() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "categories": content::EVENT_CATEGORIES,
        "events": content::EVENTS,
    }))
}

// GET /api/collection
async fn collection() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "collections": content::COLLECTIONS,
    }))
}
