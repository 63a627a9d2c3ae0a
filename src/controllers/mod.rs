pub mod auth;
pub mod booking;
pub mod pages;
pub mod payment;
pub mod profile;

use axum::{http::StatusCode, Json, Router};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(auth::routes())
        .merge(pages::routes())
        .merge(booking::routes())
        .merge(payment::routes())
        .merge(profile::routes())
}

/* ---------- общие ошибки API ---------- */

pub type ApiResult<T> = Result<T, (StatusCode, Json<serde_json::Value>)>;

// Ошибка уровня операции: клиент показывает message как уведомление
pub fn to_api_error(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(json!({ "success": false, "message": message })))
}

// Ошибки валидации формы: общее уведомление плюс разбивка по полям
pub fn to_validation_error<E: Serialize>(
    message: &str,
    errors: &E,
) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "success": false, "message": message, "errors": errors })),
    )
}
