use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::{
    middleware::AuthUser,
    models::{Booking, Profile},
    AppState,
};

use super::{to_api_error, ApiResult};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/profile", get(profile_overview))
}

// GET /api/profile — профиль и история бронирований текущего посетителя
async fn profile_overview(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    let profile = Profile::find_by_user(user.user_id, &state.db)
        .await
        .map_err(|e| {
            error!("profile sql error: {:?}", e);
            to_api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load profile data")
        })?
        .ok_or_else(|| {
            // Профиль создаётся вместе с пользователем; его отсутствие —
            // рассинхрон данных, а не пустое состояние
            error!("profile row missing for user {}", user.user_id);
            to_api_error(StatusCode::NOT_FOUND, "Failed to load profile data")
        })?;

    let bookings = Booking::for_user(user.user_id, &state.db)
        .await
        .map_err(|e| {
            error!("bookings sql error: {:?}", e);
            to_api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load profile data")
        })?;

    // Пустая история — явное состояние, а не ошибка
    Ok(Json(json!({
        "success": true,
        "profile": profile,
        "has_bookings": !bookings.is_empty(),
        "bookings": bookings,
    })))
}
