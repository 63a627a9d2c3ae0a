use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    cache::handoff::PaymentHandoff,
    middleware::AuthUser,
    models::booking as booking_model,
    models::ticket::TicketCategory,
    services::wizard::{
        BookingForm, BookingWizard, FormPatch, SubmitError, WizardStep, AVAILABLE_TIMES,
    },
    AppState,
};

use super::{to_api_error, to_validation_error, ApiResult};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/booking", get(wizard_state))
        .route("/booking/form", put(update_form))
        .route("/booking/next", post(next_step))
        .route("/booking/back", post(back_step))
        .route("/booking/submit", post(submit_booking))
}

/* ---------- представление мастера ---------- */

#[derive(Debug, Serialize)]
struct WizardView {
    step: WizardStep,
    form: BookingForm,
    total_tickets: u32,
    total_amount: i64,
    prices: BTreeMap<&'static str, i64>,
    available_times: [&'static str; 8],
}

fn wizard_view(wizard: &BookingWizard) -> WizardView {
    WizardView {
        step: wizard.step,
        total_tickets: wizard.form.tickets.total_tickets(),
        total_amount: wizard.form.total_amount(),
        form: wizard.form.clone(),
        prices: TicketCategory::ALL
            .iter()
            .map(|&category| (category.as_str(), category.price()))
            .collect(),
        available_times: AVAILABLE_TIMES,
    }
}

fn store_error<E: std::fmt::Debug>(e: E) -> (StatusCode, Json<serde_json::Value>) {
    error!("booking wizard store error: {:?}", e);
    to_api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to load your booking. Please try again.",
    )
}

/* ---------- HTTP handlers ---------- */

// GET /api/booking
async fn wizard_state(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    let wizard = state
        .cache
        .load_wizard(&user.session_token)
        .await
        .map_err(store_error)?;
    Ok(Json(wizard_view(&wizard)))
}

// PUT /api/booking/form
async fn update_form(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(patch): Json<FormPatch>,
) -> ApiResult<impl IntoResponse> {
    let mut wizard = state
        .cache
        .load_wizard(&user.session_token)
        .await
        .map_err(store_error)?;

    wizard.apply(patch);

    state
        .cache
        .save_wizard(
            &user.session_token,
            &wizard,
            state.config.booking.wizard_ttl_seconds,
        )
        .await
        .map_err(store_error)?;

    Ok(Json(wizard_view(&wizard)))
}

// POST /api/booking/next
async fn next_step(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    step_transition(state, user, true).await
}

// POST /api/booking/back
async fn back_step(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    step_transition(state, user, false).await
}

async fn step_transition(
    state: Arc<AppState>,
    user: AuthUser,
    forward: bool,
) -> ApiResult<Json<WizardView>> {
    let mut wizard = state
        .cache
        .load_wizard(&user.session_token)
        .await
        .map_err(store_error)?;

    let moved = if forward {
        wizard.advance()
    } else {
        wizard.back()
    };
    if let Err(e) = moved {
        return Err(to_api_error(StatusCode::BAD_REQUEST, &e.to_string()));
    }

    state
        .cache
        .save_wizard(
            &user.session_token,
            &wizard,
            state.config.booking.wizard_ttl_seconds,
        )
        .await
        .map_err(store_error)?;

    Ok(Json(wizard_view(&wizard)))
}

// POST /api/booking/submit
async fn submit_booking(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    let wizard = state
        .cache
        .load_wizard(&user.session_token)
        .await
        .map_err(store_error)?;

    let today = Utc::now().date_naive();
    let validated = match wizard.submit(today) {
        Ok(validated) => validated,
        Err(SubmitError::Wizard(e)) => {
            return Err(to_api_error(StatusCode::BAD_REQUEST, &e.to_string()))
        }
        Err(SubmitError::Validation(errors)) => {
            // Мастер остаётся на финальном шаге, клиент показывает ошибки полей
            return Err(to_validation_error(
                "Failed to process booking. Please try again.",
                &errors,
            ));
        }
    };

    sqlx::query(
        r#"
        INSERT INTO bookings
            (user_id, event_date, event_time,
             adult_tickets, senior_tickets, student_tickets, child_tickets,
             total_amount, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(user.user_id)
    .bind(validated.event_date)
    .bind(validated.event_time.as_str())
    .bind(validated.tickets.adult as i32)
    .bind(validated.tickets.senior as i32)
    .bind(validated.tickets.student as i32)
    .bind(validated.tickets.child as i32)
    .bind(validated.total_amount)
    .bind(booking_model::STATUS_CONFIRMED)
    .execute(&state.db.pool)
    .await
    .map_err(|e| {
        error!("create booking sql error: {:?}", e);
        to_api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to process booking. Please try again.",
        )
    })?;

    // Эстафета для страницы оплаты; живёт в Redis до оплаты или TTL
    let handoff = PaymentHandoff {
        user_id: user.user_id,
        date: validated.event_date,
        time: validated.event_time.clone(),
        tickets: validated.tickets,
        total_amount: validated.total_amount,
    };
    state
        .cache
        .store_handoff(
            &user.session_token,
            &handoff,
            state.config.booking.handoff_ttl_seconds,
        )
        .await
        .map_err(|e| {
            error!("handoff store error: {:?}", e);
            to_api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process booking. Please try again.",
            )
        })?;

    // Следующее бронирование начинается с чистого мастера
    if let Err(e) = state.cache.clear_wizard(&user.session_token).await {
        warn!("failed to clear wizard state: {:?}", e);
    }

    info!(
        "Booking confirmed for {}: {} {} ({} tickets, total {})",
        user.email,
        validated.event_date,
        validated.event_time,
        validated.tickets.total_tickets(),
        validated.total_amount
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Booking confirmed. Proceed to payment.",
            "redirect": "/booking/payment",
            "total_amount": validated.total_amount
        })),
    ))
}
