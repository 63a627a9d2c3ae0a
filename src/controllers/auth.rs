use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{cache::sessions::SessionUser, middleware::AuthUser, models::User, AppState};

use super::{to_api_error, to_validation_error, ApiResult};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(sign_up))
        .route("/auth/signin", post(sign_in))
        .route("/auth/signout", post(sign_out))
}

/* ---------- SIGN UP ---------- */

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters"),
        custom(function = password_strength)
    )]
    pub password: String,
    #[validate(must_match(other = password, message = "Passwords don't match"))]
    pub confirm_password: String,
    #[validate(length(min = 2, message = "Full name must be at least 2 characters"))]
    pub full_name: String,
}

// Минимум одна заглавная, одна строчная буква и одна цифра
fn password_strength(password: &str) -> Result<(), ValidationError> {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if has_upper && has_lower && has_digit {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_strength");
        err.message =
            Some("Password must contain an uppercase letter, a lowercase letter and a number".into());
        Err(err)
    }
}

// POST /api/auth/signup
async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<impl IntoResponse> {
    if let Err(errors) = req.validate() {
        return Err(to_validation_error(
            "Failed to create account. Please try again.",
            &errors,
        ));
    }

    let email = req.email.trim().to_lowercase();

    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST).map_err(|e| {
        error!("bcrypt hash error: {:?}", e);
        to_api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create account. Please try again.",
        )
    })?;

    // Пользователь и профиль создаются одной транзакцией
    let mut tx = state.db.pool.begin().await.map_err(|e| {
        error!("sign_up: failed to begin tx: {:?}", e);
        to_api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create account. Please try again.",
        )
    })?;

    let user_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        // Сюда попадает и повторная регистрация на занятый email; наружу
        // уходит один общий ответ без уточнения причины
        warn!("sign_up insert error: {:?}", e);
        to_api_error(
            StatusCode::CONFLICT,
            "Failed to create account. Please try again.",
        )
    })?;

    sqlx::query("INSERT INTO profiles (id, email, full_name) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(&email)
        .bind(req.full_name.trim())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("sign_up profile insert error: {:?}", e);
            to_api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create account. Please try again.",
            )
        })?;

    tx.commit().await.map_err(|e| {
        error!("sign_up commit error: {:?}", e);
        to_api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create account. Please try again.",
        )
    })?;

    info!("New account created: {}", email);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Account created successfully! You can now sign in."
        })),
    ))
}

/* ---------- SIGN IN ---------- */

#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

// POST /api/auth/signin
async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SigninRequest>,
) -> ApiResult<impl IntoResponse> {
    if let Err(errors) = req.validate() {
        return Err(to_validation_error(
            "Failed to log in. Please check your credentials.",
            &errors,
        ));
    }

    let email = req.email.trim().to_lowercase();

    let user = User::find_by_email(&email, &state.db).await.map_err(|e| {
        error!("sign_in lookup error: {:?}", e);
        to_api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to log in. Please try again.",
        )
    })?;

    // Неизвестный email и неверный пароль дают один и тот же ответ
    let user = match user {
        Some(user) if user.verify_password(&req.password) => user,
        _ => {
            return Err(to_api_error(
                StatusCode::UNAUTHORIZED,
                "Failed to log in. Please check your credentials.",
            ))
        }
    };

    let session = SessionUser {
        user_id: user.id,
        email: user.email.clone(),
    };
    let token = state
        .cache
        .create_session(&session, state.config.session.ttl_seconds)
        .await
        .map_err(|e| {
            error!("session store error: {:?}", e);
            to_api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to log in. Please try again.",
            )
        })?;

    info!("User signed in: {}", user.email);

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Successfully logged in!",
            "token": token,
            "user": { "id": user.id, "email": user.email }
        })),
    ))
}

/* ---------- SIGN OUT ---------- */

// POST /api/auth/signout
async fn sign_out(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    state
        .cache
        .invalidate_session(&user.session_token)
        .await
        .map_err(|e| {
            error!("sign_out error: {:?}", e);
            to_api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to sign out. Please try again.",
            )
        })?;

    Ok((
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Signed out" })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    fn signup(email: &str, password: &str, confirm: &str, full_name: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            full_name: full_name.to_string(),
        }
    }

    #[test]
    fn signup_accepts_a_well_formed_request() {
        let email: String = SafeEmail().fake();
        let req = signup(&email, "Sunrise42", "Sunrise42", "Asha Verma");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn signup_rejects_weak_passwords() {
        let email: String = SafeEmail().fake();
        // без заглавных
        assert!(signup(&email, "sunrise42", "sunrise42", "Asha Verma")
            .validate()
            .is_err());
        // без цифр
        assert!(signup(&email, "SunriseNow", "SunriseNow", "Asha Verma")
            .validate()
            .is_err());
        // короче восьми символов
        assert!(signup(&email, "Sun42", "Sun42", "Asha Verma").validate().is_err());
    }

    #[test]
    fn signup_rejects_mismatched_passwords() {
        let email: String = SafeEmail().fake();
        let req = signup(&email, "Sunrise42", "Sunrise43", "Asha Verma");
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("confirm_password"));
    }

    #[test]
    fn signup_rejects_bad_email_and_short_name() {
        assert!(signup("not-an-email", "Sunrise42", "Sunrise42", "Asha Verma")
            .validate()
            .is_err());
        let email: String = SafeEmail().fake();
        assert!(signup(&email, "Sunrise42", "Sunrise42", "A").validate().is_err());
    }

    #[test]
    fn signin_requires_an_email_and_a_plausible_password() {
        let req = SigninRequest {
            email: "not-an-email".to_string(),
            password: "Sunrise42".to_string(),
        };
        assert!(req.validate().is_err());

        let req = SigninRequest {
            email: SafeEmail().fake(),
            password: "short".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
