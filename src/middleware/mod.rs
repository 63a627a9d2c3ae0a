use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Аутентифицированный посетитель. Извлекается из Bearer-токена сессии
/// до выполнения обработчика; защищённые маршруты просто объявляют этот
/// экстрактор параметром.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub session_token: String,
}

/// Отказ аутентификации: 401 и адрес страницы входа, на которую клиент
/// должен увести посетителя. Срабатывает и при недоступном хранилище
/// сессий — закрыто по умолчанию.
#[derive(Debug)]
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "success": false,
                "message": "Please sign in to continue",
                "redirect": "/login"
            })),
        )
            .into_response()
    }
}

// Токен из заголовка Authorization: Bearer <token>
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<Arc<crate::AppState>> for AuthUser {
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthRedirect)?;

        let token = bearer_token(auth_header).ok_or(AuthRedirect)?;

        let session = state
            .cache
            .session_user(token, state.config.session.ttl_seconds)
            .await
            .map_err(|e| {
                tracing::warn!("session lookup failed: {:?}", e);
                AuthRedirect
            })?
            .ok_or(AuthRedirect)?;

        Ok(AuthUser {
            user_id: session.user_id,
            email: session.email,
            session_token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_strips_the_scheme() {
        assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
    }

    #[test]
    fn bearer_token_rejects_other_schemes_and_empty_tokens() {
        assert_eq!(bearer_token("Basic abc123"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("abc123"), None);
    }
}
