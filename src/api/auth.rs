//! Login and password reset proxies.
//!
//! The backend answers with `{ success | status, message, data }`. A
//! successful login hands back `data.auth_token`, which is stored in the
//! HTTP-only session cookie; the browser never sees the raw token otherwise.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::api::AppState;
use crate::session::{expired_cookie, session_cookie};
use crate::ui::{self, pages::*};

#[derive(Debug, Deserialize)]
pub struct LoginPageParams {
    #[serde(default)]
    auth: Option<String>,
}

pub async fn login_page(Query(params): Query<LoginPageParams>) -> Html<String> {
    Html(ui::render_document(
        LoginPage,
        LoginPageProps {
            session_expired: params.auth.as_deref() == Some("false"),
        },
    ))
}

pub async fn forgot_password_page() -> Html<String> {
    Html(ui::render_static(ForgotPasswordPage))
}

/// Outcome of forwarding a credentials request to the backend.
enum ProxyOutcome {
    /// 200 with the success flag set
    Accepted(Value),
    /// Answered 2xx, but the flag was false
    Refused(Value),
    /// Backend error status, forwarded as-is
    Failed(StatusCode, Value),
    /// Backend unreachable
    NoResponse,
}

/// Forward `body` to `path` and classify the answer by `flag`
/// (`success` for login, `status` for password reset).
async fn forward(state: &AppState, path: &str, body: &Value, flag: &str) -> ProxyOutcome {
    match state.backend.post_public(path, body).await {
        Ok((status, body)) => {
            let accepted = body.get(flag).and_then(Value::as_bool).unwrap_or(false);
            if status == StatusCode::OK && accepted {
                ProxyOutcome::Accepted(body)
            } else if status.is_success() {
                ProxyOutcome::Refused(body)
            } else {
                ProxyOutcome::Failed(status, body)
            }
        }
        Err(e) => {
            warn!(path, error = %e, "Auth request got no response");
            ProxyOutcome::NoResponse
        }
    }
}

fn message_of(body: &Value) -> Value {
    body.get("message").cloned().unwrap_or(Value::Null)
}

impl IntoResponse for ProxyOutcome {
    fn into_response(self) -> Response {
        match self {
            ProxyOutcome::Accepted(body) => (StatusCode::OK, Json(body)).into_response(),
            ProxyOutcome::Refused(body) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": message_of(&body) })),
            )
                .into_response(),
            ProxyOutcome::Failed(status, body) => (status, Json(body)).into_response(),
            ProxyOutcome::NoResponse => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "message": "No response from Server" })),
            )
                .into_response(),
        }
    }
}

/// POST /api/auth/login
pub async fn login(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    match forward(&state, "/auth/login", &body, "success").await {
        ProxyOutcome::Accepted(body) => {
            let Some(token) = body.pointer("/data/auth_token").and_then(Value::as_str) else {
                warn!("Login succeeded without an auth token");
                return ProxyOutcome::Refused(body).into_response();
            };
            let session = &state.config.session;
            let cookie = session_cookie(&session.cookie_name, token, session.max_age_secs);
            info!("Admin signed in");
            ([(header::SET_COOKIE, cookie)], Json(body)).into_response()
        }
        other => other.into_response(),
    }
}

/// POST /api/auth/forgot-password
pub async fn forgot_password(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    forward(&state, "/auth/forget-password", &body, "status")
        .await
        .into_response()
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> Response {
    let cookie = expired_cookie(&state.config.session.cookie_name);
    ([(header::SET_COOKIE, cookie)], Redirect::to("/auth/login")).into_response()
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use crate::api::router;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_login_success_sets_cookie() {
        let backend = Router::new().route(
            "/auth/login",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["email"], "admin@example.com");
                Json(json!({ "success": true, "message": "Welcome", "data": { "auth_token": "abc" } }))
            }),
        );
        let (state, _) = state_with_backend(backend).await;

        let response = router(state)
            .oneshot(post_json(
                "/api/auth/login",
                json!({ "email": "admin@example.com", "password": "pw" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::SET_COOKIE).unwrap(),
            "dalukwa_admin=abc; Max-Age=900000; HttpOnly; Path=/"
        );
        assert_eq!(json_body(response).await["message"], "Welcome");
    }

    #[tokio::test]
    async fn test_login_refused_is_401_without_cookie() {
        let backend = Router::new().route(
            "/auth/login",
            post(|| async { Json(json!({ "success": false, "message": "Invalid credentials" })) }),
        );
        let (state, _) = state_with_backend(backend).await;

        let response = router(state)
            .oneshot(post_json("/api/auth/login", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(json_body(response).await["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_forwards_backend_error_status() {
        let backend = Router::new().route(
            "/auth/login",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "message": "email is required" })),
                )
            }),
        );
        let (state, _) = state_with_backend(backend).await;

        let response = router(state)
            .oneshot(post_json("/api/auth/login", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(json_body(response).await["message"], "email is required");
    }

    #[tokio::test]
    async fn test_login_without_backend_is_503() {
        use crate::api::AppState;
        use crate::backend::BackendClient;
        use crate::config::{BackendConfig, Config};
        use crate::relay::{testing::RecordingSink, DeviceRelay};
        use std::sync::Arc;
        use std::time::Duration;

        let client = BackendClient::new(&BackendConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 2,
        });
        let relay = DeviceRelay::new(Arc::new(RecordingSink::default()), Duration::from_secs(600));
        let state = AppState::new(Config::default(), client, relay);

        let response = router(state)
            .oneshot(post_json("/api/auth/login", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["message"], "No response from Server");
    }

    #[tokio::test]
    async fn test_forgot_password_uses_status_flag() {
        let backend = Router::new().route(
            "/auth/forget-password",
            post(|| async { Json(json!({ "status": true, "message": "Reset link sent" })) }),
        );
        let (state, _) = state_with_backend(backend).await;

        let response = router(state)
            .oneshot(post_json(
                "/api/auth/forgot-password",
                json!({ "email": "admin@example.com" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(json_body(response).await["message"], "Reset link sent");
    }

    #[tokio::test]
    async fn test_logout_expires_cookie() {
        let (state, _) = state_with_backend(Router::new()).await;
        let response = router(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert!(cookie.to_str().unwrap().contains("Max-Age=0"));
    }
}
