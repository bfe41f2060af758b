//! HTTP routes
//!
//! - `pages`: server-rendered dashboard pages behind the session cookie
//! - `auth`: login / password reset proxies to the backend
//! - `schedule`: JSON routes behind the campaign schedule page

mod auth;
mod pages;
mod schedule;

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::backend::BackendClient;
use crate::config::Config;
use crate::relay::DeviceRelay;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: BackendClient,
    pub relay: Arc<DeviceRelay>,
    pub started_at: Instant,
    /// Cancelled on shutdown; ends long-lived responses such as preview streams
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(config: Config, backend: BackendClient, relay: DeviceRelay) -> Self {
        Self {
            config: Arc::new(config),
            backend,
            relay: Arc::new(relay),
            started_at: Instant::now(),
            shutdown: CancellationToken::new(),
        }
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub backend: String,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "signage-admin",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        backend: state.backend.base_url().to_string(),
    })
}

/// Build the router with every page and API route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/screens") }))
        .route("/status", get(status_handler))
        // Auth
        .route("/auth/login", get(auth::login_page))
        .route("/auth/forgot-password", get(auth::forgot_password_page))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/logout", post(auth::logout))
        // Pages
        .route("/organizations", get(pages::organizations))
        .route("/screens", get(pages::screens))
        .route(
            "/campaign/campaign-schedule/{screen_id}",
            get(pages::campaign_schedule),
        )
        .route(
            "/campaign/campaign-schedule/{screen_id}/move",
            post(schedule::move_entry),
        )
        .route("/device-log/{screen_id}", get(pages::device_log))
        .route("/ad-account/{ad_account_id}", get(pages::ad_account))
        // Schedule API
        .route(
            "/api/admin/ad-account/set-ads-sequence",
            post(schedule::set_sequence),
        )
        .route(
            "/api/admin/campaigns/get-campaign-by-ad-account",
            get(schedule::campaigns_by_account),
        )
        .route(
            "/api/admin/campaign-schedule/{screen_id}/preview",
            get(schedule::preview),
        )
        .route(
            "/api/admin/campaign-schedule/{screen_id}/preview/events",
            get(schedule::preview_events),
        )
        .route(
            "/api/admin/campaigns/send-to-device",
            post(schedule::send_to_device),
        )
        .fallback(pages::not_found)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::error::LOGIN_REDIRECT;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_protected_pages_redirect_without_session() {
        let (state, _) = state_with_backend(Router::new()).await;
        let app = router(state);

        for uri in [
            "/organizations",
            "/screens",
            "/campaign/campaign-schedule/SCR1",
            "/device-log/SCR1",
            "/ad-account/ACC1",
        ] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
            assert_eq!(
                response.headers().get(header::LOCATION).unwrap(),
                LOGIN_REDIRECT,
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn test_root_redirects_to_screens() {
        let (state, _) = state_with_backend(Router::new()).await;
        let response = router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/screens");
    }

    #[tokio::test]
    async fn test_status_reports_service() {
        let (state, _) = state_with_backend(Router::new()).await;
        let response = router(state)
            .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["service"], "signage-admin");
    }
}
