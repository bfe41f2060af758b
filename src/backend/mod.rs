//! Backend REST API client
//!
//! Every call carries the admin's session token as a bearer token and
//! unwraps the backend's `{ "data": ... }` envelope.

mod resources;

pub use resources::DeviceLogQuery;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use signage_types::Envelope;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::BackendConfig;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend rejected the session token")]
    Unauthorized,

    #[error("backend returned {status}: {message}")]
    Status {
        status: StatusCode,
        message: String,
        body: Value,
    },

    #[error("no response from backend: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("unexpected backend payload: {0}")]
    Decode(String),
}

impl BackendError {
    /// Message suitable for a toast: the backend's own `message` when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Bearer-authenticated JSON client for the backend API.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_else(|e| {
                warn!(
                    "Failed to build HTTP client with custom config: {}. Using default.",
                    e
                );
                Client::default()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET path?query` and return the envelope's `data`.
    pub async fn get<T: DeserializeOwned + Default>(
        &self,
        token: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        debug!(path, ?query, "Backend GET");
        let request = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .query(query);
        Self::send_enveloped(request).await.map(Envelope::into_data)
    }

    /// `POST path` with a JSON body and return the envelope's `data`.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned + Default>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        self.post_envelope(token, path, body)
            .await
            .map(Envelope::into_data)
    }

    /// `POST path` keeping the whole envelope, for mutations whose `message`
    /// is shown to the admin.
    pub async fn post_envelope<B: Serialize + ?Sized, T: DeserializeOwned + Default>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, BackendError> {
        debug!(path, "Backend POST");
        let request = self.client.post(self.url(path)).bearer_auth(token).json(body);
        Self::send_enveloped(request).await
    }

    /// Unauthenticated `POST` returning the raw status and JSON body.
    ///
    /// Used by the auth proxy routes, which forward the backend's answer as-is.
    pub async fn post_public(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<(StatusCode, Value), reqwest::Error> {
        debug!(path, "Backend public POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok((status, body))
    }

    async fn send_enveloped<T: DeserializeOwned + Default>(
        request: RequestBuilder,
    ) -> Result<Envelope<T>, BackendError> {
        let response = request.send().await.map_err(BackendError::Unreachable)?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .map(|m| m.to_string())
                .unwrap_or_else(|| status.to_string());
            return Err(BackendError::Status {
                status,
                message,
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(BackendError::Unreachable)?;
        serde_json::from_slice(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-process stand-in for the backend API, bound to an ephemeral port.

    use axum::Router;
    use tokio::net::TcpListener;

    use crate::config::BackendConfig;

    use super::BackendClient;

    pub async fn spawn(router: Router) -> BackendClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        BackendClient::new(&BackendConfig {
            base_url: format!("http://{}/", addr),
            timeout_secs: 5,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_sends_bearer_and_unwraps_envelope() {
        let router = Router::new().route(
            "/echo",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({ "data": { "auth": auth } }))
            }),
        );
        let client = fake::spawn(router).await;

        let data: Value = client.get("tok-1", "/echo", &[]).await.unwrap();
        assert_eq!(data["auth"], "Bearer tok-1");
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_variant() {
        let router = Router::new().route(
            "/secret",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"message": "expired"}))) }),
        );
        let client = fake::spawn(router).await;

        let err = client.get::<Value>("bad", "secret", &[]).await.unwrap_err();
        assert!(matches!(err, BackendError::Unauthorized));
    }

    #[tokio::test]
    async fn test_error_status_keeps_backend_message() {
        let router = Router::new().route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({"message": "Screen not found"}))) }),
        );
        let client = fake::spawn(router).await;

        let err = client.get::<Value>("t", "missing", &[]).await.unwrap_err();
        match &err {
            BackendError::Status { status, .. } => assert_eq!(*status, StatusCode::NOT_FOUND),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.user_message(), "Screen not found");
    }

    #[tokio::test]
    async fn test_missing_envelope_is_decode_error() {
        let router = Router::new().route("/bare", get(|| async { Json(json!("maintenance")) }));
        let client = fake::spawn(router).await;

        let err = client.get::<Value>("t", "bare", &[]).await.unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }
}
