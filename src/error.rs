//! Error types for page and JSON handlers.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use thiserror::Error;
use tracing::warn;

use crate::backend::BackendError;
use crate::relay::RelayError;
use crate::ui::{self, pages::NotFoundPage};

/// Where protected pages send visitors without a valid session.
pub const LOGIN_REDIRECT: &str = "/auth/login?auth=false";

/// Failure of a server-rendered page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("session missing or expired")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),
}

impl From<BackendError> for PageError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unauthorized => PageError::Unauthorized,
            other => PageError::NotFound(other.to_string()),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Unauthorized => Redirect::temporary(LOGIN_REDIRECT).into_response(),
            PageError::NotFound(reason) => {
                warn!(%reason, "Page data unavailable");
                let html = ui::render_static(NotFoundPage);
                (StatusCode::NOT_FOUND, Html(html)).into_response()
            }
        }
    }
}

/// Failure of a JSON route; serialized as `{ "message": ... }` for the toast.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Backend(BackendError::Unauthorized) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            ApiError::Backend(err @ BackendError::Status { status, .. }) => {
                (*status, err.user_message())
            }
            ApiError::Backend(BackendError::Unreachable(_)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "No response from Server".to_string(),
            ),
            ApiError::Backend(err @ BackendError::Decode(_)) => {
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            ApiError::Relay(err @ (RelayError::CoolingDown { .. } | RelayError::InFlight { .. })) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            ApiError::Relay(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            warn!(%status, %message, "API request failed");
        }
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use serde_json::Value;

    #[test]
    fn test_unauthorized_page_redirects_to_login() {
        let response = PageError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            LOGIN_REDIRECT
        );
    }

    #[test]
    fn test_backend_failures_become_not_found() {
        let err: PageError = BackendError::Decode("bad".into()).into();
        assert!(matches!(err, PageError::NotFound(_)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err: PageError = BackendError::Unauthorized.into();
        assert!(matches!(err, PageError::Unauthorized));
    }

    #[test]
    fn test_api_error_keeps_backend_status_and_message() {
        let err = ApiError::Backend(BackendError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "Invalid order".to_string(),
            body: Value::Null,
        });
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(message, "Invalid order");
    }

    #[test]
    fn test_cooldown_is_conflict() {
        let err = ApiError::Relay(RelayError::CoolingDown {
            device_id: "dev".to_string(),
            minutes: 10,
        });
        assert_eq!(err.status_and_message().0, StatusCode::CONFLICT);

        let err = ApiError::Relay(RelayError::InFlight {
            device_id: "dev".to_string(),
        });
        assert_eq!(err.status_and_message().0, StatusCode::CONFLICT);
    }
}
