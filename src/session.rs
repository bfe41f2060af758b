//! Session cookie extraction
//!
//! The backend issues the token; the login proxy stores it in an HTTP-only
//! cookie and every protected handler forwards it as a bearer token.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use crate::api::AppState;
use crate::error::{ApiError, PageError};

/// Token of the signed-in admin, for server-rendered pages.
///
/// Rejects with a redirect to the login page when the cookie is absent.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
}

impl Session {
    fn from_parts(parts: &Parts, cookie_name: &str) -> Option<Self> {
        let jar = CookieJar::from_headers(&parts.headers);
        jar.get(cookie_name)
            .map(|c| c.value().trim().to_string())
            .filter(|token| !token.is_empty())
            .map(|token| Session { token })
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Session::from_parts(parts, &state.config.session.cookie_name).ok_or(PageError::Unauthorized)
    }
}

/// Same as [`Session`] for JSON routes: rejects with a 401 `{message}`.
#[derive(Debug, Clone)]
pub struct ApiSession(pub Session);

impl ApiSession {
    pub fn token(&self) -> &str {
        &self.0.token
    }
}

impl FromRequestParts<AppState> for ApiSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Session::from_parts(parts, &state.config.session.cookie_name)
            .map(ApiSession)
            .ok_or(ApiError::Unauthorized)
    }
}

/// `Set-Cookie` value storing a freshly issued token.
pub fn session_cookie(name: &str, token: &str, max_age_secs: u64) -> String {
    format!("{name}={token}; Max-Age={max_age_secs}; HttpOnly; Path=/")
}

/// `Set-Cookie` value expiring the session.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; HttpOnly; Path=/")
}
