//! Admin session check for dashboard and admin API routes.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_cookies::{cookie::SameSite, Cookie, Cookies};

/// Cookie that carries the session digest.
pub const SESSION_COOKIE: &str = "modia_admin";

/// Proof that the request belongs to a signed-in admin.
#[derive(Clone, Copy, Debug)]
pub struct AdminSession;

/// Rejection: browser pages go back to the login form, API calls get 401.
#[derive(Debug)]
pub enum SessionRejection {
    Login,
    Unauthorized,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            SessionRejection::Login => Redirect::to("/admin").into_response(),
            SessionRejection::Unauthorized => AppError::Unauthorized.into_response(),
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Constant-time string comparison.
pub(crate) fn constant_time_eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let by_cookie = match Cookies::from_request_parts(parts, state).await {
            Ok(cookies) => cookies
                .get(SESSION_COOKIE)
                .is_some_and(|c| constant_time_eq(c.value(), state.admin_digest())),
            Err(_) => false,
        };
        let by_bearer = bearer_token(parts).is_some_and(|t| constant_time_eq(t, &state.settings.admin_token));
        if by_cookie || by_bearer {
            return Ok(AdminSession);
        }
        tracing::debug!(path = %parts.uri.path(), "admin session missing or invalid");
        if parts.uri.path().starts_with("/admin/api") {
            Err(SessionRejection::Unauthorized)
        } else {
            Err(SessionRejection::Login)
        }
    }
}

/// Session cookie set after a successful sign-in. Scoped to `/admin`.
pub fn session_cookie(digest: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, digest.to_string()))
        .path("/admin")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie handed to `Cookies::remove` on sign-out; path must match the one set at sign-in.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/admin").build()
}
