//! Auth routes: password login, logout, current session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use access::{Permissions, Role, UserRef};
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::services::users::{DirectoryError, UserRecord};
use crate::state::AppState;

pub const COOKIE_NAME: &str = "session_token";

/// Body returned by `login` and `me`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user: UserRef,
    pub role: Role,
    pub permissions: Permissions,
}

impl SessionResponse {
    fn for_user(user: &UserRecord) -> Self {
        Self { user: user.to_user_ref(), role: user.role, permissions: Permissions::derive(Some(user.role)) }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) fn error_json(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: message.into() })).into_response()
}

pub(crate) fn directory_error_to_status(err: &DirectoryError) -> StatusCode {
    match err {
        DirectoryError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        DirectoryError::Io { .. }
        | DirectoryError::Parse(_)
        | DirectoryError::InvalidEmail(_)
        | DirectoryError::DuplicateEmail(_)
        | DirectoryError::UnknownCompany { .. }
        | DirectoryError::EmptyPassword(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn session_cookie(token: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

pub(crate) fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    session_cookie(String::new(), secure, Duration::ZERO)
}

/// Session token carried by the request, if any. Empty values count as absent.
pub(crate) fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(COOKIE_NAME).map(Cookie::value).filter(|token| !token.is_empty())
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: UserRecord,
    pub token: String,
}

impl AuthUser {
    #[must_use]
    pub fn permissions(&self) -> Permissions {
        Permissions::derive(Some(self.user.role))
    }
}

async fn resolve_session(state: &AppState, jar: &CookieJar) -> Option<AuthUser> {
    let token = session_token(jar)?;
    let user_id = state.sessions.validate(token).await?;
    let user = state.directory.get(user_id)?.clone();
    Some(AuthUser { user, token: token.to_owned() })
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);
        resolve_session(&app_state, &jar).await.ok_or(StatusCode::UNAUTHORIZED)
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` — verify credentials, set cookie, return session.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginRequest>) -> Response {
    let user = match state.directory.authenticate(&body.email, &body.password) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(email = %body.email.trim(), error = %e, "login rejected");
            return error_json(directory_error_to_status(&e), e.to_string());
        }
    };

    // Replace any session this browser already held.
    if let Some(previous) = session_token(&jar) {
        state.sessions.revoke(previous).await;
    }

    let token = state.sessions.create(user.id).await;
    let cookie = session_cookie(token, state.config.cookie_secure, state.sessions.ttl());
    tracing::info!(user_id = %user.id, role = %user.role, "login succeeded");

    (jar.add(cookie), Json(SessionResponse::for_user(user))).into_response()
}

/// `GET /api/auth/me` — return the current session.
///
/// A cookie that no longer maps to a session is cleared so the boundary
/// stops treating the browser as signed in.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Response {
    match resolve_session(&state, &jar).await {
        Some(auth) => Json(SessionResponse::for_user(&auth.user)).into_response(),
        None if session_token(&jar).is_some() => {
            tracing::debug!("clearing stale session cookie");
            let jar = jar.add(clear_session_cookie(state.config.cookie_secure));
            (jar, error_json(StatusCode::UNAUTHORIZED, "session expired")).into_response()
        }
        None => error_json(StatusCode::UNAUTHORIZED, "not signed in"),
    }
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = session_token(&jar) {
        if state.sessions.revoke(token).await {
            tracing::info!("logout");
        }
    }
    let jar = jar.add(clear_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}
