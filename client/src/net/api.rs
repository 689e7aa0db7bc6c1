//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. A failed session
//! lookup is reported as `None`, which the auth state treats as signed out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CompanySummary, SessionResponse, UserSummary};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

/// Pull a human-readable message out of an error response body.
///
/// Prefers the `error` field, then `message`, then a short plain-text body,
/// and falls back to `"<context> failed: <status>"`.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(context: &str, status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = parsed.error.or(parsed.message).filter(|m| !m.trim().is_empty()) {
            return msg;
        }
    }
    let text = body.trim();
    if !text.is_empty() && text.len() <= 200 && !text.starts_with('<') && !text.starts_with('{') {
        return text.to_owned();
    }
    format!("{context} failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn response_error(context: &str, resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_message_from_body(context, status, &body)
}

/// Fetch the current session from `/api/auth/me`.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_session() -> Option<SessionResponse> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionResponse>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's error message (or a status fallback) on rejection.
pub async fn login(email: &str, password: &str) -> Result<SessionResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("login", resp).await);
        }
        resp.json::<SessionResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// List companies via `GET /api/companies` (admin only).
///
/// # Errors
///
/// Returns an error string if the request fails or is refused.
pub async fn fetch_companies() -> Result<Vec<CompanySummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/companies")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("company list", resp).await);
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// List users via `GET /api/users` (superuser or admin).
///
/// # Errors
///
/// Returns an error string if the request fails or is refused.
pub async fn fetch_users() -> Result<Vec<UserSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/users")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("user list", resp).await);
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
