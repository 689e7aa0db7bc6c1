use super::*;
use axum::http::header::SET_COOKIE;

use crate::state::test_helpers::{session_for, test_app_state};

fn jar_with(token: &str) -> CookieJar {
    CookieJar::new().add(Cookie::new(COOKIE_NAME, token.to_owned()))
}

fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_owned))
        .collect()
}

fn login_body(email: &str, password: &str) -> Json<LoginRequest> {
    Json(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn session_token_ignores_missing_and_empty_cookie() {
    assert_eq!(session_token(&CookieJar::new()), None);
    assert_eq!(session_token(&jar_with("")), None);
    assert_eq!(session_token(&jar_with("abc")), Some("abc"));
}

#[test]
fn session_cookie_is_http_only_lax_root() {
    let cookie = session_cookie("tok".to_owned(), true, Duration::hours(1));
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::hours(1)));
}

#[test]
fn clear_session_cookie_expires_immediately() {
    let cookie = clear_session_cookie(false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

#[test]
fn invalid_credentials_map_to_unauthorized() {
    assert_eq!(directory_error_to_status(&DirectoryError::InvalidCredentials), StatusCode::UNAUTHORIZED);
    assert_eq!(
        directory_error_to_status(&DirectoryError::EmptyPassword("a@b.com".to_owned())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// handlers
// =============================================================================

#[tokio::test]
async fn login_sets_session_cookie() {
    let state = test_app_state();
    let response = login(State(state.clone()), CookieJar::new(), login_body("admin@ledgerly.dev", "admin123")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookie_headers(&response);
    assert!(cookies.iter().any(|c| c.starts_with("session_token=") && c.contains("HttpOnly")));
}

#[tokio::test]
async fn login_rejects_bad_password() {
    let state = test_app_state();
    let response = login(State(state), CookieJar::new(), login_body("admin@ledgerly.dev", "wrong")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie_headers(&response).is_empty());
}

#[tokio::test]
async fn login_revokes_previous_session() {
    let state = test_app_state();
    let old = session_for(&state, "user@ledgerly.dev").await;
    let response = login(State(state.clone()), jar_with(&old), login_body("user@ledgerly.dev", "user123")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.sessions.validate(&old).await, None);
}

#[tokio::test]
async fn me_returns_session_for_valid_cookie() {
    let state = test_app_state();
    let token = session_for(&state, "super@ledgerly.dev").await;
    let response = me(State(state), jar_with(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn me_without_cookie_is_unauthorized_and_sets_nothing() {
    let state = test_app_state();
    let response = me(State(state), CookieJar::new()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie_headers(&response).is_empty());
}

#[tokio::test]
async fn me_with_stale_cookie_clears_it() {
    let state = test_app_state();
    let response = me(State(state), jar_with("deadbeef")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let cookies = set_cookie_headers(&response);
    assert!(cookies.iter().any(|c| c.starts_with("session_token=;") || c.starts_with("session_token=\"\"") || c.contains("Max-Age=0")));
}

#[tokio::test]
async fn logout_revokes_session() {
    let state = test_app_state();
    let token = session_for(&state, "user@ledgerly.dev").await;
    let response = logout(State(state.clone()), jar_with(&token)).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(state.sessions.validate(&token).await, None);
}

#[tokio::test]
async fn logout_without_session_still_succeeds() {
    let state = test_app_state();
    let response = logout(State(state), CookieJar::new()).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
