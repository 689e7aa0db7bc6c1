//! Request-boundary middleware.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs in front of every route. It only knows whether the session cookie is
//! present, so it handles the login and home redirects and leaves role checks
//! to the client guards and the `AuthUser`-gated handlers. Anonymous `/api/*`
//! calls are answered with a JSON `401` rather than the login redirect.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod tests;

use access::{BoundaryAction, BoundaryRequest, GuardConfig};
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use super::auth::{error_json, session_token};
use crate::state::AppState;

/// Path plus query exactly as requested, so the login redirect can return there.
fn requested_location(uri: &Uri) -> String {
    uri.path_and_query()
        .map_or_else(|| uri.path().to_owned(), |pq| pq.as_str().to_owned())
}

pub(crate) fn boundary_action(uri: &Uri, jar: &CookieJar, config: &GuardConfig) -> BoundaryAction {
    let request = BoundaryRequest {
        path: requested_location(uri),
        has_credential_marker: session_token(jar).is_some(),
    };
    access::boundary::filter(&request, config)
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Response that short-circuits the request, or `None` to pass it on.
///
/// JSON callers get a `401` body instead of a redirect to the HTML login page.
pub(crate) fn boundary_response(uri: &Uri, jar: &CookieJar, config: &GuardConfig) -> Option<Response> {
    match boundary_action(uri, jar, config) {
        BoundaryAction::Allow => None,
        BoundaryAction::Redirect { .. } if is_api_path(uri.path()) => {
            tracing::debug!(path = %uri.path(), "boundary rejected api call");
            Some(error_json(StatusCode::UNAUTHORIZED, "not signed in"))
        }
        BoundaryAction::Redirect { target } => {
            tracing::debug!(path = %uri.path(), %target, "boundary redirect");
            Some(Redirect::temporary(&target).into_response())
        }
    }
}

pub async fn enforce(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    match boundary_response(request.uri(), &jar, &state.guard) {
        Some(response) => response,
        None => next.run(request).await,
    }
}
