//! Request-boundary filter run before a page is served.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server sees only whether a credential marker (the session cookie) is
//! present. It does not decode or validate it and it has no role, so this
//! filter covers the login/home redirects and skips role gating entirely.
//! It is deliberately weaker than the client guards; handlers and the client
//! still enforce the full policy.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

use crate::policy::{GuardConfig, GuardPolicy, decide};
use crate::route::normalize_path;
use crate::session::{Session, UserRef};

/// Path prefixes never subject to the boundary.
pub const EXCLUDED_PREFIXES: &[&str] = &["/pkg/", "/assets/"];

/// Exact paths never subject to the boundary (assets and auth bootstrap).
pub const EXCLUDED_PATHS: &[&str] = &["/favicon.ico", "/robots.txt", "/api/auth/login", "/healthz"];

const STATIC_EXTENSIONS: &[&str] = &[
    "css", "js", "wasm", "map", "png", "jpg", "jpeg", "gif", "svg", "ico", "webp", "woff", "woff2", "ttf", "txt",
];

/// The minimal view of a request available at the boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryRequest {
    /// Path plus optional query string, as requested.
    pub path: String,
    pub has_credential_marker: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryAction {
    Allow,
    Redirect { target: String },
}

/// True when the boundary should run for `path` at all.
#[must_use]
pub fn is_enforced(path: &str) -> bool {
    let path = normalize_path(path);
    if EXCLUDED_PATHS.contains(&path.as_str()) {
        return false;
    }
    if EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix) || path == prefix.trim_end_matches('/'))
    {
        return false;
    }
    !has_static_extension(&path)
}

fn has_static_extension(path: &str) -> bool {
    let last = path.rsplit('/').next().unwrap_or_default();
    last.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && STATIC_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Apply the shared policy using only credential presence.
///
/// Paths outside [`is_enforced`] are always allowed. Self-redirects are
/// suppressed the same way the client guards suppress them.
#[must_use]
pub fn filter(request: &BoundaryRequest, config: &GuardConfig) -> BoundaryAction {
    if !is_enforced(&request.path) {
        return BoundaryAction::Allow;
    }
    let session = marker_session(request.has_credential_marker);
    let decision = decide(&session, &request.path, &GuardPolicy::authenticated(), config);
    match decision.navigation_target(&request.path) {
        Some(target) => BoundaryAction::Redirect { target: target.to_owned() },
        None => BoundaryAction::Allow,
    }
}

/// Stand-in session for a request that only carries a marker bit.
fn marker_session(has_marker: bool) -> Session {
    if !has_marker {
        return Session::signed_out();
    }
    Session {
        user: Some(UserRef {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            company_id: None,
        }),
        role: None,
        loading: false,
        token: None,
    }
}
