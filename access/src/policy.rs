//! Redirect policy shared by every guard.
//!
//! ARCHITECTURE
//! ============
//! [`decide`] is a pure function of (session, route, policy, config). The
//! component wrapper, the page hook and the request boundary all call it and
//! differ only in the inputs they can supply and in how they act on the
//! result. Navigation and notifications never happen here.
//!
//! Rules, first match wins:
//! 1. loading session: no decision ([`evaluate`] returns [`Evaluation::Loading`])
//! 2. public route + authenticated: redirect home
//! 3. protected route + unauthenticated: redirect to login, carrying the
//!    original location in the redirect query parameter
//! 4. non-empty allow-list + role missing or not listed: redirect to fallback
//! 5. allow

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::error::AccessError;
use crate::role::Role;
use crate::route::{DEFAULT_LOGIN_PATH, RouteClassification, RouteTable, normalize_path};
use crate::session::Session;

pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_REDIRECT_PARAM: &str = "redirect";

/// Application-wide guard settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    pub home_path: String,
    pub redirect_param: String,
    pub routes: RouteTable,
}

impl GuardConfig {
    #[must_use]
    pub fn login_path(&self) -> &str {
        self.routes.login_path()
    }

    /// Login URL that returns the user to `original` after sign-in.
    #[must_use]
    pub fn login_url_for(&self, original: &str) -> String {
        format!("{}?{}={}", self.login_path(), self.redirect_param, urlencoding::encode(original))
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            home_path: DEFAULT_HOME_PATH.to_owned(),
            redirect_param: DEFAULT_REDIRECT_PARAM.to_owned(),
            routes: RouteTable::new(DEFAULT_LOGIN_PATH),
        }
    }
}

/// Per-route gating options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    /// Roles allowed on the route. Empty means any authenticated session.
    pub allowed_roles: Vec<Role>,
    /// Destination when role gating denies access.
    pub fallback_path: String,
}

impl GuardPolicy {
    /// Authentication only, no role gating.
    #[must_use]
    pub fn authenticated() -> Self {
        Self { allowed_roles: Vec::new(), fallback_path: DEFAULT_HOME_PATH.to_owned() }
    }

    /// Restrict the route to `roles`.
    #[must_use]
    pub fn roles(roles: &[Role]) -> Self {
        Self { allowed_roles: roles.to_vec(), ..Self::authenticated() }
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback_path: &str) -> Self {
        fallback_path.clone_into(&mut self.fallback_path);
        self
    }
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self::authenticated()
    }
}

/// Outcome of the policy for a settled session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect { target: String, cause: AccessError },
}

impl GuardDecision {
    /// Where the caller should navigate, or `None` to stay put.
    ///
    /// A redirect whose target path equals `current_path` is suppressed so a
    /// guard never navigates to the page it is already on.
    #[must_use]
    pub fn navigation_target(&self, current_path: &str) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Redirect { target, .. } => {
                (normalize_path(target) != normalize_path(current_path)).then_some(target.as_str())
            }
        }
    }

    /// Denial message to surface, if any.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::Redirect { cause, .. } => cause.user_notice(),
        }
    }

    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// What a guard should do with the current session snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Session not settled yet; render a loading state.
    Loading,
    Decided(GuardDecision),
}

/// Apply rule 1, then [`decide`] once the session has settled.
#[must_use]
pub fn evaluate(session: &Session, location: &str, policy: &GuardPolicy, config: &GuardConfig) -> Evaluation {
    if session.loading {
        return Evaluation::Loading;
    }
    Evaluation::Decided(decide(session, location, policy, config))
}

/// Decide whether the session may see `location`.
///
/// `location` is the path as the user requested it, optionally with a query
/// string. Classification uses the normalized path; the login redirect keeps
/// the location verbatim so the user lands exactly where they were going.
#[must_use]
pub fn decide(session: &Session, location: &str, policy: &GuardPolicy, config: &GuardConfig) -> GuardDecision {
    let route: RouteClassification = config.routes.classify(location);
    let authenticated = session.is_authenticated();

    if route.is_public {
        if authenticated {
            return GuardDecision::Redirect {
                target: config.home_path.clone(),
                cause: AccessError::AlreadyAuthenticated,
            };
        }
        return GuardDecision::Allow;
    }

    if !authenticated {
        return GuardDecision::Redirect {
            target: config.login_url_for(location),
            cause: AccessError::Unauthenticated,
        };
    }

    if !policy.allowed_roles.is_empty() {
        let permitted = session
            .role
            .is_some_and(|role| policy.allowed_roles.contains(&role));
        if !permitted {
            return GuardDecision::Redirect {
                target: policy.fallback_path.clone(),
                cause: AccessError::Forbidden { role: session.role, allowed: policy.allowed_roles.clone() },
            };
        }
    }

    GuardDecision::Allow
}
