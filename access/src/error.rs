//! Reasons a guard refuses to render the requested route.

use crate::role::Role;

/// Why a [`crate::GuardDecision::Redirect`] was produced.
///
/// None of these are fatal: every guard recovers by redirecting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// No authenticated session on a protected route.
    #[error("authentication required")]
    Unauthenticated,
    /// Session present but its role is not in the route's allow-list.
    #[error("{} is not permitted here (requires one of: {})", role_label(.role), roles_label(.allowed))]
    Forbidden { role: Option<Role>, allowed: Vec<Role> },
    /// Authenticated session on a public-only route such as the login page.
    #[error("already signed in")]
    AlreadyAuthenticated,
}

impl AccessError {
    /// Message shown to the user, if this outcome warrants a notification.
    #[must_use]
    pub fn user_notice(&self) -> Option<String> {
        match self {
            Self::Forbidden { .. } => Some("You do not have permission to access this page.".to_owned()),
            Self::Unauthenticated | Self::AlreadyAuthenticated => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn role_label(role: &Option<Role>) -> &'static str {
    role.map_or("unknown role", Role::as_str)
}

fn roles_label(roles: &[Role]) -> String {
    roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", ")
}
