//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as `RwSignal<AuthState>` by the root `App`. It starts in the
//! loading state, is populated by the `/api/auth/me` bootstrap, and is reset
//! on logout. Route guards only read it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::{Permissions, Role, Session, UserRef};

use crate::net::types::SessionResponse;

/// Authentication state tracking the current session snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
}

impl AuthState {
    /// State after the server confirmed a session.
    #[must_use]
    pub fn signed_in(response: SessionResponse) -> Self {
        Self { session: Session::signed_in(response.user, response.role, None) }
    }

    /// State after logout or a failed/absent session lookup.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { session: Session::signed_out() }
    }

    /// Settle the bootstrap lookup. `None` is treated as signed out.
    #[must_use]
    pub fn from_lookup(response: Option<SessionResponse>) -> Self {
        response.map_or_else(Self::signed_out, Self::signed_in)
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserRef> {
        self.session.user.as_ref()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.role
    }

    #[must_use]
    pub fn permissions(&self) -> Permissions {
        Permissions::derive(self.session.role)
    }
}
