//! Authentication snapshot consumed by the guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client's auth provider is the only writer. Guards treat each
//! [`Session`] as an immutable snapshot and re-evaluate when a new one is
//! published, so the lifecycle is expressed as constructors rather than
//! in-place mutation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Minimal identity of the signed-in account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Account identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Normalized login email.
    pub email: String,
    /// Tenant the account belongs to, if any.
    pub company_id: Option<String>,
}

/// Current authentication/authorization snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserRef>,
    pub role: Option<Role>,
    /// True until the provider has finished validating the stored credential.
    pub loading: bool,
    pub token: Option<String>,
}

impl Session {
    /// Snapshot published on app start, before validation completes.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, role: None, loading: true, token: None }
    }

    /// Snapshot published after a credential validated successfully.
    #[must_use]
    pub fn signed_in(user: UserRef, role: Role, token: Option<String>) -> Self {
        Self { user: Some(user), role: Some(role), loading: false, token }
    }

    /// Snapshot published on logout or when validation failed.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, role: None, loading: false, token: None }
    }

    /// True only once loading finished with a user present.
    ///
    /// A loading snapshot is never authenticated, even if a stale user is
    /// still attached.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}
