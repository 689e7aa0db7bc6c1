//! Capability flags derived from a role.
//!
//! Each flag is an explicit allow-list. `Role::meets` expresses the same
//! ordering; the tests pin the two together so a new role cannot silently
//! diverge.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use serde::{Deserialize, Serialize};

use crate::role::Role;

pub const MANAGE_COMPANIES: &[Role] = &[Role::Admin];
pub const MANAGE_USERS: &[Role] = &[Role::Superuser, Role::Admin];
pub const ACCESS_FINANCIAL: &[Role] = &[Role::User, Role::Superuser, Role::Admin];

/// Boolean capabilities for the current session.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub can_manage_companies: bool,
    pub can_manage_users: bool,
    pub can_access_financial: bool,
    pub is_admin: bool,
    pub is_super_user: bool,
    pub is_user: bool,
}

impl Permissions {
    /// Derive flags for `role`. An absent role (not loaded yet) grants nothing.
    #[must_use]
    pub fn derive(role: Option<Role>) -> Self {
        let Some(role) = role else {
            return Self::default();
        };
        Self {
            can_manage_companies: MANAGE_COMPANIES.contains(&role),
            can_manage_users: MANAGE_USERS.contains(&role),
            can_access_financial: ACCESS_FINANCIAL.contains(&role),
            is_admin: role == Role::Admin,
            is_super_user: role == Role::Superuser,
            is_user: role == Role::User,
        }
    }
}
