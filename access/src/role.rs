//! Account roles.
//!
//! DESIGN
//! ======
//! Variants are declared in privilege order so the derived `Ord` doubles as
//! the hierarchy: `Admin > Superuser > User`.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role assigned to an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Superuser,
    Admin,
}

impl Role {
    /// Every role, lowest privilege first.
    pub const ALL: [Self; 3] = [Self::User, Self::Superuser, Self::Admin];

    /// Wire name (`"USER"`, `"SUPERUSER"`, `"ADMIN"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Superuser => "SUPERUSER",
            Self::Admin => "ADMIN",
        }
    }

    /// True when this role carries at least the privileges of `required`.
    #[must_use]
    pub fn meets(self, required: Self) -> bool {
        self >= required
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "SUPERUSER" => Ok(Self::Superuser),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(ParseRoleError(raw.to_owned())),
        }
    }
}
