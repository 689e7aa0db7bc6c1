//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON responses. Identity and role types come
//! from `access` so the guard and the transport agree on one schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use access::{Permissions, Role, UserRef};
use serde::{Deserialize, Serialize};

/// Body of `GET /api/auth/me` and `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: UserRef,
    pub role: Role,
    #[serde(default)]
    pub permissions: Permissions,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Row of `GET /api/companies`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub id: String,
    pub name: String,
    pub user_count: usize,
}

/// Row of `GET /api/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub company_id: Option<String>,
}

/// Error body shape returned by the server and most upstream APIs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}
