//! Administrative listings gated on role-derived permissions.
//!
//! These back the `/admin/users` and `/admin/companies` pages. The client
//! guards hide the pages from roles that lack the permission; the checks
//! here are the ones that actually hold.

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;

use access::Role;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use uuid::Uuid;

use super::auth::AuthUser;
use crate::services::users::{Company, UserRecord};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub company_id: Option<Uuid>,
}

impl From<&UserRecord> for UserSummary {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            company_id: user.company_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySummary {
    pub id: Uuid,
    pub name: String,
    pub user_count: usize,
}

fn company_summary(state: &AppState, company: &Company) -> CompanySummary {
    CompanySummary {
        id: company.id,
        name: company.name.clone(),
        user_count: state.directory.company_user_count(company.id),
    }
}

/// Whether `caller` may see `user` in a listing. Admins see every tenant;
/// everyone else only their own company.
fn visible_to(caller: &UserRecord, user: &UserRecord) -> bool {
    caller.role == Role::Admin || user.company_id == caller.company_id
}

/// `GET /api/users` — accounts the caller manages, for roles that can manage users.
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<UserSummary>>, StatusCode> {
    if !auth.permissions().can_manage_users {
        tracing::warn!(user_id = %auth.user.id, role = %auth.user.role, "user listing denied");
        return Err(StatusCode::FORBIDDEN);
    }
    let users = state
        .directory
        .users()
        .iter()
        .filter(|user| visible_to(&auth.user, user))
        .map(UserSummary::from)
        .collect();
    Ok(Json(users))
}

/// `GET /api/companies` — every company with its account count.
pub async fn list_companies(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<CompanySummary>>, StatusCode> {
    if !auth.permissions().can_manage_companies {
        tracing::warn!(user_id = %auth.user.id, role = %auth.user.role, "company listing denied");
        return Err(StatusCode::FORBIDDEN);
    }
    let companies = state
        .directory
        .companies()
        .iter()
        .map(|company| company_summary(&state, company))
        .collect();
    Ok(Json(companies))
}
