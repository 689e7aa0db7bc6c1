use super::*;

fn response(role: Role) -> SessionResponse {
    SessionResponse {
        user: UserRef {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            company_id: None,
        },
        role,
        permissions: Permissions::derive(Some(role)),
    }
}

// =============================================================
// AuthState lifecycle
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.session.loading);
    assert!(state.user().is_none());
}

#[test]
fn signed_in_populates_user_and_role() {
    let state = AuthState::signed_in(response(Role::Superuser));
    assert!(state.session.is_authenticated());
    assert_eq!(state.role(), Some(Role::Superuser));
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("Alice"));
}

#[test]
fn from_lookup_none_is_signed_out() {
    let state = AuthState::from_lookup(None);
    assert!(!state.session.loading);
    assert!(!state.session.is_authenticated());
}

#[test]
fn from_lookup_some_is_signed_in() {
    let state = AuthState::from_lookup(Some(response(Role::User)));
    assert!(state.session.is_authenticated());
}

#[test]
fn permissions_follow_role() {
    assert!(AuthState::signed_in(response(Role::Admin)).permissions().can_manage_companies);
    assert!(!AuthState::signed_in(response(Role::User)).permissions().can_manage_users);
    assert_eq!(AuthState::default().permissions(), Permissions::default());
}
