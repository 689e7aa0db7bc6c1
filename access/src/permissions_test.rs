use super::*;

#[test]
fn absent_role_grants_nothing() {
    assert_eq!(Permissions::derive(None), Permissions::default());
    let p = Permissions::derive(None);
    assert!(!p.can_manage_companies && !p.can_manage_users && !p.can_access_financial);
    assert!(!p.is_admin && !p.is_super_user && !p.is_user);
}

#[test]
fn admin_has_every_capability() {
    let p = Permissions::derive(Some(Role::Admin));
    assert!(p.can_manage_companies);
    assert!(p.can_manage_users);
    assert!(p.can_access_financial);
    assert!(p.is_admin);
    assert!(!p.is_super_user);
    assert!(!p.is_user);
}

#[test]
fn superuser_manages_users_but_not_companies() {
    let p = Permissions::derive(Some(Role::Superuser));
    assert!(!p.can_manage_companies);
    assert!(p.can_manage_users);
    assert!(p.can_access_financial);
    assert!(p.is_super_user);
}

#[test]
fn user_only_accesses_financial() {
    let p = Permissions::derive(Some(Role::User));
    assert!(!p.can_manage_companies);
    assert!(!p.can_manage_users);
    assert!(p.can_access_financial);
    assert!(p.is_user);
}

#[test]
fn exactly_one_identity_flag_is_set() {
    for role in Role::ALL {
        let p = Permissions::derive(Some(role));
        let count = [p.is_admin, p.is_super_user, p.is_user].iter().filter(|f| **f).count();
        assert_eq!(count, 1, "{role}");
    }
}

#[test]
fn allow_lists_agree_with_role_hierarchy() {
    for (list, minimum) in [
        (MANAGE_COMPANIES, Role::Admin),
        (MANAGE_USERS, Role::Superuser),
        (ACCESS_FINANCIAL, Role::User),
    ] {
        for role in Role::ALL {
            assert_eq!(list.contains(&role), role.meets(minimum), "{role} vs {minimum}");
        }
    }
}

#[test]
fn serializes_with_snake_case_fields() {
    let json = serde_json::to_value(Permissions::derive(Some(Role::User))).unwrap();
    assert_eq!(json["can_access_financial"], serde_json::json!(true));
    assert_eq!(json["is_super_user"], serde_json::json!(false));
}
