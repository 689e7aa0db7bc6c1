use super::*;
use access::{AccessError, Role};

// =============================================================
// GuardView
// =============================================================

#[test]
fn loading_evaluation_renders_loading() {
    assert_eq!(GuardView::from_evaluation(&Evaluation::Loading), GuardView::Loading);
}

#[test]
fn allow_renders_content() {
    assert_eq!(GuardView::from_evaluation(&Evaluation::Decided(GuardDecision::Allow)), GuardView::Allowed);
}

#[test]
fn redirect_renders_nothing() {
    let evaluation = Evaluation::Decided(GuardDecision::Redirect {
        target: "/login?redirect=%2Ffinancial".to_owned(),
        cause: AccessError::Unauthenticated,
    });
    assert_eq!(GuardView::from_evaluation(&evaluation), GuardView::Blocked);
}

// =============================================================
// guard_effects
// =============================================================

#[test]
fn loading_has_no_effects() {
    assert_eq!(guard_effects(&Evaluation::Loading, "/financial"), GuardEffects::default());
}

#[test]
fn unauthenticated_navigates_silently() {
    let evaluation = Evaluation::Decided(GuardDecision::Redirect {
        target: "/login?redirect=%2Ffinancial".to_owned(),
        cause: AccessError::Unauthenticated,
    });
    let effects = guard_effects(&evaluation, "/financial");
    assert_eq!(effects.navigate_to.as_deref(), Some("/login?redirect=%2Ffinancial"));
    assert_eq!(effects.notice, None);
}

#[test]
fn forbidden_navigates_and_notifies_once() {
    let evaluation = Evaluation::Decided(GuardDecision::Redirect {
        target: "/".to_owned(),
        cause: AccessError::Forbidden { role: Some(Role::User), allowed: vec![Role::Admin] },
    });
    let effects = guard_effects(&evaluation, "/admin/companies");
    assert_eq!(effects.navigate_to.as_deref(), Some("/"));
    assert!(effects.notice.is_some());
}

#[test]
fn forbidden_on_fallback_page_notifies_without_navigating() {
    let evaluation = Evaluation::Decided(GuardDecision::Redirect {
        target: "/".to_owned(),
        cause: AccessError::Forbidden { role: Some(Role::User), allowed: vec![Role::Admin] },
    });
    let effects = guard_effects(&evaluation, "/");
    assert_eq!(effects.navigate_to, None);
    assert!(effects.notice.is_some());
}

// =============================================================
// join_location / replace_options
// =============================================================

#[test]
fn join_location_without_search() {
    assert_eq!(join_location("/financial", ""), "/financial");
    assert_eq!(join_location("/financial", "?"), "/financial");
}

#[test]
fn join_location_with_search() {
    assert_eq!(join_location("/financial", "?tab=income"), "/financial?tab=income");
    assert_eq!(join_location("/financial", "tab=income"), "/financial?tab=income");
}

#[test]
fn guard_navigation_replaces_history() {
    assert!(replace_options().replace);
}
