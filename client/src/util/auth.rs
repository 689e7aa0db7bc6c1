//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `Protected` wrapper and the `use_protected_route` hook both install the
//! same guard: one effect keyed on (session, location) that applies
//! `access::evaluate` and performs the resulting navigation/notification.
//! The effect is owned by the calling component, so a pending redirect is
//! dropped as soon as that component unmounts.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::{Evaluation, GuardConfig, GuardDecision, GuardPolicy, evaluate};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::toast::add_toast;

/// What a guarded view should render for the current evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Session still loading: render the loading placeholder.
    Loading,
    /// Render the protected content.
    Allowed,
    /// Render nothing; a redirect is in flight or was suppressed.
    Blocked,
}

impl GuardView {
    #[must_use]
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        match evaluation {
            Evaluation::Loading => Self::Loading,
            Evaluation::Decided(GuardDecision::Allow) => Self::Allowed,
            Evaluation::Decided(GuardDecision::Redirect { .. }) => Self::Blocked,
        }
    }
}

/// Side effects one evaluation asks for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuardEffects {
    pub navigate_to: Option<String>,
    pub notice: Option<String>,
}

/// Translate an evaluation into side effects for the page at `current`.
#[must_use]
pub fn guard_effects(evaluation: &Evaluation, current: &str) -> GuardEffects {
    match evaluation {
        Evaluation::Loading => GuardEffects::default(),
        Evaluation::Decided(decision) => GuardEffects {
            navigate_to: decision.navigation_target(current).map(str::to_owned),
            notice: decision.notice(),
        },
    }
}

/// Join router pathname and search into the location string guards see.
#[must_use]
pub fn join_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Replace-navigation options; guard redirects must not add history entries.
#[must_use]
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Install the guard effect for the current route and return a memo of what
/// to render. Must be called inside a `<Router>`.
pub fn install_route_guard(
    auth: RwSignal<AuthState>,
    toasts: Option<RwSignal<ToastState>>,
    policy: GuardPolicy,
    config: GuardConfig,
) -> Memo<GuardView> {
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;
    let current = Memo::new(move |_| join_location(&pathname.get(), &search.get()));
    let navigate = use_navigate();

    let effect_policy = policy.clone();
    let effect_config = config.clone();
    Effect::new(move || {
        let session = auth.with(|state| state.session.clone());
        let here = current.get();
        let evaluation = evaluate(&session, &here, &effect_policy, &effect_config);
        let effects = guard_effects(&evaluation, &here);
        if let (Some(message), Some(toasts)) = (effects.notice, toasts) {
            add_toast(toasts, message, ToastKind::Error);
        }
        if let Some(target) = effects.navigate_to {
            #[cfg(feature = "hydrate")]
            log::debug!("guard redirect {here} -> {target}");
            navigate(&target, replace_options());
        }
    });

    Memo::new(move |_| {
        let evaluation = auth.with(|state| evaluate(&state.session, &current.get(), &policy, &config));
        GuardView::from_evaluation(&evaluation)
    })
}

/// Reactive auth flags returned by [`use_protected_route`].
#[derive(Clone, Copy, Debug)]
pub struct ProtectedRoute {
    pub is_loading: Signal<bool>,
    pub is_authenticated: Signal<bool>,
}

/// Hook form of the guard for page bodies that render their own states.
///
/// Redirects unauthenticated visitors to login; applies no role gating.
pub fn use_protected_route() -> ProtectedRoute {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = use_context::<GuardConfig>().unwrap_or_default();
    let _ = install_route_guard(auth, None, GuardPolicy::authenticated(), config);
    ProtectedRoute {
        is_loading: Signal::derive(move || auth.with(|state| state.session.loading)),
        is_authenticated: Signal::derive(move || auth.with(|state| state.session.is_authenticated())),
    }
}

/// Populate the auth state from `/api/auth/me`. Browser only.
pub fn load_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let response = crate::net::api::fetch_session().await;
        auth.set(AuthState::from_lookup(response));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}

/// End the session on the server and publish a signed-out snapshot.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        auth.set(AuthState::signed_out());
    });
    #[cfg(not(feature = "hydrate"))]
    auth.set(AuthState::signed_out());
}
