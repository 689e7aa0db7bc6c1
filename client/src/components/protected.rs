//! Wrapper component that gates its children behind the route guard.
//!
//! DESIGN
//! ======
//! Renders the loading screen until the session settles, then either the
//! children or nothing while the guard's redirect is in flight. Role denials
//! also raise a toast through the shared sink.

use access::{GuardConfig, GuardPolicy, Role};
use leptos::prelude::*;

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::{GuardView, install_route_guard};

/// Guarded view. With no `allowed_roles`, any signed-in user passes.
#[component]
pub fn Protected(
    #[prop(optional, into)] allowed_roles: Vec<Role>,
    #[prop(optional, into)] fallback_path: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_context::<RwSignal<ToastState>>();
    let config = use_context::<GuardConfig>().unwrap_or_default();

    let mut policy = GuardPolicy::roles(&allowed_roles);
    if let Some(fallback) = fallback_path.as_deref() {
        policy = policy.with_fallback(fallback);
    }
    let view_state = install_route_guard(auth, toasts, policy, config);

    move || match view_state.get() {
        GuardView::Loading => view! { <LoadingScreen/> }.into_any(),
        GuardView::Allowed => children().into_any(),
        GuardView::Blocked => ().into_any(),
    }
}
