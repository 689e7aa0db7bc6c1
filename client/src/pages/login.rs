//! Login page with email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Visitors arrive here from a guard redirect carrying the
//! original location in the `redirect` query parameter. Once the session is
//! authenticated, this page's guard sends them back there (or home).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use access::{AccessError, Evaluation, GuardConfig, GuardDecision, GuardPolicy, evaluate};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::replace_options;

/// Trim and require both fields; emails are lowercased.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim().to_ascii_lowercase();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email, password.to_owned()))
}

/// Destination after sign-in.
///
/// Only same-origin absolute paths are honored; anything else (external URLs,
/// protocol-relative `//host`, the login page itself) falls back to home.
/// URL parsers drop tabs and newlines, so `/\t/host` would resolve to
/// `//host`; any control character or whitespace disqualifies the target.
pub(crate) fn return_target(raw: Option<&str>, config: &GuardConfig) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return config.home_path.clone();
    };
    let same_origin = raw.starts_with('/')
        && !raw.starts_with("//")
        && !raw.contains('\\')
        && !raw.chars().any(|c| c.is_control() || c.is_whitespace());
    if !same_origin || config.routes.classify(raw).is_public {
        return config.home_path.clone();
    }
    raw.to_owned()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_context::<RwSignal<ToastState>>();
    let config = use_context::<GuardConfig>().unwrap_or_default();
    let query = use_query_map();
    let navigate = use_navigate();

    let target_config = config.clone();
    let return_to = Memo::new(move |_| {
        let param = query.with(|q| q.get(&target_config.redirect_param));
        return_target(param.as_deref(), &target_config)
    });

    // Rule 2 of the shared policy, with the home target swapped for the
    // carried return location.
    Effect::new(move || {
        let session = auth.with(|state| state.session.clone());
        let evaluation = evaluate(&session, config.login_path(), &GuardPolicy::authenticated(), &config);
        if let Evaluation::Decided(GuardDecision::Redirect { cause: AccessError::AlreadyAuthenticated, .. }) =
            evaluation
        {
            navigate(&return_to.get(), replace_options());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(response) => {
                    info.set(String::new());
                    password.set(String::new());
                    auth.set(AuthState::signed_in(response));
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {e}"));
                    if let Some(toasts) = toasts {
                        crate::util::toast::add_toast(toasts, e, crate::state::toast::ToastKind::Error);
                    }
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, toasts);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Ledgerly"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
