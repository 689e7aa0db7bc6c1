//! Financial overview page.
//!
//! Uses the hook form of the guard: the page decides for itself what to show
//! while the session loads, and the hook handles the login redirect.

use leptos::prelude::*;

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::AuthState;
use crate::util::auth::use_protected_route;

/// Transaction kinds tracked by the ledger.
pub(crate) const TRANSACTION_KINDS: [(&str, &str); 3] = [
    ("Income", "Money received by the company."),
    ("Expense", "Money paid out, optionally split into installments."),
    ("Transfer", "Movement between the company's own accounts."),
];

#[component]
pub fn FinancialPage() -> impl IntoView {
    let route = use_protected_route();
    let auth = expect_context::<RwSignal<AuthState>>();
    let company = move || {
        auth.with(|state| {
            state
                .user()
                .and_then(|user| user.company_id.clone())
                .unwrap_or_else(|| "no company".to_owned())
        })
    };

    view! {
        <Show
            when=move || !route.is_loading.get()
            fallback=|| view! { <LoadingScreen label="Checking your session..."/> }
        >
            <Show when=move || route.is_authenticated.get()>
                <section class="financial">
                    <h1>"Financial"</h1>
                    <p class="financial__company">{company}</p>
                    <ul class="financial__kinds">
                        {TRANSACTION_KINDS
                            .iter()
                            .map(|(name, blurb)| {
                                view! {
                                    <li>
                                        <strong>{*name}</strong>
                                        " "
                                        <span>{*blurb}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </Show>
        </Show>
    }
}
