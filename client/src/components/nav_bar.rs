//! Top navigation listing only the sections the current role may open.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let permissions = Memo::new(move |_| auth.with(AuthState::permissions));
    let identity = move || {
        auth.with(|state| {
            state
                .user()
                .map(|user| format!("{} ({})", user.name, state.role().map_or("?", access::Role::as_str)))
                .unwrap_or_default()
        })
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"Ledgerly"</a>
            <Show when=move || permissions.get().can_access_financial>
                <a class="nav-bar__link" href="/financial">"Financial"</a>
            </Show>
            <Show when=move || permissions.get().can_manage_users>
                <a class="nav-bar__link" href="/admin/users">"Users"</a>
            </Show>
            <Show when=move || permissions.get().can_manage_companies>
                <a class="nav-bar__link" href="/admin/companies">"Companies"</a>
            </Show>
            <span class="nav-bar__identity">{identity}</span>
            <button class="nav-bar__logout" on:click=move |_| sign_out(auth)>
                "Sign out"
            </button>
        </nav>
    }
}
