//! Full-page placeholder shown while the session is being validated.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__label">{label}</p>
        </div>
    }
}
