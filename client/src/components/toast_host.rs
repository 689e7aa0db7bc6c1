//! Renders the toast queue from context.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="assertive">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast toast--{}", toast.kind.as_class());
                    view! {
                        <div class=class role="alert">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|s| s.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
