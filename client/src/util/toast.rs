//! Notification sink used by guards and pages.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_TTL_MS: u64 = 4_000;

/// Queue a toast and, in the browser, schedule its dismissal.
pub fn add_toast(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) -> u64 {
    let mut id = 0;
    let message = message.into();
    toasts.update(|state| id = state.push(message, kind));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        // The signal may already be disposed if the app unmounted.
        let _ = toasts.try_update(|state| state.dismiss(id));
    });

    id
}
