//! Home page summarizing what the signed-in account can do.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route and the default fallback for role
//! denials, so it is gated on authentication only.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use access::Permissions;
use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::state::auth::AuthState;

/// A section of the app shown as a card on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Section {
    pub title: &'static str,
    pub href: &'static str,
    pub blurb: &'static str,
}

/// Sections the given permissions unlock, in display order.
pub(crate) fn visible_sections(permissions: Permissions) -> Vec<Section> {
    let mut sections = Vec::new();
    if permissions.can_access_financial {
        sections.push(Section {
            title: "Financial",
            href: "/financial",
            blurb: "Income, expenses, transfers and installments.",
        });
    }
    if permissions.can_manage_users {
        sections.push(Section { title: "Users", href: "/admin/users", blurb: "Accounts and their roles." });
    }
    if permissions.can_manage_companies {
        sections.push(Section { title: "Companies", href: "/admin/companies", blurb: "Tenants on this instance." });
    }
    sections
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Protected>
            <DashboardBody/>
        </Protected>
    }
}

#[component]
fn DashboardBody() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|state| state.user().map(|user| format!("Welcome, {}", user.name)).unwrap_or_default())
    };
    let sections = move || visible_sections(auth.with(AuthState::permissions));

    view! {
        <section class="dashboard">
            <h1 class="dashboard__title">{greeting}</h1>
            <div class="dashboard__grid">
                <For
                    each=sections
                    key=|section| section.href
                    children=move |section: Section| {
                        view! {
                            <a class="dashboard-card" href=section.href>
                                <span class="dashboard-card__title">{section.title}</span>
                                <span class="dashboard-card__blurb">{section.blurb}</span>
                            </a>
                        }
                    }
                />
            </div>
        </section>
    }
}
