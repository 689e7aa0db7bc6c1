//! Role-gated administration pages.
//!
//! Both pages use the wrapper form of the guard with an explicit allow-list;
//! the server re-checks the same permissions on the list endpoints.

use access::Role;
use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::net::types::{CompanySummary, UserSummary};

#[component]
pub fn CompaniesPage() -> impl IntoView {
    view! {
        <Protected allowed_roles=vec![Role::Admin]>
            <CompanyList/>
        </Protected>
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <Protected allowed_roles=vec![Role::Superuser, Role::Admin]>
            <UserList/>
        </Protected>
    }
}

#[component]
fn CompanyList() -> impl IntoView {
    let companies = RwSignal::new(Vec::<CompanySummary>::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_companies().await {
            Ok(rows) => companies.set(rows),
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <section class="admin">
            <h1>"Companies"</h1>
            <Show when=move || error.get().is_some()>
                <p class="admin__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <table class="admin__table">
                <thead>
                    <tr><th>"Name"</th><th>"Users"</th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || companies.get()
                        key=|company| company.id.clone()
                        children=move |company: CompanySummary| {
                            view! {
                                <tr><td>{company.name}</td><td>{company.user_count}</td></tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn UserList() -> impl IntoView {
    let users = RwSignal::new(Vec::<UserSummary>::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_users().await {
            Ok(rows) => users.set(rows),
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <section class="admin">
            <h1>"Users"</h1>
            <Show when=move || error.get().is_some()>
                <p class="admin__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <table class="admin__table">
                <thead>
                    <tr><th>"Name"</th><th>"Email"</th><th>"Role"</th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|user| user.id.clone()
                        children=move |user: UserSummary| {
                            view! {
                                <tr>
                                    <td>{user.name}</td>
                                    <td>{user.email}</td>
                                    <td>{user.role.as_str()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
