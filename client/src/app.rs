//! Root application component with routing and context providers.

use access::GuardConfig;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    admin::{CompaniesPage, UsersPage},
    dashboard::DashboardPage,
    financial::FinancialPage,
    login::LoginPage,
};
use crate::state::{auth::AuthState, toast::ToastState};
use crate::util::auth::load_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, toast sink and guard configuration, starts the
/// session lookup, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session starts in the loading state until `/api/auth/me` answers.
    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);
    provide_context(GuardConfig::default());

    load_session(auth);

    let signed_in = move || auth.with(|state| state.session.is_authenticated());

    view! {
        <Stylesheet id="leptos" href="/pkg/ledgerly.css"/>
        <Title text="Ledgerly"/>

        <Router>
            <Show when=signed_in>
                <NavBar/>
            </Show>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("financial") view=FinancialPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("companies")) view=CompaniesPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("users")) view=UsersPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
