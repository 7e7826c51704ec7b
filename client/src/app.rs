//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::net::backend::{DemoBackend, SiteBackend};
use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;
use crate::util::storage::BrowserStorage;

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
/// Owns the session store for the lifetime of the page and provides it,
/// the toast state, and the auth backend to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The server renders logged out; the stored record is picked up once the
    // page is live in the browser.
    let session = RwSignal::new(SessionStore::<BrowserStorage>::default());
    Effect::new(move || {
        let restored = SessionStore::hydrate(BrowserStorage);
        if restored.is_logged_in() {
            session.set(restored);
        }
    });

    let toast = RwSignal::new(ToastState::default());
    let backend: SiteBackend = DemoBackend::default();

    provide_context(session);
    provide_context(toast);
    provide_context(backend);

    view! {
        <Stylesheet id="leptos" href="/pkg/neurucare.css"/>
        <Title text="neurucare"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
