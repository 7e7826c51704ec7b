//! Site navigation bar with section anchors and the session area.

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::consts::LOGOUT_REDIRECT_DELAY_MS;
use crate::services::auth;
use crate::state::session::SessionStore;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::effects::scroll_to_section;
use crate::util::nav::redirect_after;

/// In-page sections linked from the navbar: (label, fragment).
const SECTION_LINKS: &[(&str, &str)] = &[
    ("Brand", "#brand-story"),
    ("Products", "#products"),
    ("Philosophy", "#philosophy"),
];

/// Top navigation. On the home page (`home`) section links smooth-scroll in
/// place; elsewhere they navigate to `/#section`.
#[component]
pub fn Navbar(#[prop(optional)] home: bool) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let user_name = move || session.with(|s| s.current_user().map(|u| u.name.clone()));

    let on_logout = move |_| {
        session.update(auth::logout);
        show_toast(toast, "You have been logged out.", ToastKind::Info);
        redirect_after("/", LOGOUT_REDIRECT_DELAY_MS);
    };

    let links = SECTION_LINKS
        .iter()
        .map(|&(label, fragment)| {
            view! {
                <a
                    class="nav-link"
                    href=format!("/{fragment}")
                    on:click=move |ev| {
                        if home {
                            ev.prevent_default();
                            scroll_to_section(fragment);
                        }
                    }
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="navbar-start">
                <a href="/" class="brand">"neurucare"</a>
            </div>
            <div class="navbar-center">{links}</div>
            <div class="navbar-end">
                <Show
                    when=move || user_name().is_some()
                    fallback=|| {
                        view! {
                            <a href="/login" class="btn btn-ghost btn-sm">"Log in"</a>
                            <a href="/signup" class="btn btn-primary btn-sm">"Sign up"</a>
                        }
                    }
                >
                    <div class="navbar-user">
                        <span class="navbar-greeting">
                            {move || format!("Hello, {}", user_name().unwrap_or_default())}
                        </span>
                        <button id="logout-btn" class="btn btn-ghost btn-sm" on:click=on_logout>
                            "Log out"
                        </button>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
