//! Kakao and Google sign-in buttons shared by the login and sign-up pages.

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::net::backend::SiteBackend;
use crate::net::types::{Provider, SocialIntent};
use crate::services::social::{button_id, button_label};
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;

/// One button per provider. While a sign-in is pending every button is
/// disabled and the active one shows a spinner.
#[component]
pub fn SocialButtons(intent: SocialIntent) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let backend = expect_context::<SiteBackend>();
    let pending = RwSignal::new(None::<Provider>);

    let on_click = move |provider: Provider| {
        if pending.get_untracked().is_some() {
            return;
        }
        pending.set(Some(provider));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::consts::AUTH_REDIRECT_DELAY_MS;
            use crate::services::social::{failure_message, social_sign_in, success_message};
            use crate::state::toast::ToastKind;
            use crate::util::nav::redirect_after;

            let mut store = session.get_untracked();
            let result = social_sign_in(&backend, &mut store, provider, intent).await;
            pending.set(None);
            match result {
                Ok(_) => {
                    session.set(store);
                    show_toast(toast, success_message(provider, intent), ToastKind::Success);
                    redirect_after("/", AUTH_REDIRECT_DELAY_MS);
                }
                Err(e) => {
                    log::warn!("{} {} failed: {e}", provider.as_str(), intent.as_str());
                    show_toast(toast, failure_message(provider, intent), ToastKind::Error);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, toast, backend);
    };

    view! {
        <div class="social-buttons">
            {[Provider::Kakao, Provider::Google]
                .into_iter()
                .map(|provider| {
                    view! {
                        <button
                            type="button"
                            id=button_id(provider, intent)
                            class=format!("btn social-btn social-btn--{}", provider.as_str())
                            disabled=move || pending.get().is_some()
                            on:click=move |_| on_click(provider)
                        >
                            <Show
                                when=move || pending.get() == Some(provider)
                                fallback=move || button_label(provider, intent)
                            >
                                <span class="loading loading-spinner loading-sm"></span>
                                "Processing..."
                            </Show>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
