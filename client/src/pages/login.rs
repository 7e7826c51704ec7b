//! Login page: email + password with "remember me", plus social sign-in.

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::components::social_buttons::SocialButtons;
use crate::net::backend::SiteBackend;
use crate::net::types::SocialIntent;
use crate::services::auth::{LoginForm, check_login};
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;
use crate::util::validation::{FieldKind, ValidationResult, validate_field, validate_login_password};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let backend = expect_context::<SiteBackend>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let email_check = RwSignal::new(None::<ValidationResult>);
    let password_check = RwSignal::new(None::<ValidationResult>);
    let busy = RwSignal::new(false);

    let on_email_blur = Callback::new(move |()| {
        email_check.set(Some(validate_field(FieldKind::Email, &email.get_untracked())));
    });
    let on_password_blur = Callback::new(move |()| {
        password_check.set(Some(validate_login_password(&password.get_untracked())));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember: remember.get_untracked(),
        };
        let check = check_login(&form);
        email_check.set(Some(check.email));
        password_check.set(Some(check.password));
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::components::toast::show_toast;
            use crate::consts::AUTH_REDIRECT_DELAY_MS;
            use crate::services::auth::submit_login;
            use crate::state::toast::ToastKind;
            use crate::util::nav::redirect_after;

            let mut store = session.get_untracked();
            let result = submit_login(&backend, &mut store, &form).await;
            busy.set(false);
            match result {
                Ok(_) => {
                    session.set(store);
                    show_toast(toast, "Logged in successfully!", ToastKind::Success);
                    redirect_after("/", AUTH_REDIRECT_DELAY_MS);
                }
                Err(e) => show_toast(toast, e.to_string(), ToastKind::Error),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, toast, backend, form);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="auth-card__brand">"neurucare"</a>
                <h1 class="auth-card__title">"Log in"</h1>
                <form id="login-form" class="auth-form" novalidate=true on:submit=on_submit>
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        value=email
                        check=email_check
                        on_blur=on_email_blur
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        autocomplete="current-password"
                        value=password
                        check=password_check
                        on_blur=on_password_blur
                    />
                    <label class="label cursor-pointer auth-form__remember">
                        <input
                            id="remember-me"
                            type="checkbox"
                            class="checkbox checkbox-sm"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        <span class="label-text">"Remember me"</span>
                    </label>
                    <button
                        id="login-submit-btn"
                        type="submit"
                        class="btn btn-primary w-full"
                        disabled=move || busy.get()
                    >
                        <span id="login-btn-text" class:hidden=move || busy.get()>"Log in"</span>
                        <span
                            id="login-spinner"
                            class="loading loading-spinner loading-sm"
                            class:hidden=move || !busy.get()
                        ></span>
                    </button>
                </form>
                <div class="divider">"or"</div>
                <SocialButtons intent=SocialIntent::Login/>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/signup" class="link link-primary">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
