//! Sign-up page: profile fields, password confirmation, and terms consent.

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::components::social_buttons::SocialButtons;
use crate::net::backend::SiteBackend;
use crate::net::types::SocialIntent;
use crate::services::auth::{SignupForm, check_signup};
use crate::state::toast::ToastState;
use crate::util::validation::{FieldKind, TermsAcceptance, ValidationResult, validate_field, validate_terms};

#[component]
pub fn SignupPage() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let backend = expect_context::<SiteBackend>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let terms = RwSignal::new(TermsAcceptance::default());

    let name_check = RwSignal::new(None::<ValidationResult>);
    let email_check = RwSignal::new(None::<ValidationResult>);
    let phone_check = RwSignal::new(None::<ValidationResult>);
    let password_check = RwSignal::new(None::<ValidationResult>);
    let confirm_check = RwSignal::new(None::<ValidationResult>);
    let terms_check = RwSignal::new(None::<ValidationResult>);
    let busy = RwSignal::new(false);

    let blur = move |kind: FieldKind<'static>, value: RwSignal<String>, check: RwSignal<Option<ValidationResult>>| {
        Callback::new(move |()| check.set(Some(validate_field(kind, &value.get_untracked()))))
    };
    let on_confirm_blur = Callback::new(move |()| {
        let password = password.get_untracked();
        confirm_check.set(Some(validate_field(
            FieldKind::PasswordConfirm { password: &password },
            &password_confirm.get_untracked(),
        )));
    });

    let set_term = move |apply: fn(&mut TermsAcceptance, bool)| {
        move |ev: leptos::ev::Event| {
            let checked = event_target_checked(&ev);
            terms.update(|t| apply(t, checked));
            terms_check.set(Some(validate_terms(&terms.get_untracked())));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
            password_confirm: password_confirm.get_untracked(),
            terms: terms.get_untracked(),
        };
        let check = check_signup(&form);
        name_check.set(Some(check.name));
        email_check.set(Some(check.email));
        phone_check.set(Some(check.phone));
        password_check.set(Some(check.password));
        confirm_check.set(Some(check.password_confirm));
        terms_check.set(Some(check.terms));
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::components::toast::show_toast;
            use crate::consts::AUTH_REDIRECT_DELAY_MS;
            use crate::services::auth::submit_signup;
            use crate::state::toast::ToastKind;
            use crate::util::nav::redirect_after;

            let result = submit_signup(&backend, &form).await;
            busy.set(false);
            match result {
                Ok(_) => {
                    show_toast(toast, "Sign-up complete! Please log in.", ToastKind::Success);
                    redirect_after("/login", AUTH_REDIRECT_DELAY_MS);
                }
                Err(e) => show_toast(toast, e.to_string(), ToastKind::Error),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (toast, backend, form);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="auth-card__brand">"neurucare"</a>
                <h1 class="auth-card__title">"Create an account"</h1>
                <form id="signup-form" class="auth-form" novalidate=true on:submit=on_submit>
                    <FormField
                        id="name"
                        label="Name"
                        autocomplete="name"
                        value=name
                        check=name_check
                        on_blur=blur(FieldKind::Name, name, name_check)
                    />
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        value=email
                        check=email_check
                        on_blur=blur(FieldKind::Email, email, email_check)
                    />
                    <FormField
                        id="phone"
                        label="Phone"
                        input_type="tel"
                        placeholder="010-1234-5678"
                        autocomplete="tel"
                        value=phone
                        check=phone_check
                        on_blur=blur(FieldKind::Phone, phone, phone_check)
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        autocomplete="new-password"
                        value=password
                        check=password_check
                        on_blur=blur(FieldKind::Password, password, password_check)
                    />
                    <FormField
                        id="password-confirm"
                        label="Confirm password"
                        input_type="password"
                        autocomplete="new-password"
                        value=password_confirm
                        check=confirm_check
                        on_blur=on_confirm_blur
                    />

                    <fieldset class="auth-form__terms">
                        <label class="label cursor-pointer">
                            <input
                                id="terms-all"
                                type="checkbox"
                                class="checkbox checkbox-sm"
                                prop:checked=move || terms.get().all_accepted()
                                on:change=set_term(TermsAcceptance::set_all)
                            />
                            <span class="label-text font-semibold">"Agree to all"</span>
                        </label>
                        <label class="label cursor-pointer">
                            <input
                                id="terms-service"
                                type="checkbox"
                                class="checkbox checkbox-sm"
                                prop:checked=move || terms.get().service
                                on:change=set_term(|t, checked| t.service = checked)
                            />
                            <span class="label-text">"Terms of service (required)"</span>
                        </label>
                        <label class="label cursor-pointer">
                            <input
                                id="terms-privacy"
                                type="checkbox"
                                class="checkbox checkbox-sm"
                                prop:checked=move || terms.get().privacy
                                on:change=set_term(|t, checked| t.privacy = checked)
                            />
                            <span class="label-text">"Privacy policy (required)"</span>
                        </label>
                        <label class="label cursor-pointer">
                            <input
                                id="terms-marketing"
                                type="checkbox"
                                class="checkbox checkbox-sm"
                                prop:checked=move || terms.get().marketing
                                on:change=set_term(|t, checked| t.marketing = checked)
                            />
                            <span class="label-text">"Marketing messages (optional)"</span>
                        </label>
                        <p
                            id="terms-error"
                            class="field-error"
                            class:hidden=move || terms_check.get().map_or(true, |r| r.valid)
                        >
                            {move || terms_check.get().and_then(|r| r.error()).unwrap_or_default()}
                        </p>
                    </fieldset>

                    <button
                        id="signup-submit-btn"
                        type="submit"
                        class="btn btn-primary w-full"
                        disabled=move || busy.get()
                    >
                        <span id="signup-btn-text" class:hidden=move || busy.get()>"Sign up"</span>
                        <span
                            id="signup-spinner"
                            class="loading loading-spinner loading-sm"
                            class:hidden=move || !busy.get()
                        ></span>
                    </button>
                </form>
                <div class="divider">"or"</div>
                <SocialButtons intent=SocialIntent::Signup/>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login" class="link link-primary">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
