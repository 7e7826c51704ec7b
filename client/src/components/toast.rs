//! Toast container and the helper every flow uses to raise a toast.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Show `message` and hide it again after `TOAST_DURATION_MS`.
pub fn show_toast(toast: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    let message = message.into();
    let generation = toast.try_update(|t| t.show(message, kind)).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::util::clock::sleep_ms(crate::consts::TOAST_DURATION_MS).await;
        toast.update(|t| t.dismiss(generation));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = generation;
}

/// Fixed-position toast rendered once by the root component.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <div id="toast-container" class="toast toast-top toast-end" class:hidden=move || !toast.get().visible>
            <div id="toast-message" class=move || format!("alert {}", toast.get().kind.alert_class())>
                <span id="toast-text">{move || toast.get().message}</span>
            </div>
        </div>
    }
}
