//! Scroll-reveal wrapper: adds `animate` once the element enters the viewport.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;

/// Class list for a reveal wrapper.
fn reveal_class(base: &str, revealed: bool, compact: bool) -> String {
    let mut class = format!("{base} reveal");
    if revealed {
        class.push_str(" animate");
    }
    if compact {
        class.push_str(" card-compact");
    }
    class
}

/// Wraps `children` in a div observed by an `IntersectionObserver`. The
/// element is revealed once and then unobserved. Pass `revealed` to react to
/// the reveal elsewhere, and `compact` to toggle the compact card style.
#[component]
pub fn Reveal(
    class: &'static str,
    children: Children,
    #[prop(optional)] revealed: Option<RwSignal<bool>>,
    #[prop(optional)] compact: Option<RwSignal<bool>>,
) -> impl IntoView {
    let revealed = revealed.unwrap_or_else(|| RwSignal::new(false));
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = node.get() {
            observe_once(&el, revealed);
        }
    });

    view! {
        <div
            node_ref=node
            class=move || reveal_class(class, revealed.get(), compact.is_some_and(|c| c.get()))
        >
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn observe_once(el: &web_sys::Element, revealed: RwSignal<bool>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<web_sys::IntersectionObserverEntry>();
                if entry.is_intersecting() {
                    revealed.set(true);
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer.observe(el),
        Err(e) => {
            log::warn!("intersection observer unavailable: {e:?}");
            revealed.set(true);
        }
    }
    callback.forget();
}
