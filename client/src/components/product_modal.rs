//! Product detail modal.

use leptos::prelude::*;

use crate::util::catalog::{ProductRecord, find_product};

/// Select the product with `id` for display. Unknown ids leave the modal as is.
pub fn open_product(selected: RwSignal<Option<&'static ProductRecord>>, id: &str) {
    match find_product(id) {
        Some(product) => selected.set(Some(product)),
        None => log::warn!("no product with id {id}"),
    }
}

/// Modal showing the selected product. Closes on the close button, a click
/// on the backdrop, or Escape.
#[component]
pub fn ProductModal(selected: RwSignal<Option<&'static ProductRecord>>) -> impl IntoView {
    let entered = RwSignal::new(false);

    Effect::new(move || {
        if selected.get().is_some() {
            entered.set(false);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                crate::util::clock::sleep_ms(crate::consts::MODAL_TRANSITION_DELAY_MS).await;
                entered.set(true);
            });
        }
    });

    let close = move || selected.set(None);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && selected.get_untracked().is_some() {
                selected.set(None);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Show when=move || selected.get().is_some()>
            <div
                id="product_modal"
                class="modal modal-open"
                on:click=move |_| close()
            >
                <div
                    class=move || if entered.get() { "modal-box modal-box--entered" } else { "modal-box" }
                    on:click=|ev| ev.stop_propagation()
                >
                    <button class="btn btn-sm btn-circle btn-ghost modal-close" on:click=move |_| close()>
                        "✕"
                    </button>
                    <div id="modal-content">{move || selected.get().map(product_details)}</div>
                </div>
            </div>
        </Show>
    }
}

fn product_details(product: &'static ProductRecord) -> impl IntoView {
    let list = |items: &'static [&'static str]| {
        items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()
    };

    view! {
        <div class="product-detail">
            <div class="product-detail__icon">{product.icon()}</div>
            <h3 class="product-detail__name">{product.name}</h3>
            <p class="product-detail__price">{product.price}</p>
            <p class="product-detail__description">{product.description}</p>
            <h4>"Key benefits"</h4>
            <ul class="product-detail__benefits">{list(product.benefits)}</ul>
            <h4>"Key ingredients"</h4>
            <ul class="product-detail__ingredients">{list(product.ingredients)}</ul>
            <h4>"How to use"</h4>
            <p class="product-detail__usage">{product.usage}</p>
        </div>
    }
}
