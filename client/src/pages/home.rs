//! Landing page: hero, brand story, product catalog, and philosophy sections.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::product_modal::{ProductModal, open_product};
use crate::components::reveal::Reveal;
use crate::util::catalog::{PRODUCTS, ProductRecord};
use crate::util::effects::{badge_delay_ms, header_scrolled, parallax_transform, scroll_to_section};

/// Brand pillars: (icon, title, body).
const BRAND_POINTS: &[(&str, &str, &str)] = &[
    ("🔬", "Science first", "Every formula starts in our dermatology lab and is clinically tested."),
    ("🌿", "Gentle ingredients", "Plant-derived actives chosen for sensitive skin, free of harsh additives."),
    ("💧", "Lasting results", "Routines designed to strengthen the skin barrier over time."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let scroll_y = RwSignal::new(0.0_f64);
    let compact = RwSignal::new(false);
    let hero_animated = RwSignal::new(false);
    let selected = RwSignal::new(None::<&'static ProductRecord>);

    #[cfg(feature = "hydrate")]
    install_page_listeners(scroll_y, compact, hero_animated);

    view! {
        <header
            id="header"
            class=move || if header_scrolled(scroll_y.get()) { "site-header scrolled" } else { "site-header" }
        >
            <Navbar home=true/>
        </header>

        <main>
            <section id="hero" class="hero" style:transform=move || parallax_transform(scroll_y.get())>
                <div class=move || if hero_animated.get() { "hero-animation animate" } else { "hero-animation" }>
                    <h1 class="hero__title">"Science meets nature for healthy skin"</h1>
                    <p class="hero__subtitle">
                        "Dermatologist-developed skincare for every skin type."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn-primary" on:click=move |_| scroll_to_section("#products")>
                            "Explore products"
                        </button>
                        <button class="btn btn-outline" on:click=move |_| scroll_to_section("#brand-story")>
                            "Our story"
                        </button>
                    </div>
                </div>
            </section>

            <section id="brand-story" class="section brand-story">
                <h2 class="section__title">"Our story"</h2>
                <div class="brand-story__grid">
                    {BRAND_POINTS
                        .iter()
                        .map(|&(icon, title, body)| {
                            view! {
                                <Reveal class="card brand-card" compact=compact>
                                    <div class="brand-card__icon">{icon}</div>
                                    <h3 class="brand-card__title">{title}</h3>
                                    <p>{body}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="products" class="section products">
                <h2 class="section__title">"Products"</h2>
                <div class="products__grid">
                    {PRODUCTS
                        .iter()
                        .map(|product| view! { <ProductCard product=product compact=compact selected=selected/> })
                        .collect_view()}
                </div>
            </section>

            <section id="philosophy" class="section philosophy">
                <Reveal class="philosophy-content">
                    <h2 class="section__title">"Our philosophy"</h2>
                    <p>
                        "Healthy skin comes from consistency, not complexity. We keep formulas short, "
                        "honest, and backed by research."
                    </p>
                </Reveal>
                <Reveal class="philosophy-image">
                    <div class="philosophy-image__art">"🌸"</div>
                </Reveal>
            </section>
        </main>

        <footer class="site-footer">
            <p>"© neurucare. All rights reserved."</p>
        </footer>

        <ProductModal selected=selected/>
    }
}

/// Catalog card. Badges fade in one after another once the card is revealed.
#[component]
fn ProductCard(
    product: &'static ProductRecord,
    compact: RwSignal<bool>,
    selected: RwSignal<Option<&'static ProductRecord>>,
) -> impl IntoView {
    let revealed = RwSignal::new(false);

    view! {
        <Reveal class="card product-card" revealed=revealed compact=compact>
            <div class="product-card__icon">{product.icon()}</div>
            <h3 class="product-card__name">{product.name}</h3>
            <p class="product-card__price">{product.price}</p>
            <div class="product-card__badges">
                {product
                    .benefits
                    .iter()
                    .enumerate()
                    .map(|(index, benefit)| {
                        view! {
                            <span
                                class=move || if revealed.get() { "badge badge--visible" } else { "badge" }
                                style:transition-delay=format!("{}ms", badge_delay_ms(index))
                            >
                                {*benefit}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                class="btn btn-sm btn-outline product-card__details"
                data-product=product.id
                on:click=move |_| open_product(selected, product.id)
            >
                "View details"
            </button>
        </Reveal>
    }
}

/// Scroll/resize listeners driving the header, parallax, and compact cards,
/// plus the delayed hero entrance. Listeners are removed with the page.
#[cfg(feature = "hydrate")]
fn install_page_listeners(scroll_y: RwSignal<f64>, compact: RwSignal<bool>, hero_animated: RwSignal<bool>) {
    use std::cell::Cell;

    use crate::consts::{HERO_ANIMATION_DELAY_MS, RESIZE_THROTTLE_MS, SCROLL_THROTTLE_MS};
    use crate::util::effects::{Throttle, is_compact_viewport, window_scroll_y, window_width};

    scroll_y.set(window_scroll_y());
    compact.set(is_compact_viewport(window_width()));

    let scroll_throttle = Cell::new(Throttle::new(SCROLL_THROTTLE_MS));
    let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
        let mut throttle = scroll_throttle.get();
        if throttle.should_fire(js_sys::Date::now()) {
            scroll_y.set(window_scroll_y());
        }
        scroll_throttle.set(throttle);
    });

    let resize_throttle = Cell::new(Throttle::new(RESIZE_THROTTLE_MS));
    let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
        let mut throttle = resize_throttle.get();
        if throttle.should_fire(js_sys::Date::now()) {
            compact.set(is_compact_viewport(window_width()));
        }
        resize_throttle.set(throttle);
    });

    on_cleanup(move || {
        scroll_handle.remove();
        resize_handle.remove();
    });

    leptos::task::spawn_local(async move {
        crate::util::clock::sleep_ms(HERO_ANIMATION_DELAY_MS).await;
        hero_animated.set(true);
    });
}
