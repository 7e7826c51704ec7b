//! Scroll, resize, and reveal math for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page feeds window scroll/resize readings through these helpers
//! and binds the results to classes and inline styles. Browser-only calls
//! (`scroll_to_section`) no-op during SSR.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::consts::{
    ANCHOR_SCROLL_GAP, BADGE_REVEAL_DELAY_MS, BADGE_STAGGER_MS, COMPACT_VIEWPORT_WIDTH, HEADER_SCROLLED_THRESHOLD,
    PARALLAX_FACTOR,
};

/// Whether the header should switch to its scrolled style.
#[must_use]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_THRESHOLD
}

/// CSS transform moving the hero at a fraction of the scroll speed.
#[must_use]
pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_FACTOR)
}

/// Whether cards should render in their compact variant.
#[must_use]
pub fn is_compact_viewport(width: f64) -> bool {
    width < COMPACT_VIEWPORT_WIDTH
}

/// Scroll position that puts a section just below the fixed header.
#[must_use]
pub fn anchor_scroll_target(offset_top: f64, header_height: f64) -> f64 {
    offset_top - header_height - ANCHOR_SCROLL_GAP
}

/// Delay before the `index`-th badge of a revealed product card fades in.
#[must_use]
pub fn badge_delay_ms(index: usize) -> u32 {
    let step = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(BADGE_STAGGER_MS);
    BADGE_REVEAL_DELAY_MS.saturating_add(step)
}

/// Leading-edge throttle: the first call fires, later calls within
/// `limit_ms` of the last firing are dropped.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    limit_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms, last_fired: None }
    }

    /// Whether a call at `now_ms` should run; records it if so.
    pub fn should_fire(&mut self, now_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }
}

/// Smooth-scroll the window to the element matching `selector`, leaving room
/// for the `#header` element. Missing elements are ignored.
pub fn scroll_to_section(selector: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(target) = document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let header_height = document
            .get_element_by_id("header")
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map_or(0.0, |el| f64::from(el.offset_height()));

        let options = web_sys::ScrollToOptions::new();
        options.set_top(anchor_scroll_target(f64::from(target.offset_top()), header_height));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selector;
    }
}

/// Current vertical scroll offset of the window.
#[must_use]
pub fn window_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Current inner width of the window; wide when unknown.
#[must_use]
pub fn window_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(COMPACT_VIEWPORT_WIDTH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        COMPACT_VIEWPORT_WIDTH
    }
}
