//! Full-page navigation helpers.
//!
//! Auth flows leave the page with a real navigation (not a router push) so
//! the next page boots with the freshly written session.

/// Navigate to `path` after `delay_ms`. No-op outside the browser.
pub fn redirect_after(path: &'static str, delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::util::clock::sleep_ms(delay_ms).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, delay_ms);
    }
}
