//! Wall-clock reads and timer sleeps that work in both the browser and SSR.
//!
//! `std::time::SystemTime` is unavailable on `wasm32-unknown-unknown`, so the
//! browser build reads `Date.now()` instead.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::sync::atomic::{AtomicU64, Ordering};

static LAST_ISSUED_MILLIS: AtomicU64 = AtomicU64::new(0);

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Current timestamp in milliseconds, bumped past the previously issued value
/// so two calls in the same millisecond never return the same number.
#[must_use]
pub fn unique_millis() -> u64 {
    let now = now_millis();
    let mut prev = LAST_ISSUED_MILLIS.load(Ordering::Relaxed);
    loop {
        let next = now.max(prev + 1);
        match LAST_ISSUED_MILLIS.compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => prev = actual,
        }
    }
}

/// Sleep for `ms` milliseconds on the browser event loop.
///
/// Resolves immediately outside the browser.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
