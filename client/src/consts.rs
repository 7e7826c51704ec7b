//! Shared constants for session handling, timing, and page effects.

// ── Session ─────────────────────────────────────────────────────

/// Storage key holding the serialized session record in both storage scopes.
pub const SESSION_STORAGE_KEY: &str = "neurucare_user";

/// The only credential pair the demo backend accepts.
pub const DEMO_EMAIL: &str = "test@neurucare.com";
pub const DEMO_PASSWORD: &str = "password123";

// ── Timing ──────────────────────────────────────────────────────

/// Simulated backend latency is `LATENCY_MIN_MS + random(0..LATENCY_JITTER_MS)`.
pub const LATENCY_MIN_MS: u32 = 1000;
pub const LATENCY_JITTER_MS: u32 = 1000;

pub const TOAST_DURATION_MS: u32 = 3000;

/// Delay between a successful sign-in/sign-up and the page redirect.
pub const AUTH_REDIRECT_DELAY_MS: u32 = 1500;

pub const LOGOUT_REDIRECT_DELAY_MS: u32 = 1000;

// ── Page effects ────────────────────────────────────────────────

/// Scroll offset (px) past which the header switches to its compact style.
pub const HEADER_SCROLLED_THRESHOLD: f64 = 100.0;

/// Hero translation per scrolled pixel.
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Viewports narrower than this (px) render compact cards.
pub const COMPACT_VIEWPORT_WIDTH: f64 = 768.0;

/// Extra space (px) left above an anchor target below the fixed header.
pub const ANCHOR_SCROLL_GAP: f64 = 20.0;

pub const SCROLL_THROTTLE_MS: f64 = 16.0;
pub const RESIZE_THROTTLE_MS: f64 = 250.0;

pub const HERO_ANIMATION_DELAY_MS: u32 = 500;

/// Product-card badges start after `BADGE_REVEAL_DELAY_MS`, then one every
/// `BADGE_STAGGER_MS`.
pub const BADGE_REVEAL_DELAY_MS: u32 = 200;
pub const BADGE_STAGGER_MS: u32 = 100;

pub const MODAL_TRANSITION_DELAY_MS: u32 = 50;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
