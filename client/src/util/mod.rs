//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure rules (validation, catalog, effect math) live next to the thin
//! wrappers over browser storage, timers, and navigation.

pub mod catalog;
pub mod clock;
pub mod effects;
pub mod nav;
pub mod storage;
pub mod validation;
