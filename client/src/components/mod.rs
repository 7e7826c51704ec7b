//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and form pieces while reading/writing shared
//! state from Leptos context providers.

pub mod form_field;
pub mod navbar;
pub mod product_modal;
pub mod reveal;
pub mod social_buttons;
pub mod toast;
