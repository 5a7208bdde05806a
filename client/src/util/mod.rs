//! Pure helpers used by the widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Kept free of Leptos so rendering rules can be tested without a browser.

pub mod format;
pub mod markdown;
