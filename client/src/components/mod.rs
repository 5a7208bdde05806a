//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` owns state and events; `transcript` and `icons` only render.

pub mod chat_widget;
pub mod icons;
pub mod transcript;
