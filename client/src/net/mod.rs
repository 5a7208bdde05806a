//! Networking for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single outbound request per user turn and `types`
//! defines its JSON schema.

pub mod api;
pub mod types;
