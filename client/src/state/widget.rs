//! Chat widget state: visibility, draft text, transcript and request flag.
//!
//! DESIGN
//! ======
//! All transitions are plain methods on `WidgetState` so the component only
//! wires events to them. The component holds the struct in an `RwSignal`;
//! rendering reads the signal and never mutates it.
//!
//! A submit is split in two: `begin_submit` records the user turn and hands
//! back the query to send, `complete_submit` records whatever came back.
//! `begin_submit` refuses while a request is outstanding, so at most one
//! request is in flight and answers land in prompt order.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use serde::{Deserialize, Serialize};

use crate::net::api::ChatError;
use crate::net::types::{ChatResponse, SourceRef};

/// Assistant text shown for every kind of request failure.
pub const BACKEND_ERROR_MESSAGE: &str = "⚠️ Error: Could not reach backend.";

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Assistant,
}

impl Role {
    /// CSS modifier used by the transcript.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One transcript entry. Never modified after it is appended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Local rendering key; not sent anywhere.
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into(), Vec::new())
    }

    pub fn assistant(content: impl Into<String>, sources: Vec<SourceRef>) -> Self {
        Self::new(Role::Assistant, content.into(), sources)
    }

    /// The fixed assistant reply used when the backend cannot answer.
    pub fn backend_error() -> Self {
        Self::assistant(BACKEND_ERROR_MESSAGE, Vec::new())
    }

    fn new(role: Role, content: String, sources: Vec<SourceRef>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content, sources }
    }

    /// True when a "Sources:" list should be rendered under the body.
    pub fn has_sources(&self) -> bool {
        self.role == Role::Assistant && !self.sources.is_empty()
    }
}

/// Complete widget state.
#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    pub is_open: bool,
    pub draft_input: String,
    pub is_loading: bool,
    pub transcript: Vec<Message>,
}

impl WidgetState {
    /// Show or hide the panel. Nothing else changes.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Replace the draft verbatim.
    pub fn set_draft_input(&mut self, text: impl Into<String>) {
        self.draft_input = text.into();
    }

    /// Whether `begin_submit` would accept the current draft.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.draft_input.trim().is_empty()
    }

    /// Record the user turn and return the query to send.
    ///
    /// Returns `None`, leaving state untouched, when the trimmed draft is
    /// empty or a request is already outstanding.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let query = self.draft_input.trim().to_owned();
        self.transcript.push(Message::user(query.clone()));
        self.draft_input.clear();
        self.is_loading = true;
        Some(query)
    }

    /// Record the outcome of the outstanding request and clear the loading flag.
    pub fn complete_submit(&mut self, outcome: Result<ChatResponse, ChatError>) {
        let reply = match outcome {
            Ok(resp) => Message::assistant(resp.answer, resp.sources),
            Err(_) => Message::backend_error(),
        };
        self.transcript.push(reply);
        self.is_loading = false;
    }
}
