//! Widget configuration shared by the host server and the hydrated app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host builds a `WidgetConfig` from its environment, renders with it on
//! the server, and embeds it in the page as a JSON `<script>` block. The WASM
//! app reads that block back during hydration so both sides render the same
//! text and post to the same endpoint.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Remote answering endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:8000/chat";
pub const DEFAULT_PAGE_TITLE: &str = "Aziro Technologies Chatbot";
pub const DEFAULT_PAGE_SUBTITLE: &str = "Ask about services, leadership, or capabilities.";
pub const DEFAULT_HEADER_TITLE: &str = "Aziro Chatbot";
pub const DEFAULT_INPUT_PLACEHOLDER: &str = "Ask about Aziro...";
pub const DEFAULT_TOGGLE_TOOLTIP: &str = "Chat with Aziro Bot";

/// DOM id of the embedded JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "chat-widget-config";

/// Endpoint location and branding text for the widget and its host page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub endpoint_url: String,
    pub page_title: String,
    pub page_subtitle: String,
    pub header_title: String,
    pub input_placeholder: String,
    pub toggle_tooltip: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_owned(),
            page_title: DEFAULT_PAGE_TITLE.to_owned(),
            page_subtitle: DEFAULT_PAGE_SUBTITLE.to_owned(),
            header_title: DEFAULT_HEADER_TITLE.to_owned(),
            input_placeholder: DEFAULT_INPUT_PLACEHOLDER.to_owned(),
            toggle_tooltip: DEFAULT_TOGGLE_TOOLTIP.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Serialize for embedding inside a `<script type="application/json">`.
    ///
    /// `</` is escaped so a value can never close the surrounding script tag.
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace("</", "<\\/")
    }

    /// Parse an embedded JSON block. Missing fields fall back to defaults;
    /// unparseable input yields the default config.
    pub fn from_embedded_json(raw: &str) -> Self {
        serde_json::from_str(raw.trim()).unwrap_or_default()
    }

    /// Read the config the server embedded in the current page.
    ///
    /// Outside the browser, or when the block is missing, returns defaults.
    pub fn from_page() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) => Self::from_embedded_json(&raw),
                None => {
                    log::warn!("widget config block #{CONFIG_ELEMENT_ID} missing; using defaults");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
