//! Host configuration parsed from environment variables.
//!
//! Required: nothing.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `CHAT_ENDPOINT_URL`: answering endpoint the widget posts to,
//!   default `http://localhost:8000/chat`
//! - `CHAT_PAGE_TITLE`, `CHAT_PAGE_SUBTITLE`, `CHAT_HEADER_TITLE`,
//!   `CHAT_INPUT_PLACEHOLDER`, `CHAT_TOGGLE_TOOLTIP`: branding overrides
//!
//! Empty values are treated as unset.

use chat_widget::config::WidgetConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading host configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `CHAT_ENDPOINT_URL` is neither an absolute http(s) URL nor a rooted path.
    #[error("invalid CHAT_ENDPOINT_URL: {0}")]
    InvalidEndpoint(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub widget: WidgetConfig,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Used directly by tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        let defaults = WidgetConfig::default();
        let endpoint_url = match var("CHAT_ENDPOINT_URL") {
            Some(raw) => parse_endpoint(&raw)?,
            None => defaults.endpoint_url,
        };

        let widget = WidgetConfig {
            endpoint_url,
            page_title: var("CHAT_PAGE_TITLE").unwrap_or(defaults.page_title),
            page_subtitle: var("CHAT_PAGE_SUBTITLE").unwrap_or(defaults.page_subtitle),
            header_title: var("CHAT_HEADER_TITLE").unwrap_or(defaults.header_title),
            input_placeholder: var("CHAT_INPUT_PLACEHOLDER").unwrap_or(defaults.input_placeholder),
            toggle_tooltip: var("CHAT_TOGGLE_TOOLTIP").unwrap_or(defaults.toggle_tooltip),
        };

        Ok(Self { port, widget })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}

fn parse_endpoint(raw: &str) -> Result<String, ConfigError> {
    let lowered = raw.to_ascii_lowercase();
    let absolute = ["http://", "https://"]
        .iter()
        .any(|scheme| lowered.starts_with(scheme) && lowered.len() > scheme.len());
    let rooted = raw.starts_with('/') && !raw.starts_with("//");
    if !(absolute || rooted) {
        return Err(ConfigError::InvalidEndpoint(raw.to_owned()));
    }
    let trimmed = raw.trim_end_matches('/');
    Ok(if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
