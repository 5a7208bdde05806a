//! HTTP call to the remote answering endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning `ChatError::Unavailable`, since the
//! request is only ever issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a `ChatError`. The widget logs the variant and then shows
//! one fixed message; the variants exist for the log line only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ChatRequest;
use super::types::ChatResponse;

/// Reasons a chat request can fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request never produced a response (DNS, refused, CORS, aborted).
    #[error("chat request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("chat request failed: {0}")]
    Status(u16),

    /// The body was not a valid answer payload.
    #[error("chat response malformed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("chat requests are not available on the server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_request_body(query: &str) -> ChatRequest {
    ChatRequest { query: query.to_owned() }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> Option<ChatError> {
    (!(200..300).contains(&status)).then_some(ChatError::Status(status))
}

/// Send `query` to `endpoint_url` as `POST { "query": ... }` and decode the answer.
///
/// # Errors
///
/// Returns `ChatError` if the request cannot be sent, the status is not 2xx,
/// or the body does not decode as a `ChatResponse`.
pub async fn send_query(endpoint_url: &str, query: &str) -> Result<ChatResponse, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint_url)
            .json(&chat_request_body(query))
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        if let Some(err) = status_error(resp.status()) {
            return Err(err);
        }
        resp.json::<ChatResponse>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint_url, query);
        Err(ChatError::Unavailable)
    }
}
