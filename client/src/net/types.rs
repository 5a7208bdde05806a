//! Wire schema for the remote answering endpoint.
//!
//! Request:  `{ "query": "..." }`
//! Response: `{ "answer": "...", "sources": [{ "url": "...", "similarity": 0.87 }] }`

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Outbound body for `POST <endpoint_url>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Successful answer payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    /// Absent or `null` both decode as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<SourceRef>,
}

/// A citation pairing a URL with a similarity score in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub url: String,
    pub similarity: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SourceRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SourceRef>>::deserialize(deserializer)?.unwrap_or_default())
}
