//! Display formatting for source citations.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::SourceRef;

/// Similarity in `[0, 1]` as a percentage with one decimal, e.g. `0.873` → `"87.3%"`.
///
/// Ties round away from zero (`0.0125` → `"1.3%"`), not to even.
pub fn similarity_percent(similarity: f64) -> String {
    format!("{:.1}%", (similarity * 1000.0).round() / 10.0)
}

/// Text shown after a source link: `" (87.3%)"`.
pub fn source_percent_suffix(source: &SourceRef) -> String {
    format!(" ({})", similarity_percent(source.similarity))
}

/// Full text of one source entry as displayed: `"https://x.com (87.3%)"`.
pub fn source_entry_text(source: &SourceRef) -> String {
    format!("{}{}", source.url, source_percent_suffix(source))
}
