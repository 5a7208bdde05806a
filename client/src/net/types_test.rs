use super::*;

#[test]
fn chat_request_serializes_query_field() {
    let body = serde_json::to_value(ChatRequest { query: "Who leads Aziro?".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({ "query": "Who leads Aziro?" }));
}

#[test]
fn chat_response_parses_answer_and_sources() {
    let raw = r#"{"answer":"**Hi**","sources":[{"url":"https://x.com","similarity":0.873}]}"#;
    let resp: ChatResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.answer, "**Hi**");
    assert_eq!(resp.sources.len(), 1);
    assert_eq!(resp.sources[0].url, "https://x.com");
    assert!((resp.sources[0].similarity - 0.873).abs() < f64::EPSILON);
}

#[test]
fn chat_response_missing_sources_is_empty() {
    let resp: ChatResponse = serde_json::from_str(r#"{"answer":"ok"}"#).unwrap();
    assert!(resp.sources.is_empty());
}

#[test]
fn chat_response_null_sources_is_empty() {
    let resp: ChatResponse = serde_json::from_str(r#"{"answer":"ok","sources":null}"#).unwrap();
    assert!(resp.sources.is_empty());
}

#[test]
fn chat_response_ignores_unknown_fields() {
    let resp: ChatResponse = serde_json::from_str(r#"{"answer":"ok","latency_ms":12}"#).unwrap();
    assert_eq!(resp.answer, "ok");
}

#[test]
fn chat_response_without_answer_is_rejected() {
    assert!(serde_json::from_str::<ChatResponse>(r#"{"sources":[]}"#).is_err());
    assert!(serde_json::from_str::<ChatResponse>(r#"{"answer":null}"#).is_err());
}

#[test]
fn source_ref_requires_numeric_similarity() {
    let raw = r#"{"url":"https://x.com","similarity":"high"}"#;
    assert!(serde_json::from_str::<SourceRef>(raw).is_err());
}
