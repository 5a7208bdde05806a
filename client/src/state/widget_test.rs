use super::*;

fn answer(text: &str, sources: Vec<SourceRef>) -> Result<ChatResponse, ChatError> {
    Ok(ChatResponse { answer: text.to_owned(), sources })
}

fn state_with_draft(draft: &str) -> WidgetState {
    let mut state = WidgetState::default();
    state.set_draft_input(draft);
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn widget_state_default_is_closed_and_idle() {
    let state = WidgetState::default();
    assert!(!state.is_open);
    assert!(!state.is_loading);
    assert!(state.draft_input.is_empty());
    assert!(state.transcript.is_empty());
}

// =============================================================
// Toggle / draft
// =============================================================

#[test]
fn toggle_twice_restores_visibility_and_leaves_rest_alone() {
    let mut state = state_with_draft("half typed");
    state.transcript.push(Message::user("earlier"));
    state.is_loading = true;

    state.toggle_open();
    assert!(state.is_open);
    state.toggle_open();

    assert!(!state.is_open);
    assert_eq!(state.draft_input, "half typed");
    assert!(state.is_loading);
    assert_eq!(state.transcript.len(), 1);
}

#[test]
fn set_draft_input_keeps_text_verbatim() {
    let mut state = WidgetState::default();
    state.set_draft_input("  spaced  \n");
    assert_eq!(state.draft_input, "  spaced  \n");
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn empty_or_whitespace_draft_is_ignored() {
    for draft in ["", "   ", "\t\n "] {
        let mut state = state_with_draft(draft);
        assert_eq!(state.begin_submit(), None);
        assert!(state.transcript.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.draft_input, draft);
    }
}

#[test]
fn submit_appends_user_message_and_starts_loading() {
    let mut state = state_with_draft("Hello");

    let query = state.begin_submit();

    assert_eq!(query.as_deref(), Some("Hello"));
    assert_eq!(state.transcript.len(), 1);
    assert_eq!(state.transcript[0].role, Role::User);
    assert_eq!(state.transcript[0].content, "Hello");
    assert!(state.transcript[0].sources.is_empty());
    assert!(state.draft_input.is_empty());
    assert!(state.is_loading);
}

#[test]
fn submit_trims_the_query() {
    let mut state = state_with_draft("  what do you do?  ");
    assert_eq!(state.begin_submit().as_deref(), Some("what do you do?"));
    assert_eq!(state.transcript[0].content, "what do you do?");
}

#[test]
fn submit_while_loading_is_ignored() {
    let mut state = state_with_draft("first");
    state.begin_submit();
    state.set_draft_input("second");

    assert!(!state.can_submit());
    assert_eq!(state.begin_submit(), None);
    assert_eq!(state.transcript.len(), 1);
    assert_eq!(state.draft_input, "second");
}

#[test]
fn can_submit_tracks_draft_and_loading() {
    let mut state = WidgetState::default();
    assert!(!state.can_submit());
    state.set_draft_input("x");
    assert!(state.can_submit());
    state.is_loading = true;
    assert!(!state.can_submit());
}

// =============================================================
// complete_submit
// =============================================================

#[test]
fn success_appends_assistant_message_with_sources() {
    let mut state = state_with_draft("Hello");
    state.begin_submit();

    let sources = vec![SourceRef { url: "https://x.com".to_owned(), similarity: 0.873 }];
    state.complete_submit(answer("**Hi**", sources.clone()));

    assert!(!state.is_loading);
    assert_eq!(state.transcript.len(), 2);
    let reply = &state.transcript[1];
    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.content, "**Hi**");
    assert_eq!(reply.sources, sources);
    assert!(reply.has_sources());
}

#[test]
fn success_without_sources_has_no_source_list() {
    let mut state = state_with_draft("Hello");
    state.begin_submit();
    state.complete_submit(answer("plain", Vec::new()));
    assert!(!state.transcript[1].has_sources());
}

#[test]
fn every_failure_kind_appends_the_same_error_message() {
    let failures = [
        ChatError::Transport("connection refused".to_owned()),
        ChatError::Status(500),
        ChatError::Decode("expected value".to_owned()),
        ChatError::Unavailable,
    ];
    for err in failures {
        let mut state = state_with_draft("Hello");
        state.begin_submit();
        state.complete_submit(Err(err));

        assert!(!state.is_loading);
        assert_eq!(state.transcript.len(), 2);
        let reply = &state.transcript[1];
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, BACKEND_ERROR_MESSAGE);
        assert!(reply.sources.is_empty());
    }
}

#[test]
fn widget_stays_usable_after_failure() {
    let mut state = state_with_draft("first");
    state.begin_submit();
    state.complete_submit(Err(ChatError::Status(502)));

    state.set_draft_input("second");
    assert_eq!(state.begin_submit().as_deref(), Some("second"));
    assert_eq!(state.transcript.len(), 3);
}

#[test]
fn turns_alternate_in_prompt_order() {
    let mut state = WidgetState::default();
    for (prompt, reply) in [("one", "1"), ("two", "2")] {
        state.set_draft_input(prompt);
        state.begin_submit();
        state.complete_submit(answer(reply, Vec::new()));
    }
    let contents: Vec<&str> = state.transcript.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["one", "1", "two", "2"]);
}

// =============================================================
// Message
// =============================================================

#[test]
fn message_ids_are_unique() {
    let a = Message::user("same");
    let b = Message::user("same");
    assert_ne!(a.id, b.id);
}

#[test]
fn user_message_never_shows_sources() {
    let mut msg = Message::user("hi");
    msg.sources.push(SourceRef { url: "https://x.com".to_owned(), similarity: 1.0 });
    assert!(!msg.has_sources());
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Assistant).unwrap(), serde_json::json!("assistant"));
    assert_eq!(Role::User.as_str(), "user");
}
