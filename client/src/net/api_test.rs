use super::*;

#[test]
fn chat_request_body_carries_query_verbatim() {
    assert_eq!(chat_request_body("  hi  ").query, "  hi  ");
}

#[test]
fn status_error_accepts_2xx() {
    assert_eq!(status_error(200), None);
    assert_eq!(status_error(204), None);
    assert_eq!(status_error(299), None);
}

#[test]
fn status_error_rejects_everything_else() {
    assert_eq!(status_error(199), Some(ChatError::Status(199)));
    assert_eq!(status_error(302), Some(ChatError::Status(302)));
    assert_eq!(status_error(404), Some(ChatError::Status(404)));
    assert_eq!(status_error(503), Some(ChatError::Status(503)));
}

#[test]
fn chat_error_messages_name_the_cause() {
    assert_eq!(ChatError::Status(500).to_string(), "chat request failed: 500");
    assert_eq!(
        ChatError::Transport("connection refused".to_owned()).to_string(),
        "chat request failed: connection refused"
    );
    assert_eq!(ChatError::Decode("missing field `answer`".to_owned()).to_string(), "chat response malformed: missing field `answer`");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_query_is_unavailable_off_browser() {
    let result = block_on_ready(send_query("http://localhost:8000/chat", "hello"));
    assert_eq!(result, Err(ChatError::Unavailable));
}

/// Minimal executor for a future that completes without awaiting anything.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
