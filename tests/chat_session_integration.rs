//! End-to-end chat session tests against a mock Cohere server
//!
//! Covers the full submission path: exact prompt construction, the
//! append-on-success contract, the no-mutation-on-failure contract, and
//! the auto-summarize threshold.

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use alphachat::config::{ChatConfig, CohereConfig};
use alphachat::history::{History, Turn, SUMMARY_MARKER};
use alphachat::providers::CohereProvider;
use alphachat::session::ChatSession;

fn settings(max_turns: usize, auto_summarize: bool) -> ChatConfig {
    ChatConfig {
        model: "command-nightly".to_string(),
        max_turns,
        auto_summarize,
        ..ChatConfig::default()
    }
}

fn session_for(server: &MockServer, history: History) -> ChatSession {
    let config = CohereConfig {
        api_base: Some(server.uri()),
        api_key: Some("test-key".to_string()),
    };
    let provider = CohereProvider::new(config).expect("provider construction");
    ChatSession::with_history(Box::new(provider), history)
}

fn history_of(n: usize) -> History {
    let mut history = History::new();
    for i in 0..n {
        history.push(Turn::with_time(
            format!("question {}", i),
            format!("answer {}", i),
            "2024-01-01 10:00:00",
        ));
    }
    history
}

#[tokio::test]
async fn test_first_message_sends_exact_prompt_and_appends_turn() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_json(json!({
            "model": "command-nightly",
            "message": "Human: Hello\nAI (answer clearly and completely):"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "Hi there!" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server, History::new());
    let reply = session
        .process_message("Hello", &settings(6, false))
        .await
        .expect("submission succeeds")
        .expect("non-empty input yields a reply");

    assert_eq!(reply.text, "Hi there!");
    assert!(!reply.summarized);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().turns()[0].user, "Hello");
    assert_eq!(session.history().turns()[0].ai, "Hi there!");
}

#[tokio::test]
async fn test_prior_turns_appear_in_prompt_window() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .and(body_string_contains("Human: question 1\\nAI: answer 1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server, history_of(2));
    session
        .process_message("next", &settings(6, false))
        .await
        .expect("submission succeeds");

    assert_eq!(session.history().len(), 3);
}

#[tokio::test]
async fn test_remote_failure_leaves_history_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server, history_of(2));
    let result = session.process_message("Hello", &settings(6, false)).await;

    assert!(result.is_err());
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history(), &history_of(2));
}

#[tokio::test]
async fn test_empty_input_sends_nothing() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and the expect(0) below
    // would also flag it.
    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "nope" })))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = session_for(&server, History::new());
    let reply = session
        .process_message("   \t ", &settings(6, false))
        .await
        .expect("empty input is not an error");

    assert!(reply.is_none());
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_auto_summarize_compacts_then_replies() {
    let server = MockServer::start().await;

    // Summary call: recognizable by its instruction preamble.
    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .and(body_string_contains("Summarize the following conversation"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "text": "older context summary" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    // Reply call: the regular prompt trailer.
    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .and(body_string_contains("answer clearly and completely"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "fresh reply" })))
        .expect(1)
        .mount(&server)
        .await;

    // 7 turns > 2 * 3 triggers compaction with keep_last = 2.
    let mut session = session_for(&server, history_of(7));
    let reply = session
        .process_message("Hello", &settings(2, true))
        .await
        .expect("submission succeeds")
        .expect("reply");

    assert!(reply.summarized);
    assert_eq!(reply.text, "fresh reply");
    // summary turn + 2 kept turns + 1 appended turn
    assert_eq!(session.history().len(), 4);
    assert_eq!(session.history().turns()[0].user, SUMMARY_MARKER);
    assert_eq!(session.history().turns()[0].ai, "older context summary");
    assert_eq!(session.history().turns()[1].user, "question 5");
    assert_eq!(session.history().turns()[3].user, "Hello");
}

#[tokio::test]
async fn test_auto_summarize_off_means_single_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server, history_of(30));
    let reply = session
        .process_message("Hello", &settings(2, false))
        .await
        .expect("submission succeeds")
        .expect("reply");

    assert!(!reply.summarized);
    assert_eq!(session.history().len(), 31);
}

#[tokio::test]
async fn test_reply_failure_discards_staged_compaction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .and(body_string_contains("Summarize the following conversation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "summary" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .and(body_string_contains("answer clearly and completely"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server, history_of(7));
    let result = session.process_message("Hello", &settings(2, true)).await;

    assert!(result.is_err());
    // The staged compaction is discarded along with the failed reply.
    assert_eq!(session.history(), &history_of(7));
}

#[tokio::test]
async fn test_summarization_failure_aborts_before_reply_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .and(body_string_contains("Summarize the following conversation"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .and(body_string_contains("answer clearly and completely"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "unreachable" })))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = session_for(&server, history_of(7));
    let result = session.process_message("Hello", &settings(2, true)).await;

    assert!(result.is_err());
    assert_eq!(session.history(), &history_of(7));
}
