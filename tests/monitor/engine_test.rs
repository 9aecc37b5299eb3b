// =============================================================================
// INTEGRATION TESTS - POLL LOOP
// Cursor handling, no-op cycles and skipped iterations
// =============================================================================

use crate::common::{TestContext, CHAT_ID, START_CURSOR};
use homework_status_bot::services::monitor::PollOutcome;
use serde_json::json;

#[tokio::test]
async fn test_first_fetch_uses_start_cursor() {
    let mut ctx = TestContext::new();
    ctx.api.push_json(200, json!({"homeworks": [], "current_date": START_CURSOR + 600}));

    ctx.engine.poll_once().await.unwrap();

    assert_eq!(ctx.api.requested(), vec![START_CURSOR]);
}

#[tokio::test]
async fn test_empty_homeworks_sends_nothing_but_moves_cursor() {
    let mut ctx = TestContext::new();
    ctx.api.push_json(200, json!({"homeworks": [], "current_date": 1_700_000_600}));

    let outcome = ctx.engine.tick().await;

    assert_eq!(outcome, Some(PollOutcome::NoUpdates));
    assert!(ctx.transport.texts().is_empty());
    assert_eq!(ctx.engine.cursor(), 1_700_000_600);
}

#[tokio::test]
async fn test_cursor_threads_through_iterations() {
    let mut ctx = TestContext::new();
    ctx.api.push_json(200, json!({"homeworks": [], "current_date": START_CURSOR + 600}));
    ctx.api.push_json(
        200,
        json!({
            "homeworks": [{"homework_name": "hw2", "status": "reviewing"}],
            "current_date": START_CURSOR + 1200
        }),
    );
    ctx.api.push_json(200, json!({"homeworks": [], "current_date": START_CURSOR + 1800}));

    for _ in 0..3 {
        ctx.engine.tick().await;
    }

    assert_eq!(
        ctx.api.requested(),
        vec![START_CURSOR, START_CURSOR + 600, START_CURSOR + 1200]
    );
    assert_eq!(ctx.engine.cursor(), START_CURSOR + 1800);
    assert_eq!(ctx.transport.texts().len(), 1);
}

#[tokio::test]
async fn test_only_latest_homework_is_reported() {
    let mut ctx = TestContext::new();
    ctx.api.push_json(
        200,
        json!({
            "homeworks": [
                {"homework_name": "newest", "status": "rejected"},
                {"homework_name": "older", "status": "approved"},
                {"homework_name": "oldest", "status": "reviewing"}
            ],
            "current_date": START_CURSOR + 60
        }),
    );

    ctx.engine.tick().await;

    let texts = ctx.transport.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("\"newest\""));
    assert!(texts[0].ends_with("Работа проверена: у ревьюера есть замечания."));
}

#[tokio::test]
async fn test_notifications_go_to_configured_chat() {
    let mut ctx = TestContext::new();
    ctx.api.push_json(
        200,
        json!({"homeworks": [{"homework_name": "a", "status": "approved"}], "current_date": 1}),
    );
    ctx.api.push_raw(503, "");

    ctx.engine.tick().await;
    ctx.engine.tick().await;

    assert_eq!(ctx.transport.chats(), vec![CHAT_ID.to_string(), CHAT_ID.to_string()]);
}

#[tokio::test]
async fn test_same_response_twice_gives_same_message() {
    let mut ctx = TestContext::new();
    let body = json!({
        "homeworks": [{"homework_name": "repeat", "status": "approved"}],
        "current_date": START_CURSOR
    });
    ctx.api.push_json(200, body.clone());
    ctx.api.push_json(200, body);

    let first = ctx.engine.poll_once().await.unwrap();
    let second = ctx.engine.poll_once().await.unwrap();

    assert_eq!(first, second);
    assert!(matches!(first, PollOutcome::Notified(_)));
    assert_eq!(ctx.api.requested(), vec![START_CURSOR, START_CURSOR]);
    let texts = ctx.transport.texts();
    assert_eq!(texts[0], texts[1]);
}

#[tokio::test]
async fn test_network_error_skips_iteration_silently() {
    let mut ctx = TestContext::new();
    ctx.api.push_network_error();

    let outcome = ctx.engine.tick().await;

    assert_eq!(outcome, Some(PollOutcome::Skipped));
    assert_eq!(ctx.engine.cursor(), START_CURSOR);
    assert!(ctx.transport.texts().is_empty());
}

#[tokio::test]
async fn test_undecodable_body_skips_iteration() {
    let mut ctx = TestContext::new();
    ctx.api.push_raw(200, "<html>502 Bad Gateway</html>");

    let outcome = ctx.engine.tick().await;

    assert_eq!(outcome, Some(PollOutcome::Skipped));
    assert_eq!(ctx.engine.cursor(), START_CURSOR);
    assert!(ctx.transport.texts().is_empty());
}

#[tokio::test]
async fn test_recovers_after_skipped_iteration() {
    let mut ctx = TestContext::new();
    ctx.api.push_network_error();
    ctx.api.push_json(200, json!({"homeworks": [], "current_date": START_CURSOR + 600}));

    ctx.engine.tick().await;
    ctx.engine.tick().await;

    // Skipped fetch retried with the same cursor
    assert_eq!(ctx.api.requested(), vec![START_CURSOR, START_CURSOR]);
    assert_eq!(ctx.engine.cursor(), START_CURSOR + 600);
}
