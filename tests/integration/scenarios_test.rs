//! End-to-end poll cycles over HTTP
//!
//! Each test wires the real Practicum client and Telegram notifier to local
//! mock servers and drives the poller one cycle at a time.

use homework_bot::poller::{CycleOutcome, Poller};
use homework_bot::services::{PracticumClient, TelegramNotifier, NO_UPDATES_MESSAGE};
use pretty_assertions::assert_eq;
use std::time::Duration;

use crate::common::{
    empty_response, homework, statuses_response, MockPracticum, MockReply, MockTelegram,
};

const START: i64 = 1699990000;

fn poller(practicum: &MockPracticum, telegram: &MockTelegram) -> Poller {
    let api = PracticumClient::new(
        practicum.endpoint(),
        "practicum-token",
        Duration::from_secs(5),
    )
    .unwrap();
    let notifier = TelegramNotifier::new(
        &telegram.api_url(),
        "telegram-token",
        "123456",
        Duration::from_secs(5),
    )
    .unwrap();

    Poller::new(
        Box::new(api),
        Box::new(notifier),
        START,
        Duration::from_millis(10),
    )
}

#[actix_web::test]
async fn test_approved_homework_is_relayed() {
    let practicum = MockPracticum::start(MockReply::Json(
        200,
        statuses_response(vec![homework("proj1", "approved")], 1700000000),
    ));
    let telegram = MockTelegram::start();
    let mut poller = poller(&practicum, &telegram);

    poller.run_cycle().await;

    assert_eq!(
        telegram.texts(),
        vec!["Changed status for \"proj1\". reviewed, reviewer satisfied.".to_string()]
    );
    assert_eq!(poller.state().cursor, 1700000000);
}

#[actix_web::test]
async fn test_empty_homeworks_sent_once() {
    let practicum = MockPracticum::start(MockReply::Json(200, empty_response(1700000100)));
    let telegram = MockTelegram::start();
    let mut poller = poller(&practicum, &telegram);

    poller.run_cycle().await;
    let second = poller.run_cycle().await;

    assert_eq!(second, CycleOutcome::Unchanged);
    assert_eq!(telegram.texts(), vec![NO_UPDATES_MESSAGE.to_string()]);
    assert_eq!(practicum.requests().len(), 2);
    assert_eq!(
        practicum.requests()[1].from_date.as_deref(),
        Some("1700000100")
    );
}

#[actix_web::test]
async fn test_service_unavailable_sends_failure_once() {
    let practicum = MockPracticum::start(MockReply::Json(503, serde_json::json!({})));
    let telegram = MockTelegram::start();
    let mut poller = poller(&practicum, &telegram);

    poller.run_cycle().await;
    poller.run_cycle().await;

    let texts = telegram.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("503"));
    assert!(texts[0].contains("Service Unavailable"));
    assert!(!texts[0].contains("Changed status"));
    assert_eq!(poller.state().cursor, START);
}

#[actix_web::test]
async fn test_unrecognized_status_sends_failure() {
    let practicum = MockPracticum::start(MockReply::Json(
        200,
        statuses_response(vec![homework("proj1", "archived")], 1700000000),
    ));
    let telegram = MockTelegram::start();
    let mut poller = poller(&practicum, &telegram);

    let outcome = poller.run_cycle().await;

    assert_eq!(
        outcome,
        CycleOutcome::Failed("Program failure: Unknown homework status: archived".to_string())
    );
    assert_eq!(
        telegram.texts(),
        vec!["Program failure: Unknown homework status: archived".to_string()]
    );
    assert_eq!(poller.state().cursor, START);
}

#[actix_web::test]
async fn test_recovery_after_outage() {
    let practicum = MockPracticum::start(MockReply::Json(503, serde_json::json!({})));
    let telegram = MockTelegram::start();
    let mut poller = poller(&practicum, &telegram);

    poller.run_cycle().await;
    practicum.set_reply(MockReply::Json(
        200,
        statuses_response(vec![homework("proj1", "reviewing")], 1700000000),
    ));
    poller.run_cycle().await;

    let texts = telegram.texts();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[1], "Changed status for \"proj1\". taken up for review.");
    // The retry re-queried the same window
    assert_eq!(practicum.requests()[1].from_date.as_deref(), Some("1699990000"));
    assert_eq!(poller.state().cursor, 1700000000);
}

#[actix_web::test]
async fn test_telegram_down_keeps_cursor() {
    let practicum = MockPracticum::start(MockReply::Json(
        200,
        statuses_response(vec![homework("proj1", "approved")], 1700000000),
    ));
    let telegram = MockTelegram::start();
    telegram.set_failing(true);
    let mut poller = poller(&practicum, &telegram);

    let outcome = poller.run_cycle().await;

    assert!(matches!(outcome, CycleOutcome::Failed(_)));
    assert_eq!(poller.state().cursor, START);
    assert_eq!(poller.state().last_message, "");
}
