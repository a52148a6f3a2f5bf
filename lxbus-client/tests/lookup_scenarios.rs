//! Whole-lookup scenarios with a scripted transport.
//!
//! Time is paused, so the five-second waits between polls cost nothing.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use lxbus_client::domain::{ArrivalRecord, RequestId, StatusCode, StopCode};
use lxbus_client::poller::DEFAULT_TIMEOUT_MESSAGE;
use lxbus_client::render::{HtmlRenderer, UiState};
use lxbus_client::store::{FileStore, FileStoreConfig, LocalStore, MemoryStore, NoStore};
use lxbus_client::transport::{CreateReply, MockTransport, StatusReply, TransportError};
use lxbus_client::{LookupError, LookupWidget, PollerConfig, RequestPoller};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn code(s: &str) -> StopCode {
    StopCode::parse(s).unwrap()
}

fn accepted(id: &str) -> Result<CreateReply, TransportError> {
    Ok(CreateReply::accepted(RequestId::parse(id).unwrap()))
}

fn widget<S: LocalStore>(
    transport: &MockTransport,
    store: S,
) -> LookupWidget<MockTransport, S, HtmlRenderer> {
    LookupWidget::new(RequestPoller::new(
        transport.clone(),
        store,
        HtmlRenderer::new(),
        PollerConfig::default(),
    ))
}

#[tokio::test(start_paused = true)]
async fn stop_1712_times_out_after_24_pending_replies() {
    init_tracing();
    let transport = MockTransport::new();
    transport.push_create(accepted("r1")).push_pending(24);
    let mut widget = widget(&transport, MemoryStore::new());
    widget.set_up();

    let started = tokio::time::Instant::now();
    let err = widget.submit_input("1712").await.unwrap_err();

    assert!(matches!(err, LookupError::PollTimeout { tries: 24 }));
    assert_eq!(transport.poll_count(), 24);
    assert!(
        transport
            .polled()
            .iter()
            .all(|id| id.as_str() == "r1")
    );
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(120));
    assert!(elapsed < Duration::from_secs(121));

    let renderer = widget.poller().renderer();
    assert_eq!(renderer.caption(), DEFAULT_TIMEOUT_MESSAGE);
    assert_eq!(renderer.state(), UiState::ResultsShown);
    assert!(renderer.table_html().is_none());
}

#[tokio::test(start_paused = true)]
async fn stop_9999_invalid_code_is_purged() {
    let transport = MockTransport::new();
    transport
        .push_create(accepted("r2"))
        .push_status(Ok(StatusReply::error(
            StatusCode::REPLY_INVALID_CODE,
            "Invalid stop",
        )));
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(FileStoreConfig::new(dir.path().join("codes.json")));
    let mut widget = widget(&transport, store);

    let err = widget.submit_input("9999").await.unwrap_err();

    assert!(matches!(
        err,
        LookupError::ServerError { status, ref message }
            if status == StatusCode::REPLY_INVALID_CODE && message == "Invalid stop"
    ));
    let poller = widget.poller();
    assert!(poller.store().list_all().unwrap().is_empty());
    assert_eq!(poller.renderer().caption(), "Invalid stop");
    assert!(poller.renderer().table_html().is_none());
    assert_eq!(poller.renderer().state(), UiState::ResultsShown);
}

#[tokio::test(start_paused = true)]
async fn single_arrival_row() {
    let transport = MockTransport::new();
    transport
        .push_create(accepted("r3"))
        .push_pending(1)
        .push_status(Ok(StatusReply::ok(
            vec![ArrivalRecord::new("728", "Alges", 5, "10:05")],
            "",
        )));
    let mut widget = widget(&transport, MemoryStore::new());

    let arrivals = widget.submit_input("1712").await.unwrap();

    assert_eq!(arrivals.len(), 1);
    let renderer = widget.poller().renderer();
    assert_eq!(renderer.rows(), arrivals.rows.as_slice());
    let html = renderer.table_html().unwrap();
    assert_eq!(html.matches("<tr>").count(), 2);
    assert!(html.contains("<td>728</td><td>Alges</td><td>5</td><td>10:05</td>"));
    assert_eq!(transport.poll_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn no_buses_message_without_table() {
    let transport = MockTransport::new();
    transport.push_create(accepted("r4")).push_status(Ok(StatusReply::error(
        StatusCode::NO_BUSES,
        "No bus information for stop code 1712",
    )));
    let mut widget = widget(&transport, MemoryStore::new());

    let err = widget.submit_input("1712").await.unwrap_err();

    assert!(matches!(err, LookupError::ServerError { .. }));
    let poller = widget.poller();
    assert_eq!(
        poller.renderer().caption(),
        "No bus information for stop code 1712"
    );
    // Only invalid codes are purged.
    assert_eq!(poller.store().list_all().unwrap(), vec![code("1712")]);
}

#[tokio::test(start_paused = true)]
async fn transport_blips_during_polling_are_tolerated() {
    let transport = MockTransport::new();
    transport
        .push_create(accepted("r5"))
        .push_status(Err(TransportError::Mock("connection reset".into())))
        .push_status(Err(TransportError::Empty))
        .push_status(Ok(StatusReply::ok(Vec::new(), "No buses due")));
    let mut widget = widget(&transport, NoStore);

    let arrivals = widget.submit_input("1712").await.unwrap();

    assert!(arrivals.is_empty());
    assert_eq!(arrivals.caption, "No buses due");
    assert_eq!(transport.poll_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn submit_failure_returns_to_idle_and_next_lookup_works() {
    let transport = MockTransport::new();
    transport
        .push_create(Err(TransportError::Empty))
        .push_create(accepted("r6"))
        .push_status(Ok(StatusReply::ok(Vec::new(), "")));
    let mut widget = widget(&transport, MemoryStore::new());

    let err = widget.submit_input("1712").await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
    assert_eq!(widget.poller().renderer().state(), UiState::Idle);
    assert_eq!(transport.poll_count(), 0);

    widget.submit_input("1712").await.unwrap();
    assert_eq!(widget.poller().renderer().state(), UiState::ResultsShown);
    assert_eq!(transport.polled(), vec![RequestId::parse("r6").unwrap()]);
}

#[tokio::test(start_paused = true)]
async fn previous_codes_accumulate_across_lookups() {
    let transport = MockTransport::new();
    for id in ["r7", "r8"] {
        transport
            .push_create(accepted(id))
            .push_status(Ok(StatusReply::ok(Vec::new(), "")));
    }
    let mut widget = widget(&transport, MemoryStore::new());

    widget.submit_input("1712").await.unwrap();
    widget.submit_input("0042").await.unwrap();

    let html = widget.poller().renderer().previous_codes_html().unwrap();
    assert!(html.contains(">1712</a>"));
    assert!(html.contains(">0042</a>"));
}
