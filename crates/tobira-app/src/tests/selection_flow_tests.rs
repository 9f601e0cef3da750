use std::time::{Duration, Instant};

use tobira_config::lookup::LookupConfig;
use tobira_core::classifier::SelectionClassifier;
use tobira_types::{AppEvent, DismissReason, SelectionReport, SelectionTrigger};
use tokio::time::timeout;

use crate::events::selection::handle_selection;

fn classifier() -> SelectionClassifier {
    SelectionClassifier::new(&LookupConfig::default())
}

fn dblclick_report(text: &str) -> SelectionReport {
    SelectionReport {
        text: text.to_string(),
        trigger: SelectionTrigger::DoubleClick {
            ctrl: true,
            meta: false,
        },
        editable: false,
    }
}

#[tokio::test]
async fn accepted_selection_emits_open_command() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let mut c = classifier();

    handle_selection(&mut c, 7, dblclick_report("日本語"), &tx, Instant::now())
        .await
        .expect("handle failed");

    let result = timeout(Duration::from_secs(2), rx.recv()).await;
    match result {
        Ok(Ok(AppEvent::OpenLookup { conn, url })) => {
            assert_eq!(conn, 7);
            assert!(url.contains("/vocabulary/"));
        }
        Ok(Ok(other)) => panic!("wrong event: {other:?}"),
        Ok(Err(e)) => panic!("channel error: {e}"),
        Err(_) => panic!("timeout - open command never arrived!"),
    }
}

#[tokio::test]
async fn non_japanese_selection_is_dismissed() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let mut c = classifier();

    handle_selection(&mut c, 1, dblclick_report("hello"), &tx, Instant::now())
        .await
        .expect("handle failed");

    let result = timeout(Duration::from_secs(2), rx.recv()).await;
    match result {
        Ok(Ok(AppEvent::SelectionDismissed { reason, .. })) => {
            assert_eq!(reason, DismissReason::NotJapanese);
        }
        Ok(Ok(other)) => panic!("wrong event: {other:?}"),
        Ok(Err(e)) => panic!("channel error: {e}"),
        Err(_) => panic!("timeout - dismissal never arrived!"),
    }
}

#[tokio::test]
async fn editable_pointer_release_is_suppressed() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let mut c = classifier();

    let report = SelectionReport {
        text: "日本語".to_string(),
        trigger: SelectionTrigger::PointerRelease { button: 0 },
        editable: true,
    };
    handle_selection(&mut c, 1, report, &tx, Instant::now())
        .await
        .expect("handle failed");

    let result = timeout(Duration::from_secs(2), rx.recv()).await;
    match result {
        Ok(Ok(AppEvent::SelectionDismissed { reason, .. })) => {
            assert_eq!(reason, DismissReason::Suppressed);
        }
        Ok(Ok(other)) => panic!("wrong event: {other:?}"),
        Ok(Err(e)) => panic!("channel error: {e}"),
        Err(_) => panic!("timeout - dismissal never arrived!"),
    }
}

#[tokio::test]
async fn selection_burst_is_debounced() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let mut c = classifier();
    let t0 = Instant::now();

    handle_selection(&mut c, 1, dblclick_report("日本語"), &tx, t0)
        .await
        .expect("handle failed");
    handle_selection(
        &mut c,
        1,
        dblclick_report("日本語"),
        &tx,
        t0 + Duration::from_millis(25),
    )
    .await
    .expect("handle failed");

    let first = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout")
        .expect("recv failed");
    assert!(matches!(first, AppEvent::OpenLookup { .. }));

    let second = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout")
        .expect("recv failed");
    match second {
        AppEvent::SelectionDismissed { reason, .. } => {
            assert_eq!(reason, DismissReason::Debounced);
        }
        other => panic!("wrong event: {other:?}"),
    }
}
