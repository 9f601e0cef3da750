use std::sync::Arc;
use std::time::Instant;

use kanal::{AsyncReceiver, AsyncSender};
use tobira_core::classifier::SelectionClassifier;
use tobira_types::AppEvent;

use crate::state::AppState;

pub mod selection;

use selection::handle_selection;

/// App's main loop. Owns the classifier, so all throttle state lives on this
/// one task and classification is single-threaded by construction.
pub async fn event_loop(
    state: Arc<AppState>,
    io_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_io_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut classifier = {
        let config = state.config.read().await;
        SelectionClassifier::new(&config.lookup)
    };

    tracing::info!("event loop started, waiting for selections");
    loop {
        let event = io_to_app_rx.recv().await?;
        handle_events(&mut classifier, &app_to_io_tx, event).await?;
    }
}

async fn handle_events(
    classifier: &mut SelectionClassifier,
    app_to_io_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::ConfigChanged => {}
        AppEvent::SelectionCaptured { conn, report } => {
            handle_selection(classifier, conn, report, app_to_io_tx, Instant::now()).await?;
        }
        AppEvent::OpenLookup { .. } | AppEvent::SelectionDismissed { .. } => {
            // Outbound events, routed by the bridge side
        }
    }

    Ok(())
}
