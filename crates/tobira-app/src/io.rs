use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tobira_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Bridge watcher: runs the WebSocket listener the page-side script
/// connects to and keeps it up until shutdown.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
    command_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    let bridge_addr = {
        let config = state.config.read().await;
        config.network.bridge_addr.clone()
    };

    tracing::info!("starting selection bridge");

    tokio::select! {
        result = tobira_io::ws::run_bridge(&bridge_addr, event_tx, command_rx, cancel.clone()) => {
            if let Err(error) = result {
                tracing::error!("selection bridge error: {error}");
            }
        }
        _ = cancel.cancelled() => {
            tracing::info!("selection bridge stopping");
        }
    }

    Ok(())
}
