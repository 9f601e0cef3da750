use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::{SinkExt, StreamExt};
use kanal::{AsyncReceiver, AsyncSender};
use tobira_types::{AppEvent, ConnId};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;

use crate::error::BridgeError;
use crate::protocol::{DismissedNotice, ErrorNotice, OpenCommand, RequestBody, ResponseBody};

/// Reply senders per live connection, so decisions route back to the page
/// that reported the selection.
type Registry = Arc<Mutex<HashMap<ConnId, AsyncSender<ResponseBody>>>>;

/// Runs the selection bridge until cancelled.
///
/// Inbound selection frames land on `events`; `commands` carries the app
/// loop's `OpenLookup`/`SelectionDismissed` answers back to the owning
/// connection.
pub async fn run_bridge(
    addr: &str,
    events: AsyncSender<AppEvent>,
    commands: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> Result<(), BridgeError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| BridgeError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    tracing::info!("selection bridge listening on ws://{addr}");

    let registry: Registry = Arc::new(Mutex::new(HashMap::new()));
    let next_conn = AtomicU64::new(1);

    let dispatcher = {
        let registry = Arc::clone(&registry);
        let cancel = cancel.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    command = commands.recv() => {
                        let Ok(command) = command else { break };
                        dispatch_command(&registry, command).await;
                    }
                }
            }
        })
    };

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            accepted = listener.accept() => {
                let (stream, peer) = accepted.map_err(BridgeError::Accept)?;
                let conn = next_conn.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("bridge connection {conn} from {peer}");

                let events = events.clone();
                let registry = Arc::clone(&registry);
                let cancel = cancel.child_token();
                tokio::spawn(async move {
                    if let Err(error) = handle_connection(stream, conn, events, registry, cancel).await {
                        tracing::warn!("bridge connection {conn} closed with error: {error:#}");
                    }
                });
            }
        }
    }

    dispatcher.abort();
    Ok(())
}

async fn dispatch_command(registry: &Registry, command: AppEvent) {
    let (conn, body) = match command {
        AppEvent::OpenLookup { conn, url } => (conn, ResponseBody::Open(OpenCommand { url })),
        AppEvent::SelectionDismissed { conn, reason } => {
            (conn, ResponseBody::Dismissed(DismissedNotice { reason }))
        }
        other => {
            tracing::warn!("unroutable bridge command: {other:?}");
            return;
        }
    };

    let sender = registry.lock().await.get(&conn).cloned();
    match sender {
        Some(tx) => {
            if tx.send(body).await.is_err() {
                tracing::debug!("bridge connection {conn} writer gone");
            }
        }
        None => tracing::debug!("bridge connection {conn} already closed"),
    }
}

async fn handle_connection(
    stream: TcpStream,
    conn: ConnId,
    events: AsyncSender<AppEvent>,
    registry: Registry,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ws = tokio_tungstenite::accept_async(stream).await?;
    let (mut write, mut read) = ws.split();

    let (reply_tx, reply_rx) = kanal::bounded_async::<ResponseBody>(32);
    registry.lock().await.insert(conn, reply_tx.clone());

    let writer = tokio::spawn(async move {
        while let Ok(body) = reply_rx.recv().await {
            let payload = match serde_json::to_string(&body) {
                Ok(payload) => payload,
                Err(error) => {
                    tracing::error!("failed to encode bridge frame: {error}");
                    continue;
                }
            };
            if write.send(Message::text(payload)).await.is_err() {
                break;
            }
        }
    });

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            msg = read.next() => {
                let Some(msg) = msg else { break };
                let msg = msg?;
                if !msg.is_text() {
                    continue;
                }
                process_frame(msg.to_text()?, conn, &events, &reply_tx).await?;
            }
        }
    }

    registry.lock().await.remove(&conn);
    writer.abort();
    tracing::debug!("bridge connection {conn} closed");
    Ok(())
}

async fn process_frame(
    raw: &str,
    conn: ConnId,
    events: &AsyncSender<AppEvent>,
    replies: &AsyncSender<ResponseBody>,
) -> anyhow::Result<()> {
    if raw.trim().is_empty() {
        return Ok(());
    }

    match serde_json::from_str::<RequestBody>(raw) {
        Ok(RequestBody::Selection(report)) => {
            events
                .send(AppEvent::SelectionCaptured { conn, report })
                .await?;
        }
        Ok(RequestBody::Ping) => {
            replies.send(ResponseBody::Pong).await?;
        }
        Err(error) => {
            tracing::error!("invalid bridge frame: {error}");
            replies
                .send(ResponseBody::Error(ErrorNotice {
                    message: format!("invalid JSON payload: {error}"),
                }))
                .await?;
        }
    }

    Ok(())
}
