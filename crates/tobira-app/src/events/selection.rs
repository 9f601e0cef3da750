use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;
use kanal::AsyncSender;
use tobira_core::classifier::{Decision, SelectionClassifier};
use tobira_core::funnel::{FunnelOutcome, funnel_trigger};
use tobira_core::host::{EditableRegionProbe, NavigationSink, SelectionSource};
use tobira_types::{AppEvent, ConnId, DismissReason, SelectionReport};

/// Snapshot of the selection the page sent with the event.
struct ReportSnapshot<'a>(&'a SelectionReport);

impl SelectionSource for ReportSnapshot<'_> {
    fn current_selection(&self) -> Option<String> {
        Some(self.0.text.clone())
    }
}

impl EditableRegionProbe for ReportSnapshot<'_> {
    fn is_inside_editable_region(&self) -> bool {
        self.0.editable
    }
}

/// Routes accepted lookups back to the owning connection as `open` commands.
struct ChannelNavigator<'a> {
    conn: ConnId,
    tx: &'a AsyncSender<AppEvent>,
}

#[async_trait]
impl NavigationSink for ChannelNavigator<'_> {
    async fn open_in_new_tab(&self, url: &str) -> Result<()> {
        self.tx
            .send(AppEvent::OpenLookup {
                conn: self.conn,
                url: url.to_string(),
            })
            .await?;
        Ok(())
    }
}

pub async fn handle_selection(
    classifier: &mut SelectionClassifier,
    conn: ConnId,
    report: SelectionReport,
    app_to_io_tx: &AsyncSender<AppEvent>,
    now: Instant,
) -> anyhow::Result<()> {
    tracing::debug!("selection from conn {conn}: {} bytes", report.text.len());

    let snapshot = ReportSnapshot(&report);
    let sink = ChannelNavigator {
        conn,
        tx: app_to_io_tx,
    };

    let outcome = funnel_trigger(
        classifier,
        report.trigger,
        &snapshot,
        &snapshot,
        &sink,
        now,
    )
    .await?;

    let reason = match outcome {
        FunnelOutcome::Decided(Decision::Accepted(lookup)) => {
            tracing::info!("opening lookup for conn {conn}: {}", lookup.url);
            return Ok(());
        }
        FunnelOutcome::Decided(Decision::Rejected(reason)) => DismissReason::from(reason),
        FunnelOutcome::Suppressed => DismissReason::Suppressed,
    };

    tracing::debug!("selection from conn {conn} dismissed: {}", reason.as_str());
    app_to_io_tx
        .send(AppEvent::SelectionDismissed { conn, reason })
        .await?;

    Ok(())
}
