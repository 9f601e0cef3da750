use std::time::Instant;

use anyhow::Result;
use tobira_types::SelectionTrigger;

use crate::classifier::{Decision, SelectionClassifier};
use crate::host::{EditableRegionProbe, NavigationSink, SelectionSource};

const PRIMARY_BUTTON: u8 = 0;

/// What became of one trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunnelOutcome {
    /// Gated out before the classifier was consulted
    Suppressed,
    Decided(Decision),
}

/// Both trigger paths funnel into the single `classify` entry point; only
/// the gating differs. Modifier double-clicks always classify, even inside
/// editable fields. Pointer releases require the primary button and are
/// suppressed entirely inside editable regions.
pub async fn funnel_trigger(
    classifier: &mut SelectionClassifier,
    trigger: SelectionTrigger,
    source: &dyn SelectionSource,
    probe: &dyn EditableRegionProbe,
    sink: &dyn NavigationSink,
    now: Instant,
) -> Result<FunnelOutcome> {
    match trigger {
        SelectionTrigger::DoubleClick { ctrl, meta } => {
            if !ctrl && !meta {
                return Ok(FunnelOutcome::Suppressed);
            }
        }
        SelectionTrigger::PointerRelease { button } => {
            if button != PRIMARY_BUTTON || probe.is_inside_editable_region() {
                return Ok(FunnelOutcome::Suppressed);
            }
        }
    }

    let text = source.current_selection().unwrap_or_default();
    let decision = classifier.classify(&text, now);

    match &decision {
        Decision::Accepted(lookup) => {
            tracing::debug!("selection accepted ({:?}): {}", lookup.category, lookup.url);
            sink.open_in_new_tab(&lookup.url).await?;
        }
        Decision::Rejected(reason) => {
            tracing::debug!("selection rejected: {reason:?}");
        }
    }

    Ok(FunnelOutcome::Decided(decision))
}
