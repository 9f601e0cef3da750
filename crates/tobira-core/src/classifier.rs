use std::time::{Duration, Instant};

use tobira_config::lookup::LookupConfig;
use tobira_types::DismissReason;

use crate::charset;
use crate::lookup::{Category, LookupBuilder};

/// Outcome of classifying one candidate selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Caller should open `Lookup::url` in a new tab
    Accepted(Lookup),
    Rejected(RejectReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub category: Category,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    NotJapanese,
    InvalidLength,
    Debounced,
}

impl From<RejectReason> for DismissReason {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::Empty => DismissReason::Empty,
            RejectReason::NotJapanese => DismissReason::NotJapanese,
            RejectReason::InvalidLength => DismissReason::InvalidLength,
            RejectReason::Debounced => DismissReason::Debounced,
        }
    }
}

/// Decides whether selected text is a Japanese lookup target.
///
/// Owns the only mutable state in the system: the time of the last accepted
/// lookup, used to debounce bursts of selection events. One instance serves
/// the whole process, so the debounce window is shared across connections.
pub struct SelectionClassifier {
    lookup: LookupBuilder,
    debounce_window: Duration,
    max_chars: usize,
    last_accepted_at: Option<Instant>,
}

impl SelectionClassifier {
    pub fn new(config: &LookupConfig) -> Self {
        Self {
            lookup: LookupBuilder::new(config.host.clone()),
            debounce_window: Duration::from_millis(config.debounce_ms),
            max_chars: config.max_chars,
            last_accepted_at: None,
        }
    }

    /// `now` is supplied by the caller so decisions stay reproducible under
    /// test. Every input maps to a `Decision`; there is no error path.
    pub fn classify(&mut self, candidate: &str, now: Instant) -> Decision {
        let text = candidate.trim();
        if text.is_empty() {
            return Decision::Rejected(RejectReason::Empty);
        }

        if !charset::contains_japanese(text) {
            return Decision::Rejected(RejectReason::NotJapanese);
        }

        let len = text.chars().count();
        let category = if len == 1 {
            Category::Kanji
        } else if len < self.max_chars && !text.contains(['\n', '\r']) {
            Category::Vocabulary
        } else {
            return Decision::Rejected(RejectReason::InvalidLength);
        };

        // Debounced against the previous *accepted* lookup only; rejected
        // calls never move the timestamp.
        if let Some(last) = self.last_accepted_at
            && now.duration_since(last) < self.debounce_window
        {
            return Decision::Rejected(RejectReason::Debounced);
        }

        self.last_accepted_at = Some(now);
        Decision::Accepted(Lookup {
            category,
            url: self.lookup.url_for(category, text),
        })
    }
}
