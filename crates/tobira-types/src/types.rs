use serde::{Deserialize, Serialize};

/// Identifier for one bridge connection (one page session).
pub type ConnId = u64;

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged,
    SelectionCaptured {
        conn: ConnId,
        report: SelectionReport,
    },
    OpenLookup {
        conn: ConnId,
        url: String,
    },
    SelectionDismissed {
        conn: ConnId,
        reason: DismissReason,
    },
}

/// Selection event as reported by the host page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionReport {
    pub text: String,
    pub trigger: SelectionTrigger,
    /// True when the selection anchor sits inside a text input, textarea or
    /// contenteditable ancestor. The page walks the ancestor chain; the
    /// daemon never sees the document tree.
    #[serde(default)]
    pub editable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionTrigger {
    DoubleClick {
        #[serde(default)]
        ctrl: bool,
        /// Command key on macOS.
        #[serde(default)]
        meta: bool,
    },
    PointerRelease {
        #[serde(default)]
        button: u8,
    },
}

/// Why a reported selection produced no lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    Empty,
    NotJapanese,
    InvalidLength,
    Debounced,
    /// Gated out before classification (wrong trigger or editable region).
    Suppressed,
}

impl DismissReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DismissReason::Empty => "empty",
            DismissReason::NotJapanese => "not_japanese",
            DismissReason::InvalidLength => "invalid_length",
            DismissReason::Debounced => "debounced",
            DismissReason::Suppressed => "suppressed",
        }
    }
}
