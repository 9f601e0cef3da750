use anyhow::Result;
use async_trait::async_trait;

/// Access to the host's current text selection.
pub trait SelectionSource: Send + Sync {
    /// Currently highlighted text, if any
    fn current_selection(&self) -> Option<String>;
}

/// Capability query backing the editable-field filter.
///
/// The host integration layer answers it however it likes (the page walks
/// the anchor's ancestor chain); the core never depends on a document tree.
pub trait EditableRegionProbe: Send + Sync {
    /// True when the selection anchor sits inside a text input, a multi-line
    /// text input, or a directly editable element
    fn is_inside_editable_region(&self) -> bool;
}

/// Where accepted lookups go.
#[async_trait]
pub trait NavigationSink: Send + Sync {
    /// Open `url` in a new, unnamed browsing context
    async fn open_in_new_tab(&self, url: &str) -> Result<()>;
}
