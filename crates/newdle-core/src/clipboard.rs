//! Clipboard seam for copying shareable links.

use parking_lot::Mutex;

use crate::error::NewdleResult;

/// Something that can receive text for pasting elsewhere
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> NewdleResult<()>;
}

/// Outcome of clicking a shareable link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkClick {
    /// The link's default navigation must be suppressed
    pub prevent_default: bool,
    /// The "Copied!" tooltip should be shown
    pub show_copied: bool,
}

/// Copy `url` on a link click.
///
/// Without a clipboard the link is plain text and the click does nothing.
/// Write failures are logged and otherwise ignored; the tooltip still shows.
pub fn copy_link(clipboard: Option<&dyn ClipboardWriter>, url: &str) -> LinkClick {
    let Some(clipboard) = clipboard else {
        return LinkClick {
            prevent_default: false,
            show_copied: false,
        };
    };

    match clipboard.write_text(url) {
        Ok(()) => tracing::info!(%url, "Copied shareable link"),
        Err(e) => tracing::warn!(error = %e, "Clipboard write failed"),
    }

    LinkClick {
        prevent_default: true,
        show_copied: true,
    }
}

/// Clipboard that records writes in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text written so far, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&self, text: &str) -> NewdleResult<()> {
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NewdleError;

    struct BrokenClipboard;

    impl ClipboardWriter for BrokenClipboard {
        fn write_text(&self, _text: &str) -> NewdleResult<()> {
            Err(NewdleError::Clipboard("no display".to_string()))
        }
    }

    #[test]
    fn test_copy_writes_exact_url() {
        let clipboard = MemoryClipboard::new();
        let click = copy_link(Some(&clipboard), "https://newdle.example/newdle/abc/");
        assert!(click.prevent_default);
        assert!(click.show_copied);
        assert_eq!(clipboard.writes(), vec!["https://newdle.example/newdle/abc/"]);
    }

    #[test]
    fn test_without_clipboard_navigation_is_untouched() {
        let click = copy_link(None, "https://newdle.example/newdle/abc/");
        assert!(!click.prevent_default);
        assert!(!click.show_copied);
    }

    #[test]
    fn test_failed_write_is_swallowed() {
        let click = copy_link(Some(&BrokenClipboard), "https://newdle.example/");
        assert!(click.prevent_default);
    }
}
