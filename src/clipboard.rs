//! System clipboard access via arboard.

use newdle_core::{ClipboardWriter, NewdleError, NewdleResult};

/// Handle to the desktop clipboard.
///
/// arboard clipboards are short-lived, so each write opens a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Probe for a usable clipboard (there is none on a headless session)
    pub fn detect() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(_) => Some(Self),
            Err(e) => {
                tracing::warn!("Clipboard not available: {}", e);
                None
            }
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> NewdleResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| NewdleError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| NewdleError::Clipboard(e.to_string()))
    }
}
