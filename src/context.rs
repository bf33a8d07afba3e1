//! Context providers for the Newdle desktop client.
//!
//! The application state store, local preference storage, viewport and
//! clipboard are handed to components through `use_context` so no
//! component reaches for a global.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! provide_app_context(|| session.into_state(false), preferences, clipboard);
//!
//! // In child components
//! let mut state = use_app_state();
//! state.write().dispatch(Action::ToggleGridView);
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;
use newdle_core::{AppState, KeyValueStore};

use crate::clipboard::SystemClipboard;

/// Logical window width below which the layout is considered mobile
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Local storage shared by every component
#[derive(Clone)]
pub struct Preferences(Arc<dyn KeyValueStore>);

impl Preferences {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self(store)
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.0.as_ref()
    }
}

/// The system clipboard, `None` when this session has no clipboard
#[derive(Clone, Copy)]
pub struct ClipboardCapability(pub Option<SystemClipboard>);

/// Whether the window is narrower than the mobile breakpoint
#[derive(Clone, Copy)]
struct MobileViewport(Signal<bool>);

pub fn is_mobile_width(logical_width: f64) -> bool {
    logical_width < MOBILE_BREAKPOINT
}

/// Provide all application contexts. Call once, from the root component.
pub fn provide_app_context(
    init_state: impl FnOnce() -> AppState,
    preferences: Preferences,
    clipboard: Option<SystemClipboard>,
) {
    let app_state = use_signal(init_state);
    use_context_provider(|| app_state);
    use_context_provider(|| preferences);
    use_context_provider(|| ClipboardCapability(clipboard));

    let window = use_window();
    let initial_width = window
        .inner_size()
        .to_logical::<f64>(window.scale_factor())
        .width;
    let mut is_mobile = use_signal(|| is_mobile_width(initial_width));
    use_context_provider(|| MobileViewport(is_mobile));

    // Track resizes so the title bar reacts to the window crossing the breakpoint
    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let width = size.to_logical::<f64>(window.scale_factor()).width;
            let mobile = is_mobile_width(width);
            if *is_mobile.peek() != mobile {
                tracing::debug!(width, mobile, "Viewport crossed mobile breakpoint");
                is_mobile.set(mobile);
            }
        }
    });
}

/// Hook to access the application state store.
///
/// Read with `state.read()`, change only through `state.write().dispatch(..)`.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Hook to access local preference storage
pub fn use_preferences() -> Preferences {
    use_context::<Preferences>()
}

/// Hook returning the clipboard if one is available
pub fn use_clipboard() -> Option<SystemClipboard> {
    use_context::<ClipboardCapability>().0
}

/// Hook returning a reactive mobile viewport flag
pub fn use_is_mobile() -> Signal<bool> {
    use_context::<MobileViewport>().0
}
