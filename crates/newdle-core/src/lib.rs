//! Newdle Core Library
//!
//! UI-free logic for the Newdle desktop client: poll types, the
//! application state store, route paths, the title bar view model, local
//! preference storage and the clipboard seam.
//!
//! ## Quick Start
//!
//! ```ignore
//! use newdle_core::{RouteMatch, Session, TitleBar, TitleContext, TitleProps};
//!
//! let state = Session::load("session.json")?.into_state(false);
//! let newdle = state.newdle("dGz7FJzjKa").unwrap();
//! let props = TitleProps::from_newdle(newdle);
//! let route = RouteMatch::from_path("/newdle/dGz7FJzjKa/summary");
//! let ctx = TitleContext::from_state(&state, &props, route, false, true);
//!
//! let bar = TitleBar::derive(&props, &ctx);
//! assert_eq!(bar.summary_click(), None);
//! ```

pub mod clipboard;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;
pub mod title;
pub mod types;

// Re-exports
pub use clipboard::{copy_link, ClipboardWriter, LinkClick, MemoryClipboard};
pub use error::{NewdleError, NewdleResult};
pub use routes::RouteMatch;
pub use session::Session;
pub use state::{Action, AppState};
pub use storage::{
    load_grid_view_preference, save_grid_view_preference, KeyValueStore, LocalStorage,
    MemoryStore, PREFERS_GRID_VIEW_KEY,
};
pub use title::{
    auto_disable_grid_view, grid_view_should_auto_disable, toggle_grid_view, GridToggle,
    NavigationControls, ShareLink, TitleBar, TitleContext, TitleProps,
};
pub use types::*;
