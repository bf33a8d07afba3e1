use std::sync::Arc;

use dioxus::prelude::*;
use newdle_core::{load_grid_view_preference, KeyValueStore, LocalStorage, MemoryStore, Session};

use crate::clipboard::SystemClipboard;
use crate::context::{get_data_dir, provide_app_context, Preferences};
use crate::pages::{Answer, AnswerAs, Edit, Home, NotFound, Summary};
use crate::theme::GLOBAL_STYLES;

/// Database file for local storage, inside the data directory
const LOCAL_STORAGE_FILE: &str = "local_storage.redb";

/// Application routes.
///
/// - `/` - Polls loaded from the session
/// - `/newdle/:code/summary` - Answers of all participants
/// - `/newdle/:code/edit` - Poll editing view
/// - `/newdle/:code/:participant` - Answer view for a participant code
/// - `/newdle/:code` - Answer view without a participant code
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/newdle/:code/summary")]
    Summary { code: String },
    #[route("/newdle/:code/edit")]
    Edit { code: String },
    #[route("/newdle/:code/:participant")]
    AnswerAs { code: String, participant: String },
    #[route("/newdle/:code")]
    Answer { code: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Resolve a path built by `newdle_core::routes` into a route.
///
/// Answer paths without a participant code end in `/`, which is dropped
/// before parsing.
pub fn route_for_path(path: &str) -> Route {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    trimmed.parse::<Route>().unwrap_or_else(|_| {
        tracing::warn!(path, "Unroutable path");
        Route::NotFound {
            segments: trimmed
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    })
}

/// Push `path` onto the history
pub fn navigate_to(navigator: Navigator, path: &str) {
    tracing::info!(path, "Navigating");
    navigator.push(route_for_path(path));
}

fn open_local_storage() -> Arc<dyn KeyValueStore> {
    let path = get_data_dir().join(LOCAL_STORAGE_FILE);
    match LocalStorage::open(&path) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to open local storage, preferences will not persist");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Root application component.
///
/// Provides global styles, application state, preferences and routing.
#[component]
pub fn App() -> Element {
    let store = use_hook(open_local_storage);
    let clipboard = use_hook(SystemClipboard::detect);

    let initial_store = store.clone();
    provide_app_context(
        move || {
            let session_file = crate::get_session_file();
            let prefers_grid_view = load_grid_view_preference(initial_store.as_ref());
            Session::load_or_default(session_file.as_deref(), &get_data_dir())
                .into_state(prefers_grid_view)
        },
        Preferences::new(store),
        clipboard,
    );

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
