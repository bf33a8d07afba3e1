//! Home page - polls loaded from the session.

use dioxus::prelude::*;
use newdle_core::routes::summary_url;

use crate::app::{route_for_path, Route};
use crate::context::use_app_state;

#[component]
pub fn Home() -> Element {
    let app_state = use_app_state();
    let newdles: Vec<_> = app_state
        .read()
        .newdles()
        .filter(|n| !n.deleted)
        .map(|n| (n.code.clone(), n.title.clone(), n.participant_count()))
        .collect();

    rsx! {
        main { class: "home",
            h1 { class: "page-title", "newdle" }
            if newdles.is_empty() {
                p { class: "empty-state", "No newdles in this session." }
            } else {
                ul { class: "newdle-list",
                    for (code, title, participants) in newdles {
                        li { key: "{code}",
                            Link { to: route_for_path(&summary_url(&code)), "{title}" }
                            span { class: "participant-count", " ({participants} participants)" }
                        }
                    }
                }
            }
        }
    }
}

/// Anything that is not a poll route
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        main { class: "not-found",
            h1 { class: "page-title", "Page not found" }
            p { code { "{path}" } }
            Link { to: Route::Home {}, "Back to all newdles" }
        }
    }
}
