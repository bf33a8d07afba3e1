//! Poll pages - answer, summary and edit views of one newdle.
//!
//! Every view starts with the title bar; the body below it switches between
//! the list and grid layouts with the grid view flag.

use dioxus::prelude::*;
use newdle_core::{Action, Newdle};

use crate::app::Route;
use crate::components::{AnswerGrid, AnswerList, NewdleTitle};
use crate::context::use_app_state;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum PollView {
    Answer,
    Summary,
    Edit,
}

#[component]
pub fn Answer(code: String) -> Element {
    rsx! {
        NewdlePage { code, view: PollView::Answer }
    }
}

/// Answer view reached through a participant link.
///
/// Remembers the participant code for this poll so the title bar can offer
/// the shareable link and route back here.
#[component]
pub fn AnswerAs(code: String, participant: String) -> Element {
    let mut app_state = use_app_state();

    use_effect(use_reactive(
        (&code, &participant),
        move |(code, participant)| {
            if participant.is_empty() {
                return;
            }
            let known =
                app_state.read().stored_participant_code(&code) == Some(participant.as_str());
            if !known {
                tracing::info!(%code, %participant, "Storing participant code");
                app_state.write().dispatch(Action::StoreParticipantCode {
                    code,
                    participant_code: participant,
                });
            }
        },
    ));

    rsx! {
        NewdlePage { code, view: PollView::Answer }
    }
}

#[component]
pub fn Summary(code: String) -> Element {
    rsx! {
        NewdlePage { code, view: PollView::Summary }
    }
}

#[component]
pub fn Edit(code: String) -> Element {
    rsx! {
        NewdlePage { code, view: PollView::Edit }
    }
}

#[component]
fn NewdlePage(code: String, view: PollView) -> Element {
    let app_state = use_app_state();
    let newdle = app_state.read().newdle(&code).cloned();
    let grid_view_active = app_state.read().grid_view_active();

    let Some(newdle) = newdle else {
        tracing::warn!(%code, "Unknown newdle");
        return rsx! {
            main { class: "not-found",
                h1 { class: "page-title", "This newdle does not exist" }
                Link { to: Route::Home {}, "Back to all newdles" }
            }
        };
    };

    rsx! {
        main { class: "newdle-page",
            NewdleTitle {
                title: newdle.title.clone(),
                author: newdle.creator_name.clone(),
                creator_uid: newdle.creator_uid.clone(),
                finished: newdle.finished,
                code: newdle.code.clone(),
                url: newdle.url.clone(),
                is_private: newdle.private,
                is_deleted: newdle.deleted,
                limited_slots: newdle.limited_slots,
            }
            PollBody { newdle, view, grid_view_active }
        }
    }
}

#[component]
fn PollBody(newdle: Newdle, view: PollView, grid_view_active: bool) -> Element {
    if newdle.deleted {
        return rsx! {
            p { class: "empty-state", "This newdle has been deleted." }
        };
    }

    let final_slot = newdle.final_dt.clone();
    let content = match view {
        PollView::Summary if newdle.participants.is_empty() => rsx! {
            p { class: "empty-state", "Nobody has answered yet." }
        },
        PollView::Edit => rsx! {
            h2 { class: "section-title", "Timeslots" }
            AnswerList { newdle }
        },
        _ if grid_view_active => rsx! {
            AnswerGrid { newdle }
        },
        _ => rsx! {
            AnswerList { newdle }
        },
    };

    rsx! {
        section { class: "poll-body",
            if let Some(slot) = final_slot {
                p { class: "final-date", "Final date: {slot}" }
            }
            {content}
        }
    }
}
