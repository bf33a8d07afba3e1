//! Answer views
//!
//! The same answers in two layouts: a compact list of timeslots with
//! availability counts, or a grid with one row per participant.

use dioxus::prelude::*;
use newdle_core::Newdle;

/// Timeslots with how many participants can make each one
#[component]
pub fn AnswerList(newdle: Newdle) -> Element {
    let total = newdle.participant_count();

    rsx! {
        ul { class: "answer-list",
            for slot in newdle.timeslots.iter() {
                {
                    let available = newdle.available_count(slot);
                    let is_final = newdle.final_dt.as_deref() == Some(slot.as_str());
                    rsx! {
                        li {
                            key: "{slot}",
                            class: if is_final { "answer-slot final" } else { "answer-slot" },
                            span { class: "slot-time", "{slot}" }
                            span { class: "slot-count", "{available}/{total}" }
                        }
                    }
                }
            }
        }
    }
}

/// Participants down, timeslots across
#[component]
pub fn AnswerGrid(newdle: Newdle) -> Element {
    rsx! {
        table { class: "answer-grid",
            thead {
                tr {
                    th {}
                    for slot in newdle.timeslots.iter() {
                        th { key: "{slot}", class: "slot-time", "{slot}" }
                    }
                }
            }
            tbody {
                for participant in newdle.participants.iter() {
                    tr { key: "{participant.id}",
                        th { class: "participant-name", "{participant.name}" }
                        for slot in newdle.timeslots.iter() {
                            {
                                let answer = participant.answer_for(slot);
                                rsx! {
                                    td {
                                        class: "answer-cell {answer.class()}",
                                        "{answer.label()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
