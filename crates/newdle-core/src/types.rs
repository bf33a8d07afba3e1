//! Core types for Newdle

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Stable identifier, compared against a poll's `creator_uid`
    pub uid: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A participant's answer for one timeslot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    IfNeedBe,
    Unavailable,
}

impl Availability {
    /// Short label used in the list and grid views
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "yes",
            Availability::IfNeedBe => "if need be",
            Availability::Unavailable => "no",
        }
    }

    /// CSS modifier class for grid cells
    pub fn class(&self) -> &'static str {
        match self {
            Availability::Available => "answer-available",
            Availability::IfNeedBe => "answer-ifneedbe",
            Availability::Unavailable => "answer-unavailable",
        }
    }
}

/// Someone who answered a poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u64,
    pub name: String,
    /// Timeslot (as written in the poll) to answer
    #[serde(default)]
    pub answers: BTreeMap<String, Availability>,
}

impl Participant {
    /// Answer for a timeslot, `Unavailable` when the slot was left blank
    pub fn answer_for(&self, timeslot: &str) -> Availability {
        self.answers
            .get(timeslot)
            .copied()
            .unwrap_or(Availability::Unavailable)
    }
}

fn default_true() -> bool {
    true
}

/// A scheduling poll ("newdle")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Newdle {
    /// Short public code used in every URL for this poll
    pub code: String,
    pub title: String,
    pub creator_uid: String,
    pub creator_name: String,
    #[serde(default)]
    pub finished: bool,
    /// Chosen timeslot once the poll is finished
    #[serde(default)]
    pub final_dt: Option<String>,
    /// Absolute shareable URL
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_true")]
    pub private: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub limited_slots: bool,
    #[serde(default)]
    pub timeslots: Vec<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Newdle {
    /// Number of participants who answered
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// How many participants are available (or available if need be) for a slot
    pub fn available_count(&self, timeslot: &str) -> usize {
        self.participants
            .iter()
            .filter(|p| p.answer_for(timeslot) != Availability::Unavailable)
            .count()
    }
}
