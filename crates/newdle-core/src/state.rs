//! Application state store.
//!
//! `AppState` is the single shared state object of the client. Components
//! read it through the selector methods and change it only by dispatching
//! an [`Action`].

use std::collections::{BTreeMap, HashMap};

use crate::types::{Newdle, UserInfo};

/// State transitions understood by [`AppState::dispatch`]
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Flip the grid view flag
    ToggleGridView,
    /// Replace the signed-in user (`None` signs out)
    SetUser(Option<UserInfo>),
    /// Add or replace a loaded poll
    SetNewdle(Newdle),
    /// Remember the participant code this client answered a poll with
    StoreParticipantCode { code: String, participant_code: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    user: Option<UserInfo>,
    grid_view_active: bool,
    participant_codes: HashMap<String, String>,
    newdles: BTreeMap<String, Newdle>,
}

impl AppState {
    /// Create a state whose grid view flag starts from the stored preference
    pub fn new(prefers_grid_view: bool) -> Self {
        Self {
            grid_view_active: prefers_grid_view,
            ..Self::default()
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::ToggleGridView => {
                self.grid_view_active = !self.grid_view_active;
            }
            Action::SetUser(user) => {
                self.user = user;
            }
            Action::SetNewdle(newdle) => {
                self.newdles.insert(newdle.code.clone(), newdle);
            }
            Action::StoreParticipantCode {
                code,
                participant_code,
            } => {
                self.participant_codes.insert(code, participant_code);
            }
        }
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn grid_view_active(&self) -> bool {
        self.grid_view_active
    }

    /// Participant code stored for the poll with the given code
    pub fn stored_participant_code(&self, code: &str) -> Option<&str> {
        self.participant_codes.get(code).map(String::as_str)
    }

    pub fn newdle(&self, code: &str) -> Option<&Newdle> {
        self.newdles.get(code)
    }

    /// All loaded polls, ordered by code
    pub fn newdles(&self) -> impl Iterator<Item = &Newdle> {
        self.newdles.values()
    }

    /// Participant count of a loaded poll, zero when it is not loaded
    pub fn number_of_participants(&self, code: &str) -> usize {
        self.newdles
            .get(code)
            .map(Newdle::participant_count)
            .unwrap_or(0)
    }

    /// Whether the signed-in user created the given poll
    pub fn is_creator(&self, creator_uid: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.uid == creator_uid)
    }
}
