//! Session files.
//!
//! A session is the already-fetched state the client starts from: the
//! signed-in user, the polls to show and the participant codes this client
//! answered with. It is stored as JSON.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NewdleResult;
use crate::state::{Action, AppState};
use crate::types::{Newdle, UserInfo};

/// File name looked up in the data directory when no session is given
pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub newdles: Vec<Newdle>,
    /// Poll code to participant code
    #[serde(default)]
    pub participant_codes: BTreeMap<String, String>,
}

impl Session {
    pub fn from_json(json: &str) -> NewdleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> NewdleResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Load the explicit session file, else `session.json` in the data
    /// directory, else an empty session. Errors are logged, never returned.
    pub fn load_or_default(explicit: Option<&Path>, data_dir: &Path) -> Self {
        let fallback = data_dir.join(SESSION_FILE_NAME);
        let path = match explicit {
            Some(path) => path,
            None if fallback.exists() => fallback.as_path(),
            None => {
                tracing::info!("No session file, starting empty");
                return Self::default();
            }
        };

        match Self::load(path) {
            Ok(session) => {
                tracing::info!(
                    path = %path.display(),
                    newdles = session.newdles.len(),
                    "Loaded session"
                );
                session
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load session");
                Self::default()
            }
        }
    }

    /// Build the initial application state
    pub fn into_state(self, prefers_grid_view: bool) -> AppState {
        let mut state = AppState::new(prefers_grid_view);
        state.dispatch(Action::SetUser(self.user));
        for newdle in self.newdles {
            state.dispatch(Action::SetNewdle(newdle));
        }
        for (code, participant_code) in self.participant_codes {
            state.dispatch(Action::StoreParticipantCode {
                code,
                participant_code,
            });
        }
        state
    }
}
