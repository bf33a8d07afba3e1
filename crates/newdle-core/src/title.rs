//! Title bar view model.
//!
//! [`TitleBar::derive`] turns a poll's display inputs and the surrounding
//! client state into every visibility, active and disabled flag the title
//! bar needs. The click intents and the grid view auto-correction rule live
//! here as well so the component only renders and forwards.

use crate::routes::{answer_url, summary_url, RouteMatch};
use crate::state::{Action, AppState};
use crate::storage::{save_grid_view_preference, KeyValueStore};
use crate::types::Newdle;

/// Per-render inputs describing the poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleProps {
    pub title: String,
    pub author: String,
    pub creator_uid: String,
    pub finished: bool,
    pub code: String,
    pub url: Option<String>,
    pub is_private: bool,
    pub is_deleted: bool,
    pub limited_slots: bool,
}

impl TitleProps {
    pub fn from_newdle(newdle: &Newdle) -> Self {
        Self {
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
    }
}

/// Client state the title bar depends on
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleContext {
    pub is_creator: bool,
    pub participant_code: Option<String>,
    pub grid_view_active: bool,
    pub participant_count: usize,
    pub is_mobile: bool,
    pub route: RouteMatch,
    pub clipboard_available: bool,
}

impl TitleContext {
    /// Read the store's view of a poll
    pub fn from_state(
        state: &AppState,
        props: &TitleProps,
        route: RouteMatch,
        is_mobile: bool,
        clipboard_available: bool,
    ) -> Self {
        Self {
            is_creator: state.is_creator(&props.creator_uid),
            participant_code: state.stored_participant_code(&props.code).map(str::to_string),
            grid_view_active: state.grid_view_active(),
            participant_count: state.number_of_participants(&props.code),
            is_mobile,
            route,
            clipboard_available,
        }
    }

    pub fn has_participants(&self) -> bool {
        self.participant_count > 0
    }
}

/// The answer/summary toggle group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationControls {
    pub answer_active: bool,
    pub answer_disabled: bool,
    pub answer_tooltip: &'static str,
    pub summary_active: bool,
}

/// The grid view toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridToggle {
    pub active: bool,
    pub disabled: bool,
}

/// How the shareable link is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareLink {
    /// Clickable link that copies `url`
    Copyable { url: String },
    /// Raw URL text
    Plain { url: String },
}

impl ShareLink {
    pub fn url(&self) -> &str {
        match self {
            ShareLink::Copyable { url } | ShareLink::Plain { url } => url,
        }
    }
}

/// Everything the title bar renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBar {
    pub title: String,
    pub author: String,
    pub private_badge: bool,
    pub limited_badge: bool,
    pub navigation: Option<NavigationControls>,
    pub grid_toggle: Option<GridToggle>,
    pub share_link: Option<ShareLink>,
    route: RouteMatch,
    answer_url: String,
    summary_url: String,
}

pub const PRIVATE_TOOLTIP: &str = "Other participants' answers are hidden";
pub const LIMITED_TOOLTIP: &str = "You can only choose a single timeslot";
pub const ANSWER_TOOLTIP: &str = "Answer newdle";
pub const FINISHED_TOOLTIP: &str = "This newdle has already finished";
pub const SUMMARY_TOOLTIP: &str = "View summary";
pub const GRID_TOOLTIP: &str = "Toggle grid view";

impl TitleBar {
    pub fn derive(props: &TitleProps, ctx: &TitleContext) -> Self {
        let route = ctx.route;

        let navigation = (!props.is_deleted && (!props.is_private || ctx.is_creator)).then(|| {
            NavigationControls {
                answer_active: route.is_answer_view(),
                answer_disabled: props.finished,
                answer_tooltip: if props.finished {
                    FINISHED_TOOLTIP
                } else {
                    ANSWER_TOOLTIP
                },
                summary_active: route.summary,
            }
        });

        let grid_toggle = (!props.is_deleted
            && (!props.is_private || ctx.is_creator || !route.summary)
            && !ctx.is_mobile)
            .then(|| GridToggle {
                active: ctx.grid_view_active,
                disabled: (!route.summary && props.finished)
                    || (route.summary && !ctx.has_participants()),
            });

        // An absent URL still renders an (empty) link line
        let share_link = ((ctx.is_creator || ctx.participant_code.is_some()) && !props.is_deleted)
            .then(|| {
                let url = props.url.clone().unwrap_or_default();
                if ctx.clipboard_available {
                    ShareLink::Copyable { url }
                } else {
                    ShareLink::Plain { url }
                }
            });

        Self {
            title: props.title.clone(),
            author: props.author.clone(),
            private_badge: props.is_private,
            limited_badge: props.limited_slots,
            navigation,
            grid_toggle,
            share_link,
            route,
            answer_url: answer_url(&props.code, ctx.participant_code.as_deref()),
            summary_url: summary_url(&props.code),
        }
    }

    /// Path to push when the answer button is clicked.
    ///
    /// Only leaving the summary or edit view navigates, so the answer view
    /// is never pushed onto the history twice.
    pub fn answer_click(&self) -> Option<String> {
        let nav = self.navigation.as_ref()?;
        if nav.answer_disabled || self.route.is_answer_view() {
            return None;
        }
        Some(self.answer_url.clone())
    }

    /// Path to push when the summary button is clicked
    pub fn summary_click(&self) -> Option<String> {
        self.navigation.as_ref()?;
        (!self.route.summary).then(|| self.summary_url.clone())
    }

    /// New grid view preference when the toggle is clicked, `None` if it
    /// cannot be clicked
    pub fn grid_click(&self) -> Option<bool> {
        let toggle = self.grid_toggle?;
        (!toggle.disabled).then_some(!toggle.active)
    }

    pub fn answer_url(&self) -> &str {
        &self.answer_url
    }

    pub fn summary_url(&self) -> &str {
        &self.summary_url
    }
}

/// Grid view must be switched off: it is on while the viewport is mobile,
/// or on the summary view of a poll nobody answered yet.
pub fn grid_view_should_auto_disable(
    grid_view_active: bool,
    is_mobile: bool,
    on_summary_route: bool,
    has_participants: bool,
) -> bool {
    grid_view_active && (is_mobile || (on_summary_route && !has_participants))
}

/// Grid toggle click: remember the new preference, then flip the flag
pub fn toggle_grid_view(state: &mut AppState, store: &dyn KeyValueStore) {
    let prefers_grid_view = !state.grid_view_active();
    save_grid_view_preference(store, prefers_grid_view);
    state.dispatch(Action::ToggleGridView);
    tracing::info!(grid_view = prefers_grid_view, "Toggled grid view");
}

/// Apply [`grid_view_should_auto_disable`] to the store. The stored
/// preference is left as it is. Returns whether the flag was switched off.
pub fn auto_disable_grid_view(
    state: &mut AppState,
    code: &str,
    is_mobile: bool,
    on_summary_route: bool,
) -> bool {
    let has_participants = state.number_of_participants(code) > 0;
    if !grid_view_should_auto_disable(
        state.grid_view_active(),
        is_mobile,
        on_summary_route,
        has_participants,
    ) {
        return false;
    }
    state.dispatch(Action::ToggleGridView);
    tracing::info!(code, is_mobile, on_summary_route, "Grid view switched off");
    true
}
