//! Poll URLs and route matching.
//!
//! Patterns match on whole path segments and are prefix matches, so
//! `/newdle/:code/summary` also matches `/newdle/abc/summary/` and
//! `/newdle/abc/summary/extra`.

/// Route pattern of the summary view
pub const SUMMARY_PATTERN: &str = "/newdle/:code/summary";

/// Route pattern of the edit view
pub const EDIT_PATTERN: &str = "/newdle/:code/edit";

/// Path of a poll's summary view
pub fn summary_url(code: &str) -> String {
    format!("/newdle/{}/summary", code)
}

/// Path of a poll's edit view
pub fn edit_url(code: &str) -> String {
    format!("/newdle/{}/edit", code)
}

/// Path of a poll's answer view.
///
/// Without a participant code this is `/newdle/{code}/` (trailing slash kept).
pub fn answer_url(code: &str, participant_code: Option<&str>) -> String {
    format!("/newdle/{}/{}", code, participant_code.unwrap_or(""))
}

/// Whether `path` matches `pattern` on a segment boundary.
///
/// `:name` segments match any non-empty segment. Extra trailing segments
/// in `path` are allowed.
pub fn matches_pattern(pattern: &str, path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());

    for expected in pattern.split('/').filter(|s| !s.is_empty()) {
        match path_segments.next() {
            Some(actual) if expected.starts_with(':') || expected == actual => {}
            _ => return false,
        }
    }
    true
}

/// Which of the poll views the current path is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMatch {
    pub summary: bool,
    pub editing: bool,
}

impl RouteMatch {
    pub fn from_path(path: &str) -> Self {
        Self {
            summary: matches_pattern(SUMMARY_PATTERN, path),
            editing: matches_pattern(EDIT_PATTERN, path),
        }
    }

    /// On neither the summary nor the edit view
    pub fn is_answer_view(&self) -> bool {
        !self.summary && !self.editing
    }
}
