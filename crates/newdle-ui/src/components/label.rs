//! Label Component
//!
//! Small colored badges shown next to a title.

use dioxus::prelude::*;

/// Badge colors
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LabelColor {
    #[default]
    Grey,
    Teal,
    Orange,
}

impl LabelColor {
    /// Returns the CSS class for this color
    pub fn class(&self) -> &'static str {
        match self {
            LabelColor::Grey => "ui-label grey",
            LabelColor::Teal => "ui-label teal",
            LabelColor::Orange => "ui-label orange",
        }
    }
}

/// Properties for the Label component
#[derive(Clone, PartialEq, Props)]
pub struct LabelProps {
    #[props(default)]
    pub color: LabelColor,
    pub children: Element,
}

/// Colored badge
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Label { color: LabelColor::Teal, "private" }
/// }
/// ```
#[component]
pub fn Label(props: LabelProps) -> Element {
    rsx! {
        span { class: "{props.color.class()}", {props.children} }
    }
}
