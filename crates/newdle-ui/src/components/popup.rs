//! Popup Component
//!
//! Tooltip attached to a trigger element. By default it appears while the
//! trigger is hovered (pure CSS). Passing `open` makes it controlled, which
//! is how click-triggered feedback such as "Copied!" is shown.

use dioxus::prelude::*;

/// Where the tooltip sits relative to its trigger
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PopupPosition {
    TopCenter,
    #[default]
    BottomCenter,
}

impl PopupPosition {
    pub fn class(&self) -> &'static str {
        match self {
            PopupPosition::TopCenter => "top-center",
            PopupPosition::BottomCenter => "bottom-center",
        }
    }
}

/// Build the tooltip class list
pub fn popup_class(position: PopupPosition, inverted: bool, open: Option<bool>) -> String {
    let mut class = format!("ui-popup {}", position.class());
    if inverted {
        class.push_str(" inverted");
    }
    match open {
        Some(true) => class.push_str(" open"),
        Some(false) => class.push_str(" closed"),
        None => class.push_str(" hover"),
    }
    class
}

/// Properties for the Popup component
#[derive(Clone, PartialEq, Props)]
pub struct PopupProps {
    /// Tooltip text
    #[props(into)]
    pub content: String,
    /// The element the tooltip is attached to
    pub children: Element,
    #[props(default)]
    pub position: PopupPosition,
    /// Light text on a dark background
    #[props(default = false)]
    pub inverted: bool,
    /// Controlled visibility; `None` shows on hover
    #[props(default)]
    pub open: Option<bool>,
}

#[component]
pub fn Popup(props: PopupProps) -> Element {
    let class = popup_class(props.position, props.inverted, props.open);

    rsx! {
        span { class: "ui-popup-anchor",
            {props.children}
            span { class: "{class}", role: "tooltip", "{props.content}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_popup_class() {
        assert_eq!(
            popup_class(PopupPosition::BottomCenter, false, None),
            "ui-popup bottom-center hover"
        );
    }

    #[test]
    fn controlled_popup_class() {
        assert_eq!(
            popup_class(PopupPosition::TopCenter, true, Some(true)),
            "ui-popup top-center inverted open"
        );
        assert_eq!(
            popup_class(PopupPosition::TopCenter, true, Some(false)),
            "ui-popup top-center inverted closed"
        );
    }
}
