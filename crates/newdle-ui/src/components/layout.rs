//! Layout Components
//!
//! Text-width container and horizontal divider.

use dioxus::prelude::*;

/// Centered column sized for reading
#[component]
pub fn Container(children: Element, #[props(default)] class: Option<String>) -> Element {
    let class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("ui-container text {}", extra),
        _ => "ui-container text".to_string(),
    };

    rsx! {
        div { class: "{class}", {children} }
    }
}

/// Horizontal rule without vertical margin
#[component]
pub fn Divider() -> Element {
    rsx! {
        div { class: "ui-divider fitted" }
    }
}
