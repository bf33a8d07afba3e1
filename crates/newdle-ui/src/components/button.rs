//! Button Components
//!
//! Icon buttons used in toolbars, grouped into segmented controls:
//! - Active: the button represents the current view or an enabled toggle
//! - Toggle: the button flips a setting (reported via `aria-pressed`)
//! - Disabled: greyed out and ignores clicks

use dioxus::prelude::*;

/// Build the class list for a toolbar button
pub fn button_class(active: bool, disabled: bool, toggle: bool, extra: Option<&str>) -> String {
    let mut class = String::from("ui-btn");
    if toggle {
        class.push_str(" toggle");
    }
    if active {
        class.push_str(" active");
    }
    if disabled {
        class.push_str(" disabled");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button content (usually an [`Icon`](crate::Icon))
    pub children: Element,
    /// Click handler, not called while disabled
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Highlighted as the current choice
    #[props(default = false)]
    pub active: bool,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Render as an on/off toggle
    #[props(default = false)]
    pub toggle: bool,
    /// Accessible label for screen readers
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Toolbar button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         active: on_summary,
///         onclick: move |_| go_to_summary(),
///         Icon { name: IconName::Tasks }
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(
        props.active,
        props.disabled,
        props.toggle,
        props.class.as_deref(),
    );
    let disabled = props.disabled;
    let aria_label = props.aria_label.clone().unwrap_or_default();
    let pressed = if props.active { "true" } else { "false" };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: disabled,
            "aria-label": "{aria_label}",
            "aria-pressed": if props.toggle { pressed },
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Segmented group of buttons sharing borders
#[component]
pub fn ButtonGroup(children: Element, #[props(default)] class: Option<String>) -> Element {
    let class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("ui-btn-group {}", extra),
        _ => "ui-btn-group".to_string(),
    };

    rsx! {
        div { class: "{class}", role: "group", {children} }
    }
}
