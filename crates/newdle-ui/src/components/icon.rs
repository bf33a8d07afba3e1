//! Icon Component
//!
//! Lucide line icons rendered as inline SVG.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconName {
    /// Lucide calendar-plus (answer a poll)
    CalendarPlus,
    /// Lucide list-checks (summary)
    Tasks,
    /// Lucide grid-3x3 (grid view)
    Grid,
}

#[component]
pub fn Icon(name: IconName, #[props(default = 16)] size: u32) -> Element {
    let size = size.to_string();

    match name {
        IconName::CalendarPlus => rsx! {
            svg {
                class: "ui-icon",
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M8 2v4" }
                path { d: "M16 2v4" }
                path { d: "M21 13V6a2 2 0 0 0-2-2H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h8" }
                path { d: "M3 10h18" }
                path { d: "M16 19h6" }
                path { d: "M19 16v6" }
            }
        },
        IconName::Tasks => rsx! {
            svg {
                class: "ui-icon",
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m3 17 2 2 4-4" }
                path { d: "m3 7 2 2 4-4" }
                path { d: "M13 6h8" }
                path { d: "M13 12h8" }
                path { d: "M13 18h8" }
            }
        },
        IconName::Grid => rsx! {
            svg {
                class: "ui-icon",
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { x: "3", y: "3", width: "18", height: "18", rx: "2" }
                path { d: "M3 9h18" }
                path { d: "M3 15h18" }
                path { d: "M9 3v18" }
                path { d: "M15 3v18" }
            }
        },
    }
}
