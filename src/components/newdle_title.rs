//! Poll Title Bar
//!
//! Title, author and badges of a poll, the answer/summary switch, the grid
//! view toggle and the shareable link. Every rule about what is shown comes
//! from `newdle_core::TitleBar`; this component renders it and forwards
//! clicks to the router, the state store, local storage and the clipboard.

use std::time::Duration;

use dioxus::prelude::*;
use newdle_core::title::{
    GRID_TOOLTIP, LIMITED_TOOLTIP, PRIVATE_TOOLTIP, SUMMARY_TOOLTIP,
};
use newdle_core::{
    auto_disable_grid_view, copy_link, grid_view_should_auto_disable, toggle_grid_view,
    ClipboardWriter, RouteMatch, ShareLink, TitleBar, TitleContext, TitleProps,
};
use newdle_ui::{
    Button, ButtonGroup, Container, Divider, Icon, IconName, Label, LabelColor, Popup,
    PopupPosition,
};

use crate::app::{navigate_to, Route};
use crate::context::{use_app_state, use_clipboard, use_is_mobile, use_preferences};

/// How long the "Copied!" tooltip stays up
const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Props, Clone, PartialEq)]
pub struct NewdleTitleProps {
    pub title: String,
    pub author: String,
    pub creator_uid: String,
    #[props(default = false)]
    pub finished: bool,
    pub code: String,
    /// Absolute shareable URL, absent for polls without one
    #[props(!optional)]
    pub url: Option<String>,
    #[props(default = true)]
    pub is_private: bool,
    #[props(default = false)]
    pub is_deleted: bool,
    #[props(default = false)]
    pub limited_slots: bool,
}

impl NewdleTitleProps {
    fn title_props(&self) -> TitleProps {
        TitleProps {
            title: self.title.clone(),
            author: self.author.clone(),
            creator_uid: self.creator_uid.clone(),
            finished: self.finished,
            code: self.code.clone(),
            url: self.url.clone(),
            is_private: self.is_private,
            is_deleted: self.is_deleted,
            limited_slots: self.limited_slots,
        }
    }
}

#[component]
pub fn NewdleTitle(props: NewdleTitleProps) -> Element {
    let mut app_state = use_app_state();
    let preferences = use_preferences();
    let clipboard = use_clipboard();
    let is_mobile = use_is_mobile();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let route_match = RouteMatch::from_path(&route.to_string());
    let title_props = props.title_props();
    let ctx = TitleContext::from_state(
        &app_state.read(),
        &title_props,
        route_match,
        is_mobile(),
        clipboard.is_some(),
    );
    let bar = TitleBar::derive(&title_props, &ctx);

    // Switch grid view off on mobile, and on the summary of a poll nobody
    // answered. Reruns when the store, the viewport or the route changes.
    let code = props.code.clone();
    let on_summary_route = route_match.summary;
    use_effect(use_reactive(
        (&code, &on_summary_route),
        move |(code, on_summary_route)| {
            let mobile = is_mobile();
            let (grid_view_active, has_participants) = {
                let state = app_state.read();
                (
                    state.grid_view_active(),
                    state.number_of_participants(&code) > 0,
                )
            };
            if grid_view_should_auto_disable(
                grid_view_active,
                mobile,
                on_summary_route,
                has_participants,
            ) {
                auto_disable_grid_view(&mut app_state.write(), &code, mobile, on_summary_route);
            }
        },
    ));

    let answer_target = bar.answer_click();
    let summary_target = bar.summary_click();
    let grid_clickable = bar.grid_click().is_some();

    rsx! {
        Container { class: "newdle-title".to_string(),
            div { class: "title-flexbox",
                div {
                    div { class: "title",
                        h1 { class: "title-header", "{bar.title}" }
                    }
                    div { class: "subtitle",
                        div { class: "author", "by {bar.author}" }
                        div { class: "badges",
                            if bar.private_badge {
                                Popup { content: PRIVATE_TOOLTIP,
                                    Label { color: LabelColor::Teal, "private" }
                                }
                            }
                            if bar.limited_badge {
                                Popup { content: LIMITED_TOOLTIP,
                                    Label { color: LabelColor::Orange, "limited" }
                                }
                            }
                        }
                    }
                }

                div { class: "view-options",
                    if let Some(nav) = bar.navigation.clone() {
                        ButtonGroup { class: "navigation".to_string(),
                            Popup { content: nav.answer_tooltip,
                                Button {
                                    active: nav.answer_active,
                                    disabled: nav.answer_disabled,
                                    aria_label: "Answer".to_string(),
                                    onclick: move |_| {
                                        if let Some(path) = &answer_target {
                                            navigate_to(navigator, path);
                                        }
                                    },
                                    Icon { name: IconName::CalendarPlus }
                                }
                            }
                            Popup { content: SUMMARY_TOOLTIP,
                                Button {
                                    active: nav.summary_active,
                                    aria_label: "Summary".to_string(),
                                    onclick: move |_| {
                                        if let Some(path) = &summary_target {
                                            navigate_to(navigator, path);
                                        }
                                    },
                                    Icon { name: IconName::Tasks }
                                }
                            }
                        }
                    }

                    if let Some(grid) = bar.grid_toggle {
                        ButtonGroup {
                            Popup { content: GRID_TOOLTIP,
                                Button {
                                    toggle: true,
                                    active: grid.active,
                                    disabled: grid.disabled,
                                    aria_label: "Grid view".to_string(),
                                    onclick: move |_| {
                                        if grid_clickable {
                                            toggle_grid_view(&mut app_state.write(), preferences.store());
                                        }
                                    },
                                    Icon { name: IconName::Grid }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(link) = bar.share_link.clone() {
                Divider {}
                div { class: "shareable-link",
                    div { class: "legend", "Shareable link" }
                    ShareableLink { link }
                }
            }
        }
    }
}

/// The shareable URL, copied on click when a clipboard is available
#[component]
fn ShareableLink(link: ShareLink) -> Element {
    let clipboard = use_clipboard();
    let mut copied = use_signal(|| false);

    match link {
        ShareLink::Plain { url } => rsx! {
            span { class: "share-url", "{url}" }
        },
        ShareLink::Copyable { url } => {
            let href = url.clone();
            rsx! {
                Popup {
                    content: "Copied!",
                    position: PopupPosition::TopCenter,
                    inverted: true,
                    open: copied(),
                    a {
                        class: "share-url",
                        href: "{href}",
                        title: "Copy to clipboard",
                        onclick: move |evt: MouseEvent| {
                            let writer = clipboard.as_ref().map(|c| c as &dyn ClipboardWriter);
                            let click = copy_link(writer, &url);
                            if click.prevent_default {
                                evt.prevent_default();
                            }
                            if click.show_copied {
                                copied.set(true);
                                spawn(async move {
                                    tokio::time::sleep(COPIED_FEEDBACK).await;
                                    copied.set(false);
                                });
                            }
                        },
                        "{href}"
                    }
                }
            }
        }
    }
}
