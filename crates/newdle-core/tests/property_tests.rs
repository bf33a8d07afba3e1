//! Property-based tests for the title bar view model
//!
//! Uses proptest to check the visibility and navigation invariants over
//! every combination of inputs.

use newdle_core::title::{grid_view_should_auto_disable, TitleBar, TitleContext, TitleProps};
use newdle_core::RouteMatch;
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn code_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{1,12}").expect("valid regex")
}

fn props_strategy() -> impl Strategy<Value = TitleProps> {
    (
        code_strategy(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(code, finished, is_private, is_deleted, limited_slots)| TitleProps {
            title: "poll".to_string(),
            author: "author".to_string(),
            creator_uid: "creator".to_string(),
            finished,
            url: Some(format!("https://newdle.example/newdle/{}/", code)),
            code,
            is_private,
            is_deleted,
            limited_slots,
        })
}

/// Paths covering the answer, summary and edit views
fn path_strategy(code: String) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(format!("/newdle/{}/", code)),
        Just(format!("/newdle/{}/p1", code)),
        Just(format!("/newdle/{}/summary", code)),
        Just(format!("/newdle/{}/edit", code)),
    ]
}

fn case_strategy() -> impl Strategy<Value = (TitleProps, TitleContext)> {
    props_strategy().prop_flat_map(|props| {
        let path = path_strategy(props.code.clone());
        (
            Just(props),
            path,
            any::<bool>(),
            prop::option::of(Just("p1".to_string())),
            any::<bool>(),
            0..4usize,
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(
                |(
                    props,
                    path,
                    is_creator,
                    participant_code,
                    grid_view_active,
                    participant_count,
                    is_mobile,
                    clipboard_available,
                )| {
                    let ctx = TitleContext {
                        is_creator,
                        participant_code,
                        grid_view_active,
                        participant_count,
                        is_mobile,
                        route: RouteMatch::from_path(&path),
                        clipboard_available,
                    };
                    (props, ctx)
                },
            )
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A deleted poll never shows controls or the shareable link
    #[test]
    fn deleted_shows_no_controls((mut props, ctx) in case_strategy()) {
        props.is_deleted = true;
        let bar = TitleBar::derive(&props, &ctx);
        prop_assert!(bar.navigation.is_none());
        prop_assert!(bar.grid_toggle.is_none());
        prop_assert!(bar.share_link.is_none());
    }

    /// Navigation targets differ from the current view
    #[test]
    fn clicks_never_push_current_view((props, ctx) in case_strategy()) {
        let bar = TitleBar::derive(&props, &ctx);
        if let Some(path) = bar.summary_click() {
            prop_assert!(!ctx.route.summary);
            prop_assert!(RouteMatch::from_path(&path).summary);
        }
        if bar.answer_click().is_some() {
            prop_assert!(ctx.route.summary || ctx.route.editing);
            prop_assert!(!props.finished);
        }
    }

    /// At most one of the two navigation buttons is active
    #[test]
    fn one_active_view((props, ctx) in case_strategy()) {
        if let Some(nav) = TitleBar::derive(&props, &ctx).navigation {
            prop_assert!(!(nav.answer_active && nav.summary_active));
        }
    }

    /// The grid toggle is never rendered on mobile
    #[test]
    fn no_grid_toggle_on_mobile((props, mut ctx) in case_strategy()) {
        ctx.is_mobile = true;
        prop_assert!(TitleBar::derive(&props, &ctx).grid_toggle.is_none());
    }

    /// Auto-disable only ever turns an active grid view off
    #[test]
    fn auto_disable_requires_active(
        is_mobile in any::<bool>(),
        on_summary in any::<bool>(),
        has_participants in any::<bool>(),
    ) {
        prop_assert!(!grid_view_should_auto_disable(false, is_mobile, on_summary, has_participants));
    }

    /// The shareable link carries the poll URL untouched
    #[test]
    fn share_link_is_poll_url((props, ctx) in case_strategy()) {
        if let Some(link) = TitleBar::derive(&props, &ctx).share_link {
            prop_assert_eq!(Some(link.url()), props.url.as_deref());
        }
    }
}
