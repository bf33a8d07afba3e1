//! The bundled demo session loads and drives the title bar.

use std::path::PathBuf;

use newdle_core::{RouteMatch, Session, ShareLink, TitleBar, TitleContext, TitleProps};

fn demo_session() -> Session {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/session.json");
    Session::load(&path).expect("demo session parses")
}

#[test]
fn demo_session_loads() {
    let session = demo_session();
    assert!(session.user.is_some());
    assert_eq!(session.newdles.len(), 2);
}

#[test]
fn demo_creator_sees_private_poll_controls() {
    let state = demo_session().into_state(false);
    let props = TitleProps::from_newdle(state.newdle("dGz7FJzjKa").unwrap());
    let route = RouteMatch::from_path("/newdle/dGz7FJzjKa/summary");
    let ctx = TitleContext::from_state(&state, &props, route, false, true);
    let bar = TitleBar::derive(&props, &ctx);

    assert!(bar.private_badge);
    assert!(bar.limited_badge);
    assert!(bar.navigation.is_some());
    assert!(!bar.grid_toggle.unwrap().disabled);
}

#[test]
fn demo_participant_sees_finished_poll() {
    let state = demo_session().into_state(true);
    let props = TitleProps::from_newdle(state.newdle("k2PqWv8ZtE").unwrap());
    let route = RouteMatch::from_path("/newdle/k2PqWv8ZtE/Xk2mQ9");
    let ctx = TitleContext::from_state(&state, &props, route, false, false);
    let bar = TitleBar::derive(&props, &ctx);

    let nav = bar.navigation.as_ref().unwrap();
    assert!(nav.answer_disabled);
    assert!(nav.answer_active);
    assert!(bar.grid_toggle.unwrap().disabled);
    assert_eq!(
        bar.share_link,
        Some(ShareLink::Plain {
            url: "https://newdle.example/newdle/k2PqWv8ZtE/".to_string()
        })
    );
    assert_eq!(bar.summary_click().as_deref(), Some("/newdle/k2PqWv8ZtE/summary"));
}
