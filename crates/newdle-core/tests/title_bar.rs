//! Title bar behaviour driven through the store, as the desktop component
//! drives it.

use newdle_core::{
    auto_disable_grid_view, copy_link, toggle_grid_view, Action, AppState, KeyValueStore,
    MemoryClipboard, MemoryStore, Newdle, Participant, RouteMatch, ShareLink, TitleBar,
    TitleContext, TitleProps, UserInfo, PREFERS_GRID_VIEW_KEY,
};

const CODE: &str = "dGz7FJzjKa";
const URL: &str = "https://newdle.example/newdle/dGz7FJzjKa/";

fn newdle(private: bool, participants: usize) -> Newdle {
    Newdle {
        code: CODE.to_string(),
        title: "Quarterly planning".to_string(),
        creator_uid: "creator".to_string(),
        creator_name: "Alice".to_string(),
        finished: false,
        final_dt: None,
        url: Some(URL.to_string()),
        private,
        deleted: false,
        limited_slots: false,
        timeslots: vec!["2026-10-20T10:00".to_string()],
        participants: (0..participants)
            .map(|i| Participant {
                id: i as u64,
                name: format!("participant {}", i),
                answers: Default::default(),
            })
            .collect(),
    }
}

fn state_with(newdle: Newdle, uid: &str, grid_view_active: bool) -> AppState {
    let mut state = AppState::new(grid_view_active);
    state.dispatch(Action::SetUser(Some(UserInfo {
        uid: uid.to_string(),
        name: "Viewer".to_string(),
        email: None,
    })));
    state.dispatch(Action::SetNewdle(newdle));
    state
}

fn render(state: &AppState, path: &str, is_mobile: bool, clipboard: bool) -> TitleBar {
    let props = TitleProps::from_newdle(state.newdle(CODE).unwrap());
    let ctx = TitleContext::from_state(state, &props, RouteMatch::from_path(path), is_mobile, clipboard);
    TitleBar::derive(&props, &ctx)
}

#[test]
fn private_poll_hides_controls_from_strangers() {
    let state = state_with(newdle(true, 3), "stranger", false);
    let bar = render(&state, "/newdle/dGz7FJzjKa/summary", false, true);

    assert!(bar.private_badge);
    assert!(bar.navigation.is_none());
    assert!(bar.grid_toggle.is_none());
    assert!(bar.share_link.is_none());
}

#[test]
fn private_poll_shows_grid_toggle_off_summary() {
    let state = state_with(newdle(true, 3), "stranger", false);
    let bar = render(&state, "/newdle/dGz7FJzjKa/", false, true);

    assert!(bar.navigation.is_none());
    assert!(bar.grid_toggle.is_some());
}

#[test]
fn private_poll_shows_everything_to_creator() {
    let state = state_with(newdle(true, 3), "creator", false);
    let bar = render(&state, "/newdle/dGz7FJzjKa/summary", false, true);

    assert!(bar.navigation.is_some());
    assert!(bar.grid_toggle.is_some());
    assert_eq!(
        bar.share_link,
        Some(ShareLink::Copyable {
            url: URL.to_string()
        })
    );
}

#[test]
fn participant_code_grants_share_link() {
    let mut state = state_with(newdle(false, 1), "stranger", false);
    assert!(render(&state, "/newdle/dGz7FJzjKa/", false, true)
        .share_link
        .is_none());

    state.dispatch(Action::StoreParticipantCode {
        code: CODE.to_string(),
        participant_code: "Xk2".to_string(),
    });
    let bar = render(&state, "/newdle/dGz7FJzjKa/summary", false, true);
    assert!(bar.share_link.is_some());
    assert_eq!(bar.answer_click().as_deref(), Some("/newdle/dGz7FJzjKa/Xk2"));
}

#[test]
fn finished_poll_disables_answer_button() {
    let mut poll = newdle(false, 2);
    poll.finished = true;
    let state = state_with(poll, "creator", false);

    for path in ["/newdle/dGz7FJzjKa/", "/newdle/dGz7FJzjKa/summary"] {
        let bar = render(&state, path, false, true);
        assert!(bar.navigation.as_ref().unwrap().answer_disabled);
        assert_eq!(bar.answer_click(), None);
    }
}

#[test]
fn summary_without_participants_disables_and_switches_off_grid() {
    let mut state = state_with(newdle(false, 0), "creator", true);
    let bar = render(&state, "/newdle/dGz7FJzjKa/summary", false, true);
    assert!(bar.grid_toggle.unwrap().disabled);

    assert!(auto_disable_grid_view(&mut state, CODE, false, true));
    assert!(!state.grid_view_active());

    // Already off: nothing else happens
    assert!(!auto_disable_grid_view(&mut state, CODE, false, true));
    assert!(!state.grid_view_active());
}

#[test]
fn mobile_switches_off_grid() {
    let mut state = state_with(newdle(false, 4), "creator", true);
    assert!(render(&state, "/newdle/dGz7FJzjKa/", true, true)
        .grid_toggle
        .is_none());

    assert!(auto_disable_grid_view(&mut state, CODE, true, false));
    assert!(!state.grid_view_active());
}

#[test]
fn auto_disable_keeps_stored_preference() {
    let store = MemoryStore::new();
    store.set_item(PREFERS_GRID_VIEW_KEY, "true").unwrap();
    let mut state = state_with(newdle(false, 0), "creator", true);

    auto_disable_grid_view(&mut state, CODE, true, false);
    assert_eq!(
        store.get_item(PREFERS_GRID_VIEW_KEY).unwrap().as_deref(),
        Some("true")
    );
}

#[test]
fn summary_click_navigates_once() {
    let state = state_with(newdle(false, 1), "creator", false);

    let bar = render(&state, "/newdle/dGz7FJzjKa/", false, true);
    let mut history = Vec::new();
    history.extend(bar.summary_click());
    assert_eq!(history, vec!["/newdle/dGz7FJzjKa/summary".to_string()]);

    let bar = render(&state, "/newdle/dGz7FJzjKa/summary", false, true);
    assert_eq!(bar.summary_click(), None);
    assert!(bar.navigation.unwrap().summary_active);
}

#[test]
fn grid_toggle_click_persists_and_flips() {
    let store = MemoryStore::new();
    let mut state = state_with(newdle(false, 1), "creator", false);

    toggle_grid_view(&mut state, &store);
    assert!(state.grid_view_active());
    assert_eq!(
        store.get_item(PREFERS_GRID_VIEW_KEY).unwrap().as_deref(),
        Some("true")
    );

    toggle_grid_view(&mut state, &store);
    assert!(!state.grid_view_active());
    assert_eq!(
        store.get_item(PREFERS_GRID_VIEW_KEY).unwrap().as_deref(),
        Some("false")
    );
}

#[test]
fn share_link_click_copies_exact_url() {
    let state = state_with(newdle(false, 1), "creator", false);
    let bar = render(&state, "/newdle/dGz7FJzjKa/", false, true);
    let clipboard = MemoryClipboard::new();

    let click = copy_link(Some(&clipboard), bar.share_link.as_ref().unwrap().url());
    assert!(click.prevent_default);
    assert!(click.show_copied);
    assert_eq!(clipboard.writes(), vec![URL.to_string()]);
}

#[test]
fn share_link_without_clipboard_is_plain_text() {
    let state = state_with(newdle(false, 1), "creator", false);
    let bar = render(&state, "/newdle/dGz7FJzjKa/", false, false);
    assert_eq!(
        bar.share_link,
        Some(ShareLink::Plain {
            url: URL.to_string()
        })
    );
}
