use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::fake::{Call, FakeApi};

fn java_api() -> FakeApi {
    FakeApi {
        suggestions: Ok(vec!["Java".to_owned(), "JavaScript".to_owned()]),
        ..FakeApi::default()
    }
}

/// Wake the timer holding `ticket` and apply whatever it returns.
fn timer_fired(api: &FakeApi, state: &mut SuggestState, ticket: u64, input: &str) {
    if let Some(items) = block_on(settle(api, state.debouncer, ticket, input)) {
        state.panel.show(items);
    }
}

#[test]
fn two_characters_issue_no_request() {
    let api = java_api();
    let mut state = SuggestState::default();
    let ticket = state.debouncer.schedule();
    timer_fired(&api, &mut state, ticket, "ja");
    assert!(api.calls().is_empty());
    assert!(!state.panel.is_visible());
}

#[test]
fn settled_query_issues_one_request() {
    let api = java_api();
    let mut state = SuggestState::default();
    let ticket = state.debouncer.schedule();
    timer_fired(&api, &mut state, ticket, "jav");
    assert_eq!(api.calls(), vec![Call::Suggestions("jav".to_owned())]);
    assert!(state.panel.is_visible());
}

#[test]
fn newer_keystroke_cancels_pending_lookup() {
    let api = java_api();
    let mut state = SuggestState::default();
    let jav = state.debouncer.schedule();
    let java = state.debouncer.schedule();

    timer_fired(&api, &mut state, jav, "jav");
    timer_fired(&api, &mut state, java, "java");

    assert_eq!(api.calls(), vec![Call::Suggestions("java".to_owned())]);
}

#[test]
fn fetch_error_hides_panel() {
    let api = FakeApi {
        suggestions: Err(ApiError::Status(500)),
        ..FakeApi::default()
    };
    let mut state = SuggestState::default();
    state.panel.show(vec!["stale".to_owned()]);
    let ticket = state.debouncer.schedule();
    timer_fired(&api, &mut state, ticket, "rust");
    assert!(!state.panel.is_visible());
}

#[test]
fn query_is_trimmed_before_sending() {
    let api = java_api();
    let items = block_on(lookup(&api, "  java  "));
    assert_eq!(items.len(), 2);
    assert_eq!(api.calls(), vec![Call::Suggestions("java".to_owned())]);
}

#[test]
fn superseded_timer_leaves_panel_untouched() {
    let api = java_api();
    let mut debouncer = Debouncer::default();
    let old = debouncer.schedule();
    debouncer.schedule();

    assert_eq!(block_on(settle(&api, debouncer, old, "java")), None);
    assert!(api.calls().is_empty());
}

#[test]
fn surviving_timer_returns_rows() {
    let api = java_api();
    let mut debouncer = Debouncer::default();
    let ticket = debouncer.schedule();

    let items = block_on(settle(&api, debouncer, ticket, "java")).unwrap();
    assert_eq!(items, vec!["Java".to_owned(), "JavaScript".to_owned()]);
}
