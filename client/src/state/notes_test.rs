use super::*;
use notes::NoteTag;

// =============================================================
// Helpers
// =============================================================

fn key(page: u32, search: &str) -> NotesQuery {
    NotesQuery::new(page, search)
}

fn page_of(titles: &[&str], total_pages: u32) -> NotesPage {
    NotesPage {
        notes: titles
            .iter()
            .enumerate()
            .map(|(i, title)| Note {
                id: format!("n{i}"),
                title: (*title).to_owned(),
                content: String::new(),
                tag: NoteTag::Todo,
                created_at: None,
                updated_at: None,
            })
            .collect(),
        total_pages,
    }
}

fn titles(state: &NotesState) -> Vec<String> {
    state.notes().into_iter().map(|n| n.title).collect()
}

// =============================================================
// Selecting keys
// =============================================================

#[test]
fn first_select_requests_fetch_and_reports_loading() {
    let mut state = NotesState::default();
    let ticket = state.select(key(1, ""));
    assert_eq!(ticket.map(|t| t.key), Some(key(1, "")));
    assert!(state.is_loading());
    assert!(!state.is_error());
}

#[test]
fn reselecting_pending_key_does_not_duplicate_request() {
    let mut state = NotesState::default();
    assert!(state.select(key(1, "")).is_some());
    assert!(state.select(key(1, "")).is_none());
}

#[test]
fn resolved_page_becomes_visible() {
    let mut state = NotesState::default();
    let ticket = state.select(key(1, "")).unwrap();
    state.resolve(ticket, Ok(page_of(&["a", "b"], 3)));
    assert_eq!(titles(&state), vec!["a", "b"]);
    assert_eq!(state.total_pages(), 3);
    assert!(!state.is_loading());
    assert!(!state.is_fetching());
}

#[test]
fn fresh_cached_key_is_served_without_fetch() {
    let mut state = NotesState::default();
    let ticket = state.select(key(1, "")).unwrap();
    state.resolve(ticket, Ok(page_of(&["one"], 2)));
    let ticket = state.select(key(2, "")).unwrap();
    state.resolve(ticket, Ok(page_of(&["two"], 2)));

    assert!(state.select(key(1, "")).is_none());
    assert_eq!(titles(&state), vec!["one"]);
}

#[test]
fn previous_page_stays_visible_while_new_key_loads() {
    let mut state = NotesState::default();
    let ticket = state.select(key(1, "")).unwrap();
    state.resolve(ticket, Ok(page_of(&["old"], 2)));

    assert!(state.select(key(2, "")).is_some());
    assert_eq!(titles(&state), vec!["old"]);
    assert!(state.is_fetching());
    assert!(!state.is_loading());
}

#[test]
fn response_for_non_current_key_is_cached_but_not_shown() {
    let mut state = NotesState::default();
    let first = state.select(key(1, "a")).unwrap();
    let second = state.select(key(1, "ab")).unwrap();

    state.resolve(second, Ok(page_of(&["ab"], 1)));
    state.resolve(first, Ok(page_of(&["a"], 1)));
    assert_eq!(titles(&state), vec!["ab"]);

    assert!(state.select(key(1, "a")).is_none());
    assert_eq!(titles(&state), vec!["a"]);
}

// =============================================================
// Errors
// =============================================================

#[test]
fn failure_for_current_key_sets_error_and_keeps_data() {
    let mut state = NotesState::default();
    let ticket = state.select(key(1, "")).unwrap();
    state.resolve(ticket, Ok(page_of(&["kept"], 2)));

    let ticket = state.select(key(2, "")).unwrap();
    state.resolve(ticket, Err("fetch notes failed: 500".to_owned()));
    assert!(state.is_error());
    assert_eq!(titles(&state), vec!["kept"]);
}

#[test]
fn failure_for_other_key_is_ignored() {
    let mut state = NotesState::default();
    let stale = state.select(key(1, "x")).unwrap();
    state.select(key(1, "xy"));
    state.resolve(stale, Err("boom".to_owned()));
    assert!(!state.is_error());
}

#[test]
fn success_clears_previous_error() {
    let mut state = NotesState::default();
    let ticket = state.select(key(1, "")).unwrap();
    state.resolve(ticket, Err("offline".to_owned()));
    assert!(state.is_error());

    let ticket = state.refresh().unwrap();
    state.resolve(ticket, Ok(page_of(&["back"], 1)));
    assert!(!state.is_error());
}

#[test]
fn switching_keys_clears_error() {
    let mut state = NotesState::default();
    let ticket = state.select(key(1, "")).unwrap();
    state.resolve(ticket, Err("offline".to_owned()));
    state.select(key(1, "new"));
    assert!(!state.is_error());
}

// =============================================================
// Invalidation
// =============================================================

#[test]
fn refresh_refetches_current_key() {
    let mut state = NotesState::default();
    let ticket = state.select(key(1, "")).unwrap();
    state.resolve(ticket, Ok(page_of(&["before"], 1)));

    let ticket = state.refresh().expect("current key should refetch");
    assert_eq!(ticket.key, key(1, ""));
    assert_eq!(titles(&state), vec!["before"]);

    state.resolve(ticket, Ok(page_of(&["after"], 1)));
    assert_eq!(titles(&state), vec!["after"]);
}

#[test]
fn refresh_without_current_key_does_nothing() {
    let mut state = NotesState::default();
    assert!(state.refresh().is_none());
}

#[test]
fn refresh_marks_other_keys_stale() {
    let mut state = NotesState::default();
    let ticket = state.select(key(1, "")).unwrap();
    state.resolve(ticket, Ok(page_of(&["p1"], 2)));
    let ticket = state.select(key(2, "")).unwrap();
    state.resolve(ticket, Ok(page_of(&["p2"], 2)));

    let ticket = state.refresh().unwrap();
    state.resolve(ticket, Ok(page_of(&["p2 new"], 2)));

    let ticket = state.select(key(1, ""));
    assert!(ticket.is_some(), "stale page 1 should refetch");
    assert_eq!(titles(&state), vec!["p1"]);
}

#[test]
fn response_issued_before_refresh_stays_stale() {
    let mut state = NotesState::default();
    let early = state.select(key(1, "")).unwrap();
    let fresh = state.refresh().unwrap();

    state.resolve(early, Ok(page_of(&["early"], 1)));
    assert!(state.is_fetching(), "refetch is still outstanding");

    state.resolve(fresh, Ok(page_of(&["fresh"], 1)));
    assert_eq!(titles(&state), vec!["fresh"]);
    assert!(state.select(key(1, "")).is_none());
}

#[test]
fn response_issued_before_refresh_cannot_replace_refetched_page() {
    let mut state = NotesState::default();
    let early = state.select(key(1, "")).unwrap();
    let fresh = state.refresh().unwrap();

    state.resolve(fresh, Ok(page_of(&["after-delete"], 1)));
    state.resolve(early, Ok(page_of(&["deleted-note"], 1)));

    assert_eq!(titles(&state), vec!["after-delete"]);
    assert!(!state.is_fetching());
    assert!(state.select(key(1, "")).is_none());
    assert_eq!(titles(&state), vec!["after-delete"]);
}

#[test]
fn failure_issued_before_refresh_is_ignored_once_refetched() {
    let mut state = NotesState::default();
    let early = state.select(key(1, "")).unwrap();
    let fresh = state.refresh().unwrap();

    state.resolve(fresh, Ok(page_of(&["current"], 1)));
    state.resolve(early, Err("timeout".to_owned()));
    assert!(!state.is_error());
}

#[test]
fn response_issued_before_refresh_for_unrefetched_key_is_cached_stale() {
    let mut state = NotesState::default();
    let early = state.select(key(1, "a")).unwrap();
    let ticket = state.select(key(1, "b")).unwrap();
    state.resolve(ticket, Ok(page_of(&["b"], 1)));

    let refetch = state.refresh().unwrap();
    state.resolve(early, Ok(page_of(&["a old"], 1)));
    state.resolve(refetch, Ok(page_of(&["b new"], 1)));
    assert_eq!(titles(&state), vec!["b new"]);

    assert!(state.select(key(1, "a")).is_some(), "stale entry still refetches");
    assert_eq!(titles(&state), vec!["a old"]);
}

#[test]
fn empty_state_has_no_notes_or_pages() {
    let state = NotesState::default();
    assert!(state.notes().is_empty());
    assert_eq!(state.total_pages(), 0);
    assert!(!state.is_loading());
}
