use super::*;

#[test]
fn ui_state_defaults_to_first_page_closed_modal() {
    let state = UiState::default();
    assert_eq!(state.search, "");
    assert_eq!(state.page, 1);
    assert!(!state.modal_open);
}

#[test]
fn search_change_resets_page_to_first() {
    let mut state = UiState::default();
    state.set_page(4);
    state.set_search("groceries".to_owned());
    assert_eq!(state.search, "groceries");
    assert_eq!(state.page, 1);
}

#[test]
fn clearing_search_also_resets_page() {
    let mut state = UiState { search: "x".to_owned(), page: 3, modal_open: false };
    state.set_search(String::new());
    assert_eq!(state.page, 1);
}

#[test]
fn set_page_never_goes_below_one() {
    let mut state = UiState::default();
    state.set_page(0);
    assert_eq!(state.page, 1);
    state.set_page(7);
    assert_eq!(state.page, 7);
}

#[test]
fn modal_open_close_toggles_flag() {
    let mut state = UiState::default();
    state.open_modal();
    assert!(state.modal_open);
    state.close_modal();
    assert!(!state.modal_open);
}

#[test]
fn page_change_keeps_search() {
    let mut state = UiState::default();
    state.set_search("work".to_owned());
    state.set_page(2);
    assert_eq!(state.search, "work");
}
