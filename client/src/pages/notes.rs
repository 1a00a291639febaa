//! Notes page: search, paginate, list, and create.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Owns the query wiring: raw search text is debounced, then
//! `(page, debounced search)` drives the notes store, which serves cached
//! pages or fetches them. Changing the search resets to page 1 immediately.

use leptos::prelude::*;
use notes::NotesQuery;

use crate::components::modal::Modal;
use crate::components::note_form::NoteForm;
use crate::components::note_list::NoteList;
use crate::components::pagination::Pagination;
use crate::components::search_box::SearchBox;
use crate::state::notes::NotesStore;
use crate::state::ui::UiState;
use crate::util::debounce::{SEARCH_DEBOUNCE_MS, use_debounced};

#[component]
pub fn NotesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let store = expect_context::<NotesStore>();

    let search = Signal::derive(move || ui.with(|u| u.search.clone()));
    let page = Memo::new(move |_| ui.with(|u| u.page));
    let debounced_search = use_debounced(search, SEARCH_DEBOUNCE_MS);

    Effect::new(move || {
        let key = NotesQuery::new(page.get(), debounced_search.get());
        store.load(key);
    });

    let on_search = Callback::new(move |value: String| ui.update(|u| u.set_search(value)));
    let on_page = Callback::new(move |next: u32| ui.update(|u| u.set_page(next)));
    let on_open = move |_| ui.update(UiState::open_modal);
    let on_close = Callback::new(move |()| ui.update(UiState::close_modal));

    let notes = Signal::derive(move || store.state.with(|s| s.notes()));
    let total_pages = Signal::derive(move || store.state.with(|s| s.total_pages()));

    view! {
        <div class="notes-page">
            <header class="notes-page__toolbar toolbar">
                <SearchBox value=search on_change=on_search/>
                <Show when=move || { total_pages.get() > 1 }>
                    <Pagination page=page total_pages=total_pages on_change=on_page/>
                </Show>
                <button class="btn btn--primary notes-page__create" on:click=on_open>
                    "Create note +"
                </button>
            </header>

            <Show
                when=move || !notes.with(Vec::is_empty)
                fallback=|| view! { <p class="notes-page__empty">"No notes found"</p> }
            >
                <NoteList notes=notes/>
            </Show>

            <Show when=move || ui.with(|u| u.modal_open)>
                <Modal on_close=on_close>
                    <NoteForm on_success=on_close/>
                </Modal>
            </Show>

            <Show when=move || store.state.with(|s| s.is_loading())>
                <p class="notes-page__status">"Loading..."</p>
            </Show>
            <Show when=move || store.state.with(|s| s.is_error())>
                <p class="notes-page__status notes-page__status--error">"Error fetching notes"</p>
            </Show>
        </div>
    }
}
