//! Note cards with per-note delete.
//!
//! DESIGN
//! ======
//! Deletion goes straight to the service; the list never edits itself.
//! A successful delete invalidates the notes store so the current page is
//! re-fetched with server truth.

#[cfg(test)]
#[path = "note_list_test.rs"]
mod note_list_test;

use std::collections::HashSet;

use leptos::prelude::*;
use notes::Note;

use crate::state::notes::NotesStore;
#[cfg(feature = "hydrate")]
use crate::util::browser;

/// Ids with a delete request in flight.
#[derive(Clone, Debug, Default)]
pub struct PendingDeletes(HashSet<String>);

impl PendingDeletes {
    /// Mark `id` as deleting. False if a delete for it is already running.
    pub fn begin(&mut self, id: &str) -> bool {
        self.0.insert(id.to_owned())
    }

    pub fn finish(&mut self, id: &str) {
        self.0.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }
}

/// Renders `notes` as a list of cards.
#[component]
pub fn NoteList(#[prop(into)] notes: Signal<Vec<Note>>) -> impl IntoView {
    let store = expect_context::<NotesStore>();
    let deleting = RwSignal::new(PendingDeletes::default());

    let on_delete = Callback::new(move |id: String| {
        if !deleting.try_update(|d| d.begin(&id)).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_note(&id).await {
                Ok(removed) => {
                    log::info!("deleted note {}", removed.id);
                    store.invalidate();
                }
                Err(e) => {
                    log::error!("delete note error: {e}");
                    browser::alert(&browser::delete_failed_alert(&e));
                }
            }
            deleting.update(|d| d.finish(&id));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = store;
            deleting.update(|d| d.finish(&id));
        }
    });

    view! {
        <ul class="note-list">
            <For
                each=move || notes.get()
                key=|note| note.id.clone()
                children=move |note| {
                    let id = note.id.clone();
                    let busy_id = id.clone();
                    view! {
                        <li class="note-list__item">
                            <h2 class="note-list__title">{note.title}</h2>
                            <p class="note-list__content">{note.content}</p>
                            <div class="note-list__footer">
                                <span class="note-list__tag">{note.tag.as_str()}</span>
                                <button
                                    class="btn note-list__delete"
                                    disabled=move || deleting.with(|d| d.contains(&busy_id))
                                    on:click=move |_| on_delete.run(id.clone())
                                >
                                    "Delete"
                                </button>
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}
