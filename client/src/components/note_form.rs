//! Note creation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the modal. Validation runs locally before anything is
//! sent; a successful create invalidates the notes store and hands control
//! back through `on_success`, which the page uses to close the modal.

use leptos::prelude::*;
use notes::{NoteField, NoteTag};

use crate::state::note_form::NoteFormState;
use crate::state::notes::NotesStore;
#[cfg(feature = "hydrate")]
use crate::util::browser;

/// Title/content/tag form with Cancel and Create actions.
#[component]
pub fn NoteForm(on_success: Callback<()>) -> impl IntoView {
    let store = expect_context::<NotesStore>();
    let form = RwSignal::new(NoteFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(note) = form.try_update(NoteFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_note(&note).await {
                Ok(created) => {
                    log::info!("created note {}", created.id);
                    store.invalidate();
                    form.update(NoteFormState::finish_submit);
                    on_success.run(());
                }
                Err(e) => {
                    log::error!("create note error: {e}");
                    form.update(NoteFormState::finish_submit);
                    browser::alert(&browser::create_failed_alert(&e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (note, store);
            form.update(NoteFormState::finish_submit);
        }
    };

    let field_error = move |field: NoteField| {
        move || {
            form.with(|f| f.visible_error(field))
                .map(|message| view! { <span class="note-form__error">{message}</span> })
        }
    };

    view! {
        <form class="note-form" on:submit=on_submit>
            <div class="note-form__group">
                <label for="title">"Title"</label>
                <input
                    id="title"
                    name="title"
                    type="text"
                    class="note-form__input"
                    prop:value=move || form.with(|f| f.draft.title.clone())
                    on:input=move |ev| form.update(|f| f.draft.title = event_target_value(&ev))
                    on:blur=move |_| form.update(|f| f.touch(NoteField::Title))
                />
                {field_error(NoteField::Title)}
            </div>

            <div class="note-form__group">
                <label for="content">"Content"</label>
                <textarea
                    id="content"
                    name="content"
                    rows="8"
                    class="note-form__textarea"
                    prop:value=move || form.with(|f| f.draft.content.clone())
                    on:input=move |ev| form.update(|f| f.draft.content = event_target_value(&ev))
                    on:blur=move |_| form.update(|f| f.touch(NoteField::Content))
                ></textarea>
                {field_error(NoteField::Content)}
            </div>

            <div class="note-form__group">
                <label for="tag">"Tag"</label>
                <select
                    id="tag"
                    name="tag"
                    class="note-form__select"
                    prop:value=move || form.with(|f| f.draft.tag.clone())
                    on:change=move |ev| form.update(|f| f.draft.tag = event_target_value(&ev))
                    on:blur=move |_| form.update(|f| f.touch(NoteField::Tag))
                >
                    {NoteTag::ALL
                        .iter()
                        .map(|tag| view! { <option value=tag.as_str()>{tag.as_str()}</option> })
                        .collect_view()}
                </select>
                {field_error(NoteField::Tag)}
            </div>

            <div class="note-form__actions">
                <button type="button" class="btn note-form__cancel" on:click=move |_| on_success.run(())>
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="btn btn--primary note-form__submit"
                    disabled=move || form.with(|f| f.submitting)
                >
                    "Create note"
                </button>
            </div>
        </form>
    }
}
