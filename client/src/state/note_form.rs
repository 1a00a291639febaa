//! Draft state for the note creation form.
//!
//! DESIGN
//! ======
//! Errors are recomputed from the draft on every read; visibility is gated on
//! the field being touched or a submit having been attempted, so the form
//! stays quiet until the user has interacted with it.

#[cfg(test)]
#[path = "note_form_test.rs"]
mod note_form_test;

use std::collections::HashSet;

use notes::{FieldErrors, NewNote, NoteDraft, NoteField};

/// Form values plus interaction flags.
#[derive(Clone, Debug, Default)]
pub struct NoteFormState {
    pub draft: NoteDraft,
    touched: HashSet<NoteField>,
    submit_attempted: bool,
    /// A create request is in flight; the submit button is disabled.
    pub submitting: bool,
}

impl NoteFormState {
    /// Mark a field as visited (on blur).
    pub fn touch(&mut self, field: NoteField) {
        self.touched.insert(field);
    }

    /// Current errors regardless of visibility.
    pub fn errors(&self) -> FieldErrors {
        self.draft.validate().err().unwrap_or_default()
    }

    /// Error message to render under `field`, if it should be shown.
    pub fn visible_error(&self, field: NoteField) -> Option<String> {
        if !self.submit_attempted && !self.touched.contains(&field) {
            return None;
        }
        self.errors().get(field).map(ToOwned::to_owned)
    }

    /// Validate for submission. On success the form enters the submitting state.
    ///
    /// Returns `None` when the draft is invalid or a submit is already running.
    pub fn begin_submit(&mut self) -> Option<NewNote> {
        self.submit_attempted = true;
        if self.submitting {
            return None;
        }
        let note = self.draft.validate().ok()?;
        self.submitting = true;
        Some(note)
    }

    /// Leave the submitting state after the request completes.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
