//! Shared note model, list query, and form validation for NoteHub.
//!
//! This crate owns the wire representation used by both `client` and `cli`.
//! The remote NoteHub service is the source of truth; everything here
//! describes what goes over HTTP and what the client checks before sending.

pub mod model;
pub mod query;
pub mod validate;

pub use model::{NewNote, Note, NoteTag, NotesPage, ParseTagError};
pub use query::{DEFAULT_API_BASE_URL, NotesQuery, PER_PAGE, bearer, note_endpoint, notes_endpoint};
pub use validate::{FieldErrors, NoteDraft, NoteField};
