//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` holds the root view's input state (search text, page, modal flag).
//! `notes` holds fetched data and the keyed query cache. `note_form` holds
//! the creation form draft. Components depend on the small model they need.

pub mod note_form;
pub mod notes;
pub mod ui;
