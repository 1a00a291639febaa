//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the notes toolbar, list, and create dialog while
//! reading/writing shared state from Leptos context providers.

pub mod modal;
pub mod note_form;
pub mod note_list;
pub mod pagination;
pub mod search_box;
