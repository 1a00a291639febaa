//! Form validation for new notes.
//!
//! Rules are checked client-side before any request goes out. The remote
//! service applies its own rules; these only catch the obvious cases early.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::model::{NewNote, NoteTag};

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 50;
pub const CONTENT_MAX_CHARS: usize = 500;

/// Form fields that can carry a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteField {
    Title,
    Content,
    Tag,
}

/// Raw form values as typed by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tag: String,
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tag: NoteTag::default().as_str().to_owned(),
        }
    }
}

/// Per-field validation messages. Empty means the draft is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("invalid note: {}", joined(.title, .content, .tag))]
pub struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag.is_none()
    }

    /// Message for one field, if any.
    #[must_use]
    pub fn get(&self, field: NoteField) -> Option<&str> {
        match field {
            NoteField::Title => self.title.as_deref(),
            NoteField::Content => self.content.as_deref(),
            NoteField::Tag => self.tag.as_deref(),
        }
    }
}

fn joined(title: &Option<String>, content: &Option<String>, tag: &Option<String>) -> String {
    [title, content, tag]
        .into_iter()
        .filter_map(Option::as_deref)
        .collect::<Vec<_>>()
        .join("; ")
}

impl NoteDraft {
    /// Check every field and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] with one message per failing field.
    pub fn validate(&self) -> Result<NewNote, FieldErrors> {
        let errors = FieldErrors {
            title: title_error(&self.title),
            content: content_error(&self.content),
            tag: tag_error(&self.tag),
        };

        match self.tag.parse::<NoteTag>() {
            Ok(tag) if errors.is_empty() => Ok(NewNote {
                title: self.title.clone(),
                content: self.content.clone(),
                tag,
            }),
            _ => Err(errors),
        }
    }
}

fn title_error(title: &str) -> Option<String> {
    let len = title.chars().count();
    if len == 0 {
        Some("Title is required".to_owned())
    } else if len < TITLE_MIN_CHARS {
        Some(format!("title must be at least {TITLE_MIN_CHARS} characters"))
    } else if len > TITLE_MAX_CHARS {
        Some(format!("title must be at most {TITLE_MAX_CHARS} characters"))
    } else {
        None
    }
}

fn content_error(content: &str) -> Option<String> {
    (content.chars().count() > CONTENT_MAX_CHARS).then(|| format!("Max {CONTENT_MAX_CHARS} characters"))
}

fn tag_error(tag: &str) -> Option<String> {
    if tag.is_empty() {
        return Some("Tag is required".to_owned());
    }
    if tag.parse::<NoteTag>().is_ok() {
        return None;
    }
    let names: Vec<&str> = NoteTag::ALL.iter().map(|t| t.as_str()).collect();
    Some(format!("tag must be one of the following values: {}", names.join(", ")))
}
