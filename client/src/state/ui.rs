//! Root view state: search text, current page, modal visibility.
//!
//! DESIGN
//! ======
//! Plain struct behind one `RwSignal` in context. Methods keep the coupled
//! updates (search resets the page) in one place.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Input state owned by the notes page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Raw search text as typed, before debouncing.
    pub search: String,
    /// Current 1-based page.
    pub page: u32,
    pub modal_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            modal_open: false,
        }
    }
}

impl UiState {
    /// Replace the search text and go back to the first page.
    pub fn set_search(&mut self, value: String) {
        self.search = value;
        self.page = 1;
    }

    /// Move to `page`, clamped to at least 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }
}
