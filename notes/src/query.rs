//! Endpoint paths and list query parameters.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Public NoteHub API root used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://notehub-public.goit.study/api";

/// Page size requested from `GET /notes`.
pub const PER_PAGE: u32 = 12;

/// Parameters for one `GET /notes` call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NotesQuery {
    /// 1-based page number.
    pub page: u32,
    /// Raw search text; blank text means "no filter".
    pub search: String,
}

impl Default for NotesQuery {
    fn default() -> Self {
        Self { page: 1, search: String::new() }
    }
}

impl NotesQuery {
    #[must_use]
    pub fn new(page: u32, search: impl Into<String>) -> Self {
        Self { page, search: search.into() }
    }

    /// Query-string pairs in request order.
    ///
    /// `search` is omitted when it is blank and otherwise sent untrimmed.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("perPage", PER_PAGE.to_string())];
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        pairs
    }
}

/// Join the API root and a path without doubling the slash.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `{base}/notes`
#[must_use]
pub fn notes_endpoint(base_url: &str) -> String {
    endpoint(base_url, "notes")
}

/// `{base}/notes/{id}`
#[must_use]
pub fn note_endpoint(base_url: &str, id: &str) -> String {
    endpoint(base_url, &format!("notes/{id}"))
}

/// Value for the `Authorization` header.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
