//! Fetched note pages and the keyed query cache.
//!
//! DESIGN
//! ======
//! Pages are cached by `(page, search)`. Selecting a key shows its cached
//! page right away; with no entry the previous page stays on screen until
//! the fetch lands. A response only replaces the visible page if its key is
//! still the selected one, so the last completed fetch for the current key
//! wins. Invalidation marks every entry stale and bumps an epoch; responses
//! from requests issued before the bump are stored as stale, and dropped
//! entirely once a post-bump page has landed or is in flight.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use std::collections::HashMap;

use leptos::prelude::*;
use notes::{Note, NotesPage, NotesQuery};

/// Handle for one in-flight fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: NotesQuery,
    epoch: u64,
}

#[derive(Clone, Debug)]
struct CacheEntry {
    page: NotesPage,
    stale: bool,
}

/// Cache plus the page currently on screen.
#[derive(Clone, Debug, Default)]
pub struct NotesState {
    cache: HashMap<NotesQuery, CacheEntry>,
    pending: HashMap<NotesQuery, u64>,
    current: Option<NotesQuery>,
    epoch: u64,
    /// Page on screen; may belong to a previous key while a fetch runs.
    pub data: Option<NotesPage>,
    /// Last failure for the current key.
    pub error: Option<String>,
}

impl NotesState {
    /// Make `key` current. Returns a ticket when a request should go out.
    pub fn select(&mut self, key: NotesQuery) -> Option<FetchTicket> {
        let changed = self.current.as_ref() != Some(&key);
        self.current = Some(key.clone());
        if changed {
            self.error = None;
        }

        let fresh = match self.cache.get(&key) {
            Some(entry) => {
                self.data = Some(entry.page.clone());
                !entry.stale
            }
            None => false,
        };
        if fresh || self.pending.get(&key) == Some(&self.epoch) {
            return None;
        }

        self.pending.insert(key.clone(), self.epoch);
        Some(FetchTicket { key, epoch: self.epoch })
    }

    /// Record the outcome of a fetch started with `ticket`.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<NotesPage, String>) {
        if self.pending.get(&ticket.key) == Some(&ticket.epoch) {
            self.pending.remove(&ticket.key);
        }
        let stale = ticket.epoch != self.epoch;
        if stale && self.superseded(&ticket.key) {
            return;
        }
        let is_current = self.current.as_ref() == Some(&ticket.key);

        match result {
            Ok(page) => {
                self.cache.insert(ticket.key.clone(), CacheEntry { page: page.clone(), stale });
                if is_current {
                    self.data = Some(page);
                    self.error = None;
                }
            }
            Err(message) => {
                if is_current {
                    self.error = Some(message);
                }
            }
        }
    }

    /// A fresh page is cached for `key`, or a request from the current epoch is out.
    fn superseded(&self, key: &NotesQuery) -> bool {
        self.cache.get(key).is_some_and(|e| !e.stale) || self.pending.get(key) == Some(&self.epoch)
    }

    /// Mark every cached page stale and return a ticket to refetch the current key.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        self.epoch = self.epoch.wrapping_add(1);
        for entry in self.cache.values_mut() {
            entry.stale = true;
        }
        let key = self.current.clone()?;
        self.select(key)
    }

    /// Whether a request for the current key is outstanding.
    pub fn is_fetching(&self) -> bool {
        self.current.as_ref().is_some_and(|key| self.pending.contains_key(key))
    }

    /// First load: fetching with nothing to show yet.
    pub fn is_loading(&self) -> bool {
        self.is_fetching() && self.data.is_none()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Notes on screen, empty when nothing has loaded.
    pub fn notes(&self) -> Vec<Note> {
        self.data.as_ref().map(|d| d.notes.clone()).unwrap_or_default()
    }

    pub fn total_pages(&self) -> u32 {
        self.data.as_ref().map_or(0, |d| d.total_pages)
    }
}

/// Context handle that drives fetches into a shared [`NotesState`].
#[derive(Clone, Copy)]
pub struct NotesStore {
    pub state: RwSignal<NotesState>,
}

impl NotesStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(NotesState::default()) }
    }

    /// Show `key`, fetching it unless a fresh page is cached.
    pub fn load(self, key: NotesQuery) {
        if let Some(ticket) = self.state.try_update(|s| s.select(key)).flatten() {
            self.spawn_fetch(ticket);
        }
    }

    /// Drop cached freshness after a create or delete and refetch what is on screen.
    pub fn invalidate(self) {
        if let Some(ticket) = self.state.try_update(NotesState::refresh).flatten() {
            self.spawn_fetch(ticket);
        }
    }

    fn spawn_fetch(self, ticket: FetchTicket) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_notes(&ticket.key).await;
            if let Err(e) = &result {
                log::error!("fetch notes failed: {e}");
            }
            self.state.update(|s| s.resolve(ticket, result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    }
}

impl Default for NotesStore {
    fn default() -> Self {
        Self::new()
    }
}
