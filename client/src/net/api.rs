//! REST helpers for the NoteHub service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the service is only
//! called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>`. Non-2xx responses are reported with
//! the operation name, HTTP status, and the service's `message` when present.
//! There is no retry; callers decide how to surface the failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use notes::{NewNote, Note, NotesPage, NotesQuery};
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

#[cfg(feature = "hydrate")]
use super::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull the service's `message` out of an error body, if it has one.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(operation: &str, status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("{operation} failed: {status} ({detail})"),
        None => format!("{operation} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder, config: &ApiConfig) -> gloo_net::http::RequestBuilder {
    match config.authorization() {
        Some(value) => builder.header("Authorization", &value),
        None => {
            log::warn!("NOTEHUB_TOKEN was not set at build time; sending request without Authorization");
            builder
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    operation: &str,
) -> Result<T, String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(request_failed_message(operation, status, error_detail(&body).as_deref()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch one page of notes via `GET /notes`.
///
/// # Errors
///
/// Returns an error string if the request fails or the service responds with a non-OK status.
pub async fn fetch_notes(query: &NotesQuery) -> Result<NotesPage, String> {
    #[cfg(feature = "hydrate")]
    {
        let config = ApiConfig::from_build_env();
        let url = notes::notes_endpoint(&config.base_url);
        log::debug!("fetch notes page={} search={:?}", query.page, query.search);
        let resp = authorized(gloo_net::http::Request::get(&url), &config)
            .query(query.pairs())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "fetch notes").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Create a note via `POST /notes`.
///
/// # Errors
///
/// Returns an error string if the request fails or the service responds with a non-OK status.
pub async fn create_note(note: &NewNote) -> Result<Note, String> {
    #[cfg(feature = "hydrate")]
    {
        let config = ApiConfig::from_build_env();
        let url = notes::notes_endpoint(&config.base_url);
        let resp = authorized(gloo_net::http::Request::post(&url), &config)
            .json(note)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "create note").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = note;
        Err("not available on server".to_owned())
    }
}

/// Delete a note via `DELETE /notes/{id}` and return the removed note.
///
/// # Errors
///
/// Returns an error string if the request fails or the service responds with a non-OK status.
pub async fn delete_note(id: &str) -> Result<Note, String> {
    #[cfg(feature = "hydrate")]
    {
        let config = ApiConfig::from_build_env();
        let url = notes::note_endpoint(&config.base_url, id);
        let resp = authorized(gloo_net::http::Request::delete(&url), &config)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "delete note").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
