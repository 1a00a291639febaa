use std::fmt::Write as _;

use clap::{Parser, Subcommand};
use notes::{NewNote, Note, NoteDraft, NotesPage, NotesQuery};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing API token; pass --token or set NOTEHUB_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("{operation} failed: HTTP {status}: {message}")]
    ServerError {
        operation: &'static str,
        status: u16,
        message: String,
    },
    #[error(transparent)]
    Invalid(#[from] notes::FieldErrors),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "notehub-cli", about = "List, create, and delete NoteHub notes")]
struct Cli {
    #[arg(long, env = "NOTEHUB_API_URL", default_value = notes::DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "NOTEHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print one page of notes.
    List {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        #[arg(long, default_value = "")]
        search: String,
        /// Print the raw page as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Validate and create a note.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value = "Todo")]
        tag: String,
    },
    /// Delete a note by id.
    Delete { id: String },
}

struct Api {
    client: reqwest::Client,
    base_url: String,
}

impl Api {
    fn new(base_url: &str, token: Option<&str>) -> Result<Self, CliError> {
        let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or(CliError::MissingToken)?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&notes::bearer(token))?);
        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    async fn list(&self, query: &NotesQuery) -> Result<NotesPage, CliError> {
        let url = notes::notes_endpoint(&self.base_url);
        tracing::debug!(%url, page = query.page, search = %query.search, "fetch notes");
        let response = self.client.get(url).query(&query.pairs()).send().await?;
        read_json(response, "fetch notes").await
    }

    async fn create(&self, note: &NewNote) -> Result<Note, CliError> {
        let url = notes::notes_endpoint(&self.base_url);
        tracing::debug!(%url, title = %note.title, "create note");
        let response = self.client.post(url).json(note).send().await?;
        read_json(response, "create note").await
    }

    async fn delete(&self, id: &str) -> Result<Note, CliError> {
        let url = notes::note_endpoint(&self.base_url, id);
        tracing::debug!(%url, "delete note");
        let response = self.client.delete(url).send().await?;
        read_json(response, "delete note").await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response, operation: &'static str) -> Result<T, CliError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(CliError::ServerError {
            operation,
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json::<T>().await?)
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = Api::new(&cli.base_url, cli.token.as_deref())?;

    match cli.command {
        Command::List { page, search, json } => {
            let query = NotesQuery::new(page, search);
            let result = api.list(&query).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render_table(&result, page));
            }
        }
        Command::Create { title, content, tag } => {
            let note = NoteDraft { title, content, tag }.validate()?;
            let created = api.create(&note).await?;
            tracing::info!(id = %created.id, "created note");
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        Command::Delete { id } => {
            let removed = api.delete(&id).await?;
            tracing::info!(id = %removed.id, "deleted note");
            println!("{}", serde_json::to_string_pretty(&removed)?);
        }
    }
    Ok(())
}

fn render_table(page: &NotesPage, current: u32) -> String {
    if page.notes.is_empty() {
        return "No notes found\n".to_owned();
    }

    let id_width = page.notes.iter().map(|n| n.id.chars().count()).max().unwrap_or(2).max(2);
    let mut out = String::new();
    let _ = writeln!(out, "{:<id_width$}  {:<8}  TITLE", "ID", "TAG");
    for note in &page.notes {
        let _ = writeln!(out, "{:<id_width$}  {:<8}  {}", note.id, note.tag.as_str(), note.title);
    }
    let _ = writeln!(out, "page {current} of {}", page.total_pages.max(1));
    out
}
