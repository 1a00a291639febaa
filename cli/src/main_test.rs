use super::*;
use notes::NoteTag;

fn note(id: &str, title: &str, tag: NoteTag) -> Note {
    Note {
        id: id.to_owned(),
        title: title.to_owned(),
        content: String::new(),
        tag,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn list_defaults_to_first_page_without_search() {
    let cli = Cli::try_parse_from(["notehub-cli", "--token", "t", "list"]).unwrap();
    assert_eq!(
        cli.command,
        Command::List { page: 1, search: String::new(), json: false }
    );
}

#[test]
fn list_rejects_page_zero() {
    assert!(Cli::try_parse_from(["notehub-cli", "list", "--page", "0"]).is_err());
}

#[test]
fn create_defaults_to_todo_tag() {
    let cli = Cli::try_parse_from(["notehub-cli", "create", "--title", "Plan"]).unwrap();
    assert_eq!(
        cli.command,
        Command::Create { title: "Plan".to_owned(), content: String::new(), tag: "Todo".to_owned() }
    );
}

#[test]
fn explicit_base_url_overrides_default() {
    let cli = Cli::try_parse_from(["notehub-cli", "--base-url", "http://localhost:4000/api", "delete", "n1"]).unwrap();
    assert_eq!(cli.base_url, "http://localhost:4000/api");
    assert_eq!(cli.command, Command::Delete { id: "n1".to_owned() });
}

#[test]
fn api_requires_token() {
    assert!(matches!(Api::new(notes::DEFAULT_API_BASE_URL, None), Err(CliError::MissingToken)));
    assert!(matches!(Api::new(notes::DEFAULT_API_BASE_URL, Some("  ")), Err(CliError::MissingToken)));
}

#[test]
fn api_trims_trailing_slash() {
    let api = Api::new("http://localhost:4000/api/", Some("tok")).unwrap();
    assert_eq!(api.base_url, "http://localhost:4000/api");
}

#[test]
fn render_table_lists_notes_and_page_footer() {
    let page = NotesPage {
        notes: vec![note("a1", "Buy milk", NoteTag::Shopping), note("b22", "Standup", NoteTag::Meeting)],
        total_pages: 3,
    };
    let table = render_table(&page, 2);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "ID   TAG       TITLE");
    assert_eq!(lines[1], "a1   Shopping  Buy milk");
    assert_eq!(lines[2], "b22  Meeting   Standup");
    assert_eq!(lines[3], "page 2 of 3");
}

#[test]
fn render_table_reports_empty_page() {
    assert_eq!(render_table(&NotesPage::default(), 1), "No notes found\n");
}

#[test]
fn invalid_draft_becomes_cli_error() {
    let draft = NoteDraft { title: "ab".to_owned(), content: String::new(), tag: "Todo".to_owned() };
    let err = CliError::from(draft.validate().unwrap_err());
    assert_eq!(err.to_string(), "invalid note: title must be at least 3 characters");
}
