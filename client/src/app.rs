//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::notes::NotesPage;
use crate::state::notes::NotesStore;
use crate::state::ui::UiState;

/// Bundle `cargo leptos` compiles from `style/main.css` (`output-name` + `.css`).
pub const STYLESHEET_HREF: &str = "/pkg/notehub.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the view state and the notes store, then routes to the
/// single notes page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let notes = NotesStore::new();

    provide_context(ui);
    provide_context(notes);

    view! {
        <Stylesheet id="leptos" href=STYLESHEET_HREF/>
        <Title text="NoteHub"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=NotesPage/>
            </Routes>
        </Router>
    }
}
