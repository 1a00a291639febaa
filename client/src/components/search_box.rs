//! Search input for filtering notes.

use leptos::prelude::*;

/// Controlled text input that reports every edit.
#[component]
pub fn SearchBox(#[prop(into)] value: Signal<String>, on_change: Callback<String>) -> impl IntoView {
    view! {
        <input
            class="search-box"
            type="text"
            placeholder="Search notes"
            prop:value=move || value.get()
            on:input=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}
