//! Overlay container for dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The notes page mounts this only while the create form is open. Mounting
//! locks page scroll and listens for Escape on the window; unmounting undoes
//! both.

use leptos::prelude::*;

use crate::util::browser;

/// Backdrop plus centered dialog. Clicking outside the dialog or pressing
/// Escape calls `on_close`.
#[component]
pub fn Modal(on_close: Callback<()>, children: Children) -> impl IntoView {
    browser::set_scroll_locked(true);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ev.prevent_default();
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    on_cleanup(|| browser::set_scroll_locked(false));

    view! {
        <div class="modal__backdrop" role="presentation" on:click=move |_| on_close.run(())>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
