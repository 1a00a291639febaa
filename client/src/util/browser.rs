//! Thin wrappers over `window` APIs used by the notes UI.
//!
//! TRADE-OFFS
//! ==========
//! All helpers are browser-only behavior; SSR paths no-op to keep server
//! rendering deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Text shown in the blocking alert when creating a note fails.
pub fn create_failed_alert(message: &str) -> String {
    format!("⚠️ Failed to create note: {message}")
}

/// Text shown in the blocking alert when deleting a note fails.
pub fn delete_failed_alert(message: &str) -> String {
    format!("⚠️ Failed to delete note: {message}")
}

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Enable or disable page scrolling behind an overlay.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
