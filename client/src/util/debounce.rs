//! Trailing-edge debounce for reactive values.
//!
//! Each change of the source schedules a publish after the delay. A timer
//! only publishes if no newer change was scheduled after it, so bursts of
//! typing collapse into a single update once input goes quiet.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use leptos::prelude::*;

/// Quiet window before search text becomes part of the query key.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Hands out one token per scheduled publish and recognizes the newest.
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    latest: u64,
}

impl DebounceGate {
    /// Register a new pending publish, superseding all earlier ones.
    pub fn schedule(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    /// Whether `token` is still the newest scheduled publish.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

/// Signal that follows `source` after `delay_ms` of quiet.
///
/// Without a browser (SSR) the value is published immediately.
pub fn use_debounced(source: Signal<String>, delay_ms: u64) -> ReadSignal<String> {
    let output = RwSignal::new(source.get_untracked());
    let gate = StoredValue::new(DebounceGate::default());

    Effect::new(move || {
        let value = source.get();
        let mut token = 0;
        gate.update_value(|g| token = g.schedule());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
            settle(gate, output, token, value);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay_ms;
            settle(gate, output, token, value);
        }
    });

    output.read_only()
}

/// Publish `value` if `token` is still the newest scheduled one.
///
/// Returns whether the output changed. A disposed gate publishes nothing.
fn settle(gate: StoredValue<DebounceGate>, output: RwSignal<String>, token: u64, value: String) -> bool {
    let current = gate.try_with_value(|g| g.is_current(token)).unwrap_or(false);
    if !current || output.get_untracked() == value {
        return false;
    }
    output.set(value);
    true
}
