//! Timer-driven reactive helpers: background refetch and input debounce.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// A trigger that fires every `interval` until the calling owner is cleaned up.
pub fn use_poll_trigger(interval: Duration) -> Trigger {
    let tick = Trigger::new();
    match set_interval_with_handle(move || tick.notify(), interval) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("Failed to start {:?} poll: {:?}", interval, e),
    }
    tick
}

/// Follows `source`, but only once it has been quiet for `delay_ms`.
pub fn use_debounced(source: RwSignal<String>, delay_ms: u32) -> RwSignal<String> {
    let settled = RwSignal::new(source.get_untracked());
    let generation = StoredValue::new(0_u64);

    Effect::new(move |previous: Option<()>| {
        let value = source.get();
        if previous.is_none() {
            return;
        }

        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        // A newer keystroke bumps the generation and orphans this timer
        Timeout::new(delay_ms, move || {
            if generation.try_get_value() == Some(current) {
                settled.set(value);
            }
        })
        .forget();
    });

    settled
}
