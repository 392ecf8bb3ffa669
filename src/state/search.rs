//! Global search term shared between the navbar input and the browse page.
//!
//! The raw value updates on every keystroke; `debounced` only catches up
//! after a quiet period, and a generation counter guarantees a stale timer
//! can never overwrite newer input.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;

/// Debounce window between the last keystroke and the committed search.
#[cfg(feature = "hydrate")]
const DEBOUNCE_MS: u64 = 300;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub raw: String,
    pub debounced: String,
    generation: u64,
}

impl SearchState {
    /// Record a keystroke; returns the generation to pass to [`commit`].
    ///
    /// [`commit`]: SearchState::commit
    pub fn set_raw(&mut self, value: impl Into<String>) -> u64 {
        self.raw = value.into();
        self.generation += 1;
        self.generation
    }

    /// Promote `raw` to `debounced` if no newer keystroke arrived since
    /// `generation` was handed out. Returns whether the commit applied.
    pub fn commit(&mut self, generation: u64) -> bool {
        if generation == self.generation {
            self.debounced = self.raw.clone();
            true
        } else {
            false
        }
    }
}

/// Update the search term and schedule the debounced commit.
pub fn set_search(search: RwSignal<SearchState>, value: String) {
    let generation = search.try_update(|s| s.set_raw(value)).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(DEBOUNCE_MS)).await;
            let _ = search.try_update(|s| s.commit(generation));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // No timers on the server; commit immediately.
        let _ = search.try_update(|s| s.commit(generation));
    }
}
