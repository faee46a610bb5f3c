// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live-region status text for screen readers.
//!
//! Hosts render this message into a visually hidden element with
//! `role="status"` and `aria-live="assertive"` so assistive technology
//! announces result counts and the current highlight as the user types and
//! navigates. The core only produces the text; the element is the host's.

use alloc::string::String;

use crate::state::State;

/// Compose the status message for the given state snapshot.
///
/// Empty while the menu is closed (nothing to announce). While open:
/// - no results: a "no results" notice,
/// - a highlight present: the highlighted item's display text,
/// - otherwise: the result count plus navigation guidance.
#[must_use]
pub fn status_message<T>(state: &State<T>) -> String {
    if !state.is_open {
        return String::new();
    }

    if let Some(item) = &state.highlighted_item {
        return state.item_text(item);
    }

    match state.item_count {
        0 => String::from("No results are available."),
        1 => String::from(
            "1 result is available, use the up and down arrow keys to navigate. \
             Press Enter to select.",
        ),
        n => alloc::format!(
            "{n} results are available, use the up and down arrow keys to navigate. \
             Press Enter to select."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_menu_is_silent() {
        let mut state: State<u32> = State::new();
        state.item_count = 4;
        assert_eq!(status_message(&state), "");
    }

    #[test]
    fn open_menu_announces_counts() {
        let mut state: State<u32> = State::new();
        state.is_open = true;

        assert_eq!(status_message(&state), "No results are available.");

        state.item_count = 1;
        assert!(status_message(&state).starts_with("1 result is available"));

        state.item_count = 3;
        assert!(status_message(&state).starts_with("3 results are available"));
    }

    #[test]
    fn highlight_wins_over_counts() {
        let mut state: State<u32> = State::new();
        state.is_open = true;
        state.item_count = 3;
        state.highlighted_item = Some(42);
        assert_eq!(status_message(&state), "42");
    }
}
