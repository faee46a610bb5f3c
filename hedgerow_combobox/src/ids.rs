// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility id derivation and process-wide unique id generation.
//!
//! A combobox is several cooperating elements (input, toggle button, label,
//! list, options) that must reference each other through id strings: the
//! input's `aria-controls` points at the list, the list's `aria-labelledby`
//! points at the label, `aria-activedescendant` points at the highlighted
//! option, and so on. The core never renders markup, so it exposes the id
//! strings as deterministic functions of the widget instance id and leaves
//! the attribute wiring to the host.
//!
//! Instance ids and item keys come from a process-wide monotonic counter, so
//! several widgets on one page never collide.

use alloc::format;
use alloc::string::String;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Hand out the next process-wide unique id.
///
/// Monotonic within a process; purely a uniqueness device, no ordering
/// meaning is attached to the values.
pub fn generate_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Element id of the text input for the given widget instance.
#[must_use]
pub fn input_id(widget: &str) -> String {
    format!("hedgerow-input-{widget}")
}

/// Element id of the toggle button for the given widget instance.
#[must_use]
pub fn button_id(widget: &str) -> String {
    format!("hedgerow-button-{widget}")
}

/// Element id of the label for the given widget instance.
#[must_use]
pub fn label_id(widget: &str) -> String {
    format!("hedgerow-label-{widget}")
}

/// Element id of the suggestion list for the given widget instance.
#[must_use]
pub fn list_id(widget: &str) -> String {
    format!("hedgerow-list-{widget}")
}

/// Element id of a single option, combining the widget instance id with the
/// item's unique key suffix.
#[must_use]
pub fn item_id(widget: &str, key: u64) -> String {
    format!("hedgerow-item-{widget}-{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        let c = generate_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn element_ids_are_deterministic() {
        assert_eq!(input_id("7"), "hedgerow-input-7");
        assert_eq!(button_id("7"), "hedgerow-button-7");
        assert_eq!(label_id("7"), "hedgerow-label-7");
        assert_eq!(list_id("7"), "hedgerow-list-7");
        assert_eq!(item_id("7", 42), "hedgerow-item-7-42");
    }

    #[test]
    fn element_ids_differ_across_widgets() {
        assert_ne!(input_id("1"), input_id("2"));
        assert_ne!(item_id("1", 0), item_id("2", 0));
    }
}
