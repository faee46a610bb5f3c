// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical widget state and its creation-time configuration.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::fmt;
use core::fmt::Display;

use crate::ids;
use crate::reducer::{DefaultReducer, SharedReducer};

/// Conversion from an item value to its display text.
pub type ItemToString<T> = Rc<dyn Fn(&T) -> String>;

/// A snapshot of everything the widget knows, replaced wholesale on each
/// transition and pushed to every listener.
///
/// Fields are public so listeners can read them directly off the snapshot;
/// mutation goes through the [`Combobox`](crate::Combobox) controller, which
/// is the only writer.
#[derive(Clone)]
pub struct State<T> {
    /// Stable unique identifier of this widget instance, used to derive the
    /// related element ids (see [`crate::ids`]).
    pub id: String,
    /// Current text in the input.
    pub input_text: String,
    /// Kept equal to [`input_text`](Self::input_text); the model carries
    /// both for compatibility with hosts that bind them separately.
    pub input_value: String,
    /// Whether the suggestion list is visible.
    pub is_open: bool,
    /// Index into the compacted item list currently indicated by keyboard
    /// or pointer navigation, or `None` for no highlight.
    pub highlighted_index: Option<usize>,
    /// The value at [`highlighted_index`](Self::highlighted_index), derived
    /// by the controller; `None` when the index is `None` or out of range.
    pub highlighted_item: Option<T>,
    /// The value committed by the user via click or Enter.
    pub selected_item: Option<T>,
    /// Number of currently mounted items, maintained by the controller as
    /// items mount and unmount.
    pub item_count: usize,
    /// Index to highlight whenever the menu opens; `None` means none.
    pub default_highlighted_index: Option<usize>,
    /// Conversion from an item to its display text.
    pub item_to_string: ItemToString<T>,
    /// The active reducer. Defaults to [`DefaultReducer`]; a consumer
    /// supplied reducer fully replaces it.
    pub reducer: SharedReducer<T>,
}

impl<T> State<T> {
    /// Render an item through this state's `item_to_string`.
    #[must_use]
    pub fn item_text(&self, item: &T) -> String {
        (self.item_to_string)(item)
    }
}

impl<T: Clone + Display + 'static> State<T> {
    /// A fresh state with all defaults: closed menu, nothing highlighted or
    /// selected, empty text, zero items, `Display`-based item text, the
    /// built-in reducer, and a generated instance id.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(StateOptions::default())
    }
}

impl<T> State<T> {
    /// A fresh state with caller-supplied overrides.
    #[must_use]
    pub fn with_options(options: StateOptions<T>) -> Self {
        Self {
            id: options.id,
            input_text: options.input_text.clone(),
            input_value: options.input_text,
            is_open: options.is_open,
            highlighted_index: options.highlighted_index,
            highlighted_item: None,
            selected_item: options.selected_item,
            item_count: 0,
            default_highlighted_index: options.default_highlighted_index,
            item_to_string: options.item_to_string,
            reducer: options.reducer,
        }
    }
}

impl<T: Clone + Display + 'static> Default for State<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("input_text", &self.input_text)
            .field("input_value", &self.input_value)
            .field("is_open", &self.is_open)
            .field("highlighted_index", &self.highlighted_index)
            .field("highlighted_item", &self.highlighted_item)
            .field("selected_item", &self.selected_item)
            .field("item_count", &self.item_count)
            .field("default_highlighted_index", &self.default_highlighted_index)
            .finish_non_exhaustive()
    }
}

/// Creation-time overrides for [`State::with_options`].
///
/// For `T: Display` every field has a sensible default, so the usual pattern
/// is struct-update syntax:
///
/// ```rust
/// use hedgerow_combobox::{State, StateOptions};
///
/// let state: State<u32> = State::with_options(StateOptions {
///     is_open: true,
///     default_highlighted_index: Some(0),
///     ..StateOptions::default()
/// });
/// assert!(state.is_open);
/// ```
///
/// Types without a `Display` impl must fill in `item_to_string` themselves.
#[derive(Clone)]
pub struct StateOptions<T> {
    /// See [`State::id`]. Defaults to a generated process-unique numeral.
    pub id: String,
    /// See [`State::input_text`]; also seeds `input_value`.
    pub input_text: String,
    /// See [`State::is_open`].
    pub is_open: bool,
    /// See [`State::highlighted_index`].
    pub highlighted_index: Option<usize>,
    /// See [`State::selected_item`].
    pub selected_item: Option<T>,
    /// See [`State::default_highlighted_index`].
    pub default_highlighted_index: Option<usize>,
    /// See [`State::item_to_string`].
    pub item_to_string: ItemToString<T>,
    /// See [`State::reducer`].
    pub reducer: SharedReducer<T>,
}

impl<T: Clone + Display + 'static> Default for StateOptions<T> {
    fn default() -> Self {
        Self {
            id: format!("{}", ids::generate_id()),
            input_text: String::new(),
            is_open: false,
            highlighted_index: None,
            selected_item: None,
            default_highlighted_index: None,
            item_to_string: Rc::new(|item: &T| item.to_string()),
            reducer: Rc::new(DefaultReducer),
        }
    }
}

impl<T> fmt::Debug for StateOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateOptions")
            .field("id", &self.id)
            .field("input_text", &self.input_text)
            .field("is_open", &self.is_open)
            .field("highlighted_index", &self.highlighted_index)
            .field("default_highlighted_index", &self.default_highlighted_index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_contract() {
        let state: State<u32> = State::new();
        assert!(!state.is_open);
        assert_eq!(state.highlighted_index, None);
        assert_eq!(state.highlighted_item, None);
        assert_eq!(state.selected_item, None);
        assert_eq!(state.input_text, "");
        assert_eq!(state.input_value, "");
        assert_eq!(state.item_count, 0);
        assert_eq!(state.default_highlighted_index, None);
        assert!(!state.id.is_empty());
    }

    #[test]
    fn generated_ids_differ_per_instance() {
        let a: State<u32> = State::new();
        let b: State<u32> = State::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn options_override_defaults() {
        let state: State<u32> = State::with_options(StateOptions {
            id: "fixed".into(),
            input_text: "que".into(),
            is_open: true,
            highlighted_index: Some(1),
            selected_item: Some(9),
            default_highlighted_index: Some(0),
            ..StateOptions::default()
        });

        assert_eq!(state.id, "fixed");
        assert_eq!(state.input_text, "que");
        assert_eq!(state.input_value, "que");
        assert!(state.is_open);
        assert_eq!(state.highlighted_index, Some(1));
        assert_eq!(state.selected_item, Some(9));
        assert_eq!(state.default_highlighted_index, Some(0));
    }

    #[test]
    fn default_item_text_uses_display() {
        let state: State<u32> = State::new();
        assert_eq!(state.item_text(&42), "42");
    }

    #[test]
    fn custom_item_to_string_is_honored() {
        let state: State<u32> = State::with_options(StateOptions {
            item_to_string: Rc::new(|item: &u32| format!("#{item}")),
            ..StateOptions::default()
        });
        assert_eq!(state.item_text(&7), "#7");
    }
}
