// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions: immutable records describing a requested state change.
//!
//! Every user interaction the controller understands is translated into an
//! [`Action`]: a [`kind`](Action::kind) naming the interaction and a
//! [`patch`](Action::patch) carrying the partial state the built-in
//! transition would apply. The active [`Reducer`](crate::Reducer) sees both
//! and returns the patch that is actually merged, which is how consumers
//! intercept or veto individual transitions.

use alloc::string::String;

use crate::state::State;

/// The interaction an [`Action`] was constructed from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// The text input gained focus.
    InputFocus,
    /// The text input lost focus.
    InputBlur,
    /// The text in the input changed.
    InputChange,
    /// Arrow-down was pressed while the menu was open.
    InputKeydownArrowDown,
    /// Arrow-up was pressed while the menu was open.
    InputKeydownArrowUp,
    /// Enter was pressed while the menu was open.
    InputKeydownEnter,
    /// Escape was pressed while the menu was open.
    InputKeydownEscape,
    /// The toggle button was clicked.
    ButtonClick,
    /// The menu was opened programmatically.
    ListOpen,
    /// The menu was closed programmatically.
    ListClose,
    /// The menu was toggled programmatically.
    ListToggle,
    /// An option was clicked.
    ItemMouseClick,
    /// The pointer moved onto an option whose index differs from the
    /// current highlight.
    ItemMouseEnter,
    /// The pointer left an option.
    ItemMouseLeave,
}

/// A partial [`State`]: only the fields a transition wants to change.
///
/// Outer `None` means "leave the field alone"; for the nullable state fields
/// the inner `Option` is the field's own value, so
/// `highlighted_index: Some(None)` explicitly clears the highlight.
///
/// Derived fields (`highlighted_item`, `item_count`) and the configuration
/// fields are not patchable; the controller recomputes or owns them.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch<T> {
    /// New menu visibility, if the transition changes it.
    pub is_open: Option<bool>,
    /// New highlight position, if the transition changes it.
    pub highlighted_index: Option<Option<usize>>,
    /// New committed selection, if the transition changes it.
    pub selected_item: Option<Option<T>>,
    /// New input text, if the transition changes it.
    pub input_text: Option<String>,
    /// New input value, if the transition changes it. Kept equal to
    /// `input_text` by every built-in transition.
    pub input_value: Option<String>,
}

impl<T> Patch<T> {
    /// The empty patch: merging it leaves the state untouched.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            is_open: None,
            highlighted_index: None,
            selected_item: None,
            input_text: None,
            input_value: None,
        }
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_open.is_none()
            && self.highlighted_index.is_none()
            && self.selected_item.is_none()
            && self.input_text.is_none()
            && self.input_value.is_none()
    }
}

impl<T: Clone> Patch<T> {
    /// Merge the set fields of this patch over `state`.
    pub fn apply(&self, state: &mut State<T>) {
        if let Some(is_open) = self.is_open {
            state.is_open = is_open;
        }
        if let Some(highlighted_index) = self.highlighted_index {
            state.highlighted_index = highlighted_index;
        }
        if let Some(selected_item) = &self.selected_item {
            state.selected_item = selected_item.clone();
        }
        if let Some(input_text) = &self.input_text {
            state.input_text = input_text.clone();
        }
        if let Some(input_value) = &self.input_value {
            state.input_value = input_value.clone();
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// An immutable description of a requested state change.
#[derive(Clone, Debug, PartialEq)]
pub struct Action<T> {
    /// Which interaction produced this action.
    pub kind: ActionKind,
    /// The partial state the built-in transition would apply.
    pub patch: Patch<T>,
}

impl<T> Action<T> {
    /// Bundle a kind with its patch.
    #[must_use]
    pub const fn new(kind: ActionKind, patch: Patch<T>) -> Self {
        Self { kind, patch }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn empty_patch_changes_nothing() {
        let mut state: State<u32> = State::new();
        let before = state.clone();
        Patch::empty().apply(&mut state);
        assert_eq!(state.is_open, before.is_open);
        assert_eq!(state.highlighted_index, before.highlighted_index);
        assert_eq!(state.selected_item, before.selected_item);
        assert_eq!(state.input_text, before.input_text);
        assert_eq!(state.input_value, before.input_value);
    }

    #[test]
    fn apply_merges_only_set_fields() {
        let mut state: State<u32> = State::new();
        state.selected_item = Some(7);

        let patch = Patch {
            is_open: Some(true),
            input_text: Some("que".to_string()),
            input_value: Some("que".to_string()),
            ..Patch::empty()
        };
        patch.apply(&mut state);

        assert!(state.is_open);
        assert_eq!(state.input_text, "que");
        assert_eq!(state.input_value, "que");
        // Unset fields survive.
        assert_eq!(state.selected_item, Some(7));
        assert_eq!(state.highlighted_index, None);
    }

    #[test]
    fn inner_none_clears_nullable_fields() {
        let mut state: State<u32> = State::new();
        state.highlighted_index = Some(3);
        state.selected_item = Some(1);

        let patch = Patch {
            highlighted_index: Some(None),
            selected_item: Some(None),
            ..Patch::empty()
        };
        patch.apply(&mut state);

        assert_eq!(state.highlighted_index, None);
        assert_eq!(state.selected_item, None);
    }

    #[test]
    fn is_empty_reflects_set_fields() {
        assert!(Patch::<u32>::empty().is_empty());
        let patch = Patch::<u32> {
            is_open: Some(false),
            ..Patch::empty()
        };
        assert!(!patch.is_empty());
    }
}
