// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reducer seam: how consumers intercept state transitions.

use alloc::rc::Rc;

use crate::action::Action;
use crate::state::State;
use crate::Patch;

/// Strategy for turning an [`Action`] into the patch that is actually merged.
///
/// The controller constructs every built-in transition payload itself and
/// stores it on the action, then asks the active reducer for the patch to
/// merge. The default reducer passes the action's patch through unchanged,
/// so all built-in behavior lives in the controller and a reducer only needs
/// to special-case the [`ActionKind`](crate::ActionKind)s it wants to
/// intercept — returning `action.patch.clone()` for everything else
/// preserves built-in semantics. A consumer-supplied reducer fully replaces
/// the default; it is not composed with it.
///
/// Implementations must be pure: the same `(state, action)` pair must yield
/// the same patch, `state` must not be mutated (it is borrowed immutably),
/// and no state may be carried across calls.
///
/// ## Vetoing a transition
///
/// ```rust
/// use hedgerow_combobox::{Action, ActionKind, DefaultReducer, Patch, Reducer, State};
///
/// /// Ignores pointer hover/click so only the keyboard drives the widget.
/// struct KeyboardOnly;
///
/// impl Reducer<u32> for KeyboardOnly {
///     fn reduce(&self, state: &State<u32>, action: &Action<u32>) -> Patch<u32> {
///         match action.kind {
///             ActionKind::ItemMouseEnter | ActionKind::ItemMouseClick => Patch::empty(),
///             _ => action.patch.clone(),
///         }
///     }
/// }
/// # let _ = (KeyboardOnly, DefaultReducer);
/// ```
pub trait Reducer<T> {
    /// Compute the patch to merge for `action`, given the current `state`.
    fn reduce(&self, state: &State<T>, action: &Action<T>) -> Patch<T>;
}

/// Shared handle to a reducer, cheap to clone into every state snapshot.
pub type SharedReducer<T> = Rc<dyn Reducer<T>>;

/// The built-in reducer: an identity pass-through of the action's patch.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultReducer;

impl<T: Clone> Reducer<T> for DefaultReducer {
    fn reduce(&self, _state: &State<T>, action: &Action<T>) -> Patch<T> {
        action.patch.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActionKind;

    #[test]
    fn default_reducer_passes_patch_through() {
        let state: State<u32> = State::new();
        let action = Action::new(
            ActionKind::ListOpen,
            Patch {
                is_open: Some(true),
                highlighted_index: Some(Some(2)),
                ..Patch::empty()
            },
        );

        let patch = DefaultReducer.reduce(&state, &action);
        assert_eq!(patch, action.patch);
    }

    #[test]
    fn default_reducer_is_pure() {
        let state: State<u32> = State::new();
        let action = Action::new(
            ActionKind::InputChange,
            Patch {
                is_open: Some(true),
                ..Patch::empty()
            },
        );

        let first = DefaultReducer.reduce(&state, &action);
        let second = DefaultReducer.reduce(&state, &action);
        assert_eq!(first, second);
    }
}
