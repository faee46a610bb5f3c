// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller: translates raw input events into actions, runs the
//! reducer, owns the state and the item registry, and notifies listeners.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::fmt::Display;

use hedgerow_defer::DeferQueue;
use smallvec::SmallVec;

use crate::action::{Action, ActionKind, Patch};
use crate::ids;
use crate::registry::{ItemEntry, ItemKey, ItemRegistry};
use crate::state::{ItemToString, State, StateOptions};
use crate::SharedReducer;

/// Callback notified with the full new state after every replacement.
pub type StateListener<T> = Box<dyn FnMut(&State<T>)>;

/// Hook invoked with the newly selected item (only when non-null).
pub type SelectHook<T> = Box<dyn FnMut(&T)>;

/// Hook invoked with the new input text whenever it changes.
pub type ChangeHook = Box<dyn FnMut(&str)>;

/// Form-integration hook invoked on every selection change, including to
/// "nothing selected".
pub type ValueChangeHook<T> = Box<dyn FnMut(Option<&T>)>;

/// Hook invoked when the host should run a re-render pass.
pub type RenderHook = Box<dyn FnMut()>;

/// Keys the widget reacts to while the menu is open.
///
/// Hosts receiving DOM-style key names can translate them with
/// [`Key::from_name`]; names that do not map dispatch no action at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move the highlight down, wrapping past the last item.
    ArrowDown,
    /// Move the highlight up, wrapping past the first item.
    ArrowUp,
    /// Commit the highlighted item as the selection.
    Enter,
    /// Close the menu and reset highlight, selection, and text.
    Escape,
}

impl Key {
    /// Translate a DOM-style `KeyboardEvent.key` name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowUp" => Some(Self::ArrowUp),
            "Enter" => Some(Self::Enter),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

struct Listener<T> {
    id: String,
    callback: StateListener<T>,
}

enum DeferredTask<T> {
    Render,
    WriteValue(Option<T>),
}

/// The combobox controller.
///
/// Owns the [`State`] and the item registry exclusively; presentational
/// elements hold a reference to the controller, feed it raw events through
/// the inbound API (`input_*`, `button_click`, `item_*`, `add_item`/
/// `reposition_item`/`remove_item`), and learn of transitions through the
/// listener channel. Every event entry point funnels into
/// [`handle`](Combobox::handle), the single serialization point, so no
/// transition can observe another mid-flight.
///
/// Re-entrancy is not supported: listener callbacks and hooks must not call
/// back into the controller during the same transition.
///
/// ## Minimal example
///
/// ```rust
/// use hedgerow_combobox::{Combobox, Key};
///
/// let mut combo: Combobox<&str> = Combobox::new();
/// combo.add_item(0, "Mary");
/// combo.add_item(1, "Amanda");
///
/// combo.input_change("ma");
/// assert!(combo.state().is_open);
///
/// // Arrow keys wrap over the mounted items; the host must suppress the
/// // input's caret movement whenever this returns true.
/// assert!(combo.input_keydown(Key::ArrowDown));
/// assert_eq!(combo.state().highlighted_index, Some(0));
///
/// combo.input_keydown(Key::Enter);
/// assert_eq!(combo.state().selected_item, Some("Mary"));
/// assert!(!combo.state().is_open);
/// ```
pub struct Combobox<T> {
    state: State<T>,
    items: ItemRegistry<T>,
    listeners: SmallVec<[Listener<T>; 4]>,
    select_hook: Option<SelectHook<T>>,
    change_hook: Option<ChangeHook>,
    value_change_hook: Option<ValueChangeHook<T>>,
    render_hook: Option<RenderHook>,
    deferred: DeferQueue<DeferredTask<T>>,
    destroyed: bool,
}

impl<T: Clone + PartialEq + Display + 'static> Combobox<T> {
    /// A controller over a default [`State`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(StateOptions::default())
    }
}

impl<T: Clone + PartialEq + Display + 'static> Default for Combobox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> Combobox<T> {
    /// A controller over a state built from `options`.
    #[must_use]
    pub fn with_options(options: StateOptions<T>) -> Self {
        Self {
            state: State::with_options(options),
            items: ItemRegistry::new(),
            listeners: SmallVec::new(),
            select_hook: None,
            change_hook: None,
            value_change_hook: None,
            render_hook: None,
            deferred: DeferQueue::new(),
            destroyed: false,
        }
    }

    /// The current state snapshot.
    #[must_use]
    pub fn state(&self) -> &State<T> {
        &self.state
    }

    // ---- configuration surface -------------------------------------------

    /// Replace the active reducer. The new reducer fully replaces the
    /// previous one; it is not composed with it.
    pub fn set_reducer(&mut self, reducer: SharedReducer<T>) {
        self.state.reducer = reducer;
    }

    /// Replace the item-to-text conversion.
    pub fn set_item_to_string(&mut self, item_to_string: ItemToString<T>) {
        self.state.item_to_string = item_to_string;
    }

    /// Seed the menu's open state without dispatching a transition.
    pub fn set_open(&mut self, is_open: bool) {
        self.state.is_open = is_open;
    }

    /// Configure the index highlighted whenever the menu opens; also seeds
    /// the current highlight.
    pub fn set_default_highlighted_index(&mut self, index: Option<usize>) {
        self.state.default_highlighted_index = index;
        self.state.highlighted_index = index;
    }

    // ---- outbound hooks --------------------------------------------------

    /// Install the select hook, fired with each newly selected item.
    pub fn on_select(&mut self, hook: SelectHook<T>) {
        self.select_hook = Some(hook);
    }

    /// Install the change hook, fired whenever the input text changes.
    pub fn on_change(&mut self, hook: ChangeHook) {
        self.change_hook = Some(hook);
    }

    /// Install the form value-change hook, fired on every selection change
    /// including clearing.
    pub fn on_value_change(&mut self, hook: ValueChangeHook<T>) {
        self.value_change_hook = Some(hook);
    }

    /// Install the render hook, invoked after each synchronous transition
    /// and by deferred render passes.
    pub fn on_render(&mut self, hook: RenderHook) {
        self.render_hook = Some(hook);
    }

    // ---- listener channel ------------------------------------------------

    /// Register a listener under `id`. Ids are not deduplicated; callers
    /// remove before re-adding (typically on unmount).
    pub fn add_listener(&mut self, id: impl Into<String>, callback: StateListener<T>) {
        self.listeners.push(Listener {
            id: id.into(),
            callback,
        });
    }

    /// Remove every listener registered under `id`. Unknown ids are a no-op.
    pub fn remove_listener(&mut self, id: &str) {
        self.listeners.retain(|listener| listener.id != id);
    }

    // ---- menu operations -------------------------------------------------

    /// Toggle the menu, highlighting the default index when opening.
    pub fn toggle_menu(&mut self) {
        let patch = self.toggle_patch();
        self.handle(Action::new(ActionKind::ListToggle, patch));
    }

    /// Open the menu, highlighting the default index.
    pub fn open_menu(&mut self) {
        self.handle(Action::new(
            ActionKind::ListOpen,
            Patch {
                is_open: Some(true),
                highlighted_index: Some(self.state.default_highlighted_index),
                ..Patch::empty()
            },
        ));
    }

    /// Close the menu and clear the highlight.
    pub fn close_menu(&mut self) {
        self.handle(Action::new(
            ActionKind::ListClose,
            Patch {
                is_open: Some(false),
                highlighted_index: Some(None),
                ..Patch::empty()
            },
        ));
    }

    /// The toggle button was clicked.
    pub fn button_click(&mut self) {
        let patch = self.toggle_patch();
        self.handle(Action::new(ActionKind::ButtonClick, patch));
    }

    fn toggle_patch(&self) -> Patch<T> {
        Patch {
            is_open: Some(!self.state.is_open),
            highlighted_index: Some(if self.state.is_open {
                None
            } else {
                self.state.default_highlighted_index
            }),
            ..Patch::empty()
        }
    }

    // ---- input events ----------------------------------------------------

    /// The input gained focus. The built-in payload is empty; the reducer
    /// decides whether anything happens.
    pub fn input_focus(&mut self) {
        self.handle(Action::new(ActionKind::InputFocus, Patch::empty()));
    }

    /// The input lost focus. With an open menu this closes it and commits
    /// the highlighted item (if any) as the selection; a no-op otherwise.
    pub fn input_blur(&mut self) {
        if !self.state.is_open {
            return;
        }
        let text = self.highlighted_text();
        self.handle(Action::new(
            ActionKind::InputBlur,
            Patch {
                is_open: Some(false),
                highlighted_index: Some(None),
                selected_item: Some(self.state.highlighted_item.clone()),
                input_text: Some(text.clone()),
                input_value: Some(text),
            },
        ));
    }

    /// The input's text changed: opens the menu, clears the selection, and
    /// resets the highlight to the default index.
    pub fn input_change(&mut self, text: &str) {
        self.handle(Action::new(
            ActionKind::InputChange,
            Patch {
                input_text: Some(text.into()),
                input_value: Some(text.into()),
                is_open: Some(true),
                selected_item: Some(None),
                highlighted_index: Some(self.state.default_highlighted_index),
                ..Patch::empty()
            },
        ));
    }

    /// A key was pressed in the input.
    ///
    /// Returns `true` when the host must suppress the input's default
    /// behavior — the arrow keys would otherwise also move the caret.
    /// Ignored entirely while the menu is closed.
    pub fn input_keydown(&mut self, key: Key) -> bool {
        if !self.state.is_open {
            return false;
        }

        match key {
            Key::ArrowDown => {
                let next = self.wrapped_index(1);
                self.handle(Action::new(
                    ActionKind::InputKeydownArrowDown,
                    Patch {
                        selected_item: Some(None),
                        highlighted_index: Some(next),
                        ..Patch::empty()
                    },
                ));
                true
            }
            Key::ArrowUp => {
                let next = self.wrapped_index(-1);
                self.handle(Action::new(
                    ActionKind::InputKeydownArrowUp,
                    Patch {
                        selected_item: Some(None),
                        highlighted_index: Some(next),
                        ..Patch::empty()
                    },
                ));
                true
            }
            Key::Enter => {
                let text = self.highlighted_text();
                self.handle(Action::new(
                    ActionKind::InputKeydownEnter,
                    Patch {
                        is_open: Some(false),
                        highlighted_index: Some(None),
                        selected_item: Some(self.state.highlighted_item.clone()),
                        input_text: Some(text.clone()),
                        input_value: Some(text),
                    },
                ));
                false
            }
            Key::Escape => {
                self.handle(Action::new(
                    ActionKind::InputKeydownEscape,
                    Patch {
                        is_open: Some(false),
                        highlighted_index: Some(None),
                        selected_item: Some(None),
                        input_text: Some(String::new()),
                        input_value: Some(String::new()),
                    },
                ));
                false
            }
        }
    }

    /// Step the highlight by `direction` over `item_count`, wrapping at the
    /// ends. A missing highlight seeds at -1 going down and 1 going up, so
    /// the first press lands on the first item either way.
    fn wrapped_index(&self, direction: isize) -> Option<usize> {
        let count = self.state.item_count;
        if count == 0 {
            return None;
        }
        let seed = match self.state.highlighted_index {
            Some(index) => index as isize,
            None if direction > 0 => -1,
            None => 1,
        };
        let count = count as isize;
        Some(((seed + direction + count) % count) as usize)
    }

    fn highlighted_text(&self) -> String {
        self.state
            .highlighted_item
            .as_ref()
            .map(|item| self.state.item_text(item))
            .unwrap_or_default()
    }

    // ---- item events -----------------------------------------------------

    /// An option was clicked: closes the menu and selects that item.
    pub fn item_click(&mut self, key: ItemKey) {
        let Some(entry) = self.items.get(key) else {
            return;
        };
        let value = entry.value.clone();
        let text = self.state.item_text(&value);
        self.handle(Action::new(
            ActionKind::ItemMouseClick,
            Patch {
                is_open: Some(false),
                highlighted_index: Some(None),
                selected_item: Some(Some(value)),
                input_text: Some(text.clone()),
                input_value: Some(text),
            },
        ));
    }

    /// The pointer moved over an option. Dispatches only when the option's
    /// index differs from the current highlight, so hovering in place never
    /// produces redundant notifications.
    pub fn item_move(&mut self, key: ItemKey) {
        let Some(entry) = self.items.get(key) else {
            return;
        };
        if Some(entry.index) == self.state.highlighted_index {
            return;
        }
        let index = entry.index;
        self.handle(Action::new(
            ActionKind::ItemMouseEnter,
            Patch {
                highlighted_index: Some(Some(index)),
                ..Patch::empty()
            },
        ));
    }

    /// The pointer left an option: clears the highlight.
    pub fn item_leave(&mut self) {
        self.handle(Action::new(
            ActionKind::ItemMouseLeave,
            Patch {
                highlighted_index: Some(None),
                ..Patch::empty()
            },
        ));
    }

    // ---- item registry maintenance ---------------------------------------

    /// Mount an item at `index`. Recomputes the derived state, notifies
    /// listeners, and runs a render pass.
    pub fn add_item(&mut self, index: usize, value: T) -> ItemKey {
        let key = ItemKey(ids::generate_id());
        let element_id = ids::item_id(&self.state.id, key.0);
        self.items.insert(ItemEntry {
            key,
            index,
            value,
            element_id,
        });
        self.patch_items_based_state();
        self.render();
        key
    }

    /// A mounted item's position changed. Recomputes and notifies, but does
    /// not run a render pass; repositions are batched with the surrounding
    /// update.
    pub fn reposition_item(&mut self, key: ItemKey, previous_index: usize, new_index: usize) {
        self.items.reposition(key, previous_index, new_index);
        self.patch_items_based_state();
    }

    /// Unmount an item. Recomputes and notifies immediately; the render
    /// pass is deferred one turn so the surrounding unmount sequence can
    /// finish first (run it via [`flush_deferred`](Self::flush_deferred)).
    pub fn remove_item(&mut self, key: ItemKey) {
        self.items.remove(key);
        self.patch_items_based_state();
        self.deferred.push(DeferredTask::Render);
    }

    /// The entry at `index` in the compacted item order; `None` when the
    /// index is `None`, out of range, or nothing is mounted.
    #[must_use]
    pub fn get_item_at_index(&self, index: Option<usize>) -> Option<&ItemEntry<T>> {
        index.and_then(|index| self.items.at_compacted(index))
    }

    /// Mounted entries in compacted (ascending slot) order, the order
    /// keyboard navigation walks.
    pub fn mounted_items(&self) -> impl Iterator<Item = &ItemEntry<T>> {
        self.items.iter()
    }

    /// The derived accessibility element id of a mounted item.
    #[must_use]
    pub fn item_element_id(&self, key: ItemKey) -> Option<&str> {
        self.items.get(key).map(|entry| entry.element_id.as_str())
    }

    fn patch_items_based_state(&mut self) {
        let highlighted = self
            .get_item_at_index(self.state.highlighted_index)
            .map(|entry| entry.value.clone());
        let mut state = self.state.clone();
        state.item_count = self.items.mounted_len();
        state.highlighted_item = highlighted;
        self.state = state;
        self.dispatch_state();
    }

    // ---- transition core -------------------------------------------------

    /// Run one transition: reduce, merge, derive, hook, notify, render.
    ///
    /// This is the single serialization point every event entry point
    /// funnels through. Calling it re-entrantly from a listener callback or
    /// hook is undefined behavior.
    pub fn handle(&mut self, action: Action<T>) {
        let reducer = self.state.reducer.clone();
        let patch = reducer.reduce(&self.state, &action);

        let mut new_state = self.state.clone();
        patch.apply(&mut new_state);

        // Re-derive whenever the transition touched the index, not only when
        // it changed: the index may have been seeded equal before any items
        // were mounted.
        if patch.highlighted_index.is_some()
            || new_state.highlighted_index != self.state.highlighted_index
        {
            new_state.highlighted_item = new_state
                .highlighted_index
                .and_then(|index| self.items.at_compacted(index))
                .map(|entry| entry.value.clone());
        }

        if new_state.selected_item != self.state.selected_item {
            if let Some(hook) = &mut self.value_change_hook {
                hook(new_state.selected_item.as_ref());
            }
            if let Some(item) = &new_state.selected_item {
                if let Some(hook) = &mut self.select_hook {
                    hook(item);
                }
            }
        }

        if new_state.input_value != self.state.input_value {
            if let Some(hook) = &mut self.change_hook {
                hook(&new_state.input_value);
            }
        }

        self.state = new_state;
        self.dispatch_state();
        self.render();
    }

    fn dispatch_state(&mut self) {
        // Swapped out so callbacks can't alias the table mid-iteration;
        // anything registered during notification (unsupported) is appended
        // afterwards rather than lost.
        let mut listeners = core::mem::take(&mut self.listeners);
        for listener in &mut listeners {
            (listener.callback)(&self.state);
        }
        let added = core::mem::replace(&mut self.listeners, listeners);
        self.listeners.extend(added);
    }

    fn render(&mut self) {
        if self.destroyed {
            return;
        }
        if let Some(hook) = &mut self.render_hook {
            hook();
        }
    }

    // ---- deferral & lifecycle --------------------------------------------

    /// External form binding: apply `value` as the selection on the *next*
    /// turn, so it cannot land before the view's first render pass.
    pub fn write_value(&mut self, value: Option<T>) {
        self.deferred.push(DeferredTask::WriteValue(value));
    }

    /// Whether any deferred work is waiting for the next turn.
    #[must_use]
    pub fn has_pending_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Run the work deferred to this turn. Hosts call this once per tick
    /// whenever [`has_pending_deferred`](Self::has_pending_deferred) is
    /// `true`. After [`destroy`](Self::destroy) this drops pending work and
    /// is an idempotent no-op.
    pub fn flush_deferred(&mut self) {
        let live = !self.destroyed;
        let mut queue = self.deferred.take();
        queue.drain_live(live, |task| match task {
            DeferredTask::Render => self.render(),
            DeferredTask::WriteValue(value) => self.apply_written_value(value),
        });
    }

    fn apply_written_value(&mut self, value: Option<T>) {
        let text = value
            .as_ref()
            .map(|item| self.state.item_text(item))
            .unwrap_or_default();
        self.handle(Action::new(
            ActionKind::InputChange,
            Patch {
                highlighted_index: Some(None),
                selected_item: Some(value),
                input_text: Some(text.clone()),
                input_value: Some(text),
                is_open: Some(false),
            },
        ));
    }

    /// Tear the controller down: pending deferred work is dropped, the
    /// listener table is cleared, and render passes become no-ops.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.deferred.clear();
        self.listeners.clear();
    }

    /// Whether [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl<T: fmt::Debug> fmt::Debug for Combobox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combobox")
            .field("state", &self.state)
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .field("pending_deferred", &self.deferred.len())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
