// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Combobox: a headless, accessible autocomplete state machine.
//!
//! This crate models a combobox (text input, toggle button, suggestion list,
//! selectable options) without rendering anything. It is built from:
//! - An immutable **state snapshot** ([`State`]) replaced wholesale on every
//!   transition and pushed to listeners.
//! - **Actions** ([`Action`]) pairing the interaction kind with the partial
//!   state ([`Patch`]) the built-in transition would apply.
//! - A pluggable **reducer** ([`Reducer`]) that decides which patch is
//!   actually merged, letting consumers intercept or veto transitions.
//! - A sparse **item registry** ([`ItemRegistry`]) tracking the mounted
//!   options, navigated through its compacted view.
//! - The **controller** ([`Combobox`]) tying it together: it translates raw
//!   input, button, and pointer events into actions, derives the highlighted
//!   item and result count, and notifies listeners and hooks.
//!
//! ## Minimal example
//!
//! Drive a three-item list with the keyboard:
//!
//! ```rust
//! use hedgerow_combobox::{Combobox, Key};
//!
//! let mut combo: Combobox<&str> = Combobox::new();
//! for (index, name) in ["Emma", "Mary", "Amanda"].into_iter().enumerate() {
//!     combo.add_item(index, name);
//! }
//!
//! combo.input_change("ma");
//! assert!(combo.state().is_open);
//!
//! combo.input_keydown(Key::ArrowDown);
//! combo.input_keydown(Key::ArrowDown);
//! assert_eq!(combo.state().highlighted_item, Some("Mary"));
//!
//! combo.input_keydown(Key::Enter);
//! assert_eq!(combo.state().selected_item, Some("Mary"));
//! assert_eq!(combo.state().input_text, "Mary");
//! assert!(!combo.state().is_open);
//! ```
//!
//! ## Host responsibilities
//!
//! The host (whatever renders the widget) owns the elements and the event
//! loop. It is expected to:
//! - forward focus, blur, text, key, click, and pointer events to the
//!   matching `Combobox` methods, and suppress an event's default behavior
//!   whenever [`Combobox::input_keydown`] returns `true`;
//! - keep the registry in sync with the visible options via
//!   [`Combobox::add_item`], [`Combobox::reposition_item`], and
//!   [`Combobox::remove_item`];
//! - wire the accessibility attributes using the [`ids`] helpers and
//!   announce [`status_message`] from a live region;
//! - run [`Combobox::flush_deferred`] once per tick while
//!   [`Combobox::has_pending_deferred`] reports work, and call
//!   [`Combobox::destroy`] on unmount.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod combobox;
pub mod ids;
mod reducer;
mod registry;
mod state;
mod status;

pub use action::{Action, ActionKind, Patch};
pub use combobox::{
    ChangeHook, Combobox, Key, RenderHook, SelectHook, StateListener, ValueChangeHook,
};
pub use reducer::{DefaultReducer, Reducer, SharedReducer};
pub use registry::{ItemEntry, ItemKey, ItemRegistry};
pub use state::{ItemToString, State, StateOptions};
pub use status::status_message;
