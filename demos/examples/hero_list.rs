// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless autocomplete over a hero list.
//!
//! This demo plays the part of a host: it owns the source data and a filter,
//! keeps the controller's item registry in sync with the filtered matches,
//! pumps the deferred queue once per simulated tick, and prints what a real
//! view would render (input text, menu, live-region status).
//!
//! Run:
//! - `cargo run -p hedgerow_demos --example hero_list`

use hedgerow_combobox::{Combobox, ItemKey, Key, status_message};

const HEROES: [&str; 5] = ["Bob", "Jason", "Emma", "Mary", "Amanda"];

/// The host's side of the contract: mounted option handles plus the render
/// and tick plumbing the controller expects.
struct Host {
    combo: Combobox<&'static str>,
    mounted: Vec<ItemKey>,
}

impl Host {
    fn new() -> Self {
        Self {
            combo: Combobox::new(),
            mounted: Vec::new(),
        }
    }

    /// Re-mount the options matching the current input text, the way a
    /// template re-runs its item loop after a text change.
    fn sync_items(&mut self) {
        for key in self.mounted.drain(..) {
            self.combo.remove_item(key);
        }
        self.tick();

        let query = self.combo.state().input_text.to_lowercase();
        let matches = HEROES
            .iter()
            .copied()
            .filter(|name| name.to_lowercase().contains(&query));
        for (index, name) in matches.enumerate() {
            self.mounted.push(self.combo.add_item(index, name));
        }
    }

    /// One turn of the event loop: drain whatever the controller deferred.
    fn tick(&mut self) {
        if self.combo.has_pending_deferred() {
            self.combo.flush_deferred();
        }
    }

    fn type_text(&mut self, text: &str) {
        println!("> type {text:?}");
        self.combo.input_change(text);
        self.sync_items();
        self.draw();
    }

    fn press(&mut self, key: Key) {
        println!("> press {key:?}");
        let suppress = self.combo.input_keydown(key);
        if suppress {
            println!("  (default input behavior suppressed)");
        }
        self.draw();
    }

    fn click_match(&mut self, position: usize) {
        println!("> click option {position}");
        if let Some(key) = self.mounted.get(position).copied() {
            self.combo.item_click(key);
        }
        self.draw();
    }

    fn draw(&self) {
        let state = self.combo.state();
        println!("  input: {:?}", state.input_text);
        if state.is_open {
            for (index, entry) in self.combo.mounted_items().enumerate() {
                let marker = if state.highlighted_index == Some(index) {
                    ">"
                } else {
                    " "
                };
                println!("  {marker} {}", entry.value);
            }
        } else {
            println!("  (menu closed)");
        }
        match state.selected_item {
            Some(selected) => println!("  selected: {selected}"),
            None => println!("  selected: none"),
        }
        let status = status_message(state);
        if !status.is_empty() {
            println!("  status: {status}");
        }
        println!();
    }
}

fn main() {
    let mut host = Host::new();

    // Typing "m" opens the menu with three matches.
    host.type_text("m");

    // Arrow keys walk the matches in source order and wrap.
    host.press(Key::ArrowDown);
    host.press(Key::ArrowDown);

    // Enter commits the highlighted hero and closes the menu.
    host.press(Key::Enter);

    // Reopen, then pick one by pointer instead.
    host.type_text("a");
    host.click_match(2);

    // Escape with the menu closed is a no-op; reopening and escaping
    // clears both the selection and the text.
    host.press(Key::Escape);
    host.type_text("a");
    host.press(Key::Escape);
}
