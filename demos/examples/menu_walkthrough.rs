// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a nested menu with keyboard and pointer input and prints every change.

use understory_focus::WrapMode;
use understory_listbox::{Intent, Key, ListConfig, Modifiers};
use understory_menu::{FocusStrategy, MenuChanges, MenuItem, MenuTree, SubmenuCoordinator};

fn report(step: &str, changes: &MenuChanges<&'static str>) {
    tracing::info!(step, count = changes.len(), "input handled");
    for change in changes.iter() {
        println!("  {step}: {change:?}");
    }
}

fn main() {
    understory_examples::init_logging();

    let tree = MenuTree::build(&[
        MenuItem::action("new", "New File"),
        MenuItem::submenu(
            "recent",
            "Open Recent",
            vec![
                MenuItem::action("notes", "notes.md"),
                MenuItem::action("todo", "todo.txt").disabled(true),
                MenuItem::submenu(
                    "more",
                    "More",
                    vec![MenuItem::action("archive", "archive.zip")],
                ),
            ],
        ),
        MenuItem::section(
            "danger",
            "Danger Zone",
            vec![MenuItem::action("quit", "Quit")],
        ),
    ]);
    let config = match ListConfig::builder()
        .wrap(WrapMode::Wrap)
        .hover_intent_ms(200)
        .build()
    {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid menu configuration");
            return;
        }
    };
    let mut menu = SubmenuCoordinator::new(tree, config);
    let none = Modifiers::empty();

    report("open", &menu.open(FocusStrategy::First));
    report("down", &menu.handle_key(Key::ArrowDown, none, 0));
    report("right", &menu.handle_key(Key::ArrowRight, none, 10));
    report("type m", &menu.handle(Intent::Typeahead('m'), 20));
    report("escape", &menu.handle_key(Key::Escape, none, 30));

    // Hover the trigger and wait out the intent delay.
    report("hover recent", &menu.pointer_enter(0, "recent", 1_000));
    report("poll early", &menu.poll(1_100));
    report("poll due", &menu.poll(1_200));

    report("click notes", &menu.handle(Intent::Toggle("notes"), 1_500));
    println!("menu open after activation: {}", menu.is_open());
}
