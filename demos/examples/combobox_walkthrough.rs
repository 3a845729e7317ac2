// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Types into a debounced combobox and prints what the popup would show.

use std::sync::Arc;

use understory_collection::{Collection, Descriptor};
use understory_focus::WrapMode;
use understory_listbox::{Changes, Combobox, Key, ListConfig, Modifiers};
use understory_selection::SelectionMode;

fn report(step: &str, changes: &Changes<&'static str>) {
    tracing::info!(step, count = changes.len(), "input handled");
    for change in changes {
        println!("  {step}: {change:?}");
    }
}

fn main() {
    understory_examples::init_logging();

    let fruit = Arc::new(Collection::build(&[
        Descriptor::section(
            "common",
            "Common",
            vec![
                Descriptor::item("apple", "Apple"),
                Descriptor::item("banana", "Banana"),
            ],
        ),
        Descriptor::section(
            "exotic",
            "Exotic",
            vec![
                Descriptor::item("apricot", "Apricot"),
                Descriptor::item("durian", "Durian").disabled(true),
            ],
        ),
    ]));
    let config = match ListConfig::builder()
        .selection_mode(SelectionMode::Single)
        .match_mode_named("contains")
        .debounce_ms(150)
        .wrap(WrapMode::Never)
        .build()
    {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid combobox configuration");
            return;
        }
    };
    let mut combo = Combobox::new(fruit, &config);

    report("type a", &combo.set_input("a", 0));
    report("type ap", &combo.set_input("ap", 80));
    report("poll", &combo.poll(230));
    println!("visible: {:?}", combo.filter().filtered_keys());
    report("down", &combo.handle_key(Key::ArrowDown, Modifiers::empty(), 300));
    report("enter", &combo.handle_key(Key::Enter, Modifiers::empty(), 310));
    println!("selected: {:?}", combo.state().selected_keys());
}
