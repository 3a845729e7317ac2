// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Listbox: headless listbox and combobox state.
//!
//! This crate wires the lower-level Understory pieces into widgets a host can drive with
//! input events:
//!
//! - [`ListConfig`]: validated construction-time configuration. The wrap mode has no
//!   default and must always be chosen; unknown mode names and a zero page size are
//!   rejected with a [`ConfigError`].
//! - [`Intent`]: the closed set of inputs (navigation, typeahead, explicit focus, toggle,
//!   close) the binding layer sends in. [`list_intent`] maps [`Key`]s and [`Modifiers`]
//!   to intents with the usual vertical-list bindings.
//! - [`ListState`]: focus cursor and selection over one collection snapshot, the core
//!   every widget shares.
//! - [`Listbox`]: a flat list with real focus.
//! - [`Combobox`]: a text input filtering a popup list, with virtual focus.
//!
//! Every operation returns [`Changes`]: at most one [`Change`] per kind (focus, selection,
//! filter, open), each carrying the full new value. An empty `Changes` means nothing
//! observable happened.
//!
//! ## Listbox
//!
//! ```rust
//! use std::sync::Arc;
//! use understory_collection::{Collection, Descriptor};
//! use understory_focus::WrapMode;
//! use understory_listbox::{Intent, ListConfig, Listbox};
//! use understory_selection::SelectionMode;
//!
//! let collection = Arc::new(Collection::build(&[
//!     Descriptor::item("a", "Alpha"),
//!     Descriptor::item("b", "Bravo").disabled(true),
//!     Descriptor::item("c", "Charlie"),
//! ]));
//! let config = ListConfig::builder()
//!     .selection_mode(SelectionMode::Single)
//!     .wrap(WrapMode::Wrap)
//!     .build()
//!     .unwrap();
//! let mut listbox = Listbox::new(collection, &config);
//!
//! assert_eq!(listbox.handle(Intent::First, 0).focus(), Some(Some(&"a")));
//! // The disabled item is skipped.
//! assert_eq!(listbox.handle(Intent::Next, 0).focus(), Some(Some(&"c")));
//!
//! let changes = listbox.handle(Intent::Toggle("c"), 0);
//! assert_eq!(changes.selection(), Some(&["c"][..]));
//! ```
//!
//! ## Combobox
//!
//! ```rust
//! use std::sync::Arc;
//! use understory_collection::{Collection, Descriptor};
//! use understory_focus::WrapMode;
//! use understory_listbox::{Combobox, ListConfig};
//!
//! let fruit = Arc::new(Collection::build(&[
//!     Descriptor::item("apple", "Apple"),
//!     Descriptor::item("banana", "Banana"),
//!     Descriptor::item("grape", "Grape"),
//! ]));
//! let config = ListConfig::builder().wrap(WrapMode::Wrap).build().unwrap();
//! let mut combo = Combobox::new(fruit, &config);
//!
//! let changes = combo.set_input("ap", 0);
//! assert_eq!(changes.filter(), Some(&["apple"][..]));
//! assert_eq!(changes.focus(), Some(Some(&"apple")));
//! assert_eq!(changes.open(), Some(true));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod change;
mod combobox;
mod config;
mod intent;
mod keys;
mod list;
mod listbox;

pub use change::{Change, Changes};
pub use combobox::Combobox;
pub use config::{ConfigError, Direction, ListConfig, ListConfigBuilder};
pub use intent::Intent;
pub use keys::{Key, Modifiers, list_intent};
pub use list::ListState;
pub use listbox::Listbox;
