// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Menu: headless state for menus with nested submenus.
//!
//! A menu is described once as a tree of [`MenuItem`]s. [`MenuTree::build`] turns it into
//! one collection per menu: the root, plus one per submenu trigger. Keys only need to be
//! unique within one menu; each menu resolves its own triggers.
//!
//! [`SubmenuCoordinator`] keeps the stack of open levels. Each level is an
//! [`understory_listbox::ListState`] with its own focus and selection; the top of the stack
//! owns keyboard input.
//!
//! - Activating a trigger (Enter, Space, or the direction-aware arrow) opens its submenu
//!   and focuses the first item.
//! - Hovering a trigger opens its submenu after the hover-intent delay. Leaving before
//!   the delay cancels the request. Hosts advance the delay with
//!   [`SubmenuCoordinator::poll`], passing the current time in milliseconds.
//! - Escape closes the top level and hands focus back to its trigger. Activating a leaf
//!   reports a [`MenuChange::Action`] and closes the whole menu. Interacting outside
//!   closes every level.
//!
//! Every operation returns [`MenuChanges`]: per-level focus and selection changes, the
//! activated leaf, and the new stack ([`LevelSnapshot`]s) when it changed.
//!
//! ## Example
//!
//! ```rust
//! use understory_focus::WrapMode;
//! use understory_listbox::{Intent, Key, ListConfig, Modifiers};
//! use understory_menu::{FocusStrategy, LevelState, MenuItem, MenuTree, SubmenuCoordinator};
//!
//! let tree = MenuTree::build(&[
//!     MenuItem::action("copy", "Copy"),
//!     MenuItem::submenu(
//!         "share",
//!         "Share",
//!         vec![MenuItem::action("mail", "Mail"), MenuItem::action("link", "Copy Link")],
//!     ),
//! ]);
//! let config = ListConfig::builder().wrap(WrapMode::Wrap).build().unwrap();
//! let mut menu = SubmenuCoordinator::new(tree, config);
//!
//! menu.open(FocusStrategy::First);
//! menu.handle(Intent::Next, 0);
//! assert_eq!(menu.focused_key(), Some(&"share"));
//!
//! // Opening the submenu moves keyboard ownership into it.
//! let changes = menu.handle_key(Key::ArrowRight, Modifiers::empty(), 0);
//! assert_eq!(changes.stack().map(|s| s.len()), Some(2));
//! assert_eq!(menu.owner(), Some(1));
//! assert_eq!(menu.focused_key(), Some(&"mail"));
//!
//! // Escape closes it and focus returns to the trigger.
//! menu.handle_key(Key::Escape, Modifiers::empty(), 0);
//! assert_eq!(menu.level_state(1), LevelState::Closed);
//! assert_eq!(menu.focused_key(), Some(&"share"));
//!
//! // Activating a leaf closes the whole menu.
//! let changes = menu.handle(Intent::Toggle("copy"), 0);
//! assert_eq!(changes.action(), Some(&"copy"));
//! assert!(!menu.is_open());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod change;
mod coordinator;
mod level;
mod tree;

pub use change::{MenuChange, MenuChanges};
pub use coordinator::{FocusStrategy, SubmenuCoordinator};
pub use level::{LevelSnapshot, LevelState};
pub use tree::{MenuId, MenuItem, MenuTree};
