// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Filter: live text filtering for comboboxes and searchable lists.
//!
//! [`LiveFilter`] derives a filtered [`Collection`](understory_collection::Collection) from a
//! source collection and a text query:
//!
//! - Items are kept when a [`MatchMode`] predicate accepts their text value. Built-in modes
//!   are case-insensitive; [`MatchMode::Custom`] takes any `fn(label, query) -> bool`.
//! - The result keeps the original collection order. It is never re-ranked, so keyboard
//!   traversal stays predictable while the user types.
//! - Sections survive only when at least one of their items does.
//! - An empty query always yields the full collection.
//!
//! Applying a query also reconciles a [`FocusCursor`](understory_focus::FocusCursor) in the
//! same step: if the focused key was filtered out, focus moves to the first remaining
//! enabled item, or to `Idle` when nothing remains. An idle cursor stays idle.
//!
//! ## Debounce
//!
//! With a non-zero debounce, [`LiveFilter::set_query`] only schedules the query; the host
//! calls [`LiveFilter::poll`] with the current time and the latest scheduled query is
//! applied once it is due. Scheduling a new query discards the previous one, so only the
//! last query typed is ever observed.
//!
//! ```rust
//! use std::sync::Arc;
//! use understory_collection::{Collection, Descriptor};
//! use understory_filter::{LiveFilter, MatchMode};
//! use understory_focus::{DefaultPolicy, FocusCursor, WrapMode};
//!
//! let fruit = Arc::new(Collection::build(&[
//!     Descriptor::item("apple", "Apple"),
//!     Descriptor::item("banana", "Banana"),
//!     Descriptor::item("grape", "Grape"),
//! ]));
//! let mut cursor = FocusCursor::new(DefaultPolicy::new(WrapMode::Never)).with_virtual_focus(true);
//! let mut filter = LiveFilter::new(fruit, MatchMode::StartsWith);
//! cursor.set_explicit(&"grape", filter.collection());
//!
//! // "grape" is filtered out, so focus moves to the first match.
//! let outcome = filter.set_query("ap", 0, &mut cursor);
//! assert_eq!(outcome.filtered_keys, Some(vec!["apple"]));
//! assert_eq!(cursor.focused_key(), Some(&"apple"));
//!
//! // Clearing the query restores everything in the original order.
//! filter.set_query("", 10, &mut cursor);
//! assert_eq!(filter.filtered_keys(), ["apple", "banana", "grape"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod live;
mod matcher;

pub use live::{FilterOutcome, FilterState, LiveFilter};
pub use matcher::{MatchMode, ParseMatchModeError};
