// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Selection: selection state for keyboard-navigable collections.
//!
//! [`SelectionController`] owns the set of selected keys for one collection and enforces a
//! [`SelectionMode`]:
//!
//! - [`SelectionMode::None`]: nothing is ever selected.
//! - [`SelectionMode::Single`]: at most one key is selected.
//! - [`SelectionMode::Multiple`]: any number of keys are selected.
//!
//! Every mutating call returns `Option<SelectionChange>`: `Some` exactly when membership
//! changes, carrying the full new set (never a diff), and `None` when the call was a no-op.
//!
//! ## Controlled and uncontrolled
//!
//! An *uncontrolled* controller owns its value and applies changes directly
//! ([`SelectionChange::Changed`]). A *controlled* controller mirrors a value owned by the
//! host: mutations leave the local set untouched and return a
//! [`SelectionChange::Requested`] proposal. The host decides, then pushes the authoritative
//! value back with [`SelectionController::replace`].
//!
//! ```rust
//! use understory_selection::{SelectionChange, SelectionController, SelectionMode};
//!
//! // Uncontrolled single selection.
//! let mut sel = SelectionController::new(SelectionMode::Single);
//! assert_eq!(sel.toggle("a"), Some(SelectionChange::Changed(vec!["a"])));
//! assert_eq!(sel.toggle("b"), Some(SelectionChange::Changed(vec!["b"])));
//! assert!(sel.is_selected(&"b"));
//!
//! // Controlled: a toggle only proposes a value.
//! let mut sel = SelectionController::controlled(SelectionMode::Multiple, ["a"]);
//! assert_eq!(sel.toggle("b"), Some(SelectionChange::Requested(vec!["a", "b"])));
//! assert!(!sel.is_selected(&"b"));
//!
//! // The owner accepts the proposal and pushes it back.
//! sel.replace(["a", "b"]);
//! assert!(sel.is_selected(&"b"));
//! ```
//!
//! Mode violations are corrected rather than rejected: replacing a single-mode selection
//! with several keys keeps only the first one.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod mode;

pub use controller::{SelectionChange, SelectionController};
pub use mode::{ParseSelectionModeError, SelectionBehavior, SelectionMode};
