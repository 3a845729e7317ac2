// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Focus: keyboard focus navigation over flattened collections.
//!
//! This crate models focus navigation as a combination of:
//! - **Navigation intents** ([`Navigation`]) such as [`Navigation::Next`], [`Navigation::First`],
//!   or [`Navigation::PageDown`].
//! - A read-only **collection snapshot** ([`understory_collection::Collection`]) that says
//!   which keys exist, in what order, and which of them are enabled.
//! - Pluggable **policies** ([`FocusPolicy`]) that select the next focused key given an
//!   origin, an intent, and the collection.
//! - A **cursor** ([`FocusCursor`]) that owns the focused key, applies intents through a
//!   policy, handles typeahead with a [`TypeaheadBuffer`], and reports each change once.
//!
//! Disabled items and section headers are skipped as if they were absent. A collection
//! with no enabled item leaves the cursor [`FocusState::Idle`] for every intent.
//!
//! ## Minimal example
//!
//! A three-item list whose middle item is disabled, wrapping at the ends:
//!
//! ```rust
//! use understory_collection::{Collection, Descriptor};
//! use understory_focus::{DefaultPolicy, FocusCursor, Navigation, WrapMode};
//!
//! let collection = Collection::build(&[
//!     Descriptor::item("a", "Alpha"),
//!     Descriptor::item("b", "Beta").disabled(true),
//!     Descriptor::item("c", "Gamma"),
//! ]);
//!
//! let mut cursor = FocusCursor::new(DefaultPolicy::new(WrapMode::Wrap));
//! cursor.navigate(Navigation::First, &collection);
//! assert_eq!(cursor.focused_key(), Some(&"a"));
//!
//! // The disabled item is skipped…
//! cursor.navigate(Navigation::Next, &collection);
//! assert_eq!(cursor.focused_key(), Some(&"c"));
//!
//! // …and the end wraps back to the start.
//! cursor.navigate(Navigation::Next, &collection);
//! assert_eq!(cursor.focused_key(), Some(&"a"));
//! ```
//!
//! ## Typeahead
//!
//! Printable characters accumulate in a case-insensitive buffer which is matched as a
//! prefix against item text, starting at the focused item and wrapping. The buffer resets
//! once more than [`TypeaheadBuffer::reset_after`] milliseconds pass between keystrokes.
//! Timestamps come from the caller, so tests never wait on a real clock.
//!
//! ```rust
//! # use understory_collection::{Collection, Descriptor};
//! # use understory_focus::{DefaultPolicy, FocusCursor, WrapMode};
//! let collection = Collection::build(&[
//!     Descriptor::item(1, "Banana"),
//!     Descriptor::item(2, "Blueberry"),
//!     Descriptor::item(3, "Cherry"),
//! ]);
//! let mut cursor = FocusCursor::new(DefaultPolicy::new(WrapMode::Never));
//!
//! cursor.typeahead('b', 0, &collection);
//! cursor.typeahead('l', 100, &collection);
//! assert_eq!(cursor.focused_key(), Some(&2));
//!
//! // Long pause: the buffer starts over.
//! cursor.typeahead('c', 5_000, &collection);
//! assert_eq!(cursor.focused_key(), Some(&3));
//! assert_eq!(cursor.typeahead_buffer().text(), "c");
//! ```
//!
//! ## Wrapping is explicit
//!
//! Menus usually wrap and listboxes usually stop at the ends. Because the two defaults
//! differ, [`DefaultPolicy`] has no `Default` implementation: the wrap mode is always
//! chosen by the consumer.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::hash::Hash;

use understory_collection::{Collection, Node};

mod cursor;
mod typeahead;

pub use cursor::{FocusChange, FocusCursor, FocusState, transition};
pub use typeahead::{DEFAULT_TYPEAHEAD_RESET_MS, TypeaheadBuffer, find_match};

/// Default number of enabled items a page move covers.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Direction of focus navigation.
///
/// These values represent high-level navigation intents such as arrow keys,
/// Home/End, and PageUp/PageDown. Concrete policies interpret them according
/// to their own rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move to the first enabled item (for example, Home).
    First,
    /// Move to the last enabled item (for example, End).
    Last,
    /// Move to the nearest enabled item after the origin (for example, ArrowDown).
    Next,
    /// Move to the nearest enabled item before the origin (for example, ArrowUp).
    Prev,
    /// Move back by one page of enabled items.
    PageUp,
    /// Move forward by one page of enabled items.
    PageDown,
}

/// Wrap mode configuration for focus traversal.
///
/// Policies consult this to decide whether [`Navigation::Next`] and
/// [`Navigation::Prev`] wrap around or stop at the edges. Page moves never wrap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Do not wrap; reaching the end of the sequence yields no next candidate.
    Never,
    /// Wrap to the opposite end.
    Wrap,
}

impl WrapMode {
    /// `Wrap` if `wrap` is `true`, `Never` otherwise.
    #[must_use]
    pub const fn from_bool(wrap: bool) -> Self {
        if wrap { Self::Wrap } else { Self::Never }
    }
}

/// Trait for focus traversal policies.
///
/// A policy receives a navigation intent, the current origin key (or `None` when
/// nothing is focused), and a read-only collection, and returns the next focused
/// key if any. Returning `None` means "no candidate"; the cursor then keeps its
/// current key when that key is still enabled.
///
/// Implementations must be pure: the same inputs always produce the same output.
pub trait FocusPolicy<K> {
    /// Compute the next focus target given an origin, navigation intent, and collection.
    fn next(&self, origin: Option<&K>, direction: Navigation, collection: &Collection<K>)
    -> Option<K>;
}

/// Linear focus traversal policy.
///
/// Walks the collection in flattened order, skipping disabled items and
/// section headers.
#[derive(Copy, Clone, Debug)]
pub struct DefaultPolicy {
    /// Wrap behavior when traversing past either end.
    pub wrap: WrapMode,
    /// Number of enabled items covered by a page move. Zero behaves like one.
    pub page_size: usize,
}

impl DefaultPolicy {
    /// Creates a policy with the given wrap mode and [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub const fn new(wrap: WrapMode) -> Self {
        Self {
            wrap,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

impl<K> FocusPolicy<K> for DefaultPolicy
where
    K: Clone + Eq + Hash,
{
    fn next(
        &self,
        origin: Option<&K>,
        direction: Navigation,
        collection: &Collection<K>,
    ) -> Option<K> {
        // A key missing from this snapshot behaves like no focus at all.
        let origin = origin.and_then(|k| collection.index_of(k));
        let node = match direction {
            Navigation::First => collection.first_navigable(),
            Navigation::Last => collection.last_navigable(),
            Navigation::Next => next_linear(origin, collection, self.wrap, Step::Forward),
            Navigation::Prev => next_linear(origin, collection, self.wrap, Step::Backward),
            Navigation::PageDown => next_page(origin, collection, self.page_size, Step::Forward),
            Navigation::PageUp => next_page(origin, collection, self.page_size, Step::Backward),
        };
        node.map(|n| n.key.clone())
    }
}

#[derive(Copy, Clone)]
enum Step {
    Forward,
    Backward,
}

fn next_linear<K>(
    origin: Option<usize>,
    collection: &Collection<K>,
    wrap: WrapMode,
    step: Step,
) -> Option<&Node<K>> {
    let Some(pos) = origin else {
        return match step {
            Step::Forward => collection.first_navigable(),
            Step::Backward => collection.last_navigable(),
        };
    };
    let (adjacent, wrapped) = match step {
        Step::Forward => (collection.navigable_after(pos), collection.first_navigable()),
        Step::Backward => (collection.navigable_before(pos), collection.last_navigable()),
    };
    match (adjacent, wrap) {
        (Some(node), _) => Some(node),
        (None, WrapMode::Wrap) => wrapped,
        (None, WrapMode::Never) => None,
    }
}

fn next_page<K>(
    origin: Option<usize>,
    collection: &Collection<K>,
    page_size: usize,
    step: Step,
) -> Option<&Node<K>> {
    let page_size = page_size.max(1);
    let nodes = collection.nodes();
    match (origin, step) {
        (None, Step::Forward) => collection.first_navigable(),
        (None, Step::Backward) => collection.last_navigable(),
        // Clamp to the last enabled item when fewer than a page remain.
        (Some(pos), Step::Forward) => nodes
            .get(pos + 1..)?
            .iter()
            .filter(|n| n.is_navigable())
            .take(page_size)
            .last(),
        (Some(pos), Step::Backward) => nodes[..pos]
            .iter()
            .rev()
            .filter(|n| n.is_navigable())
            .take(page_size)
            .last(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use understory_collection::Descriptor;

    fn letters(disabled: &[u32]) -> Collection<u32> {
        let items: Vec<_> = (0..8_u32)
            .map(|i| Descriptor::item(i, "x").disabled(disabled.contains(&i)))
            .collect();
        Collection::build(&items)
    }

    #[test]
    fn linear_next_prev_with_wrap() {
        let c = letters(&[]);
        let policy = DefaultPolicy::new(WrapMode::Wrap);
        assert_eq!(policy.next(Some(&0), Navigation::Next, &c), Some(1));
        assert_eq!(policy.next(Some(&7), Navigation::Next, &c), Some(0));
        assert_eq!(policy.next(Some(&0), Navigation::Prev, &c), Some(7));
    }

    #[test]
    fn linear_no_wrap_stops_at_edges() {
        let c = letters(&[]);
        let policy = DefaultPolicy::new(WrapMode::Never);
        assert_eq!(policy.next(Some(&7), Navigation::Next, &c), None);
        assert_eq!(policy.next(Some(&0), Navigation::Prev, &c), None);
    }

    #[test]
    fn linear_skips_disabled_entries() {
        let c = letters(&[1, 2, 6]);
        let policy = DefaultPolicy::new(WrapMode::Never);
        assert_eq!(policy.next(Some(&0), Navigation::Next, &c), Some(3));
        assert_eq!(policy.next(Some(&7), Navigation::Prev, &c), Some(5));
    }

    #[test]
    fn missing_origin_starts_from_the_ends() {
        let c = letters(&[0, 7]);
        let policy = DefaultPolicy::new(WrapMode::Never);
        assert_eq!(policy.next(None, Navigation::Next, &c), Some(1));
        assert_eq!(policy.next(None, Navigation::Prev, &c), Some(6));
        assert_eq!(policy.next(Some(&42), Navigation::Next, &c), Some(1));
    }

    #[test]
    fn first_and_last_skip_disabled() {
        let c = letters(&[0, 7]);
        let policy = DefaultPolicy::new(WrapMode::Wrap);
        assert_eq!(policy.next(Some(&3), Navigation::First, &c), Some(1));
        assert_eq!(policy.next(None, Navigation::Last, &c), Some(6));
    }

    #[test]
    fn page_moves_count_enabled_items_and_clamp() {
        let c = letters(&[2]);
        let policy = DefaultPolicy::new(WrapMode::Wrap).with_page_size(3);
        // 0 -> 1, 3, 4: disabled 2 does not count.
        assert_eq!(policy.next(Some(&0), Navigation::PageDown, &c), Some(4));
        assert_eq!(policy.next(Some(&6), Navigation::PageDown, &c), Some(7));
        assert_eq!(policy.next(Some(&7), Navigation::PageDown, &c), None);
        assert_eq!(policy.next(Some(&4), Navigation::PageUp, &c), Some(0));
        assert_eq!(policy.next(Some(&0), Navigation::PageUp, &c), None);
    }

    #[test]
    fn zero_page_size_moves_one() {
        let c = letters(&[]);
        let policy = DefaultPolicy::new(WrapMode::Never).with_page_size(0);
        assert_eq!(policy.next(Some(&3), Navigation::PageDown, &c), Some(4));
    }

    #[test]
    fn fully_disabled_collection_has_no_candidates() {
        let c = letters(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let policy = DefaultPolicy::new(WrapMode::Wrap);
        for nav in [
            Navigation::First,
            Navigation::Last,
            Navigation::Next,
            Navigation::Prev,
            Navigation::PageUp,
            Navigation::PageDown,
        ] {
            assert_eq!(policy.next(None, nav, &c), None, "{nav:?}");
            assert_eq!(policy.next(Some(&3), nav, &c), None, "{nav:?}");
        }
    }
}
