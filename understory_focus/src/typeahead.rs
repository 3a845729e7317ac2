// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typeahead buffer and prefix search.

use alloc::string::String;

use understory_collection::{Collection, Node};

/// Default pause (milliseconds) after which the typeahead buffer starts over.
pub const DEFAULT_TYPEAHEAD_RESET_MS: u64 = 1000;

/// Case-folded keystrokes typed in quick succession.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeaheadBuffer {
    text: String,
    last_input_at: Option<u64>,
    /// Pause in milliseconds after which the next keystroke starts a fresh buffer.
    pub reset_after: u64,
}

impl TypeaheadBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new(reset_after: u64) -> Self {
        Self {
            text: String::new(),
            last_input_at: None,
            reset_after,
        }
    }

    /// The buffered, lowercased text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if nothing has been typed since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Timestamp of the last accepted keystroke.
    #[must_use]
    pub fn last_input_at(&self) -> Option<u64> {
        self.last_input_at
    }

    /// Returns `true` if a keystroke at `now` would start a fresh buffer.
    #[must_use]
    pub fn is_expired(&self, now: u64) -> bool {
        self.last_input_at
            .is_some_and(|at| now.saturating_sub(at) > self.reset_after)
    }

    /// Returns `true` if `ch` takes part in typeahead at `now`.
    ///
    /// Control characters never do. A space only does in the middle of a
    /// search, so that a leading space stays available for selection.
    #[must_use]
    pub fn accepts(&self, ch: char, now: u64) -> bool {
        if ch.is_control() {
            return false;
        }
        if ch == ' ' {
            return !self.text.is_empty() && !self.is_expired(now);
        }
        true
    }

    /// Appends `ch` (case-folded), first clearing the buffer if it expired.
    pub fn push(&mut self, ch: char, now: u64) {
        if self.is_expired(now) {
            self.text.clear();
        }
        self.text.extend(ch.to_lowercase());
        self.last_input_at = Some(now);
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.last_input_at = None;
    }
}

impl Default for TypeaheadBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TYPEAHEAD_RESET_MS)
    }
}

/// Finds the first enabled item at or after `from` whose text starts with
/// `query`, wrapping to the start of the collection.
///
/// `query` must already be lowercased; item text is folded while comparing.
#[must_use]
pub fn find_match<'a, K>(
    collection: &'a Collection<K>,
    query: &str,
    from: Option<usize>,
) -> Option<&'a Node<K>> {
    if query.is_empty() {
        return None;
    }
    let nodes = collection.nodes();
    let start = from.unwrap_or(0).min(nodes.len());
    let (before, after) = nodes.split_at(start);
    after
        .iter()
        .chain(before)
        .find(|n| n.is_navigable() && starts_with_folded(&n.text_value, query))
}

fn starts_with_folded(text: &str, folded_prefix: &str) -> bool {
    let mut text = text.chars().flat_map(char::to_lowercase);
    folded_prefix.chars().all(|p| text.next() == Some(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_collection::Descriptor;

    fn fruit() -> Collection<u32> {
        Collection::build(&[
            Descriptor::item(0, "Apple"),
            Descriptor::item(1, "Apricot").disabled(true),
            Descriptor::item(2, "avocado"),
            Descriptor::item(3, "Banana"),
        ])
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        let c = fruit();
        assert_eq!(find_match(&c, "av", None).map(|n| n.key), Some(2));
        assert_eq!(find_match(&c, "ban", None).map(|n| n.key), Some(3));
        assert_eq!(find_match(&c, "x", None).map(|n| n.key), None);
    }

    #[test]
    fn search_starts_at_cursor_and_wraps() {
        let c = fruit();
        assert_eq!(find_match(&c, "a", Some(0)).map(|n| n.key), Some(0));
        assert_eq!(find_match(&c, "a", Some(1)).map(|n| n.key), Some(2));
        assert_eq!(find_match(&c, "a", Some(3)).map(|n| n.key), Some(0));
    }

    #[test]
    fn disabled_items_never_match() {
        let c = fruit();
        assert_eq!(find_match(&c, "apr", None).map(|n| n.key), None);
    }

    #[test]
    fn buffer_expires_after_pause() {
        let mut buf = TypeaheadBuffer::new(1000);
        buf.push('A', 0);
        buf.push('b', 1000);
        assert_eq!(buf.text(), "ab");
        buf.push('c', 2001);
        assert_eq!(buf.text(), "c");
    }

    #[test]
    fn leading_space_is_not_typeahead() {
        let mut buf = TypeaheadBuffer::default();
        assert!(!buf.accepts(' ', 0));
        buf.push('a', 0);
        assert!(buf.accepts(' ', 10));
        assert!(!buf.accepts(' ', 5000), "expired buffer treats space as leading");
        assert!(!buf.accepts('\n', 10));
    }
}
