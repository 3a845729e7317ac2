// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications.

use alloc::vec::Vec;
use core::mem::discriminant;

use smallvec::SmallVec;
use understory_focus::FocusChange;
use understory_selection::SelectionChange;

/// One observable change, carrying the full new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change<K> {
    /// The focused key (`None` when idle).
    Focus(Option<K>),
    /// The selected keys after an uncontrolled change.
    Selection(Vec<K>),
    /// A selection proposed to the owner of a controlled value.
    SelectionRequested(Vec<K>),
    /// The keys kept by the filter, in collection order.
    Filter(Vec<K>),
    /// Whether the popup is open.
    Open(bool),
}

/// The changes produced by one operation, at most one per kind.
///
/// Pushing a change of a kind already present replaces the earlier one, so
/// each kind is reported once with its final value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Changes<K> {
    items: SmallVec<[Change<K>; 2]>,
}

impl<K> Default for Changes<K> {
    fn default() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }
}

impl<K> Changes<K> {
    /// No changes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `change`, replacing an earlier change of the same kind.
    pub fn push(&mut self, change: Change<K>) {
        match self
            .items
            .iter_mut()
            .find(|c| discriminant(&**c) == discriminant(&change))
        {
            Some(slot) => *slot = change,
            None => self.items.push(change),
        }
    }

    /// Records a focus move, if there was one.
    pub fn push_focus(&mut self, change: Option<FocusChange<K>>) {
        if let Some(change) = change {
            self.push(Change::Focus(change.current));
        }
    }

    /// Records a selection change or request, if there was one.
    pub fn push_selection(&mut self, change: Option<SelectionChange<K>>) {
        match change {
            Some(SelectionChange::Changed(keys)) => self.push(Change::Selection(keys)),
            Some(SelectionChange::Requested(keys)) => self.push(Change::SelectionRequested(keys)),
            None => {}
        }
    }

    /// Records every change of `other`.
    pub fn merge(&mut self, other: Self) {
        for change in other.items {
            self.push(change);
        }
    }

    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct kinds that changed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the changes in the order their kinds first changed.
    pub fn iter(&self) -> core::slice::Iter<'_, Change<K>> {
        self.items.iter()
    }

    /// The new focus, if focus changed.
    #[must_use]
    pub fn focus(&self) -> Option<Option<&K>> {
        self.items.iter().find_map(|c| match c {
            Change::Focus(key) => Some(key.as_ref()),
            _ => None,
        })
    }

    /// The new selection, if it changed.
    #[must_use]
    pub fn selection(&self) -> Option<&[K]> {
        self.items.iter().find_map(|c| match c {
            Change::Selection(keys) => Some(keys.as_slice()),
            _ => None,
        })
    }

    /// The proposed selection, if one was requested.
    #[must_use]
    pub fn selection_requested(&self) -> Option<&[K]> {
        self.items.iter().find_map(|c| match c {
            Change::SelectionRequested(keys) => Some(keys.as_slice()),
            _ => None,
        })
    }

    /// The new filtered keys, if they changed.
    #[must_use]
    pub fn filter(&self) -> Option<&[K]> {
        self.items.iter().find_map(|c| match c {
            Change::Filter(keys) => Some(keys.as_slice()),
            _ => None,
        })
    }

    /// The new open state, if it changed.
    #[must_use]
    pub fn open(&self) -> Option<bool> {
        self.items.iter().find_map(|c| match c {
            Change::Open(open) => Some(*open),
            _ => None,
        })
    }
}

impl<K> IntoIterator for Changes<K> {
    type Item = Change<K>;
    type IntoIter = smallvec::IntoIter<[Change<K>; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Changes<K> {
    type Item = &'a Change<K>;
    type IntoIter = core::slice::Iter<'a, Change<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn same_kind_keeps_last_value() {
        let mut changes = Changes::new();
        changes.push(Change::Focus(Some(1)));
        changes.push(Change::Selection(vec![1]));
        changes.push(Change::Focus(Some(2)));
        assert_eq!(changes.len(), 2);
        assert_eq!(changes.focus(), Some(Some(&2)));
        assert_eq!(changes.selection(), Some(&[1][..]));
        assert_eq!(changes.filter(), None);
    }

    #[test]
    fn helpers_skip_absent_changes() {
        let mut changes: Changes<u32> = Changes::new();
        changes.push_focus(None);
        changes.push_selection(None);
        assert!(changes.is_empty());
        changes.push_selection(Some(SelectionChange::Requested(vec![3])));
        assert_eq!(changes.selection_requested(), Some(&[3][..]));
        assert_eq!(changes.selection(), None);
    }
}
