// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu change notifications.

use alloc::vec::Vec;
use core::mem::discriminant;

use smallvec::SmallVec;
use understory_listbox::{Change, Changes};

use crate::level::LevelSnapshot;

/// One observable menu change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuChange<K> {
    /// A focus or selection change within one level.
    Level {
        /// Depth of the level.
        level: usize,
        /// What changed.
        change: Change<K>,
    },
    /// A leaf item was activated.
    Action(K),
    /// The submenu stack changed; carries the whole new stack.
    Stack(Vec<LevelSnapshot<K>>),
}

/// The changes produced by one menu operation.
///
/// Each level reports at most one change per kind, and the stack and action
/// are reported at most once, all with their final values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuChanges<K> {
    items: SmallVec<[MenuChange<K>; 4]>,
}

impl<K> Default for MenuChanges<K> {
    fn default() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }
}

impl<K> MenuChanges<K> {
    /// No changes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `change`, replacing an earlier change it supersedes.
    pub fn push(&mut self, change: MenuChange<K>) {
        let slot = self.items.iter_mut().find(|c| supersedes(&change, c));
        match slot {
            Some(slot) => *slot = change,
            None => self.items.push(change),
        }
    }

    /// Records every change of one level.
    pub fn push_level(&mut self, level: usize, changes: Changes<K>) {
        for change in changes {
            self.push(MenuChange::Level { level, change });
        }
    }

    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of recorded changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the changes.
    pub fn iter(&self) -> core::slice::Iter<'_, MenuChange<K>> {
        self.items.iter()
    }

    /// The new stack, if it changed.
    #[must_use]
    pub fn stack(&self) -> Option<&[LevelSnapshot<K>]> {
        self.items.iter().find_map(|c| match c {
            MenuChange::Stack(levels) => Some(levels.as_slice()),
            _ => None,
        })
    }

    /// The activated leaf, if any.
    #[must_use]
    pub fn action(&self) -> Option<&K> {
        self.items.iter().find_map(|c| match c {
            MenuChange::Action(key) => Some(key),
            _ => None,
        })
    }

    /// The new focus of `level`, if it changed.
    #[must_use]
    pub fn focus(&self, level: usize) -> Option<Option<&K>> {
        self.level_changes(level).find_map(|c| match c {
            Change::Focus(key) => Some(key.as_ref()),
            _ => None,
        })
    }

    /// The new selection of `level`, if it changed.
    #[must_use]
    pub fn selection(&self, level: usize) -> Option<&[K]> {
        self.level_changes(level).find_map(|c| match c {
            Change::Selection(keys) => Some(keys.as_slice()),
            _ => None,
        })
    }

    fn level_changes(&self, level: usize) -> impl Iterator<Item = &Change<K>> + '_ {
        self.items.iter().filter_map(move |c| match c {
            MenuChange::Level { level: l, change } if *l == level => Some(change),
            _ => None,
        })
    }
}

fn supersedes<K>(new: &MenuChange<K>, old: &MenuChange<K>) -> bool {
    match (new, old) {
        (
            MenuChange::Level { level, change },
            MenuChange::Level {
                level: old_level,
                change: old_change,
            },
        ) => level == old_level && discriminant(change) == discriminant(old_change),
        (MenuChange::Action(_), MenuChange::Action(_))
        | (MenuChange::Stack(_), MenuChange::Stack(_)) => true,
        _ => false,
    }
}

impl<K> IntoIterator for MenuChanges<K> {
    type Item = MenuChange<K>;
    type IntoIter = smallvec::IntoIter<[MenuChange<K>; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn level_changes_coalesce_per_level_and_kind() {
        let mut changes = MenuChanges::new();
        changes.push(MenuChange::Level {
            level: 0,
            change: Change::Focus(Some(1)),
        });
        changes.push(MenuChange::Level {
            level: 1,
            change: Change::Focus(Some(5)),
        });
        changes.push(MenuChange::Level {
            level: 0,
            change: Change::Focus(Some(2)),
        });
        changes.push(MenuChange::Stack(vec![]));
        changes.push(MenuChange::Stack(vec![]));
        assert_eq!(changes.len(), 3);
        assert_eq!(changes.focus(0), Some(Some(&2)));
        assert_eq!(changes.focus(1), Some(Some(&5)));
        assert_eq!(changes.focus(2), None);
    }
}
