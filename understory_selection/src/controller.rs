// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection controller.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;
use understory_collection::Collection;

use crate::mode::{SelectionBehavior, SelectionMode};

/// Notification produced by a call that changes (or proposes to change) membership.
///
/// Always carries the full new set, in selection order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange<K> {
    /// The local selection was updated to these keys.
    Changed(Vec<K>),
    /// The controller is controlled; the host is asked to adopt these keys
    /// and call [`SelectionController::replace`] with its decision.
    Requested(Vec<K>),
}

impl<K> SelectionChange<K> {
    /// The new (or proposed) selected keys.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        match self {
            Self::Changed(keys) | Self::Requested(keys) => keys,
        }
    }

    /// Returns `true` if this is a proposal for a controlled owner.
    #[must_use]
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Requested(_))
    }
}

/// Owns the selected keys of one collection and enforces a [`SelectionMode`].
///
/// Invariants:
/// - `Single` mode never holds more than one key.
/// - `None` mode never holds any key.
/// - When controlled, only [`replace`](Self::replace) mutates the set.
#[derive(Clone, Debug)]
pub struct SelectionController<K> {
    mode: SelectionMode,
    behavior: SelectionBehavior,
    allow_empty: bool,
    controlled: bool,
    selected: Vec<K>,
    members: HashSet<K>,
    anchor: Option<K>,
}

impl<K> SelectionController<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an uncontrolled, empty controller.
    ///
    /// Empty selections are allowed and activations toggle.
    #[must_use]
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            behavior: SelectionBehavior::Toggle,
            allow_empty: true,
            controlled: false,
            selected: Vec::new(),
            members: HashSet::new(),
            anchor: None,
        }
    }

    /// Creates a controlled controller mirroring `value`.
    ///
    /// `value` is normalized against `mode` the same way [`replace`](Self::replace) does.
    #[must_use]
    pub fn controlled(mode: SelectionMode, value: impl IntoIterator<Item = K>) -> Self {
        let mut this = Self::new(mode);
        let value = this.normalize(value);
        this.store(value);
        this.controlled = true;
        this
    }

    /// Sets the initial value of an uncontrolled controller.
    #[must_use]
    pub fn with_default_selection(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        let keys = self.normalize(keys);
        self.store(keys);
        self
    }

    /// Sets what a plain activation does.
    #[must_use]
    pub fn with_behavior(mut self, behavior: SelectionBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Sets whether the last selected key may be deselected.
    #[must_use]
    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// The active selection mode.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The active activation behavior.
    #[must_use]
    pub fn behavior(&self) -> SelectionBehavior {
        self.behavior
    }

    /// Returns `true` if the selection is owned by the host.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Returns `true` if the selection may become empty through user action.
    #[must_use]
    pub fn allows_empty(&self) -> bool {
        self.allow_empty
    }

    /// The selected keys, in selection order.
    #[must_use]
    pub fn selected_keys(&self) -> &[K] {
        &self.selected
    }

    /// Returns `true` if `key` is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.members.contains(key)
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The key range selections extend from.
    #[must_use]
    pub fn anchor(&self) -> Option<&K> {
        self.anchor.as_ref()
    }

    /// Flips membership of `key` according to the mode.
    ///
    /// - `Multiple`: adds or removes `key`.
    /// - `Single`: selects only `key`; if `key` is already the sole member it is
    ///   deselected when empty selections are allowed.
    /// - `None`: no-op.
    pub fn toggle(&mut self, key: K) -> Option<SelectionChange<K>> {
        let next = match self.mode {
            SelectionMode::None => return None,
            SelectionMode::Single => {
                if self.is_selected(&key) {
                    if !self.allow_empty {
                        return None;
                    }
                    Vec::new()
                } else {
                    alloc::vec![key.clone()]
                }
            }
            SelectionMode::Multiple => {
                if self.is_selected(&key) {
                    if self.selected.len() == 1 && !self.allow_empty {
                        return None;
                    }
                    self.selected.iter().filter(|k| **k != key).cloned().collect()
                } else {
                    let mut next = self.selected.clone();
                    next.push(key.clone());
                    next
                }
            }
        };
        self.anchor = Some(key);
        self.propose(next)
    }

    /// Replaces the selection with exactly `key`.
    pub fn select(&mut self, key: K) -> Option<SelectionChange<K>> {
        if self.mode == SelectionMode::None {
            return None;
        }
        self.anchor = Some(key.clone());
        self.propose(alloc::vec![key])
    }

    /// Applies a plain activation of `key` using the configured behavior.
    pub fn activate(&mut self, key: K) -> Option<SelectionChange<K>> {
        match self.behavior {
            SelectionBehavior::Toggle => self.toggle(key),
            SelectionBehavior::Replace => self.select(key),
        }
    }

    /// Selects the enabled items between the anchor and `key`, inclusive.
    ///
    /// Only meaningful in `Multiple` mode; `Single` mode selects `key`. Without
    /// an anchor in `collection` this behaves like [`select`](Self::select).
    /// The anchor itself does not move.
    pub fn extend_to(&mut self, key: K, collection: &Collection<K>) -> Option<SelectionChange<K>> {
        match self.mode {
            SelectionMode::None => return None,
            SelectionMode::Single => return self.select(key),
            SelectionMode::Multiple => {}
        }
        let to = collection.index_of(&key)?;
        let Some(from) = self.anchor.as_ref().and_then(|a| collection.index_of(a)) else {
            return self.select(key);
        };
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        let next = collection.nodes()[lo..=hi]
            .iter()
            .filter(|n| n.is_navigable())
            .map(|n| n.key.clone())
            .collect();
        self.propose(next)
    }

    /// Selects every enabled item of `collection` (`Multiple` mode only).
    pub fn select_all(&mut self, collection: &Collection<K>) -> Option<SelectionChange<K>> {
        if self.mode != SelectionMode::Multiple {
            return None;
        }
        let next = collection.navigable().map(|n| n.key.clone()).collect();
        self.propose(next)
    }

    /// Deselects everything, unless empty selections are disallowed.
    pub fn clear(&mut self) -> Option<SelectionChange<K>> {
        if self.selected.is_empty() || !self.allow_empty {
            return None;
        }
        self.propose(Vec::new())
    }

    /// Replaces the selection with an authoritative value.
    ///
    /// This is how controlled owners push their value back, and how hosts
    /// reset an uncontrolled value. The value is normalized against the mode:
    /// `Single` keeps only the first key and `None` keeps nothing. Returns
    /// [`SelectionChange::Changed`] when membership differs from the current set.
    pub fn replace(&mut self, keys: impl IntoIterator<Item = K>) -> Option<SelectionChange<K>> {
        let next = self.normalize(keys);
        if self.same_members(&next) {
            return None;
        }
        tracing::debug!(
            count = next.len(),
            controlled = self.controlled,
            "selection replaced"
        );
        self.store(next);
        Some(SelectionChange::Changed(self.selected.clone()))
    }

    fn normalize(&self, keys: impl IntoIterator<Item = K>) -> Vec<K> {
        let mut out: Vec<K> = Vec::new();
        let mut seen = HashSet::new();
        let mut supplied = 0_usize;
        for key in keys {
            supplied += 1;
            match self.mode {
                SelectionMode::None => {}
                SelectionMode::Single => {
                    if out.is_empty() {
                        out.push(key);
                    }
                }
                SelectionMode::Multiple => {
                    if seen.insert(key.clone()) {
                        out.push(key);
                    }
                }
            }
        }
        if supplied > out.len() {
            tracing::debug!(
                supplied,
                kept = out.len(),
                mode = self.mode.as_str(),
                "selection value corrected for mode"
            );
        }
        out
    }

    fn propose(&mut self, next: Vec<K>) -> Option<SelectionChange<K>> {
        if self.same_members(&next) {
            return None;
        }
        if self.controlled {
            tracing::trace!(count = next.len(), "selection change requested");
            return Some(SelectionChange::Requested(next));
        }
        tracing::trace!(count = next.len(), "selection changed");
        self.store(next);
        Some(SelectionChange::Changed(self.selected.clone()))
    }

    /// `next` holds no duplicates.
    fn same_members(&self, next: &[K]) -> bool {
        next.len() == self.selected.len() && next.iter().all(|k| self.members.contains(k))
    }

    fn store(&mut self, next: Vec<K>) {
        self.members.clear();
        self.members.extend(next.iter().cloned());
        self.selected = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use understory_collection::Descriptor;

    #[test]
    fn none_mode_never_selects() {
        let mut sel = SelectionController::new(SelectionMode::None);
        assert_eq!(sel.toggle(1_u32), None);
        assert_eq!(sel.select(1), None);
        assert_eq!(sel.replace([1, 2]), None);
        assert!(sel.is_empty());
    }

    #[test]
    fn single_mode_holds_at_most_one_key() {
        let mut sel = SelectionController::new(SelectionMode::Single);
        for key in [1_u32, 2, 2, 3, 1, 1, 1, 4] {
            let _ = sel.toggle(key);
            assert!(sel.selected_keys().len() <= 1, "single mode overflowed");
        }
    }

    #[test]
    fn single_mode_deselects_sole_member_when_allowed() {
        let mut sel = SelectionController::new(SelectionMode::Single);
        sel.toggle(1_u32);
        assert_eq!(sel.toggle(1), Some(SelectionChange::Changed(vec![])));

        let mut strict = SelectionController::new(SelectionMode::Single).with_allow_empty(false);
        strict.toggle(1_u32);
        assert_eq!(strict.toggle(1), None, "no-op toggles must not notify");
        assert!(strict.is_selected(&1));
    }

    #[test]
    fn multiple_mode_flips_membership() {
        let mut sel = SelectionController::new(SelectionMode::Multiple);
        assert_eq!(sel.toggle(1_u32), Some(SelectionChange::Changed(vec![1])));
        assert_eq!(sel.toggle(2), Some(SelectionChange::Changed(vec![1, 2])));
        assert_eq!(sel.toggle(1), Some(SelectionChange::Changed(vec![2])));
    }

    #[test]
    fn multiple_mode_keeps_last_key_when_empty_disallowed() {
        let mut sel = SelectionController::new(SelectionMode::Multiple).with_allow_empty(false);
        sel.toggle(1_u32);
        assert_eq!(sel.toggle(1), None);
        assert_eq!(sel.clear(), None);
        assert_eq!(sel.selected_keys(), &[1]);
    }

    #[test]
    fn replace_behavior_selects_only_activated_key() {
        let mut sel = SelectionController::new(SelectionMode::Multiple)
            .with_behavior(SelectionBehavior::Replace)
            .with_default_selection([1_u32, 2]);
        assert_eq!(sel.activate(3), Some(SelectionChange::Changed(vec![3])));
        assert_eq!(sel.activate(3), None);
    }

    #[test]
    fn controlled_toggle_only_requests() {
        let mut sel = SelectionController::controlled(SelectionMode::Single, [1_u32]);
        assert_eq!(sel.toggle(2), Some(SelectionChange::Requested(vec![2])));
        assert_eq!(sel.selected_keys(), &[1], "controlled value must not move");
        assert_eq!(sel.replace([2]), Some(SelectionChange::Changed(vec![2])));
        assert!(sel.is_selected(&2));
    }

    #[test]
    fn replace_truncates_single_mode() {
        let mut sel = SelectionController::new(SelectionMode::Single);
        assert_eq!(sel.replace([5_u32, 6, 7]), Some(SelectionChange::Changed(vec![5])));
        assert_eq!(sel.replace([5]), None, "same membership does not notify");
    }

    #[test]
    fn replace_dedupes_multiple_mode() {
        let mut sel = SelectionController::new(SelectionMode::Multiple);
        assert_eq!(
            sel.replace([1_u32, 1, 2]),
            Some(SelectionChange::Changed(vec![1, 2]))
        );
        assert_eq!(sel.replace([2, 1]), None, "order does not affect membership");
    }

    #[test]
    fn membership_follows_every_update() {
        let c = numbers();
        let mut sel = SelectionController::new(SelectionMode::Multiple)
            .with_default_selection([4_u32, 4, 1]);
        assert_eq!(sel.selected_keys(), &[4, 1]);
        assert!(sel.is_selected(&4) && sel.is_selected(&1));

        sel.toggle(4);
        assert!(!sel.is_selected(&4), "deselected key must leave the index");
        sel.select_all(&c);
        assert!([1, 3, 4].iter().all(|k| sel.is_selected(k)));
        assert!(!sel.is_selected(&2));
        sel.clear();
        assert!(!sel.is_selected(&1));

        let mut controlled = SelectionController::controlled(SelectionMode::Multiple, [3_u32]);
        controlled.toggle(1);
        assert!(!controlled.is_selected(&1), "requests do not touch the index");
        controlled.replace([1, 3]);
        assert!(controlled.is_selected(&1));
    }

    #[test]
    fn large_selection_lookups() {
        let keys = 0_u32..20_000;
        let sel = SelectionController::new(SelectionMode::Multiple).with_default_selection(keys);
        assert_eq!(sel.selected_keys().len(), 20_000);
        assert!((0..20_000).all(|k| sel.is_selected(&k)));
        assert!(!sel.is_selected(&20_000));
    }

    fn numbers() -> Collection<u32> {
        Collection::build(&[
            Descriptor::item(1, "one"),
            Descriptor::item(2, "two").disabled(true),
            Descriptor::section(10, "more", vec![Descriptor::item(3, "three")]),
            Descriptor::item(4, "four"),
        ])
    }

    #[test]
    fn extend_selects_enabled_range_from_anchor() {
        let c = numbers();
        let mut sel = SelectionController::new(SelectionMode::Multiple);
        sel.toggle(4);
        assert_eq!(
            sel.extend_to(1, &c),
            Some(SelectionChange::Changed(vec![1, 3, 4]))
        );
        assert_eq!(sel.anchor(), Some(&4));
    }

    #[test]
    fn extend_without_anchor_selects_key() {
        let c = numbers();
        let mut sel = SelectionController::new(SelectionMode::Multiple);
        assert_eq!(sel.extend_to(3, &c), Some(SelectionChange::Changed(vec![3])));
    }

    #[test]
    fn select_all_skips_disabled_and_sections() {
        let c = numbers();
        let mut sel = SelectionController::new(SelectionMode::Multiple);
        assert_eq!(
            sel.select_all(&c),
            Some(SelectionChange::Changed(vec![1, 3, 4]))
        );
        assert_eq!(sel.select_all(&c), None);

        let mut single = SelectionController::new(SelectionMode::Single);
        assert_eq!(single.select_all(&c), None);
    }
}
