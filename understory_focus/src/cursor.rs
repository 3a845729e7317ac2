// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus cursor state machine.

use core::hash::Hash;

use understory_collection::Collection;

use crate::typeahead::{TypeaheadBuffer, find_match};
use crate::{FocusPolicy, Navigation};

/// Where keyboard focus currently is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FocusState<K> {
    /// Nothing is focused.
    #[default]
    Idle,
    /// The given key is focused.
    Focused(K),
}

impl<K> FocusState<K> {
    /// The focused key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&K> {
        match self {
            Self::Idle => None,
            Self::Focused(key) => Some(key),
        }
    }

    /// Returns `true` if nothing is focused.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// A change of focused key, reported once per operation that moves focus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusChange<K> {
    /// The key focused before the operation.
    pub previous: Option<K>,
    /// The key focused after the operation.
    pub current: Option<K>,
}

/// Applies `direction` to `state` and returns the resulting state.
///
/// When the policy has no candidate (for example at a non-wrapping edge) the
/// state is kept if its key is still enabled in `collection`, and becomes
/// [`FocusState::Idle`] otherwise. This is a pure function of its inputs.
pub fn transition<K, P>(
    state: &FocusState<K>,
    direction: Navigation,
    collection: &Collection<K>,
    policy: &P,
) -> FocusState<K>
where
    K: Clone + Eq + Hash,
    P: FocusPolicy<K> + ?Sized,
{
    match policy.next(state.key(), direction, collection) {
        Some(key) if collection.is_navigable(&key) => FocusState::Focused(key),
        _ => match state.key() {
            Some(key) if collection.is_navigable(key) => state.clone(),
            _ => FocusState::Idle,
        },
    }
}

/// Owns the focused key of one collection.
///
/// When `virtual_focus` is set, the host keeps real input focus elsewhere (for
/// example on a text input) and renders the cursor as an active descendant.
#[derive(Clone, Debug)]
pub struct FocusCursor<K, P> {
    state: FocusState<K>,
    virtual_focus: bool,
    policy: P,
    typeahead: TypeaheadBuffer,
}

impl<K, P> FocusCursor<K, P>
where
    K: Clone + Eq + Hash,
    P: FocusPolicy<K>,
{
    /// Creates an idle cursor driven by `policy`.
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self {
            state: FocusState::Idle,
            virtual_focus: false,
            policy,
            typeahead: TypeaheadBuffer::default(),
        }
    }

    /// Sets whether focus is virtual.
    #[must_use]
    pub fn with_virtual_focus(mut self, virtual_focus: bool) -> Self {
        self.virtual_focus = virtual_focus;
        self
    }

    /// Sets the typeahead reset pause in milliseconds.
    #[must_use]
    pub fn with_typeahead_reset(mut self, reset_after: u64) -> Self {
        self.typeahead.reset_after = reset_after;
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &FocusState<K> {
        &self.state
    }

    /// The focused key, if any.
    #[must_use]
    pub fn focused_key(&self) -> Option<&K> {
        self.state.key()
    }

    /// Returns `true` if focus is tracked without moving real input focus.
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        self.virtual_focus
    }

    /// The traversal policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The typeahead buffer.
    #[must_use]
    pub fn typeahead_buffer(&self) -> &TypeaheadBuffer {
        &self.typeahead
    }

    /// Applies a navigation intent.
    pub fn navigate(
        &mut self,
        direction: Navigation,
        collection: &Collection<K>,
    ) -> Option<FocusChange<K>> {
        let next = transition(&self.state, direction, collection, &self.policy);
        self.set_state(next)
    }

    /// Handles one typeahead keystroke at `now`.
    ///
    /// On a match, focus moves to the first enabled item at or after the cursor
    /// whose text starts with the buffer. Without a match, both the buffer and
    /// focus are left as they were. Keystrokes the buffer does not accept (see
    /// [`TypeaheadBuffer::accepts`]) are ignored.
    pub fn typeahead(
        &mut self,
        ch: char,
        now: u64,
        collection: &Collection<K>,
    ) -> Option<FocusChange<K>> {
        if !self.typeahead.accepts(ch, now) {
            return None;
        }
        let before = self.typeahead.clone();
        self.typeahead.push(ch, now);
        let from = self.state.key().and_then(|k| collection.index_of(k));
        let Some(node) = find_match(collection, self.typeahead.text(), from) else {
            tracing::trace!(len = self.typeahead.text().len(), "typeahead found no match");
            self.typeahead = before;
            return None;
        };
        let key = node.key.clone();
        self.set_state(FocusState::Focused(key))
    }

    /// Returns `true` if `ch` would be consumed by typeahead at `now`.
    #[must_use]
    pub fn accepts_typeahead(&self, ch: char, now: u64) -> bool {
        self.typeahead.accepts(ch, now)
    }

    /// Focuses `key` if it is an enabled item of `collection`; otherwise a no-op.
    pub fn set_explicit(&mut self, key: &K, collection: &Collection<K>) -> Option<FocusChange<K>> {
        if !collection.is_navigable(key) {
            return None;
        }
        self.set_state(FocusState::Focused(key.clone()))
    }

    /// Revalidates against a new snapshot: a focused key that is gone or no
    /// longer enabled returns the cursor to [`FocusState::Idle`].
    pub fn validate(&mut self, collection: &Collection<K>) -> Option<FocusChange<K>> {
        match self.state.key() {
            Some(key) if !collection.is_navigable(key) => self.set_state(FocusState::Idle),
            _ => None,
        }
    }

    /// Revalidates against a new snapshot: a focused key that is gone or no
    /// longer enabled moves to the first enabled item (or `Idle` if none).
    pub fn validate_or_first(&mut self, collection: &Collection<K>) -> Option<FocusChange<K>> {
        match self.state.key() {
            Some(key) if collection.is_navigable(key) => None,
            _ => {
                let next = collection
                    .first_navigable()
                    .map_or(FocusState::Idle, |n| FocusState::Focused(n.key.clone()));
                self.set_state(next)
            }
        }
    }

    /// Clears focus and the typeahead buffer.
    pub fn clear(&mut self) -> Option<FocusChange<K>> {
        self.typeahead.clear();
        self.set_state(FocusState::Idle)
    }

    fn set_state(&mut self, next: FocusState<K>) -> Option<FocusChange<K>> {
        if next == self.state {
            return None;
        }
        let previous = core::mem::replace(&mut self.state, next);
        tracing::trace!(
            idle = self.state.is_idle(),
            virtual_focus = self.virtual_focus,
            "focus moved"
        );
        Some(FocusChange {
            previous: previous.key().cloned(),
            current: self.state.key().cloned(),
        })
    }
}
