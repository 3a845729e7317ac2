// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus and selection over one collection snapshot.

use alloc::sync::Arc;
use core::hash::Hash;

use understory_collection::Collection;
use understory_focus::{DefaultPolicy, FocusCursor, FocusState, Navigation, TypeaheadBuffer};
use understory_selection::{SelectionController, SelectionMode};

use crate::change::Changes;
use crate::config::ListConfig;
use crate::intent::Intent;

/// The navigation and selection core shared by listboxes, comboboxes, and menu levels.
///
/// Focus and selection only meet through keys: moving focus never changes the
/// selection unless `select_on_focus` is configured, and selecting never moves
/// focus away from the activated key.
#[derive(Clone, Debug)]
pub struct ListState<K> {
    collection: Arc<Collection<K>>,
    cursor: FocusCursor<K, DefaultPolicy>,
    selection: SelectionController<K>,
    select_on_focus: bool,
}

impl<K> ListState<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an idle, unselected list over `collection`.
    #[must_use]
    pub fn new(collection: Arc<Collection<K>>, config: &ListConfig) -> Self {
        Self::with_focus_mode(collection, config, config.virtual_focus())
    }

    pub(crate) fn with_focus_mode(
        collection: Arc<Collection<K>>,
        config: &ListConfig,
        virtual_focus: bool,
    ) -> Self {
        let policy = DefaultPolicy::new(config.wrap()).with_page_size(config.page_size());
        let cursor = FocusCursor::new(policy)
            .with_virtual_focus(virtual_focus)
            .with_typeahead_reset(config.typeahead_reset_ms());
        let selection = SelectionController::new(config.selection_mode())
            .with_behavior(config.selection_behavior())
            .with_allow_empty(config.allow_empty_selection());
        Self {
            collection,
            cursor,
            selection,
            select_on_focus: config.select_on_focus(),
        }
    }

    /// Replaces the selection controller, for controlled values or defaults.
    #[must_use]
    pub fn with_selection(mut self, selection: SelectionController<K>) -> Self {
        self.selection = selection;
        self
    }

    /// The collection snapshot being navigated.
    #[must_use]
    pub fn collection(&self) -> &Arc<Collection<K>> {
        &self.collection
    }

    /// Current focus state.
    #[must_use]
    pub fn focus_state(&self) -> &FocusState<K> {
        self.cursor.state()
    }

    /// The focused key, if any.
    #[must_use]
    pub fn focused_key(&self) -> Option<&K> {
        self.cursor.focused_key()
    }

    /// Returns `true` if focus is virtual (an active descendant).
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        self.cursor.is_virtual()
    }

    /// The typeahead buffer.
    #[must_use]
    pub fn typeahead_buffer(&self) -> &TypeaheadBuffer {
        self.cursor.typeahead_buffer()
    }

    /// Returns `true` if typing `ch` at `now` would be consumed by typeahead.
    #[must_use]
    pub fn accepts_typeahead(&self, ch: char, now: u64) -> bool {
        self.cursor.accepts_typeahead(ch, now)
    }

    /// The selection controller.
    #[must_use]
    pub fn selection(&self) -> &SelectionController<K> {
        &self.selection
    }

    /// The selected keys.
    #[must_use]
    pub fn selected_keys(&self) -> &[K] {
        self.selection.selected_keys()
    }

    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.selection.is_selected(key)
    }

    /// Applies one intent at time `now`.
    ///
    /// - Navigation intents move focus.
    /// - `Typeahead` searches item text; a space that typeahead does not
    ///   consume toggles the focused key instead.
    /// - `SetExplicit` focuses an enabled key.
    /// - `Toggle` focuses and activates an enabled key.
    /// - `Close` clears the selection (when empty selections are allowed).
    /// - `CloseAll` drops focus.
    pub fn handle(&mut self, intent: Intent<K>, now: u64) -> Changes<K> {
        let mut changes = Changes::new();
        match intent {
            Intent::First => self.navigate(Navigation::First, &mut changes),
            Intent::Last => self.navigate(Navigation::Last, &mut changes),
            Intent::Next => self.navigate(Navigation::Next, &mut changes),
            Intent::Previous => self.navigate(Navigation::Prev, &mut changes),
            Intent::PageUp => self.navigate(Navigation::PageUp, &mut changes),
            Intent::PageDown => self.navigate(Navigation::PageDown, &mut changes),
            Intent::Typeahead(ch) => {
                if self.cursor.accepts_typeahead(ch, now) {
                    let moved = self.cursor.typeahead(ch, now, &self.collection);
                    self.follow_focus(moved.as_ref().and_then(|m| m.current.clone()), &mut changes);
                    changes.push_focus(moved);
                } else if ch == ' ' {
                    if let Some(key) = self.cursor.focused_key().cloned() {
                        self.toggle(key, &mut changes);
                    }
                }
            }
            Intent::SetExplicit(key) => {
                changes.push_focus(self.cursor.set_explicit(&key, &self.collection));
            }
            Intent::Toggle(key) => self.toggle(key, &mut changes),
            Intent::Close => changes.push_selection(self.selection.clear()),
            Intent::CloseAll => changes.push_focus(self.cursor.clear()),
        }
        changes
    }

    /// Focuses `key` and selects the enabled items between the selection
    /// anchor and `key`.
    pub fn extend_selection(&mut self, key: K) -> Changes<K> {
        let mut changes = Changes::new();
        if !self.collection.is_navigable(&key) {
            return changes;
        }
        changes.push_focus(self.cursor.set_explicit(&key, &self.collection));
        changes.push_selection(self.selection.extend_to(key, &self.collection));
        changes
    }

    /// Selects every enabled item (multiple mode only).
    pub fn select_all(&mut self) -> Changes<K> {
        let mut changes = Changes::new();
        changes.push_selection(self.selection.select_all(&self.collection));
        changes
    }

    /// Deselects everything, unless empty selections are disallowed.
    pub fn clear_selection(&mut self) -> Changes<K> {
        let mut changes = Changes::new();
        changes.push_selection(self.selection.clear());
        changes
    }

    /// Pushes an authoritative selection value, as a controlled owner does.
    pub fn replace_selection(&mut self, keys: impl IntoIterator<Item = K>) -> Changes<K> {
        let mut changes = Changes::new();
        changes.push_selection(self.selection.replace(keys));
        changes
    }

    /// Swaps in a rebuilt collection. Focus on a key that is gone or disabled
    /// returns to idle.
    pub fn set_collection(&mut self, collection: Arc<Collection<K>>) -> Changes<K> {
        tracing::debug!(
            nodes = collection.len(),
            items = collection.item_count(),
            "list collection replaced"
        );
        self.collection = collection;
        let mut changes = Changes::new();
        changes.push_focus(self.cursor.validate(&self.collection));
        changes
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut FocusCursor<K, DefaultPolicy> {
        &mut self.cursor
    }

    /// Installs a snapshot the cursor was already reconciled against.
    pub(crate) fn install_collection(&mut self, collection: Arc<Collection<K>>) {
        self.collection = collection;
    }

    fn navigate(&mut self, direction: Navigation, changes: &mut Changes<K>) {
        let moved = self.cursor.navigate(direction, &self.collection);
        self.follow_focus(moved.as_ref().and_then(|m| m.current.clone()), changes);
        changes.push_focus(moved);
    }

    fn follow_focus(&mut self, focused: Option<K>, changes: &mut Changes<K>) {
        if !self.select_on_focus || self.selection.mode() != SelectionMode::Single {
            return;
        }
        if let Some(key) = focused {
            changes.push_selection(self.selection.select(key));
        }
    }

    fn toggle(&mut self, key: K, changes: &mut Changes<K>) {
        if !self.collection.is_navigable(&key) {
            tracing::trace!("ignored activation of a non-navigable key");
            return;
        }
        changes.push_focus(self.cursor.set_explicit(&key, &self.collection));
        changes.push_selection(self.selection.activate(key));
    }
}
