// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat listbox policy.

use alloc::sync::Arc;
use core::hash::Hash;

use understory_collection::Collection;
use understory_selection::SelectionMode;

use crate::change::Changes;
use crate::config::ListConfig;
use crate::intent::Intent;
use crate::keys::{Key, Modifiers, list_intent};
use crate::list::ListState;

/// A flat, single-level list of options.
///
/// Real focus moves onto the focused option unless the configuration asks for
/// virtual focus. In multiple mode, Shift with a vertical arrow extends the
/// selection and Control+A selects everything.
#[derive(Clone, Debug)]
pub struct Listbox<K> {
    list: ListState<K>,
}

impl<K> Listbox<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a listbox over `collection`.
    #[must_use]
    pub fn new(collection: Arc<Collection<K>>, config: &ListConfig) -> Self {
        Self {
            list: ListState::new(collection, config),
        }
    }

    /// Wraps an existing list state, for example one with a controlled selection.
    #[must_use]
    pub fn from_state(list: ListState<K>) -> Self {
        Self { list }
    }

    /// The underlying list state.
    #[must_use]
    pub fn state(&self) -> &ListState<K> {
        &self.list
    }

    /// Mutable access to the underlying list state.
    pub fn state_mut(&mut self) -> &mut ListState<K> {
        &mut self.list
    }

    /// Applies one intent. See [`ListState::handle`].
    pub fn handle(&mut self, intent: Intent<K>, now: u64) -> Changes<K> {
        self.list.handle(intent, now)
    }

    /// Applies one key press using the default list bindings.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers, now: u64) -> Changes<K> {
        let multiple = self.list.selection().mode() == SelectionMode::Multiple;
        if multiple && modifiers.contains(Modifiers::SHIFT) {
            if let Some(intent @ (Intent::Next | Intent::Previous)) =
                list_intent(key, Modifiers::empty(), self.list.focused_key())
            {
                let mut changes = self.list.handle(intent, now);
                if let Some(focused) = self.list.focused_key().cloned() {
                    changes.merge(self.list.extend_selection(focused));
                }
                return changes;
            }
        }
        if multiple
            && modifiers.intersects(Modifiers::CONTROL | Modifiers::META)
            && matches!(key, Key::Character('a' | 'A'))
        {
            return self.list.select_all();
        }
        match list_intent(key, modifiers, self.list.focused_key()) {
            Some(intent) => self.list.handle(intent, now),
            None => Changes::new(),
        }
    }

    /// Swaps in a rebuilt collection. See [`ListState::set_collection`].
    pub fn set_collection(&mut self, collection: Arc<Collection<K>>) -> Changes<K> {
        self.list.set_collection(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_collection::Descriptor;
    use understory_focus::WrapMode;

    fn colors() -> Arc<Collection<&'static str>> {
        Arc::new(Collection::build(&[
            Descriptor::item("red", "Red"),
            Descriptor::item("green", "Green"),
            Descriptor::item("blue", "Blue"),
        ]))
    }

    fn multiple() -> ListConfig {
        ListConfig::builder()
            .selection_mode(SelectionMode::Multiple)
            .wrap(WrapMode::Never)
            .build()
            .unwrap()
    }

    #[test]
    fn arrows_stop_at_the_end_without_wrap() {
        let mut listbox = Listbox::new(colors(), &multiple());
        let none = Modifiers::empty();
        listbox.handle_key(Key::End, none, 0);
        assert!(listbox.handle_key(Key::ArrowDown, none, 0).is_empty());
        assert_eq!(listbox.state().focused_key(), Some(&"blue"));
        assert!(!listbox.state().is_virtual());
    }

    #[test]
    fn shift_arrow_extends_from_anchor() {
        let mut listbox = Listbox::new(colors(), &multiple());
        let none = Modifiers::empty();
        listbox.handle_key(Key::Home, none, 0);
        listbox.handle_key(Key::Enter, none, 0);
        listbox.handle_key(Key::ArrowDown, Modifiers::SHIFT, 0);
        let changes = listbox.handle_key(Key::ArrowDown, Modifiers::SHIFT, 0);
        assert_eq!(changes.focus(), Some(Some(&"blue")));
        assert_eq!(changes.selection(), Some(&["red", "green", "blue"][..]));
    }

    #[test]
    fn control_a_selects_all() {
        let mut listbox = Listbox::new(colors(), &multiple());
        let changes = listbox.handle_key(Key::Character('a'), Modifiers::CONTROL, 0);
        assert_eq!(changes.selection().map(<[_]>::len), Some(3));
    }

    #[test]
    fn typing_jumps_by_prefix() {
        let mut listbox = Listbox::new(colors(), &multiple());
        let changes = listbox.handle_key(Key::Character('G'), Modifiers::SHIFT, 0);
        assert_eq!(changes.focus(), Some(Some(&"green")));
    }
}
