// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filtered combobox policy.

use alloc::string::String;
use alloc::sync::Arc;
use core::hash::Hash;

use understory_collection::Collection;
use understory_filter::{FilterOutcome, LiveFilter};
use understory_selection::SelectionMode;

use crate::change::{Change, Changes};
use crate::config::ListConfig;
use crate::intent::Intent;
use crate::keys::{Key, Modifiers, list_intent};
use crate::list::ListState;

/// A text input driving a filtered popup list.
///
/// The input keeps real focus, so the list cursor is always virtual. Typed
/// text goes through [`set_input`](Self::set_input) rather than typeahead.
#[derive(Clone, Debug)]
pub struct Combobox<K> {
    list: ListState<K>,
    filter: LiveFilter<K>,
    open: bool,
}

impl<K> Combobox<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a closed combobox over `source` with an empty input.
    #[must_use]
    pub fn new(source: Arc<Collection<K>>, config: &ListConfig) -> Self {
        let filter = LiveFilter::new(Arc::clone(&source), config.match_mode())
            .with_debounce(config.debounce_ms());
        Self {
            list: ListState::with_focus_mode(source, config, true),
            filter,
            open: false,
        }
    }

    /// The list state over the filtered collection.
    #[must_use]
    pub fn state(&self) -> &ListState<K> {
        &self.list
    }

    /// The live filter.
    #[must_use]
    pub fn filter(&self) -> &LiveFilter<K> {
        &self.filter
    }

    /// Returns `true` if the popup is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The text last typed, whether or not its filter has been applied yet.
    #[must_use]
    pub fn input(&self) -> &str {
        self.filter.pending_query().unwrap_or(self.filter.query())
    }

    /// Sets the input text typed at `now`.
    ///
    /// Without debounce the filter, focus, and open state update right away.
    /// With debounce nothing changes until [`poll`](Self::poll) applies the
    /// latest text.
    pub fn set_input(&mut self, text: impl Into<String>, now: u64) -> Changes<K> {
        let outcome = self.filter.set_query(text, now, self.list.cursor_mut());
        if self.filter.is_pending() {
            return Changes::new();
        }
        self.filtered(outcome, true)
    }

    /// Applies debounced input whose deadline has passed.
    pub fn poll(&mut self, now: u64) -> Changes<K> {
        if !self.filter.is_pending() {
            return Changes::new();
        }
        let outcome = self.filter.poll(now, self.list.cursor_mut());
        if self.filter.is_pending() {
            return Changes::new();
        }
        self.filtered(outcome, true)
    }

    /// Replaces the unfiltered items and re-applies the current input.
    pub fn set_source(&mut self, source: Arc<Collection<K>>) -> Changes<K> {
        let outcome = self.filter.set_source(source, self.list.cursor_mut());
        self.filtered(outcome, false)
    }

    /// Opens the popup if there is anything to show.
    pub fn open(&mut self) -> Changes<K> {
        let mut changes = Changes::new();
        let has_items = self.list.collection().navigable_count() > 0;
        self.set_open(has_items, &mut changes);
        changes
    }

    /// Closes the popup.
    pub fn close(&mut self) -> Changes<K> {
        let mut changes = Changes::new();
        self.set_open(false, &mut changes);
        changes
    }

    /// Applies one intent.
    ///
    /// Navigation opens a closed popup first. Activating a key in single mode
    /// closes the popup. `Close` closes an open popup, or clears the input of a
    /// closed one. `Typeahead` is ignored because the input owns typed text.
    pub fn handle(&mut self, intent: Intent<K>, now: u64) -> Changes<K> {
        match intent {
            Intent::First
            | Intent::Last
            | Intent::Next
            | Intent::Previous
            | Intent::PageUp
            | Intent::PageDown => {
                let mut changes = self.open();
                if self.open {
                    changes.merge(self.list.handle(intent, now));
                }
                changes
            }
            Intent::Typeahead(_) => Changes::new(),
            Intent::SetExplicit(_) => self.list.handle(intent, now),
            Intent::Toggle(_) => {
                let mut changes = self.list.handle(intent, now);
                let selected =
                    changes.selection().is_some() || changes.selection_requested().is_some();
                if selected && self.list.selection().mode() == SelectionMode::Single {
                    self.set_open(false, &mut changes);
                }
                changes
            }
            Intent::Close => {
                if self.open {
                    return self.close();
                }
                let mut outcome = self.filter.set_query(String::new(), now, self.list.cursor_mut());
                if self.filter.is_pending() {
                    outcome = self.filter.flush(self.list.cursor_mut());
                }
                self.filtered(outcome, false)
            }
            Intent::CloseAll => {
                let mut changes = self.close();
                changes.merge(self.list.handle(Intent::CloseAll, now));
                changes
            }
        }
    }

    /// Applies one key press. Characters are left to the input.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers, now: u64) -> Changes<K> {
        if matches!(key, Key::Character(_)) {
            return Changes::new();
        }
        if key == Key::Enter && !self.open {
            return Changes::new();
        }
        match list_intent(key, modifiers, self.list.focused_key()) {
            Some(intent) => self.handle(intent, now),
            None => Changes::new(),
        }
    }

    /// Typed input also focuses the first match when nothing is focused.
    fn filtered(&mut self, outcome: FilterOutcome<K>, typed: bool) -> Changes<K> {
        let collection = Arc::clone(self.filter.collection());
        self.list.install_collection(Arc::clone(&collection));
        let mut changes = Changes::new();
        if let Some(keys) = outcome.filtered_keys {
            changes.push(Change::Filter(keys));
        }
        changes.push_focus(outcome.focus);
        if typed && self.list.focused_key().is_none() {
            let first = self.list.cursor_mut().validate_or_first(&collection);
            changes.push_focus(first);
        }
        let has_items = collection.navigable_count() > 0;
        if typed || !has_items {
            self.set_open(has_items, &mut changes);
        }
        changes
    }

    fn set_open(&mut self, open: bool, changes: &mut Changes<K>) {
        if self.open == open {
            return;
        }
        self.open = open;
        tracing::debug!(open, "combobox popup toggled");
        changes.push(Change::Open(open));
    }
}
