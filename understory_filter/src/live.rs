// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The live filter.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::hash::Hash;

use understory_collection::Collection;
use understory_event_state::timer::DeadlineTimer;
use understory_focus::{FocusChange, FocusCursor, FocusPolicy};

use crate::matcher::MatchMode;

/// The applied query and the item keys it kept, in collection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState<K> {
    /// The query that produced `filtered_keys`.
    pub query: String,
    /// Keys of the items that matched, in original order.
    pub filtered_keys: Vec<K>,
}

/// What applying a query changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome<K> {
    /// The new filtered keys, when they differ from the previous result.
    pub filtered_keys: Option<Vec<K>>,
    /// The focus correction made in the same step, if any.
    pub focus: Option<FocusChange<K>>,
}

impl<K> FilterOutcome<K> {
    const NONE: Self = Self {
        filtered_keys: None,
        focus: None,
    };

    /// Returns `true` if nothing observable changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered_keys.is_none() && self.focus.is_none()
    }
}

impl<K> Default for FilterOutcome<K> {
    fn default() -> Self {
        Self::NONE
    }
}

/// Derives a filtered collection from a source collection and a text query.
#[derive(Clone, Debug)]
pub struct LiveFilter<K> {
    source: Arc<Collection<K>>,
    filtered: Arc<Collection<K>>,
    state: FilterState<K>,
    mode: MatchMode,
    debounce_ms: u64,
    pending: DeadlineTimer<String>,
}

impl<K> LiveFilter<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a filter over `source` with an empty query (everything visible).
    #[must_use]
    pub fn new(source: Arc<Collection<K>>, mode: MatchMode) -> Self {
        let state = FilterState {
            query: String::new(),
            filtered_keys: source.item_keys().cloned().collect(),
        };
        Self {
            filtered: Arc::clone(&source),
            source,
            state,
            mode,
            debounce_ms: 0,
            pending: DeadlineTimer::new(),
        }
    }

    /// Delays applying queries by `debounce_ms` milliseconds. Zero applies
    /// queries synchronously.
    #[must_use]
    pub fn with_debounce(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// The applied query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.state.query
    }

    /// Item keys kept by the applied query, in original order.
    #[must_use]
    pub fn filtered_keys(&self) -> &[K] {
        &self.state.filtered_keys
    }

    /// The applied query and its result.
    #[must_use]
    pub fn state(&self) -> &FilterState<K> {
        &self.state
    }

    /// The filtered collection snapshot navigation should run against.
    #[must_use]
    pub fn collection(&self) -> &Arc<Collection<K>> {
        &self.filtered
    }

    /// The unfiltered source collection.
    #[must_use]
    pub fn source(&self) -> &Arc<Collection<K>> {
        &self.source
    }

    /// The active match mode.
    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns `true` if a debounced query is waiting to be applied.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// The debounced query waiting to be applied, if any.
    #[must_use]
    pub fn pending_query(&self) -> Option<&str> {
        self.pending.pending().map(|d| d.payload.as_str())
    }

    /// Sets the query typed at `now`.
    ///
    /// Without debounce the query is applied immediately and `cursor` is
    /// reconciled in the same step. With debounce the query replaces any
    /// pending one and nothing changes until [`poll`](Self::poll) reaches its
    /// deadline.
    pub fn set_query<P: FocusPolicy<K>>(
        &mut self,
        query: impl Into<String>,
        now: u64,
        cursor: &mut FocusCursor<K, P>,
    ) -> FilterOutcome<K> {
        let query = query.into();
        if self.debounce_ms == 0 {
            self.pending.cancel();
            return self.apply(query, cursor);
        }
        self.pending.start(query, now, self.debounce_ms);
        FilterOutcome::NONE
    }

    /// Applies the pending query if its debounce deadline has passed.
    pub fn poll<P: FocusPolicy<K>>(
        &mut self,
        now: u64,
        cursor: &mut FocusCursor<K, P>,
    ) -> FilterOutcome<K> {
        match self.pending.poll(now) {
            Some(query) => self.apply(query, cursor),
            None => FilterOutcome::NONE,
        }
    }

    /// Applies the pending query right away, ignoring its deadline.
    pub fn flush<P: FocusPolicy<K>>(&mut self, cursor: &mut FocusCursor<K, P>) -> FilterOutcome<K> {
        match self.pending.cancel() {
            Some(query) => self.apply(query, cursor),
            None => FilterOutcome::NONE,
        }
    }

    /// Replaces the source collection and re-applies the current query.
    pub fn set_source<P: FocusPolicy<K>>(
        &mut self,
        source: Arc<Collection<K>>,
        cursor: &mut FocusCursor<K, P>,
    ) -> FilterOutcome<K> {
        self.source = source;
        let query = self.state.query.clone();
        self.apply(query, cursor)
    }

    fn apply<P: FocusPolicy<K>>(
        &mut self,
        query: String,
        cursor: &mut FocusCursor<K, P>,
    ) -> FilterOutcome<K> {
        let filtered = if query.is_empty() {
            Arc::clone(&self.source)
        } else {
            let mode = self.mode;
            Arc::new(self.source.retain(|n| mode.matches(&n.text_value, &query)))
        };
        let keys: Vec<K> = filtered.item_keys().cloned().collect();
        let changed = keys != self.state.filtered_keys;
        tracing::debug!(
            query_len = query.len(),
            matched = keys.len(),
            total = self.source.item_count(),
            changed,
            "filter applied"
        );

        self.filtered = filtered;
        self.state.query = query;
        if changed {
            self.state.filtered_keys = keys;
        }
        // An idle cursor has nothing to reconcile.
        let focus = if cursor.focused_key().is_some() {
            cursor.validate_or_first(&self.filtered)
        } else {
            None
        };
        FilterOutcome {
            filtered_keys: changed.then(|| self.state.filtered_keys.clone()),
            focus,
        }
    }
}
