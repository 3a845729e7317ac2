// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover intent: delayed open requests for pointer hover.
//!
//! Passing the pointer over a submenu trigger on the way to somewhere else should not
//! open the submenu. [`HoverIntent`] only reports a target once the pointer has rested on
//! it for the configured delay; leaving the target before the delay elapses cancels the
//! request.
//!
//! ## Usage
//!
//! ```
//! use understory_event_state::hover::HoverIntent;
//!
//! let mut hover: HoverIntent<u32> = HoverIntent::new(250);
//!
//! // Pointer enters trigger 7, then leaves before the delay: nothing opens.
//! hover.on_enter(7, 1000);
//! hover.on_leave(&7);
//! assert_eq!(hover.poll(1300), None);
//!
//! // Pointer rests on trigger 8 long enough.
//! hover.on_enter(8, 2000);
//! assert_eq!(hover.poll(2100), None);
//! assert_eq!(hover.poll(2250), Some(8));
//! ```
//!
//! ## Rules
//!
//! 1. Entering a target starts its delay and supersedes any other pending target.
//! 2. Re-entering the target that is already pending keeps the original deadline.
//! 3. Leaving the pending target cancels it; leaving any other target is ignored.
//! 4. A fired request is delivered once by [`HoverIntent::poll`].

use crate::timer::DeadlineTimer;

/// Default hover intent delay in milliseconds.
pub const DEFAULT_HOVER_INTENT_MS: u64 = 250;

/// Tracks the hovered target and a pending delayed activation.
#[derive(Clone, Debug)]
pub struct HoverIntent<K> {
    /// Delay in milliseconds before a hover counts as intent.
    pub delay: u64,
    hovered: Option<K>,
    timer: DeadlineTimer<K>,
}

impl<K: PartialEq + Clone> HoverIntent<K> {
    /// Creates a tracker with the given delay in milliseconds.
    #[must_use]
    pub fn new(delay: u64) -> Self {
        Self {
            delay,
            hovered: None,
            timer: DeadlineTimer::new(),
        }
    }

    /// Records the pointer entering `target` at `now`.
    pub fn on_enter(&mut self, target: K, now: u64) {
        self.hovered = Some(target.clone());
        if self.pending_target() == Some(&target) {
            return;
        }
        self.timer.start(target, now, self.delay);
    }

    /// Records the pointer leaving `target`.
    ///
    /// Returns `true` if a pending request for `target` was cancelled.
    pub fn on_leave(&mut self, target: &K) -> bool {
        if self.hovered.as_ref() == Some(target) {
            self.hovered = None;
        }
        if self.pending_target() == Some(target) {
            self.timer.cancel();
            return true;
        }
        false
    }

    /// Delivers the pending target if its delay has elapsed by `now`.
    pub fn poll(&mut self, now: u64) -> Option<K> {
        self.timer.poll(now)
    }

    /// Drops any pending request and forgets the hovered target.
    pub fn cancel(&mut self) {
        self.hovered = None;
        self.timer.cancel();
    }

    /// The target currently waiting out its delay.
    #[must_use]
    pub fn pending_target(&self) -> Option<&K> {
        self.timer.pending().map(|d| &d.payload)
    }

    /// When the pending target becomes due.
    #[must_use]
    pub fn due_at(&self) -> Option<u64> {
        self.timer.due_at()
    }

    /// The target under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<&K> {
        self.hovered.as_ref()
    }
}

impl<K: PartialEq + Clone> Default for HoverIntent<K> {
    fn default() -> Self {
        Self::new(DEFAULT_HOVER_INTENT_MS)
    }
}
