// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot cancellable deadlines.
//!
//! A [`DeadlineTimer`] holds at most one pending deadline together with a payload.
//! Starting a new deadline replaces the old one; cancelling removes it. Each start
//! hands out a fresh [`TimerToken`], and the previous token becomes stale *before*
//! anything else happens, so a deadline can fire or be cancelled, never both.
//!
//! ## Usage
//!
//! ```
//! use understory_event_state::timer::DeadlineTimer;
//!
//! let mut timer: DeadlineTimer<&str> = DeadlineTimer::new();
//!
//! let first = timer.start("q1", 1000, 150);
//! // A newer request supersedes the pending one.
//! let second = timer.start("q2", 1050, 150);
//! assert!(!timer.is_current(first));
//! assert!(timer.is_current(second));
//!
//! // Not due yet.
//! assert_eq!(timer.poll(1100), None);
//! // Due: fires exactly once with the latest payload.
//! assert_eq!(timer.poll(1200), Some("q2"));
//! assert_eq!(timer.poll(1300), None);
//! ```
//!
//! ## Cancellation
//!
//! ```
//! # use understory_event_state::timer::DeadlineTimer;
//! let mut timer: DeadlineTimer<u32> = DeadlineTimer::new();
//! let token = timer.start(7, 0, 100);
//! assert_eq!(timer.cancel_token(token), Some(7));
//! // Cancelled deadlines never fire.
//! assert_eq!(timer.poll(500), None);
//! ```

/// Identifies one started deadline.
///
/// Tokens are compared against the timer's current generation; any token
/// from before the latest `start`/`cancel` is stale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A pending deadline.
#[derive(Clone, Debug)]
pub struct Deadline<T> {
    /// Token handed out when the deadline was started.
    pub token: TimerToken,
    /// Timestamp (milliseconds) at or after which the deadline fires.
    pub due_at: u64,
    /// Value delivered when the deadline fires.
    pub payload: T,
}

/// A single-slot, generation-stamped deadline.
#[derive(Clone, Debug)]
pub struct DeadlineTimer<T> {
    generation: u64,
    pending: Option<Deadline<T>>,
}

impl<T> DeadlineTimer<T> {
    /// Creates an idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Starts a deadline `delay` milliseconds after `now`, replacing any pending one.
    pub fn start(&mut self, payload: T, now: u64, delay: u64) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.pending = Some(Deadline {
            token,
            due_at: now.saturating_add(delay),
            payload,
        });
        token
    }

    /// Cancels the pending deadline, returning its payload.
    pub fn cancel(&mut self) -> Option<T> {
        self.generation = self.generation.wrapping_add(1);
        self.pending.take().map(|d| d.payload)
    }

    /// Cancels the pending deadline only if `token` is still current.
    pub fn cancel_token(&mut self, token: TimerToken) -> Option<T> {
        if self.is_current(token) {
            self.cancel()
        } else {
            None
        }
    }

    /// Returns `true` if `token` identifies the pending deadline.
    #[must_use]
    pub fn is_current(&self, token: TimerToken) -> bool {
        self.pending.as_ref().is_some_and(|d| d.token == token)
    }

    /// Returns `true` if a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending deadline, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Deadline<T>> {
        self.pending.as_ref()
    }

    /// When the pending deadline is due.
    #[must_use]
    pub fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|d| d.due_at)
    }

    /// Fires the pending deadline if `now` has reached it.
    ///
    /// The slot is cleared before the payload is returned, so each deadline
    /// fires at most once.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        if self.pending.as_ref().is_none_or(|d| now < d.due_at) {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        let fired = self.pending.take()?;
        tracing::trace!(due_at = fired.due_at, now, "deadline fired");
        Some(fired.payload)
    }
}

impl<T> Default for DeadlineTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}
