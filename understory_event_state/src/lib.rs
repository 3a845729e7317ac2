// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Event State: small state machines for time-dependent input handling.
//!
//! None of these types read a clock. Every call that depends on time takes a `now`
//! timestamp in milliseconds from the host, and pending deadlines are advanced with
//! explicit `poll(now)` calls. This keeps the state machines synchronous and lets tests
//! drive time deterministically.
//!
//! - [`timer`]: [`DeadlineTimer`](timer::DeadlineTimer), a single-slot cancellable deadline
//!   handing out generation-stamped [`TimerToken`](timer::TimerToken)s.
//! - [`hover`]: [`HoverIntent`](hover::HoverIntent), which turns pointer enter/leave over a
//!   target into a delayed "open" request that is cancelled if the pointer leaves early.
//!
//! This crate is `no_std`.

#![no_std]

pub mod hover;
pub mod timer;
