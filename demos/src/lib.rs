// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared setup for the Understory walkthroughs.
//!
//! Run one with, for example:
//!
//! ```text
//! RUST_LOG=debug cargo run -p understory_examples --example menu_walkthrough
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber filtered by `RUST_LOG`, defaulting to `debug`
/// for the Understory crates.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,understory_listbox=debug,understory_menu=debug,understory_filter=debug")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
