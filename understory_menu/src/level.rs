// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Submenu stack levels.

use understory_listbox::ListState;

use crate::tree::MenuId;

/// Lifecycle of one menu level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LevelState {
    /// Not on the stack.
    Closed,
    /// Waiting to open; a hovered trigger is running out its intent delay.
    Opening,
    /// On the stack.
    Open,
    /// On the stack, but the pointer rests on another item and the level
    /// closes once the hover-intent delay elapses.
    Closing,
}

impl LevelState {
    /// Lowercase name, for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Open => "open",
            Self::Closing => "closing",
        }
    }
}

/// One entry of the reported submenu stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSnapshot<K> {
    /// Depth, with the root menu at 0.
    pub level: usize,
    /// The parent item that opened this level; `None` for the root.
    pub trigger: Option<K>,
    /// `Open`, or `Opening`/`Closing` while hover intent is pending.
    pub state: LevelState,
}

#[derive(Clone, Debug)]
pub(crate) struct MenuLevel<K> {
    pub(crate) menu: MenuId,
    pub(crate) trigger: Option<K>,
    pub(crate) list: ListState<K>,
}
