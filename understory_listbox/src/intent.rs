// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input intents.

use understory_focus::Navigation;

/// What the keyboard or pointer binding layer asks the engine to do.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intent<K> {
    /// Focus the first enabled item.
    First,
    /// Focus the last enabled item.
    Last,
    /// Focus the next enabled item.
    Next,
    /// Focus the previous enabled item.
    Previous,
    /// Move focus back one page.
    PageUp,
    /// Move focus forward one page.
    PageDown,
    /// One typed character.
    Typeahead(char),
    /// Focus a specific key (pointer hover or click).
    SetExplicit(K),
    /// Activate a key: select it, or open its submenu.
    Toggle(K),
    /// Dismiss the innermost layer (Escape).
    Close,
    /// Dismiss everything (focus or pointer left the widget).
    CloseAll,
}

impl<K> Intent<K> {
    /// The focus movement this intent stands for, if it is one.
    #[must_use]
    pub fn navigation(&self) -> Option<Navigation> {
        Some(match self {
            Self::First => Navigation::First,
            Self::Last => Navigation::Last,
            Self::Next => Navigation::Next,
            Self::Previous => Navigation::Prev,
            Self::PageUp => Navigation::PageUp,
            Self::PageDown => Navigation::PageDown,
            _ => return None,
        })
    }
}
