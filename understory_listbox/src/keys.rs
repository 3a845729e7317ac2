// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default key bindings.

use crate::config::Direction;
use crate::intent::Intent;

/// A key, as reported by the platform binding layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Enter or Return.
    Enter,
    /// Escape.
    Escape,
    /// Tab, which moves focus out of the widget.
    Tab,
    /// A printable character, including space.
    Character(char),
}

impl Key {
    /// Returns `true` if this key opens a submenu in `direction`.
    #[must_use]
    pub fn opens_submenu(self, direction: Direction) -> bool {
        match direction {
            Direction::Ltr => self == Self::ArrowRight,
            Direction::Rtl => self == Self::ArrowLeft,
        }
    }

    /// Returns `true` if this key closes a submenu in `direction`.
    #[must_use]
    pub fn closes_submenu(self, direction: Direction) -> bool {
        match direction {
            Direction::Ltr => self == Self::ArrowLeft,
            Direction::Rtl => self == Self::ArrowRight,
        }
    }
}

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT   = 0b0000_0001;
        /// Control.
        const CONTROL = 0b0000_0010;
        /// Alt or Option.
        const ALT     = 0b0000_0100;
        /// Meta, Command or Windows.
        const META    = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` if a modifier that turns keys into shortcuts is held.
    #[must_use]
    pub fn is_shortcut(self) -> bool {
        self.intersects(Self::CONTROL | Self::ALT | Self::META)
    }
}

/// Maps a key press in a vertical list to an intent.
///
/// Enter activates the focused key. Characters, space included, become
/// typeahead; the list decides whether a space toggles instead. Shortcut
/// chords and horizontal arrows are left to the caller.
#[must_use]
pub fn list_intent<K: Clone>(
    key: Key,
    modifiers: Modifiers,
    focused: Option<&K>,
) -> Option<Intent<K>> {
    Some(match key {
        Key::ArrowDown => Intent::Next,
        Key::ArrowUp => Intent::Previous,
        Key::Home => Intent::First,
        Key::End => Intent::Last,
        Key::PageUp => Intent::PageUp,
        Key::PageDown => Intent::PageDown,
        Key::Enter => Intent::Toggle(focused?.clone()),
        Key::Escape => Intent::Close,
        Key::Tab => Intent::CloseAll,
        Key::Character(ch) if !modifiers.is_shortcut() => Intent::Typeahead(ch),
        Key::Character(_) | Key::ArrowLeft | Key::ArrowRight => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_edges_map_to_navigation() {
        let none = Modifiers::empty();
        assert_eq!(list_intent::<u8>(Key::ArrowDown, none, None), Some(Intent::Next));
        assert_eq!(list_intent::<u8>(Key::Home, none, None), Some(Intent::First));
        assert_eq!(list_intent::<u8>(Key::PageUp, none, None), Some(Intent::PageUp));
        assert_eq!(list_intent::<u8>(Key::ArrowLeft, none, None), None);
    }

    #[test]
    fn enter_needs_a_focused_key() {
        let none = Modifiers::empty();
        assert_eq!(list_intent::<u8>(Key::Enter, none, None), None);
        assert_eq!(list_intent(Key::Enter, none, Some(&4_u8)), Some(Intent::Toggle(4)));
    }

    #[test]
    fn shortcuts_are_not_typeahead() {
        assert_eq!(
            list_intent::<u8>(Key::Character('a'), Modifiers::SHIFT, None),
            Some(Intent::Typeahead('a'))
        );
        assert_eq!(list_intent::<u8>(Key::Character('a'), Modifiers::CONTROL, None), None);
    }

    #[test]
    fn submenu_keys_follow_direction() {
        assert!(Key::ArrowRight.opens_submenu(Direction::Ltr));
        assert!(Key::ArrowLeft.opens_submenu(Direction::Rtl));
        assert!(Key::ArrowRight.closes_submenu(Direction::Rtl));
        assert!(!Key::ArrowRight.closes_submenu(Direction::Ltr));
    }
}
