// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection modes and behaviors.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// How many keys may be selected at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Selection is disabled.
    #[default]
    None,
    /// At most one key.
    Single,
    /// Any number of keys.
    Multiple,
}

impl SelectionMode {
    /// The canonical lowercase name of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized selection mode name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown selection mode `{0}`, expected `none`, `single` or `multiple`")]
pub struct ParseSelectionModeError(pub String);

impl FromStr for SelectionMode {
    type Err = ParseSelectionModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "single" => Ok(Self::Single),
            "multiple" => Ok(Self::Multiple),
            other => Err(ParseSelectionModeError(other.to_string())),
        }
    }
}

/// What a plain activation (click, Enter, Space) does to the selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionBehavior {
    /// Flip membership of the activated key.
    #[default]
    Toggle,
    /// Replace the selection with the activated key.
    Replace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("none".parse(), Ok(SelectionMode::None));
        assert_eq!("single".parse(), Ok(SelectionMode::Single));
        assert_eq!("multiple".parse(), Ok(SelectionMode::Multiple));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "many".parse::<SelectionMode>().unwrap_err();
        assert_eq!(err, ParseSelectionModeError("many".into()));
    }

    #[test]
    fn display_round_trips_name() {
        assert_eq!(SelectionMode::Multiple.to_string(), "multiple");
    }
}
