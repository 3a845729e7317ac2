// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Match predicates.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// How a query is matched against an item's text value.
#[derive(Copy, Clone, Default)]
pub enum MatchMode {
    /// Text starts with the query, ignoring case.
    #[default]
    StartsWith,
    /// Text contains the query, ignoring case.
    Contains,
    /// Text ends with the query, ignoring case.
    EndsWith,
    /// Caller-supplied predicate, called as `predicate(label, query)`.
    ///
    /// The query is passed as typed; folding case is up to the predicate.
    Custom(fn(&str, &str) -> bool),
}

impl MatchMode {
    /// Returns `true` if `label` matches `query`.
    #[must_use]
    pub fn matches(&self, label: &str, query: &str) -> bool {
        match self {
            Self::StartsWith => label.to_lowercase().starts_with(&query.to_lowercase()),
            Self::Contains => label.to_lowercase().contains(&query.to_lowercase()),
            Self::EndsWith => label.to_lowercase().ends_with(&query.to_lowercase()),
            Self::Custom(predicate) => predicate(label, query),
        }
    }
}

impl fmt::Debug for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartsWith => f.write_str("StartsWith"),
            Self::Contains => f.write_str("Contains"),
            Self::EndsWith => f.write_str("EndsWith"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Error returned when parsing an unrecognized match mode name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown match mode `{0}`, expected `startsWith`, `contains` or `endsWith`")]
pub struct ParseMatchModeError(pub String);

impl FromStr for MatchMode {
    type Err = ParseMatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "startsWith" | "starts-with" => Ok(Self::StartsWith),
            "contains" => Ok(Self::Contains),
            "endsWith" | "ends-with" => Ok(Self::EndsWith),
            other => Err(ParseMatchModeError(other.to_string())),
        }
    }
}
