// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use understory_event_state::hover::DEFAULT_HOVER_INTENT_MS;
use understory_filter::{MatchMode, ParseMatchModeError};
use understory_focus::{DEFAULT_PAGE_SIZE, DEFAULT_TYPEAHEAD_RESET_MS, WrapMode};
use understory_selection::{ParseSelectionModeError, SelectionBehavior, SelectionMode};

/// Reading direction, used to pick the keys that open and close submenus.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right: ArrowRight opens a submenu.
    #[default]
    Ltr,
    /// Right to left: ArrowLeft opens a submenu.
    Rtl,
}

/// A configuration that failed validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A selection mode name was not recognized.
    #[error(transparent)]
    UnknownSelectionMode(#[from] ParseSelectionModeError),
    /// A match mode name was not recognized.
    #[error(transparent)]
    UnknownMatchMode(#[from] ParseMatchModeError),
    /// Wrapping differs between listboxes and menus, so it has to be chosen.
    #[error("wrap mode was not set")]
    MissingWrapMode,
    /// Page moves need at least one item per page.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Validated configuration shared by listboxes, comboboxes, and menus.
///
/// Built with [`ListConfig::builder`].
#[derive(Copy, Clone, Debug)]
pub struct ListConfig {
    selection_mode: SelectionMode,
    selection_behavior: SelectionBehavior,
    wrap: WrapMode,
    allow_empty_selection: bool,
    typeahead_reset_ms: u64,
    hover_intent_ms: u64,
    page_size: usize,
    match_mode: MatchMode,
    debounce_ms: u64,
    virtual_focus: bool,
    select_on_focus: bool,
    close_on_select: bool,
    direction: Direction,
}

impl ListConfig {
    /// Starts a builder with every optional field at its default.
    #[must_use]
    pub fn builder() -> ListConfigBuilder {
        ListConfigBuilder::default()
    }

    /// How many keys may be selected.
    #[must_use]
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// What a plain activation does to the selection.
    #[must_use]
    pub fn selection_behavior(&self) -> SelectionBehavior {
        self.selection_behavior
    }

    /// Whether Next/Previous wrap at the ends.
    #[must_use]
    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    /// Whether the last selected key may be deselected.
    #[must_use]
    pub fn allow_empty_selection(&self) -> bool {
        self.allow_empty_selection
    }

    /// Typeahead pause in milliseconds.
    #[must_use]
    pub fn typeahead_reset_ms(&self) -> u64 {
        self.typeahead_reset_ms
    }

    /// Hover-intent delay in milliseconds.
    #[must_use]
    pub fn hover_intent_ms(&self) -> u64 {
        self.hover_intent_ms
    }

    /// Enabled items covered by PageUp/PageDown. Never zero.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Filter predicate.
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Filter debounce in milliseconds; zero filters synchronously.
    #[must_use]
    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    /// Whether real input focus stays on another element.
    #[must_use]
    pub fn virtual_focus(&self) -> bool {
        self.virtual_focus
    }

    /// Whether keyboard focus moves also select (single mode only).
    #[must_use]
    pub fn select_on_focus(&self) -> bool {
        self.select_on_focus
    }

    /// Whether activating a menu leaf closes the whole menu.
    #[must_use]
    pub fn close_on_select(&self) -> bool {
        self.close_on_select
    }

    /// Reading direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Builder for [`ListConfig`].
///
/// Name-based setters record the first parse failure, which [`build`](Self::build)
/// then reports.
#[derive(Clone, Debug)]
pub struct ListConfigBuilder {
    selection_mode: SelectionMode,
    selection_behavior: SelectionBehavior,
    wrap: Option<WrapMode>,
    allow_empty_selection: bool,
    typeahead_reset_ms: u64,
    hover_intent_ms: u64,
    page_size: usize,
    match_mode: MatchMode,
    debounce_ms: u64,
    virtual_focus: bool,
    select_on_focus: bool,
    close_on_select: bool,
    direction: Direction,
    error: Option<ConfigError>,
}

impl Default for ListConfigBuilder {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::None,
            selection_behavior: SelectionBehavior::Toggle,
            wrap: None,
            allow_empty_selection: true,
            typeahead_reset_ms: DEFAULT_TYPEAHEAD_RESET_MS,
            hover_intent_ms: DEFAULT_HOVER_INTENT_MS,
            page_size: DEFAULT_PAGE_SIZE,
            match_mode: MatchMode::StartsWith,
            debounce_ms: 0,
            virtual_focus: false,
            select_on_focus: false,
            close_on_select: true,
            direction: Direction::Ltr,
            error: None,
        }
    }
}

impl ListConfigBuilder {
    /// Sets the selection mode.
    #[must_use]
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Sets the selection mode by name (`"none"`, `"single"` or `"multiple"`).
    #[must_use]
    pub fn selection_mode_named(mut self, name: &str) -> Self {
        match name.parse() {
            Ok(mode) => self.selection_mode = mode,
            Err(err) => self.fail(ConfigError::from(err)),
        }
        self
    }

    /// Sets the selection behavior.
    #[must_use]
    pub fn selection_behavior(mut self, behavior: SelectionBehavior) -> Self {
        self.selection_behavior = behavior;
        self
    }

    /// Sets the wrap mode. Required.
    #[must_use]
    pub fn wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = Some(wrap);
        self
    }

    /// Sets whether the selection may become empty.
    #[must_use]
    pub fn allow_empty_selection(mut self, allow: bool) -> Self {
        self.allow_empty_selection = allow;
        self
    }

    /// Sets the typeahead pause.
    #[must_use]
    pub fn typeahead_reset_ms(mut self, ms: u64) -> Self {
        self.typeahead_reset_ms = ms;
        self
    }

    /// Sets the hover-intent delay.
    #[must_use]
    pub fn hover_intent_ms(mut self, ms: u64) -> Self {
        self.hover_intent_ms = ms;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the filter predicate.
    #[must_use]
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Sets the filter predicate by name (`"startsWith"`, `"contains"` or `"endsWith"`).
    #[must_use]
    pub fn match_mode_named(mut self, name: &str) -> Self {
        match name.parse() {
            Ok(mode) => self.match_mode = mode,
            Err(err) => self.fail(ConfigError::from(err)),
        }
        self
    }

    /// Sets the filter debounce.
    #[must_use]
    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Sets whether focus is virtual.
    #[must_use]
    pub fn virtual_focus(mut self, virtual_focus: bool) -> Self {
        self.virtual_focus = virtual_focus;
        self
    }

    /// Sets whether keyboard focus moves also select.
    #[must_use]
    pub fn select_on_focus(mut self, select_on_focus: bool) -> Self {
        self.select_on_focus = select_on_focus;
        self
    }

    /// Sets whether activating a menu leaf closes the menu.
    #[must_use]
    pub fn close_on_select(mut self, close_on_select: bool) -> Self {
        self.close_on_select = close_on_select;
        self
    }

    /// Sets the reading direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Validates the settings.
    pub fn build(self) -> Result<ListConfig, ConfigError> {
        if let Some(err) = self.error {
            tracing::warn!(%err, "rejected list configuration");
            return Err(err);
        }
        let wrap = self.wrap.ok_or(ConfigError::MissingWrapMode)?;
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(ListConfig {
            selection_mode: self.selection_mode,
            selection_behavior: self.selection_behavior,
            wrap,
            allow_empty_selection: self.allow_empty_selection,
            typeahead_reset_ms: self.typeahead_reset_ms,
            hover_intent_ms: self.hover_intent_ms,
            page_size: self.page_size,
            match_mode: self.match_mode,
            debounce_ms: self.debounce_ms,
            virtual_focus: self.virtual_focus,
            select_on_focus: self.select_on_focus,
            close_on_select: self.close_on_select,
            direction: self.direction,
        })
    }

    fn fail(&mut self, err: ConfigError) {
        self.error.get_or_insert(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_wrap_is_set() {
        let config = ListConfig::builder().wrap(WrapMode::Never).build().unwrap();
        assert_eq!(config.selection_mode(), SelectionMode::None);
        assert_eq!(config.typeahead_reset_ms(), 1000);
        assert_eq!(config.hover_intent_ms(), 250);
        assert_eq!(config.page_size(), 10);
        assert!(config.allow_empty_selection());
        assert!(config.close_on_select());
        assert!(matches!(config.match_mode(), MatchMode::StartsWith));
    }

    #[test]
    fn wrap_mode_is_required() {
        let err = ListConfig::builder().build().unwrap_err();
        assert_eq!(err, ConfigError::MissingWrapMode);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = ListConfig::builder()
            .wrap(WrapMode::Wrap)
            .page_size(0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroPageSize);
    }

    #[test]
    fn unknown_names_fail_at_build() {
        let err = ListConfig::builder()
            .wrap(WrapMode::Wrap)
            .selection_mode_named("several")
            .match_mode_named("fuzzy")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSelectionMode(_)));

        let config = ListConfig::builder()
            .wrap(WrapMode::Wrap)
            .selection_mode_named("multiple")
            .match_mode_named("contains")
            .build()
            .unwrap();
        assert_eq!(config.selection_mode(), SelectionMode::Multiple);
        assert!(matches!(config.match_mode(), MatchMode::Contains));
    }
}
