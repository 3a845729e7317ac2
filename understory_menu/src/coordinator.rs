// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The submenu coordinator.

use alloc::vec::Vec;
use core::hash::Hash;

use smallvec::SmallVec;
use understory_event_state::hover::HoverIntent;
use understory_listbox::{Changes, Intent, Key, ListConfig, ListState, Modifiers, list_intent};

use crate::change::{MenuChange, MenuChanges};
use crate::level::{LevelSnapshot, LevelState, MenuLevel};
use crate::tree::{MenuId, MenuTree};

/// Which item a newly opened level focuses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusStrategy {
    /// The first enabled item (ArrowDown, Enter).
    #[default]
    First,
    /// The last enabled item (ArrowUp).
    Last,
    /// Nothing; used when a level opens from pointer hover.
    None,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct HoverTarget<K> {
    level: usize,
    key: K,
}

/// A menu and its stack of open submenus.
///
/// Level 0 is the root menu. The top of the stack owns keyboard input: every
/// navigation and typeahead intent goes to it. Closing a level hands focus
/// back to its trigger in the parent level.
///
/// Pointer hover over a trigger opens its submenu only after the configured
/// hover-intent delay, advanced by [`poll`](Self::poll). Until then the
/// reported stack carries an [`LevelState::Opening`] entry for it. Resting on
/// another item likewise marks the deeper levels [`LevelState::Closing`] until
/// the delay elapses.
#[derive(Clone, Debug)]
pub struct SubmenuCoordinator<K> {
    tree: MenuTree<K>,
    config: ListConfig,
    levels: SmallVec<[MenuLevel<K>; 4]>,
    hover: HoverIntent<HoverTarget<K>>,
}

impl<K> SubmenuCoordinator<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a closed menu.
    #[must_use]
    pub fn new(tree: MenuTree<K>, config: ListConfig) -> Self {
        Self {
            hover: HoverIntent::new(config.hover_intent_ms()),
            tree,
            config,
            levels: SmallVec::new(),
        }
    }

    /// The menu's collections.
    #[must_use]
    pub fn tree(&self) -> &MenuTree<K> {
        &self.tree
    }

    /// The configuration every level uses.
    #[must_use]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Returns `true` if the root menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.levels.is_empty()
    }

    /// Number of open levels, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// The level owning keyboard input.
    #[must_use]
    pub fn owner(&self) -> Option<usize> {
        self.levels.len().checked_sub(1)
    }

    /// The list state of an open level.
    #[must_use]
    pub fn level(&self, level: usize) -> Option<&ListState<K>> {
        self.levels.get(level).map(|l| &l.list)
    }

    /// The trigger that opened `level`.
    #[must_use]
    pub fn trigger(&self, level: usize) -> Option<&K> {
        self.levels.get(level).and_then(|l| l.trigger.as_ref())
    }

    /// Lifecycle state of `level`.
    #[must_use]
    pub fn level_state(&self, level: usize) -> LevelState {
        if level < self.levels.len() {
            return self.open_state(level);
        }
        match self.pending_open() {
            Some(target) if target.level + 1 == level => LevelState::Opening,
            _ => LevelState::Closed,
        }
    }

    /// The focused key of the level owning keyboard input.
    #[must_use]
    pub fn focused_key(&self) -> Option<&K> {
        self.levels.last().and_then(|l| l.list.focused_key())
    }

    /// When the pending hover request becomes due, for scheduling [`poll`](Self::poll).
    #[must_use]
    pub fn hover_due_at(&self) -> Option<u64> {
        self.hover.due_at()
    }

    /// The reported stack: open levels, plus a level waiting on hover intent.
    #[must_use]
    pub fn stack(&self) -> Vec<LevelSnapshot<K>> {
        let mut stack: Vec<_> = self
            .levels
            .iter()
            .enumerate()
            .map(|(level, l)| LevelSnapshot {
                level,
                trigger: l.trigger.clone(),
                state: self.open_state(level),
            })
            .collect();
        if let Some(target) = self.pending_open() {
            stack.push(LevelSnapshot {
                level: target.level + 1,
                trigger: Some(target.key.clone()),
                state: LevelState::Opening,
            });
        }
        stack
    }

    /// Opens the root menu.
    pub fn open(&mut self, strategy: FocusStrategy) -> MenuChanges<K> {
        self.tracked(|menu, changes| {
            if menu.is_open() {
                return;
            }
            let root = menu.tree.root_id();
            menu.push_level(root, None, strategy, changes);
        })
    }

    /// Closes every level.
    pub fn close(&mut self) -> MenuChanges<K> {
        self.tracked(|menu, _| menu.close_all())
    }

    /// Focus or pointer left the whole menu.
    pub fn interact_outside(&mut self) -> MenuChanges<K> {
        self.close()
    }

    /// Applies one intent at time `now`.
    ///
    /// - Navigation and typeahead go to the level owning keyboard input.
    /// - `SetExplicit` and `Toggle` go to the innermost level containing the key.
    ///   Toggling a trigger opens its submenu focused on the first item;
    ///   toggling a leaf reports an [`MenuChange::Action`] and, unless
    ///   `close_on_select` is off, closes the menu.
    /// - `Close` closes the top level, `CloseAll` the whole menu.
    pub fn handle(&mut self, intent: Intent<K>, now: u64) -> MenuChanges<K> {
        self.tracked(|menu, changes| {
            let Some(owner) = menu.owner() else {
                return;
            };
            match intent {
                Intent::First
                | Intent::Last
                | Intent::Next
                | Intent::Previous
                | Intent::PageUp
                | Intent::PageDown => {
                    menu.hover.cancel();
                    let level_changes = menu.levels[owner].list.handle(intent, now);
                    changes.push_level(owner, level_changes);
                }
                Intent::Typeahead(ch) => {
                    if ch == ' ' && !menu.levels[owner].list.accepts_typeahead(ch, now) {
                        if let Some(key) = menu.levels[owner].list.focused_key().cloned() {
                            menu.activate(owner, key, changes);
                        }
                        return;
                    }
                    let level_changes = menu.levels[owner].list.handle(intent, now);
                    changes.push_level(owner, level_changes);
                }
                Intent::SetExplicit(key) => {
                    if let Some(level) = menu.level_of(&key) {
                        let level_changes = menu.levels[level]
                            .list
                            .handle(Intent::SetExplicit(key), now);
                        changes.push_level(level, level_changes);
                    }
                }
                Intent::Toggle(key) => {
                    if let Some(level) = menu.level_of(&key) {
                        menu.activate(level, key, changes);
                    }
                }
                Intent::Close => menu.close_top(true, changes),
                Intent::CloseAll => menu.close_all(),
            }
        })
    }

    /// Applies one key press.
    ///
    /// On a closed menu, ArrowDown, Enter, and Space open it on the first
    /// item and ArrowUp on the last. On an open menu the direction-aware
    /// arrow opens a focused trigger's submenu and the opposite arrow closes
    /// a submenu; other keys use the default list bindings.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers, now: u64) -> MenuChanges<K> {
        let Some(owner) = self.owner() else {
            return match key {
                Key::ArrowDown | Key::Enter | Key::Character(' ') => {
                    self.open(FocusStrategy::First)
                }
                Key::ArrowUp => self.open(FocusStrategy::Last),
                _ => MenuChanges::new(),
            };
        };
        let direction = self.config.direction();
        let focused = self.levels[owner].list.focused_key().cloned();
        if key.opens_submenu(direction) {
            return match focused {
                Some(trigger) if self.tree.is_trigger(self.levels[owner].menu, &trigger) => {
                    self.handle(Intent::Toggle(trigger), now)
                }
                _ => MenuChanges::new(),
            };
        }
        if key.closes_submenu(direction) {
            if owner == 0 {
                return MenuChanges::new();
            }
            return self.handle(Intent::Close, now);
        }
        match list_intent(key, modifiers, focused.as_ref()) {
            Some(intent) => self.handle(intent, now),
            None => MenuChanges::new(),
        }
    }

    /// The pointer entered `key` in `level` at `now`.
    ///
    /// The item takes focus in its level. Resting on a trigger opens its
    /// submenu after the hover-intent delay; resting on any item closes deeper
    /// levels opened from other triggers after the same delay.
    pub fn pointer_enter(&mut self, level: usize, key: K, now: u64) -> MenuChanges<K> {
        self.tracked(|menu, changes| {
            if level >= menu.levels.len() {
                return;
            }
            let level_changes = menu.levels[level]
                .list
                .handle(Intent::SetExplicit(key.clone()), now);
            changes.push_level(level, level_changes);

            let child_is_open = menu
                .levels
                .get(level + 1)
                .is_some_and(|child| child.trigger.as_ref() == Some(&key));
            if child_is_open {
                menu.hover.cancel();
                menu.close_above(level + 1, true, changes);
                return;
            }
            if menu.opens_submenu(level, &key) || menu.levels.len() > level + 1 {
                menu.hover.on_enter(HoverTarget { level, key }, now);
            } else {
                menu.hover.cancel();
            }
        })
    }

    /// The pointer left `key` in `level`. A pending hover request for it is
    /// cancelled.
    pub fn pointer_leave(&mut self, level: usize, key: K) -> MenuChanges<K> {
        self.tracked(|menu, _| {
            if menu.hover.on_leave(&HoverTarget { level, key }) {
                tracing::trace!(level, "hover intent cancelled");
            }
        })
    }

    /// Fires a hover request whose delay has elapsed by `now`.
    pub fn poll(&mut self, now: u64) -> MenuChanges<K> {
        self.tracked(|menu, changes| {
            let Some(HoverTarget { level, key }) = menu.hover.poll(now) else {
                return;
            };
            if level >= menu.levels.len() {
                return;
            }
            tracing::trace!(level, "hover intent fired");
            // The pointer rests on `key`, so closed levels leave focus where it is.
            menu.close_above(level, false, changes);
            if menu.opens_submenu(level, &key) {
                menu.open_submenu(level, key, FocusStrategy::None, changes);
            }
        })
    }

    fn tracked(&mut self, op: impl FnOnce(&mut Self, &mut MenuChanges<K>)) -> MenuChanges<K> {
        let before = self.stack();
        let mut changes = MenuChanges::new();
        op(self, &mut changes);
        let after = self.stack();
        if after != before {
            tracing::debug!(depth = after.len(), "submenu stack changed");
            changes.push(MenuChange::Stack(after));
        }
        changes
    }

    /// A hovered trigger waiting out its delay directly above the top level.
    fn pending_open(&self) -> Option<&HoverTarget<K>> {
        self.hover
            .pending_target()
            .filter(|t| self.levels.len() == t.level + 1 && self.opens_submenu(t.level, &t.key))
    }

    /// The level whose deeper levels a pending hover request will close.
    fn pending_close(&self) -> Option<usize> {
        self.hover
            .pending_target()
            .map(|t| t.level)
            .filter(|&level| level + 1 < self.levels.len())
    }

    fn open_state(&self, level: usize) -> LevelState {
        match self.pending_close() {
            Some(kept) if level > kept => LevelState::Closing,
            _ => LevelState::Open,
        }
    }

    /// Returns `true` if `key` is an enabled submenu trigger in `level`.
    fn opens_submenu(&self, level: usize, key: &K) -> bool {
        self.levels.get(level).is_some_and(|l| {
            self.tree.is_trigger(l.menu, key) && l.list.collection().is_navigable(key)
        })
    }

    /// The innermost open level whose collection holds `key` as an enabled item.
    fn level_of(&self, key: &K) -> Option<usize> {
        self.levels
            .iter()
            .rposition(|l| l.list.collection().is_navigable(key))
    }

    fn activate(&mut self, level: usize, key: K, changes: &mut MenuChanges<K>) {
        self.hover.cancel();
        if self.tree.is_trigger(self.levels[level].menu, &key) {
            let focus = self.levels[level]
                .list
                .handle(Intent::SetExplicit(key.clone()), 0);
            changes.push_level(level, focus);
            let already_open = self
                .levels
                .get(level + 1)
                .is_some_and(|child| child.trigger.as_ref() == Some(&key));
            if already_open {
                self.close_above(level + 1, true, changes);
                let child = level + 1;
                if self.levels[child].list.focused_key().is_none() {
                    let first = self.levels[child].list.handle(Intent::First, 0);
                    changes.push_level(child, first);
                }
            } else {
                self.close_above(level, true, changes);
                self.open_submenu(level, key, FocusStrategy::First, changes);
            }
            return;
        }
        self.close_above(level, true, changes);
        let level_changes = self.levels[level].list.handle(Intent::Toggle(key.clone()), 0);
        changes.push_level(level, level_changes);
        tracing::debug!(level, "menu action");
        changes.push(MenuChange::Action(key));
        if self.config.close_on_select() {
            self.close_all();
        }
    }

    fn open_submenu(
        &mut self,
        parent: usize,
        trigger: K,
        strategy: FocusStrategy,
        changes: &mut MenuChanges<K>,
    ) {
        let Some(menu) = self.tree.submenu(self.levels[parent].menu, &trigger) else {
            return;
        };
        self.push_level(menu, Some(trigger), strategy, changes);
        tracing::debug!(parent, depth = self.levels.len(), "submenu opened");
    }

    fn push_level(
        &mut self,
        menu: MenuId,
        trigger: Option<K>,
        strategy: FocusStrategy,
        changes: &mut MenuChanges<K>,
    ) {
        let Some(collection) = self.tree.collection(menu).cloned() else {
            return;
        };
        let mut level = MenuLevel {
            menu,
            trigger,
            list: ListState::new(collection, &self.config),
        };
        let focus = match strategy {
            FocusStrategy::First => level.list.handle(Intent::First, 0),
            FocusStrategy::Last => level.list.handle(Intent::Last, 0),
            FocusStrategy::None => Changes::new(),
        };
        self.levels.push(level);
        changes.push_level(self.levels.len() - 1, focus);
    }

    /// Closes levels deeper than `level`, innermost first.
    fn close_above(&mut self, level: usize, refocus: bool, changes: &mut MenuChanges<K>) {
        while self.levels.len() > level + 1 {
            self.close_top(refocus, changes);
        }
    }

    /// Closes the top level, optionally refocusing its trigger in the parent.
    fn close_top(&mut self, refocus: bool, changes: &mut MenuChanges<K>) {
        self.hover.cancel();
        let Some(closing) = self.levels.pop() else {
            return;
        };
        tracing::trace!(depth = self.levels.len(), "menu level closed");
        if !refocus {
            return;
        }
        let (Some(trigger), Some(parent)) = (closing.trigger, self.levels.last_mut()) else {
            return;
        };
        let focus = parent.list.handle(Intent::SetExplicit(trigger), 0);
        changes.push_level(self.levels.len() - 1, focus);
    }

    fn close_all(&mut self) {
        self.hover.cancel();
        if !self.levels.is_empty() {
            tracing::debug!(depth = self.levels.len(), "menu closed");
        }
        self.levels.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MenuItem;
    use alloc::vec;
    use understory_focus::WrapMode;
    use understory_listbox::Direction;

    type Menu = SubmenuCoordinator<&'static str>;

    fn tree() -> MenuTree<&'static str> {
        MenuTree::build(&[
            MenuItem::action("open", "Open"),
            MenuItem::submenu(
                "share",
                "Share",
                vec![
                    MenuItem::action("mail", "Mail"),
                    MenuItem::action("link", "Copy Link").disabled(true),
                    MenuItem::submenu("social", "Social", vec![MenuItem::action("post", "Post")]),
                ],
            ),
            MenuItem::submenu("export", "Export", vec![MenuItem::action("pdf", "PDF")])
                .disabled(true),
            MenuItem::action("quit", "Quit"),
        ])
    }

    fn config() -> ListConfig {
        ListConfig::builder()
            .wrap(WrapMode::Wrap)
            .hover_intent_ms(200)
            .build()
            .unwrap()
    }

    fn opened() -> Menu {
        let mut menu = Menu::new(tree(), config());
        menu.open(FocusStrategy::First);
        menu
    }

    fn snapshot(
        level: usize,
        trigger: Option<&'static str>,
        state: LevelState,
    ) -> LevelSnapshot<&'static str> {
        LevelSnapshot {
            level,
            trigger,
            state,
        }
    }

    #[test]
    fn activating_trigger_opens_submenu_and_escape_returns_to_it() {
        let mut menu = opened();
        menu.handle(Intent::Next, 0);
        let changes = menu.handle(Intent::Toggle("share"), 0);
        assert_eq!(
            changes.stack(),
            Some(
                &[
                    snapshot(0, None, LevelState::Open),
                    snapshot(1, Some("share"), LevelState::Open),
                ][..]
            )
        );
        assert_eq!(menu.owner(), Some(1));
        assert_eq!(changes.focus(1), Some(Some(&"mail")));

        // Pointer focus wanders in the parent; closing the child brings it back.
        menu.handle(Intent::SetExplicit("open"), 0);
        let changes = menu.handle_key(Key::Escape, Modifiers::empty(), 0);
        assert_eq!(changes.stack(), Some(&[snapshot(0, None, LevelState::Open)][..]));
        assert_eq!(changes.focus(0), Some(Some(&"share")));
        assert_eq!(menu.owner(), Some(0));
        assert_eq!(menu.focused_key(), Some(&"share"));
        assert_eq!(menu.level_state(1), LevelState::Closed);
    }

    #[test]
    fn only_the_top_level_receives_navigation() {
        let mut menu = opened();
        menu.handle(Intent::Toggle("share"), 0);
        let changes = menu.handle(Intent::Next, 0);
        // "link" is disabled.
        assert_eq!(changes.focus(1), Some(Some(&"social")));
        assert_eq!(changes.focus(0), None);
        assert_eq!(menu.level(0).and_then(ListState::focused_key), Some(&"share"));
    }

    #[test]
    fn typeahead_searches_the_owner_level() {
        let mut menu = opened();
        menu.handle(Intent::Toggle("share"), 0);
        let changes = menu.handle(Intent::Typeahead('s'), 0);
        assert_eq!(changes.focus(1), Some(Some(&"social")));
    }

    #[test]
    fn arrows_open_and_close_by_direction() {
        let mut menu = opened();
        menu.handle(Intent::Next, 0);
        let none = Modifiers::empty();
        menu.handle_key(Key::ArrowRight, none, 0);
        assert_eq!(menu.depth(), 2);
        menu.handle_key(Key::ArrowLeft, none, 0);
        assert_eq!(menu.depth(), 1);
        assert!(menu.handle_key(Key::ArrowLeft, none, 0).is_empty(), "root stays open");

        let rtl = ListConfig::builder()
            .wrap(WrapMode::Wrap)
            .direction(Direction::Rtl)
            .build()
            .unwrap();
        let mut menu = Menu::new(tree(), rtl);
        menu.open(FocusStrategy::First);
        menu.handle(Intent::Next, 0);
        assert!(menu.handle_key(Key::ArrowRight, none, 0).is_empty());
        menu.handle_key(Key::ArrowLeft, none, 0);
        assert_eq!(menu.trigger(1), Some(&"share"));
    }

    #[test]
    fn leaf_activation_reports_action_and_closes_everything() {
        let mut menu = opened();
        menu.handle(Intent::Toggle("share"), 0);
        menu.handle(Intent::Toggle("social"), 0);
        assert_eq!(menu.depth(), 3);
        let changes = menu.handle_key(Key::Enter, Modifiers::empty(), 0);
        assert_eq!(changes.action(), Some(&"post"));
        assert_eq!(changes.stack(), Some(&[][..]));
        assert!(!menu.is_open());
    }

    #[test]
    fn close_on_select_can_be_turned_off() {
        let config = ListConfig::builder()
            .wrap(WrapMode::Wrap)
            .close_on_select(false)
            .build()
            .unwrap();
        let mut menu = Menu::new(tree(), config);
        menu.open(FocusStrategy::First);
        menu.handle(Intent::Toggle("share"), 0);
        let changes = menu.handle(Intent::Toggle("open"), 0);
        assert_eq!(changes.action(), Some(&"open"));
        // Activating in the parent closes the child, not the menu.
        assert_eq!(changes.stack(), Some(&[snapshot(0, None, LevelState::Open)][..]));
    }

    #[test]
    fn disabled_trigger_never_opens() {
        let mut menu = opened();
        assert!(menu.handle(Intent::Toggle("export"), 0).is_empty());
        assert!(menu.pointer_enter(0, "export", 0).is_empty());
        assert!(menu.poll(1000).is_empty());
        assert_eq!(menu.depth(), 1);
    }

    #[test]
    fn hover_opens_after_intent_delay() {
        let mut menu = opened();
        let changes = menu.pointer_enter(0, "share", 1000);
        assert_eq!(changes.focus(0), Some(Some(&"share")));
        assert_eq!(
            changes.stack(),
            Some(
                &[
                    snapshot(0, None, LevelState::Open),
                    snapshot(1, Some("share"), LevelState::Opening),
                ][..]
            )
        );
        assert_eq!(menu.level_state(1), LevelState::Opening);
        assert_eq!(menu.hover_due_at(), Some(1200));
        assert!(menu.poll(1199).is_empty());

        let changes = menu.poll(1200);
        assert_eq!(changes.stack().map(|s| s[1].state), Some(LevelState::Open));
        assert_eq!(menu.owner(), Some(1));
        assert_eq!(menu.focused_key(), None);
    }

    #[test]
    fn leaving_before_the_delay_cancels() {
        let mut menu = opened();
        menu.pointer_enter(0, "share", 1000);
        let changes = menu.pointer_leave(0, "share");
        assert_eq!(changes.stack(), Some(&[snapshot(0, None, LevelState::Open)][..]));
        assert!(menu.poll(5000).is_empty());
        assert_eq!(menu.depth(), 1);
    }

    #[test]
    fn resting_on_a_sibling_closes_the_open_submenu() {
        let mut menu = opened();
        menu.handle(Intent::Toggle("share"), 0);
        let changes = menu.pointer_enter(0, "quit", 100);
        assert_eq!(changes.focus(0), Some(Some(&"quit")));
        assert_eq!(
            changes.stack(),
            Some(
                &[
                    snapshot(0, None, LevelState::Open),
                    snapshot(1, Some("share"), LevelState::Closing),
                ][..]
            )
        );
        assert_eq!(menu.level_state(1), LevelState::Closing);
        let changes = menu.poll(300);
        assert_eq!(changes.stack().map(<[_]>::len), Some(1));
        assert_eq!(menu.owner(), Some(0));
        assert_eq!(menu.focused_key(), Some(&"quit"));
    }

    #[test]
    fn returning_to_the_open_trigger_keeps_its_submenu() {
        let mut menu = opened();
        menu.handle(Intent::Toggle("share"), 0);
        menu.pointer_enter(0, "quit", 100);
        menu.pointer_leave(0, "quit");
        assert_eq!(menu.level_state(1), LevelState::Open);
        menu.pointer_enter(0, "quit", 120);
        let changes = menu.pointer_enter(0, "share", 150);
        assert_eq!(changes.stack().map(|s| s[1].state), Some(LevelState::Open));
        assert!(menu.poll(1000).is_empty());
        assert_eq!(menu.depth(), 2);
    }

    fn nested_with_reused_keys() -> MenuTree<&'static str> {
        MenuTree::build(&[
            MenuItem::submenu("share", "Share", vec![MenuItem::action("mail", "Mail")]),
            MenuItem::submenu(
                "file",
                "File",
                vec![MenuItem::submenu(
                    "more",
                    "More",
                    vec![MenuItem::action("archive", "Archive")],
                )],
            ),
            MenuItem::submenu(
                "edit",
                "Edit",
                vec![
                    MenuItem::submenu(
                        "more",
                        "More",
                        vec![MenuItem::action("replace", "Replace")],
                    ),
                    MenuItem::action("share", "Share"),
                ],
            ),
        ])
    }

    #[test]
    fn same_trigger_key_opens_the_menu_of_its_own_level() {
        let mut menu = Menu::new(nested_with_reused_keys(), config());
        menu.open(FocusStrategy::First);
        menu.handle(Intent::Toggle("edit"), 0);
        let changes = menu.handle(Intent::Toggle("more"), 0);
        assert_eq!(changes.focus(2), Some(Some(&"replace")));
        assert_eq!(menu.focused_key(), Some(&"replace"));

        menu.close();
        menu.open(FocusStrategy::First);
        menu.handle(Intent::Toggle("file"), 0);
        menu.handle_key(Key::ArrowRight, Modifiers::empty(), 0);
        assert_eq!(menu.focused_key(), Some(&"archive"));
    }

    #[test]
    fn leaf_sharing_a_trigger_key_reports_action() {
        let mut menu = Menu::new(nested_with_reused_keys(), config());
        menu.open(FocusStrategy::First);
        menu.handle(Intent::Toggle("edit"), 0);
        let changes = menu.handle(Intent::Toggle("share"), 0);
        assert_eq!(changes.action(), Some(&"share"));
        assert!(!menu.is_open());

        // Hovering the leaf never arms a submenu either.
        menu.open(FocusStrategy::First);
        menu.handle(Intent::Toggle("edit"), 0);
        let changes = menu.pointer_enter(1, "share", 0);
        assert!(changes.stack().is_none());
        assert!(menu.poll(1000).is_empty());
        assert_eq!(menu.depth(), 2);
    }

    #[test]
    fn outside_interaction_closes_all_levels() {
        let mut menu = opened();
        menu.handle(Intent::Toggle("share"), 0);
        menu.handle(Intent::Toggle("social"), 0);
        let changes = menu.interact_outside();
        assert_eq!(changes.stack(), Some(&[][..]));
        assert!(menu.handle(Intent::Next, 0).is_empty());
    }

    #[test]
    fn escape_on_root_closes_menu() {
        let mut menu = opened();
        let changes = menu.handle(Intent::Close, 0);
        assert_eq!(changes.stack(), Some(&[][..]));
        assert!(!menu.is_open());
    }

    #[test]
    fn closed_menu_opens_from_keyboard() {
        let mut menu = Menu::new(tree(), config());
        let changes = menu.handle_key(Key::ArrowUp, Modifiers::empty(), 0);
        assert_eq!(changes.focus(0), Some(Some(&"quit")));
        assert!(menu.is_open());
    }

    #[test]
    fn space_activates_when_not_typing() {
        let mut menu = opened();
        menu.handle(Intent::Next, 0);
        let changes = menu.handle_key(Key::Character(' '), Modifiers::empty(), 0);
        assert_eq!(menu.depth(), 2);
        assert_eq!(changes.focus(1), Some(Some(&"mail")));
    }

    #[test]
    fn selectable_menu_reports_selection_per_level() {
        let config = ListConfig::builder()
            .wrap(WrapMode::Wrap)
            .selection_mode(understory_selection::SelectionMode::Single)
            .close_on_select(false)
            .build()
            .unwrap();
        let mut menu = Menu::new(tree(), config);
        menu.open(FocusStrategy::First);
        let changes = menu.handle(Intent::Toggle("quit"), 0);
        assert_eq!(changes.selection(0), Some(&["quit"][..]));
        assert_eq!(changes.action(), Some(&"quit"));
    }
}
