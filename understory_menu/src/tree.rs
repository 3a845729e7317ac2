// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative menu items and their per-level collections.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use understory_collection::{Collection, Descriptor};

/// One entry of a menu description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuItem<K> {
    /// A leaf that performs an action when activated.
    Action {
        /// Key, unique within the enclosing menu.
        key: K,
        /// Label text, used for typeahead.
        text_value: String,
        /// Disabled actions are skipped by navigation and cannot be activated.
        disabled: bool,
    },
    /// An item that opens a nested menu.
    Submenu {
        /// Key, unique within the enclosing menu.
        key: K,
        /// Label text, used for typeahead.
        text_value: String,
        /// Disabled triggers never open their menu.
        disabled: bool,
        /// Entries of the nested menu.
        children: Vec<MenuItem<K>>,
    },
    /// A titled group of entries within the same menu.
    Section {
        /// Key, unique within the enclosing menu.
        key: K,
        /// Heading text.
        title: String,
        /// Entries of the group.
        children: Vec<MenuItem<K>>,
    },
}

impl<K> MenuItem<K> {
    /// An enabled action.
    pub fn action(key: K, text_value: impl Into<String>) -> Self {
        Self::Action {
            key,
            text_value: text_value.into(),
            disabled: false,
        }
    }

    /// An enabled submenu trigger.
    pub fn submenu(key: K, text_value: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Submenu {
            key,
            text_value: text_value.into(),
            disabled: false,
            children,
        }
    }

    /// A section.
    pub fn section(key: K, title: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Section {
            key,
            title: title.into(),
            children,
        }
    }

    /// Sets the disabled flag. Sections are not affected.
    #[must_use]
    pub fn disabled(mut self, value: bool) -> Self {
        match &mut self {
            Self::Action { disabled, .. } | Self::Submenu { disabled, .. } => *disabled = value,
            Self::Section { .. } => {}
        }
        self
    }
}

/// Identifies one menu of a [`MenuTree`]: the root or a nested submenu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MenuId(usize);

#[derive(Clone, Debug)]
struct Menu<K> {
    collection: Arc<Collection<K>>,
    /// Trigger keys of this menu and the menus they open.
    triggers: HashMap<K, MenuId>,
}

/// The collections of a menu: one for the root and one per submenu trigger.
///
/// Each menu resolves its own triggers, so the same key may name unrelated
/// items in different menus.
#[derive(Clone, Debug)]
pub struct MenuTree<K> {
    menus: Vec<Menu<K>>,
    root: MenuId,
}

impl<K> MenuTree<K>
where
    K: Clone + Eq + Hash,
{
    /// Builds the root collection and every nested one.
    #[must_use]
    pub fn build(items: &[MenuItem<K>]) -> Self {
        let mut menus = Vec::new();
        let root = build_menu(items, &mut menus);
        tracing::debug!(submenus = menus.len() - 1, "menu tree built");
        Self { menus, root }
    }

    /// The root menu.
    #[must_use]
    pub fn root_id(&self) -> MenuId {
        self.root
    }

    /// The root menu's collection.
    #[must_use]
    pub fn root(&self) -> &Arc<Collection<K>> {
        &self.menus[self.root.0].collection
    }

    /// The collection of `menu`.
    #[must_use]
    pub fn collection(&self, menu: MenuId) -> Option<&Arc<Collection<K>>> {
        self.menus.get(menu.0).map(|m| &m.collection)
    }

    /// The menu opened by `trigger` within `menu`.
    #[must_use]
    pub fn submenu(&self, menu: MenuId, trigger: &K) -> Option<MenuId> {
        self.menus.get(menu.0)?.triggers.get(trigger).copied()
    }

    /// Returns `true` if `key` opens a submenu of `menu`.
    #[must_use]
    pub fn is_trigger(&self, menu: MenuId, key: &K) -> bool {
        self.submenu(menu, key).is_some()
    }

    /// Number of submenus at every depth.
    #[must_use]
    pub fn submenu_count(&self) -> usize {
        self.menus.len() - 1
    }
}

/// Builds the menu for `items` after its submenus and returns its id.
fn build_menu<K>(items: &[MenuItem<K>], menus: &mut Vec<Menu<K>>) -> MenuId
where
    K: Clone + Eq + Hash,
{
    let mut triggers = HashMap::new();
    let collection = Arc::new(Collection::build(&descriptors(items, &mut triggers, menus)));
    menus.push(Menu {
        collection,
        triggers,
    });
    MenuId(menus.len() - 1)
}

fn descriptors<K>(
    items: &[MenuItem<K>],
    triggers: &mut HashMap<K, MenuId>,
    menus: &mut Vec<Menu<K>>,
) -> Vec<Descriptor<K>>
where
    K: Clone + Eq + Hash,
{
    items
        .iter()
        .map(|item| match item {
            MenuItem::Action {
                key,
                text_value,
                disabled,
            } => Descriptor::item(key.clone(), text_value.clone()).disabled(*disabled),
            MenuItem::Submenu {
                key,
                text_value,
                disabled,
                children,
            } => {
                let nested = build_menu(children, menus);
                if triggers.contains_key(key) {
                    tracing::warn!("duplicate submenu trigger key in one menu; keeping the first");
                } else {
                    triggers.insert(key.clone(), nested);
                }
                Descriptor::item(key.clone(), text_value.clone()).disabled(*disabled)
            }
            MenuItem::Section {
                key,
                title,
                children,
            } => Descriptor::section(
                key.clone(),
                title.clone(),
                descriptors(children, triggers, menus),
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn nested_menus_get_their_own_collections() {
        let tree = MenuTree::build(&[
            MenuItem::action("new", "New"),
            MenuItem::submenu(
                "share",
                "Share",
                vec![
                    MenuItem::action("mail", "Mail"),
                    MenuItem::submenu("social", "Social", vec![MenuItem::action("post", "Post")]),
                ],
            ),
            MenuItem::section(
                "edit",
                "Edit",
                vec![MenuItem::submenu("find", "Find", vec![MenuItem::action("next", "Next")])],
            ),
        ]);
        let root = tree.root_id();
        assert_eq!(tree.submenu_count(), 3);
        assert!(tree.is_trigger(root, &"find"));
        assert!(!tree.is_trigger(root, &"new"));
        assert!(!tree.is_trigger(root, &"social"), "nested triggers belong to their own menu");
        assert!(tree.root().contains(&"find"));
        assert!(!tree.root().contains(&"mail"));
        let share = tree.submenu(root, &"share").unwrap();
        assert!(tree.is_trigger(share, &"social"));
        let items = tree.collection(share).unwrap().item_keys().copied();
        assert_eq!(items.collect::<Vec<_>>(), ["mail", "social"]);
    }

    #[test]
    fn reused_keys_resolve_per_menu() {
        let tree = MenuTree::build(&[
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
        ]);
        let root = tree.root_id();
        let file = tree.submenu(root, &"file").unwrap();
        let edit = tree.submenu(root, &"edit").unwrap();
        let file_more = tree.submenu(file, &"more").unwrap();
        let edit_more = tree.submenu(edit, &"more").unwrap();
        assert_ne!(file_more, edit_more);
        assert!(tree.collection(edit_more).unwrap().contains(&"replace"));
        assert!(tree.collection(file_more).unwrap().contains(&"archive"));
        assert!(tree.is_trigger(root, &"share"));
        assert!(!tree.is_trigger(edit, &"share"), "a leaf stays a leaf in its own menu");
    }

    #[test]
    fn disabled_trigger_is_not_navigable() {
        let tree = MenuTree::build(&[
            MenuItem::submenu("more", "More", vec![MenuItem::action("x", "X")]).disabled(true),
        ]);
        assert!(tree.is_trigger(tree.root_id(), &"more"));
        assert!(!tree.root().is_navigable(&"more"));
    }
}
