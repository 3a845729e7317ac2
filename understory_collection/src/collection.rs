// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable, flattened collection snapshot.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::builder::{Descriptor, flatten};
use crate::types::{Node, NodeKind};

/// An ordered, flattened view of a declarative item tree.
///
/// A `Collection` is a read-only snapshot: navigation, selection, and
/// filtering all read from it, and a new snapshot is built whenever the
/// source items change. Lookups by key are `O(1)`.
#[derive(Clone, Debug)]
pub struct Collection<K> {
    nodes: Vec<Node<K>>,
    positions: HashMap<K, usize>,
    item_count: usize,
}

impl<K> Default for Collection<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            positions: HashMap::new(),
            item_count: 0,
        }
    }
}

impl<K> Collection<K>
where
    K: Clone + Eq + Hash,
{
    /// Builds a collection from a declarative tree.
    ///
    /// This is pure and total: it never fails, and an empty tree yields an
    /// empty collection.
    #[must_use]
    pub fn build(tree: &[Descriptor<K>]) -> Self {
        let collection = Self::from_nodes(flatten(tree));
        tracing::trace!(
            nodes = collection.len(),
            items = collection.item_count,
            "collection built"
        );
        collection
    }

    fn from_nodes(nodes: Vec<Node<K>>) -> Self {
        let mut positions = HashMap::with_capacity(nodes.len());
        let mut item_count = 0;
        for node in &nodes {
            positions.insert(node.key.clone(), node.index);
            if node.kind == NodeKind::Item {
                item_count += 1;
            }
        }
        Self {
            nodes,
            positions,
            item_count,
        }
    }

    /// Returns the node for `key`, if present.
    pub fn get(&self, key: &K) -> Option<&Node<K>> {
        self.positions.get(key).map(|&i| &self.nodes[i])
    }

    /// Returns the position of `key` in the flattened sequence.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Returns `true` if `key` is part of this snapshot.
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns `true` if `key` is an enabled item.
    pub fn is_navigable(&self, key: &K) -> bool {
        self.get(key).is_some_and(Node::is_navigable)
    }

    /// Returns a new snapshot containing the items for which `keep` returns
    /// `true`, in their original order.
    ///
    /// Section headers are kept only when at least one item below them is
    /// kept. Positions are renumbered; keys and text are unchanged.
    #[must_use]
    pub fn retain(&self, mut keep: impl FnMut(&Node<K>) -> bool) -> Self {
        let mut kept = alloc::vec![false; self.nodes.len()];
        for node in self.nodes.iter().filter(|n| n.is_item()) {
            if !keep(node) {
                continue;
            }
            kept[node.index] = true;
            let mut parent = node.parent_key.as_ref();
            while let Some(i) = parent.and_then(|k| self.index_of(k)) {
                if kept[i] {
                    break;
                }
                kept[i] = true;
                parent = self.nodes[i].parent_key.as_ref();
            }
        }

        let nodes = self
            .nodes
            .iter()
            .filter(|n| kept[n.index])
            .enumerate()
            .map(|(index, n)| Node {
                index,
                ..n.clone()
            })
            .collect();
        Self::from_nodes(nodes)
    }
}

impl<K> Collection<K> {
    /// Number of nodes, including section headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the collection has no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of items (enabled or not), excluding section headers.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// All nodes in flattened order.
    #[must_use]
    pub fn nodes(&self) -> &[Node<K>] {
        &self.nodes
    }

    /// Returns the node at `index`.
    #[must_use]
    pub fn node_at(&self, index: usize) -> Option<&Node<K>> {
        self.nodes.get(index)
    }

    /// Iterates over all nodes in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Node<K>> {
        self.nodes.iter()
    }

    /// Iterates over the keys of items (not sections), in order.
    pub fn item_keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.nodes.iter().filter(|n| n.is_item()).map(|n| &n.key)
    }

    /// Iterates over enabled items in order.
    pub fn navigable(&self) -> impl DoubleEndedIterator<Item = &Node<K>> + '_ {
        self.nodes.iter().filter(|n| n.is_navigable())
    }

    /// Number of enabled items.
    #[must_use]
    pub fn navigable_count(&self) -> usize {
        self.navigable().count()
    }

    /// First enabled item.
    #[must_use]
    pub fn first_navigable(&self) -> Option<&Node<K>> {
        self.navigable().next()
    }

    /// Last enabled item.
    #[must_use]
    pub fn last_navigable(&self) -> Option<&Node<K>> {
        self.navigable().next_back()
    }

    /// Nearest enabled item strictly after `index`.
    #[must_use]
    pub fn navigable_after(&self, index: usize) -> Option<&Node<K>> {
        self.nodes
            .get(index.saturating_add(1)..)?
            .iter()
            .find(|n| n.is_navigable())
    }

    /// Nearest enabled item strictly before `index`.
    #[must_use]
    pub fn navigable_before(&self, index: usize) -> Option<&Node<K>> {
        let end = index.min(self.nodes.len());
        self.nodes[..end].iter().rev().find(|n| n.is_navigable())
    }
}

impl<'a, K> IntoIterator for &'a Collection<K> {
    type Item = &'a Node<K>;
    type IntoIter = core::slice::Iter<'a, Node<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn fruits() -> Collection<&'static str> {
        Collection::build(&[
            Descriptor::section(
                "fruit",
                "Fruit",
                vec![
                    Descriptor::item("apple", "Apple"),
                    Descriptor::item("banana", "Banana").disabled(true),
                ],
            ),
            Descriptor::section("veg", "Vegetables", vec![Descriptor::item("kale", "Kale")]),
            Descriptor::item("water", "Water"),
        ])
    }

    #[test]
    fn lookups_by_key() {
        let c = fruits();
        assert_eq!(c.len(), 6);
        assert_eq!(c.item_count(), 4);
        assert_eq!(c.index_of(&"kale"), Some(4));
        assert!(c.contains(&"veg"));
        assert!(!c.contains(&"pear"));
        assert!(c.is_navigable(&"apple"));
        assert!(!c.is_navigable(&"banana"));
        assert!(!c.is_navigable(&"fruit"));
    }

    #[test]
    fn navigable_neighbors_skip_sections_and_disabled() {
        let c = fruits();
        let apple = c.index_of(&"apple").unwrap();
        assert_eq!(c.navigable_after(apple).map(|n| n.key), Some("kale"));
        let kale = c.index_of(&"kale").unwrap();
        assert_eq!(c.navigable_before(kale).map(|n| n.key), Some("apple"));
        assert_eq!(c.navigable_before(apple).map(|n| n.key), None);
        assert_eq!(c.first_navigable().map(|n| n.key), Some("apple"));
        assert_eq!(c.last_navigable().map(|n| n.key), Some("water"));
        assert_eq!(c.navigable_count(), 3);
    }

    #[test]
    fn retain_drops_empty_sections_and_renumbers() {
        let c = fruits();
        let only_water = c.retain(|n| n.key == "water");
        assert_eq!(only_water.len(), 1);
        assert_eq!(only_water.index_of(&"water"), Some(0));

        let kale = c.retain(|n| n.key == "kale");
        let keys: Vec<_> = kale.iter().map(|n| n.key).collect();
        assert_eq!(keys, vec!["veg", "kale"]);
    }

    #[test]
    fn retain_keeps_original_order() {
        let c = fruits();
        let all = c.retain(|_| true);
        let before: Vec<_> = c.iter().map(|n| n.key).collect();
        let after: Vec<_> = all.iter().map(|n| n.key).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn empty_collection_has_no_navigable_nodes() {
        let c = Collection::<u32>::build(&[]);
        assert!(c.is_empty());
        assert!(c.first_navigable().is_none());
        assert!(c.navigable_after(0).is_none());
        assert!(c.navigable_before(0).is_none());
    }
}
