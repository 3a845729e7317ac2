// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative item/section descriptors and the flattening pass.

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::types::{Node, NodeKind};

/// A single selectable entry in a declarative item tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDescriptor<K> {
    /// Stable key for the item.
    pub key: K,
    /// Text used for typeahead and filtering.
    pub text_value: String,
    /// Whether the item is disabled.
    pub disabled: bool,
}

/// A group of descriptors rendered under a common heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionDescriptor<K> {
    /// Stable key for the section header.
    pub key: K,
    /// Heading text.
    pub title: String,
    /// Disabling a section disables everything inside it.
    pub disabled: bool,
    /// Items and nested sections, in document order.
    pub children: Vec<Descriptor<K>>,
}

/// A node of the declarative tree fed to [`Collection::build`](crate::Collection::build).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Descriptor<K> {
    /// A selectable entry.
    Item(ItemDescriptor<K>),
    /// A group of entries.
    Section(SectionDescriptor<K>),
}

impl<K> Descriptor<K> {
    /// Creates an enabled item.
    pub fn item(key: K, text_value: impl Into<String>) -> Self {
        Self::Item(ItemDescriptor {
            key,
            text_value: text_value.into(),
            disabled: false,
        })
    }

    /// Creates an enabled section containing `children`.
    pub fn section(key: K, title: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Section(SectionDescriptor {
            key,
            title: title.into(),
            disabled: false,
            children,
        })
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        match &mut self {
            Self::Item(item) => item.disabled = disabled,
            Self::Section(section) => section.disabled = disabled,
        }
        self
    }

    /// Returns the key of this descriptor.
    pub fn key(&self) -> &K {
        match self {
            Self::Item(item) => &item.key,
            Self::Section(section) => &section.key,
        }
    }
}

/// Flattens a descriptor tree into document order.
///
/// Keys seen twice keep their first occurrence; later duplicates (and, for
/// sections, their whole subtree) are dropped.
pub(crate) fn flatten<K>(tree: &[Descriptor<K>]) -> Vec<Node<K>>
where
    K: Clone + Eq + Hash,
{
    let mut out = Flattener {
        nodes: Vec::new(),
        seen: HashSet::new(),
    };
    out.visit(tree, None, None, 0, false);
    out.nodes
}

struct Flattener<K> {
    nodes: Vec<Node<K>>,
    seen: HashSet<K>,
}

impl<K> Flattener<K>
where
    K: Clone + Eq + Hash,
{
    fn visit(
        &mut self,
        children: &[Descriptor<K>],
        parent: Option<&K>,
        section: Option<&K>,
        level: usize,
        inherited_disabled: bool,
    ) {
        for child in children {
            if !self.seen.insert(child.key().clone()) {
                tracing::warn!(
                    index = self.nodes.len(),
                    "duplicate collection key dropped; first occurrence wins"
                );
                continue;
            }
            match child {
                Descriptor::Item(item) => self.nodes.push(Node {
                    key: item.key.clone(),
                    kind: NodeKind::Item,
                    text_value: item.text_value.clone(),
                    disabled: inherited_disabled || item.disabled,
                    parent_key: parent.cloned(),
                    section_key: section.cloned(),
                    index: self.nodes.len(),
                    level,
                }),
                Descriptor::Section(sec) => {
                    let disabled = inherited_disabled || sec.disabled;
                    self.nodes.push(Node {
                        key: sec.key.clone(),
                        kind: NodeKind::Section,
                        text_value: sec.title.clone(),
                        disabled,
                        parent_key: parent.cloned(),
                        section_key: section.cloned(),
                        index: self.nodes.len(),
                        level,
                    });
                    // The outermost section is the grouping for everything below it.
                    let outer = section.unwrap_or(&sec.key);
                    self.visit(&sec.children, Some(&sec.key), Some(outer), level + 1, disabled);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn flattens_sections_in_document_order() {
        let tree = vec![
            Descriptor::item(1_u32, "one"),
            Descriptor::section(
                10,
                "group",
                vec![Descriptor::item(2, "two"), Descriptor::item(3, "three")],
            ),
            Descriptor::item(4, "four"),
        ];
        let nodes = flatten(&tree);
        let keys: Vec<u32> = nodes.iter().map(|n| n.key).collect();
        assert_eq!(keys, vec![1, 10, 2, 3, 4]);
        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(node.index, i, "index must match position");
        }
    }

    #[test]
    fn nested_sections_track_parent_and_outer_section() {
        let tree = vec![Descriptor::section(
            1_u32,
            "outer",
            vec![Descriptor::section(
                2,
                "inner",
                vec![Descriptor::item(3, "leaf")],
            )],
        )];
        let nodes = flatten(&tree);
        let leaf = &nodes[2];
        assert_eq!(leaf.parent_key, Some(2));
        assert_eq!(leaf.section_key, Some(1));
        assert_eq!(leaf.level, 2);
        let inner = &nodes[1];
        assert_eq!(inner.parent_key, Some(1));
        assert_eq!(inner.section_key, Some(1));
    }

    #[test]
    fn disabled_section_disables_children() {
        let tree = vec![
            Descriptor::section(1_u32, "off", vec![Descriptor::item(2, "child")]).disabled(true),
        ];
        let nodes = flatten(&tree);
        assert!(nodes[1].disabled, "items inherit a disabled section");
    }

    #[test]
    fn duplicate_keys_keep_first_occurrence() {
        let tree = vec![
            Descriptor::item(1_u32, "first"),
            Descriptor::item(1, "second"),
            Descriptor::item(2, "other"),
        ];
        let nodes = flatten(&tree);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text_value, "first");
        assert_eq!(nodes[1].index, 1);
    }

    #[test]
    fn empty_tree_is_empty() {
        let nodes = flatten::<u32>(&[]);
        assert!(nodes.is_empty());
    }
}
