// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public node types for flattened collections.

use alloc::string::String;

/// The kind of a node in a [`Collection`](crate::Collection).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A selectable, focusable entry.
    Item,
    /// A group header. Never focusable or selectable.
    Section,
}

/// One entry of a flattened collection.
///
/// Nodes are owned by their collection and are immutable once the collection
/// has been built; hosts only ever see shared references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    /// Stable key, unique within the collection.
    pub key: K,
    /// Whether this node is an item or a section header.
    pub kind: NodeKind,
    /// Text used for typeahead and filtering. For sections this is the title.
    pub text_value: String,
    /// Disabled nodes are skipped by navigation and cannot be selected.
    ///
    /// Items inside a disabled section are disabled as well.
    pub disabled: bool,
    /// Key of the directly enclosing section, if any.
    pub parent_key: Option<K>,
    /// Key of the outermost enclosing section, if any.
    ///
    /// This is the grouping hosts usually render; for a single level of
    /// sections it equals [`Node::parent_key`].
    pub section_key: Option<K>,
    /// Position of this node in the flattened sequence.
    pub index: usize,
    /// Section nesting depth (`0` for top-level nodes).
    pub level: usize,
}

impl<K> Node<K> {
    /// Returns `true` if this node can receive focus and selection.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.kind == NodeKind::Item && !self.disabled
    }

    /// Returns `true` if this node is an item (enabled or not).
    #[must_use]
    pub fn is_item(&self) -> bool {
        self.kind == NodeKind::Item
    }
}
