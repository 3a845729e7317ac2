// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Collection: the flattened item model shared by listboxes, menus, and comboboxes.
//!
//! A UI list is usually described declaratively as a tree: items, optionally grouped into
//! (possibly nested) sections. Keyboard navigation, selection, and filtering all want the
//! opposite shape: a flat, stably ordered sequence with a fast key → position lookup.
//!
//! This crate provides that bridge:
//!
//! - [`Descriptor`]: a declarative item or section, carrying a key, a text value used for
//!   typeahead and filtering, and a disabled flag.
//! - [`Collection`]: an immutable snapshot produced by [`Collection::build`]. Sections are
//!   flattened in document order; section headers stay in the sequence as non-navigable
//!   markers so hosts can still render group headings and derive grouping attributes.
//! - [`Node`]: one entry of a collection, with its position, kind, and parent/section keys.
//!
//! Building never fails. An empty tree yields an empty collection, and a key that appears
//! more than once keeps its first occurrence.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_collection::{Collection, Descriptor, NodeKind};
//!
//! let collection = Collection::build(&[
//!     Descriptor::item("new", "New File"),
//!     Descriptor::section(
//!         "recent",
//!         "Recent",
//!         vec![
//!             Descriptor::item("a.txt", "a.txt"),
//!             Descriptor::item("b.txt", "b.txt").disabled(true),
//!         ],
//!     ),
//! ]);
//!
//! // The section header is part of the sequence, but it is not navigable.
//! assert_eq!(collection.len(), 4);
//! assert_eq!(collection.get(&"recent").map(|n| n.kind), Some(NodeKind::Section));
//! assert!(!collection.is_navigable(&"recent"));
//! assert!(!collection.is_navigable(&"b.txt"));
//!
//! // Items remember the section they belong to.
//! assert_eq!(collection.get(&"a.txt").unwrap().section_key, Some("recent"));
//!
//! let navigable: Vec<_> = collection.navigable().map(|n| n.key).collect();
//! assert_eq!(navigable, ["new", "a.txt"]);
//! ```
//!
//! Collections are rebuilt wholesale whenever the source items change. Callers holding a
//! focus cursor or selection are expected to revalidate against the new snapshot.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod collection;
mod types;

pub use builder::{Descriptor, ItemDescriptor, SectionDescriptor};
pub use collection::Collection;
pub use types::{Node, NodeKind};
