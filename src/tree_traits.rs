//! Capability levels of a tree node
//!
//! | Trait | Data | Children |
//! |-------|------|----------|
//! | [`ReadableTree`] | read | read |
//! | [`MutableValueTree`] | read/write | read, values of existing children writable |
//! | [`MutableStructureTree`] | read/write | insert/replace |
//!
//! Each level extends the previous one, so a node can be handed to any
//! call site asking for a weaker capability. Algorithms bound on
//! `ReadableTree` therefore accept every concrete node type.

use std::collections::BTreeMap;
use std::fmt::Display;

use termtree::Tree;

/// Children of a node, keyed by path token.
pub type Children<T> = BTreeMap<String, T>;

/// Read-only view of a node.
///
/// `Child` may be any node type carrying the same payload, which lets a
/// read-only parent hold children of a stronger capability level.
pub trait ReadableTree {
    type Data;
    type Child: ReadableTree<Data = Self::Data>;

    fn data(&self) -> Option<&Self::Data>;

    fn children(&self) -> &Children<Self::Child>;

    fn child(&self, key: &str) -> Option<&Self::Child> {
        self.children().get(key)
    }

    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

/// Node whose own value can be changed in place.
///
/// The child set stays fixed: existing children can be reached for
/// value updates, but nothing can be inserted or replaced.
pub trait MutableValueTree: ReadableTree {
    fn data_mut(&mut self) -> &mut Option<Self::Data>;

    fn child_mut(&mut self, key: &str) -> Option<&mut Self::Child>
    where
        Self::Child: MutableValueTree;

    fn set_data(&mut self, data: Option<Self::Data>) {
        *self.data_mut() = data;
    }

    fn take_data(&mut self) -> Option<Self::Data> {
        self.data_mut().take()
    }
}

/// Fully mutable node. Its children are nodes of its own type, which is
/// what lets the path algorithms in [`crate::ops`] recurse.
pub trait MutableStructureTree: MutableValueTree + ReadableTree<Child = Self> + Default {
    fn children_mut(&mut self) -> &mut Children<Self>;

    /// Existing child under `key`, or a new empty child inserted there.
    /// Repeated calls with the same key return the same child.
    fn get_or_create(&mut self, key: &str) -> &mut Self {
        self.children_mut().entry(key.to_string()).or_default()
    }

    /// Insert `node` under `key`, dropping whatever subtree was there.
    fn set(&mut self, key: &str, node: Self) {
        self.children_mut().insert(key.to_string(), node);
    }
}

/// Conversion into a printable [`termtree::Tree`].
pub trait TreeRender {
    fn to_termtree(&self, label: &str) -> Tree<String>;
}

impl<T> TreeRender for T
where
    T: ReadableTree,
    T::Data: Display,
{
    fn to_termtree(&self, label: &str) -> Tree<String> {
        let root = match self.data() {
            Some(data) => format!("{}: {}", label, data),
            None => label.to_string(),
        };

        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|(key, child)| child.to_termtree(key))
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}
