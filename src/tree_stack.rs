//! Explicit-stack pre-order traversal.
//!
//! Same order and path convention as [`crate::visit::Visit::visit`], but as
//! an [`Iterator`] so callers can stop early or chain adapters. Works for
//! self-referential node types only (children of the node's own type).

use tracing::instrument;

use crate::path::TreePath;
use crate::tree::MapMutableTree;
use crate::tree_traits::ReadableTree;
use crate::visit::ROOT_LABEL;

pub struct PreOrderIter<'a, T: ReadableTree> {
    stack: Vec<(&'a T, TreePath)>,
}

impl<'a, T: ReadableTree<Child = T>> PreOrderIter<'a, T> {
    pub fn new(root: &'a T, label: &str) -> Self {
        Self {
            stack: vec![(root, TreePath::single(label))],
        }
    }
}

impl<'a, T: ReadableTree<Child = T>> Iterator for PreOrderIter<'a, T> {
    type Item = (TreePath, Option<&'a T::Data>);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, path) = self.stack.pop()?;
        // Push children in reverse order for key-ordered traversal
        for (token, child) in node.children().iter().rev() {
            self.stack.push((child, path.child(token.as_str())));
        }
        Some((path, node.data()))
    }
}

impl<D> MapMutableTree<D> {
    /// Pre-order `(path, data)` pairs, root path `["root"]`.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIter<'_, Self> {
        PreOrderIter::new(self, ROOT_LABEL)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_from(&self, label: &str) -> PreOrderIter<'_, Self> {
        PreOrderIter::new(self, label)
    }
}

impl<'a, D> IntoIterator for &'a MapMutableTree<D> {
    type Item = (TreePath, Option<&'a D>);
    type IntoIter = PreOrderIter<'a, MapMutableTree<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
