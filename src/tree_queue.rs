//! Breadth-first traversal over a fully mutable tree, using a `VecDeque`
//! of `(node, path)` pairs.

use std::collections::VecDeque;

use tracing::instrument;

use crate::path::TreePath;
use crate::tree::MapMutableTree;
use crate::tree_traits::ReadableTree;
use crate::visit::ROOT_LABEL;

impl<D> MapMutableTree<D> {
    /// Level-order walk calling `action(path, data)` once per node.
    /// Path convention is the same as for `visit`: the root is `["root"]`.
    #[instrument(level = "trace", skip_all)]
    pub fn visit_breadth_first<F>(&self, mut action: F)
    where
        F: FnMut(&TreePath, Option<&D>),
    {
        let mut queue = VecDeque::new();
        queue.push_back((self, TreePath::single(ROOT_LABEL)));

        while let Some((node, path)) = queue.pop_front() {
            action(&path, node.data());
            for (token, child) in node.children() {
                queue.push_back((child, path.child(token.as_str())));
            }
        }
    }

    /// Number of nodes on each level, starting with the root level.
    pub fn level_widths(&self) -> Vec<usize> {
        let mut widths = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back((self, 0usize));

        while let Some((node, level)) = queue.pop_front() {
            if widths.len() <= level {
                widths.push(0);
            }
            widths[level] += 1;
            for child in node.children().values() {
                queue.push_back((child, level + 1));
            }
        }

        widths
    }
}
