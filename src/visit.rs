//! Recursive read-only traversals, available on every capability level.

use tracing::instrument;

use crate::path::TreePath;
use crate::tree_traits::ReadableTree;

/// Label of the synthetic root token passed to visitors.
pub const ROOT_LABEL: &str = "root";

pub trait Visit: ReadableTree {
    /// Pre-order depth-first walk calling `action(path, data)` once per
    /// node, including nodes without data. The receiver's path is
    /// `["root"]`; each child appends its key. Children are visited in
    /// key order.
    fn visit<F>(&self, action: F)
    where
        F: FnMut(&TreePath, Option<&Self::Data>),
    {
        self.visit_from(ROOT_LABEL, action);
    }

    /// Like [`Visit::visit`] with `label` as the root token.
    #[instrument(level = "trace", skip(self, action))]
    fn visit_from<F>(&self, label: &str, mut action: F)
    where
        F: FnMut(&TreePath, Option<&Self::Data>),
    {
        let mut path = TreePath::single(label);
        visit_tree(self, &mut path, &mut action);
    }

    /// Number of nodes on the longest root-to-leaf chain; a leaf has depth 1.
    fn depth(&self) -> usize {
        depth_of(self)
    }

    /// This node plus all descendants.
    fn node_count(&self) -> usize {
        count_of(self)
    }

    /// Paths of all leaves, relative to this node.
    ///
    /// A node without children is its own (empty path) leaf.
    fn leaf_paths(&self) -> Vec<TreePath> {
        let mut leaves = Vec::new();
        collect_leaves(self, &mut TreePath::root(), &mut leaves);
        leaves
    }
}

impl<T: ReadableTree + ?Sized> Visit for T {}

fn visit_tree<T, F>(node: &T, path: &mut TreePath, action: &mut F)
where
    T: ReadableTree + ?Sized,
    F: FnMut(&TreePath, Option<&T::Data>),
{
    action(path, node.data());
    for (token, branch) in node.children() {
        path.push(token.as_str());
        visit_tree(branch, path, action);
        path.pop();
    }
}

fn depth_of<T: ReadableTree + ?Sized>(node: &T) -> usize {
    1 + node
        .children()
        .values()
        .map(|child| depth_of(child))
        .max()
        .unwrap_or(0)
}

fn count_of<T: ReadableTree + ?Sized>(node: &T) -> usize {
    1 + node
        .children()
        .values()
        .map(|child| count_of(child))
        .sum::<usize>()
}

fn collect_leaves<T: ReadableTree + ?Sized>(node: &T, path: &mut TreePath, leaves: &mut Vec<TreePath>) {
    if node.is_leaf() {
        leaves.push(path.clone());
        return;
    }
    for (token, child) in node.children() {
        path.push(token.as_str());
        collect_leaves(child, path, leaves);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MapMutableTree;
    use crate::util::testing;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    //      root
    //      /  \
    //     a    b
    //     |
    //     c
    fn sample() -> MapMutableTree<i32> {
        MapMutableTree::leaf(0)
            .with_child("a", MapMutableTree::leaf(1).with_child("c", MapMutableTree::leaf(3)))
            .with_child("b", MapMutableTree::leaf(2))
    }

    #[test]
    fn test_depth_and_count() {
        let tree = sample();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(MapMutableTree::leaf(1).depth(), 1);
    }

    #[test]
    fn test_leaf_paths() {
        let leaves = sample().leaf_paths();
        assert_eq!(
            leaves,
            vec![
                TreePath::from(&["a", "c"][..]),
                TreePath::single("b"),
            ]
        );
        assert_eq!(MapMutableTree::leaf(1).leaf_paths(), vec![TreePath::root()]);
    }

    #[test]
    fn test_visit_from_custom_label() {
        let mut seen = Vec::new();
        MapMutableTree::leaf(5).visit_from("top", |path, value| {
            seen.push((path.join("/"), value.copied()));
        });
        assert_eq!(seen, vec![("top".to_string(), Some(5))]);
    }
}
