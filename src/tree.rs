//! Map-backed node types, one per capability level.
//!
//! ```text
//! ReadableTree          <- MapTree<D, T>
//! MutableValueTree      <- MapValueTree<D, T>
//! MutableStructureTree  <- MapMutableTree<D>
//! ```
//!
//! `MapTree` and `MapValueTree` take their child type as a parameter so a
//! weaker parent can own stronger children. `MapMutableTree` owns children
//! of its own type.

use crate::tree_traits::{Children, MutableStructureTree, MutableValueTree, ReadableTree};

/// Immutable node: data and children are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTree<D, T> {
    data: Option<D>,
    children: Children<T>,
}

impl<D, T> MapTree<D, T> {
    pub fn new(data: Option<D>, children: Children<T>) -> Self {
        Self { data, children }
    }

    pub fn leaf(data: D) -> Self {
        Self::new(Some(data), Children::new())
    }

    pub fn with_child(mut self, key: impl Into<String>, child: T) -> Self {
        self.children.insert(key.into(), child);
        self
    }
}

impl<D, T: ReadableTree<Data = D>> ReadableTree for MapTree<D, T> {
    type Data = D;
    type Child = T;

    fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    fn children(&self) -> &Children<T> {
        &self.children
    }
}

/// Node with a settable value and a fixed set of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapValueTree<D, T> {
    data: Option<D>,
    children: Children<T>,
}

impl<D, T> MapValueTree<D, T> {
    pub fn new(data: Option<D>, children: Children<T>) -> Self {
        Self { data, children }
    }

    pub fn leaf(data: D) -> Self {
        Self::new(Some(data), Children::new())
    }

    pub fn with_child(mut self, key: impl Into<String>, child: T) -> Self {
        self.children.insert(key.into(), child);
        self
    }
}

impl<D, T: ReadableTree<Data = D>> ReadableTree for MapValueTree<D, T> {
    type Data = D;
    type Child = T;

    fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    fn children(&self) -> &Children<T> {
        &self.children
    }
}

impl<D, T: ReadableTree<Data = D>> MutableValueTree for MapValueTree<D, T> {
    fn data_mut(&mut self) -> &mut Option<D> {
        &mut self.data
    }

    fn child_mut(&mut self, key: &str) -> Option<&mut T> {
        self.children.get_mut(key)
    }
}

/// Fully mutable node; children are `MapMutableTree`s themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapMutableTree<D> {
    data: Option<D>,
    children: Children<MapMutableTree<D>>,
}

impl<D> Default for MapMutableTree<D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<D> MapMutableTree<D> {
    pub fn new(data: Option<D>, children: Children<MapMutableTree<D>>) -> Self {
        Self { data, children }
    }

    /// No data, no children.
    pub fn empty() -> Self {
        Self::new(None, Children::new())
    }

    pub fn leaf(data: D) -> Self {
        Self::new(Some(data), Children::new())
    }

    pub fn with_child(mut self, key: impl Into<String>, child: MapMutableTree<D>) -> Self {
        self.children.insert(key.into(), child);
        self
    }
}

impl<D> ReadableTree for MapMutableTree<D> {
    type Data = D;
    type Child = MapMutableTree<D>;

    fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    fn children(&self) -> &Children<Self> {
        &self.children
    }
}

impl<D> MutableValueTree for MapMutableTree<D> {
    fn data_mut(&mut self) -> &mut Option<D> {
        &mut self.data
    }

    fn child_mut(&mut self, key: &str) -> Option<&mut <Self as ReadableTree>::Child> {
        self.children.get_mut(key)
    }
}

impl<D> MutableStructureTree for MapMutableTree<D> {
    fn children_mut(&mut self) -> &mut Children<Self> {
        &mut self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    fn sum_values<T: ReadableTree<Data = i32>>(node: &T) -> i32 {
        node.data().copied().unwrap_or(0)
            + node.children().values().map(sum_values).sum::<i32>()
    }

    fn bump<T: MutableValueTree<Data = i32>>(node: &mut T) {
        let next = node.data().copied().unwrap_or(0) + 1;
        node.set_data(Some(next));
    }

    #[test]
    fn test_mutable_tree_usable_as_readable() {
        let tree = MapMutableTree::leaf(2).with_child("a", MapMutableTree::leaf(3));
        assert_eq!(sum_values(&tree), 5);
    }

    #[test]
    fn test_mutable_tree_usable_as_value_tree() {
        let mut tree = MapMutableTree::leaf(1);
        bump(&mut tree);
        assert_eq!(tree.data(), Some(&2));
    }

    #[test]
    fn test_readable_parent_holds_stronger_children() {
        // read-only -> value-mutable -> structure-mutable
        let inner = MapMutableTree::leaf(2);
        let middle = MapValueTree::leaf(1).with_child("inner", inner);
        let outer: MapTree<i32, MapValueTree<i32, MapMutableTree<i32>>> =
            MapTree::new(None, Children::new()).with_child("middle", middle);

        assert_eq!(outer.data(), None);
        assert_eq!(sum_values(&outer), 3);
        assert_eq!(
            outer.child("middle").and_then(|m| m.child("inner")).and_then(|n| n.data()),
            Some(&2)
        );
    }

    #[test]
    fn test_value_tree_updates_existing_child_only() {
        let mut tree: MapValueTree<i32, MapMutableTree<i32>> =
            MapValueTree::leaf(1).with_child("a", MapMutableTree::leaf(10));

        if let Some(child) = tree.child_mut("a") {
            child.set_data(Some(11));
        }
        assert!(tree.child_mut("missing").is_none());

        assert_eq!(tree.child("a").and_then(|c| c.data()), Some(&11));
        assert_eq!(tree.children().len(), 1);
    }

    #[test]
    fn test_mutable_tree_child_mut_reaches_existing_child() {
        let mut tree = MapMutableTree::leaf(0).with_child("a", MapMutableTree::leaf(1));

        if let Some(a) = tree.child_mut("a") {
            a.set_data(Some(5));
        }

        assert_eq!(tree.child("a").and_then(|a| a.data()), Some(&5));
        assert!(tree.child_mut("missing").is_none());
        assert_eq!(tree.children().len(), 1);
    }

    #[test]
    fn test_take_data_leaves_node_empty() {
        let mut tree = MapMutableTree::leaf("x");
        assert_eq!(tree.take_data(), Some("x"));
        assert_eq!(tree.data(), None);
    }

    #[test]
    fn test_set_replaces_subtree() {
        let mut tree = MapMutableTree::leaf(0)
            .with_child("a", MapMutableTree::leaf(1).with_child("deep", MapMutableTree::leaf(2)));

        tree.set("a", MapMutableTree::leaf(9));

        let a = tree.child("a").unwrap();
        assert_eq!(a.data(), Some(&9));
        assert!(a.is_leaf());
    }

    #[test]
    fn test_get_or_create_creates_empty_child() {
        let mut tree: MapMutableTree<i32> = MapMutableTree::empty();
        let child = tree.get_or_create("a");
        assert_eq!(child.data(), None);
        assert!(child.is_leaf());
        assert_eq!(tree.children().len(), 1);
    }
}
