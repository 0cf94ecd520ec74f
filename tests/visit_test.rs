//! Traversals: visit, iterator, breadth-first, rendering

use std::collections::HashSet;

use maptree::{MapMutableTree, PathOps, ReadableTree, TreePath, TreeRender, Visit};
use rstest::rstest;

fn build(assignments: &[(&str, i32)]) -> MapMutableTree<i32> {
    let mut tree = MapMutableTree::empty();
    for (path, value) in assignments {
        let path: TreePath = path.parse().unwrap();
        tree.set_value(path.segments(), *value);
    }
    tree
}

// ============================================================
// visit
// ============================================================

#[rstest]
#[case(&[], 1)]
#[case(&[("a", 1)], 2)]
#[case(&[("a.b.c", 1)], 4)]
#[case(&[("a", 1), ("b", 2), ("a.x", 3), ("a.y", 4), ("b.z.q", 5)], 7)]
fn given_tree_when_visited_then_one_call_per_node(
    #[case] assignments: &[(&str, i32)],
    #[case] expected: usize,
) {
    let tree = build(assignments);

    let mut calls = 0;
    tree.visit(|_, _| calls += 1);

    assert_eq!(calls, expected);
    assert_eq!(tree.node_count(), expected);
}

#[test]
fn given_tree_when_visited_then_each_value_paired_with_its_path() {
    let tree = build(&[("a", 1), ("a.b", 2), ("c", 3)]);

    let mut seen = Vec::new();
    tree.visit(|path, value| seen.push((path.to_string(), value.copied())));

    assert_eq!(
        seen,
        vec![
            ("root".to_string(), None),
            ("root.a".to_string(), Some(1)),
            ("root.a.b".to_string(), Some(2)),
            ("root.c".to_string(), Some(3)),
        ]
    );
    let unique: HashSet<_> = seen.iter().map(|(p, _)| p.clone()).collect();
    assert_eq!(unique.len(), seen.len());
}

#[test]
fn given_tree_when_visited_then_parents_come_before_children() {
    let tree = build(&[("z.y.x", 1), ("a", 2)]);

    let mut order: Vec<TreePath> = Vec::new();
    tree.visit(|path, _| order.push(path.clone()));

    for (i, path) in order.iter().enumerate() {
        if let Some(parent) = path.parent().filter(|p| !p.is_empty()) {
            let parent_index = order.iter().position(|p| *p == parent).expect("parent visited");
            assert!(parent_index < i, "{} visited before its parent", path);
        }
    }
}

#[test]
fn given_tree_when_visited_twice_then_same_sequence() {
    let tree = build(&[("a", 1), ("b.c", 2)]);

    let mut first = Vec::new();
    tree.visit(|path, value| first.push((path.clone(), value.copied())));
    let mut second = Vec::new();
    tree.visit(|path, value| second.push((path.clone(), value.copied())));

    assert_eq!(first, second);
}

// ============================================================
// iterator / breadth-first
// ============================================================

#[test]
fn given_tree_when_iterated_then_matches_visit() {
    let tree = build(&[("a.b", 1), ("a.c", 2), ("d", 3)]);

    let mut visited = Vec::new();
    tree.visit(|path, value| visited.push((path.clone(), value.copied())));
    let iterated: Vec<_> = tree.iter().map(|(path, value)| (path, value.copied())).collect();

    assert_eq!(iterated, visited);
}

#[test]
fn given_tree_when_breadth_first_then_shallow_nodes_first() {
    let tree = build(&[("a.b.c", 1), ("d", 2)]);

    let mut depths = Vec::new();
    tree.visit_breadth_first(|path, _| depths.push(path.len()));

    assert_eq!(depths, vec![1, 2, 2, 3, 4]);
    assert_eq!(tree.level_widths(), vec![1, 2, 1, 1]);
}

// ============================================================
// depth / leaves / rendering
// ============================================================

#[test]
fn given_tree_when_depth_and_leaves_then_reports_structure() {
    let tree = build(&[("a.b", 1), ("a.c", 2), ("d", 3)]);

    assert_eq!(tree.depth(), 3);
    let leaves: Vec<String> = tree.leaf_paths().iter().map(ToString::to_string).collect();
    assert_eq!(leaves, vec!["a.b", "a.c", "d"]);
}

#[test]
fn given_tree_when_rendered_then_shows_keys_and_values() {
    let tree = build(&[("a", 1), ("a.b", 2)]);

    let rendered = tree.to_termtree("root").to_string();

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "root");
    assert!(lines[1].ends_with("a: 1"), "got {:?}", lines[1]);
    assert!(lines[2].ends_with("b: 2"), "got {:?}", lines[2]);
    assert_eq!(lines.len(), 3);
}

#[test]
fn given_leaf_when_rendered_then_single_line() {
    let tree = MapMutableTree::leaf("v");
    assert_eq!(tree.to_termtree("root").to_string().trim_end(), "root: v");
    assert!(tree.is_leaf());
}
