//! Path-addressed trees with layered capabilities.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tree_traits`] | `ReadableTree` / `MutableValueTree` / `MutableStructureTree` |
//! | [`tree`] | Map-backed nodes for each level |
//! | [`ops`] | `get_or_create_path`, `set_value`, `copy_branch`, `get_path` |
//! | [`visit`] | Pre-order visit, depth, node count, leaf paths |
//! | [`tree_stack`] | Pre-order iterator |
//! | [`tree_queue`] | Breadth-first visit |
//! | [`path`] | `TreePath` token sequences |
//!
//! ```
//! use maptree::{MapMutableTree, PathOps, Visit};
//!
//! let mut source = MapMutableTree::leaf(4);
//! source.set_value(&["t3"], 3);
//!
//! let mut tree = MapMutableTree::leaf(5);
//! tree.copy_branch(&["t4"], &source);
//!
//! let mut seen = Vec::new();
//! tree.visit(|path, value| seen.push((path.to_string(), value.copied())));
//! assert_eq!(
//!     seen,
//!     vec![
//!         ("root".to_string(), Some(5)),
//!         ("root.t4".to_string(), Some(4)),
//!         ("root.t4.t3".to_string(), Some(3)),
//!     ]
//! );
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod ops;
pub mod path;
pub mod tree;
pub mod tree_queue;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;
pub mod visit;

pub use errors::{TreeError, TreeResult};
pub use ops::PathOps;
pub use path::TreePath;
pub use tree::{MapMutableTree, MapTree, MapValueTree};
pub use tree_stack::PreOrderIter;
pub use tree_traits::{Children, MutableStructureTree, MutableValueTree, ReadableTree, TreeRender};
pub use visit::{Visit, ROOT_LABEL};
