//! Path algorithms over fully mutable trees.
//!
//! Everything here needs [`MutableStructureTree`] because resolving a path
//! may create the nodes along it. Paths are any slice of string-like
//! tokens, so `&["a", "b"]`, `&Vec<String>` and `&TreePath` all work.

use tracing::{instrument, trace};

use crate::tree_traits::MutableStructureTree;

pub trait PathOps: MutableStructureTree {
    /// Node at `path`, creating empty nodes for missing tokens.
    /// The empty path resolves to `self`.
    #[instrument(level = "trace", skip_all, fields(len = path.len()))]
    fn get_or_create_path<S: AsRef<str>>(&mut self, path: &[S]) -> &mut Self {
        path.iter()
            .fold(self, |node, token| node.get_or_create(token.as_ref()))
    }

    /// Set the data of the node at `path` (created if needed).
    /// Intermediate nodes keep whatever data they had.
    #[instrument(level = "trace", skip_all, fields(len = path.len()))]
    fn set_value<S: AsRef<str>>(&mut self, path: &[S], value: Self::Data) {
        self.get_or_create_path(path).set_data(Some(value));
    }

    /// Node at `path` without creating anything.
    fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&Self> {
        path.iter()
            .try_fold(self, |node, token| node.child(token.as_ref()))
    }

    /// Deep copy `branch` into `self` at `path`.
    ///
    /// The destination node takes a clone of the branch's data, absent
    /// data included. Each child of the branch is then copied into the
    /// destination node at `[child_key] + path[1..]`: the first token of
    /// `path` is dropped and the child key takes its place. With a single
    /// token path this nests the branch under that key; with the empty
    /// path the branch is merged into `self`.
    #[instrument(level = "trace", skip_all, fields(len = path.len()))]
    fn copy_branch<S: AsRef<str>>(&mut self, path: &[S], branch: &Self)
    where
        Self::Data: Clone,
    {
        let local = self.get_or_create_path(path);
        local.set_data(branch.data().cloned());

        let rest = path.get(1..).unwrap_or_default();
        for (key, child) in branch.children() {
            trace!(key = key.as_str(), "copying child");
            let child_path: Vec<&str> = std::iter::once(key.as_str())
                .chain(rest.iter().map(AsRef::as_ref))
                .collect();
            local.copy_branch(&child_path, child);
        }
    }
}

impl<T: MutableStructureTree> PathOps for T {}
