//! Token paths addressing nodes by descent from a root
//!
//! [`TreePath`] is an ordered list of string tokens. The empty path
//! addresses the node an operation is invoked on.

use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use itertools::Itertools;

/// Default separator for dotted paths (`a.b.c`).
pub const DEFAULT_SEPARATOR: &str = ".";

/// Path within a tree.
///
/// # Examples
/// - `["config", "database", "host"]` <-> `config.database.host`
/// - `[]` <-> `""` (the receiver itself)
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TreePath(Vec<String>);

impl TreePath {
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Empty path
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn single(segment: impl Into<String>) -> Self {
        Self(vec![segment.into()])
    }

    /// Split `s` on `separator`. The empty string is the empty path;
    /// empty tokens between separators are kept as ordinary keys.
    ///
    /// A path made of one empty key cannot be written: `[""]` displays as
    /// `""`, which parses back as the empty path.
    #[must_use]
    pub fn parse_with(s: &str, separator: &str) -> Self {
        if s.is_empty() {
            return Self::root();
        }
        if separator.is_empty() {
            return Self::single(s);
        }
        Self(s.split(separator).map(String::from).collect())
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Parent path, `None` for the empty path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0
            .split_last()
            .map(|(_, init)| Self(init.to_vec()))
    }

    /// Append a segment, returning a new path
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.0.iter().join(separator)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for TreePath {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[String]> for TreePath {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl Display for TreePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(DEFAULT_SEPARATOR))
    }
}

impl FromStr for TreePath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_with(s, DEFAULT_SEPARATOR))
    }
}

impl From<Vec<String>> for TreePath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for TreePath {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<S: Into<String>> FromIterator<S> for TreePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a TreePath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
