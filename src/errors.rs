use thiserror::Error;

use crate::path::TreePath;

/// Errors raised at the edges of the crate.
///
/// Tree operations themselves are total; these only come from parsing
/// user input and loading settings.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("invalid assignment, expected <path>=<value>: {0}")]
    InvalidAssignment(String),

    #[error("invalid copy spec, expected <source>:<destination>: {0}")]
    InvalidCopySpec(String),

    #[error("path not found: {0}")]
    PathNotFound(TreePath),

    #[error("config error: {message}")]
    Config { message: String },
}

pub type TreeResult<T> = Result<T, TreeError>;
