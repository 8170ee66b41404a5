//! Error types surfaced by the record tree.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Key not found: {0}")]
    KeyNotFound(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
