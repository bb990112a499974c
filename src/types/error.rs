//! Error types for the graph traverser.

use thiserror::Error;

/// All errors that can occur while building graphs or running traversals.
#[derive(Error, Debug)]
pub enum TraverseError {
    /// Named graph is not registered in the catalog.
    #[error("Graph '{0}' not found")]
    GraphNotFound(String),

    /// Start vertex could not be resolved by the datasource.
    #[error("Vertex '{0}' not found")]
    VertexNotFound(String),

    /// A vertex with this ID was already added.
    #[error("Duplicate vertex ID: {0}")]
    DuplicateVertex(String),

    /// An edge with this ID was already added.
    #[error("Duplicate edge ID: {0}")]
    DuplicateEdge(String),

    /// Unknown value for a named traversal option.
    #[error("Invalid value for {option}: '{value}'")]
    InvalidOption { option: &'static str, value: String },

    /// The traversal processed more items than allowed.
    #[error("Too many iterations: limit of {0} exceeded")]
    TooManyIterations(usize),

    /// A filter, expander or visitor aborted the traversal.
    #[error("Traversal aborted: {0}")]
    Aborted(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TraverseError {
    /// Build a [`TraverseError::Aborted`] from a callback.
    pub fn abort(reason: impl Into<String>) -> Self {
        Self::Aborted(reason.into())
    }

    pub(crate) fn invalid_option(option: &'static str, value: &str) -> Self {
        Self::InvalidOption {
            option,
            value: value.to_string(),
        }
    }
}

/// Convenience result type for traversal operations.
pub type TraverseResult<T> = Result<T, TraverseError>;
