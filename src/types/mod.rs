//! All data types for the graph traverser.

pub mod edge;
pub mod error;
pub mod options;
pub mod vertex;

pub use edge::{Connection, Edge};
pub use error::{TraverseError, TraverseResult};
pub use options::{
    Direction, ItemOrder, Order, Strategy, TraversalOptions, Uniqueness, UniquenessOptions,
};
pub use vertex::Vertex;

/// Default upper bound on processed items per traversal.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000_000;

/// Attribute key that matches against the vertex ID in attribute patterns.
pub const ID_ATTRIBUTE: &str = "_id";
