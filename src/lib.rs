//! Graph traverser: a generic visitor/filter/expander traversal engine.
//!
//! Vertices and edges come from a pluggable [`Datasource`]. A [`Traverser`]
//! walks them depth-first or breadth-first, in pre- or post-order, with
//! configurable uniqueness and depth bounds, and hands every visited vertex
//! and its path to a [`Visitor`].
//!
//! ```
//! use graph_traverser::{GraphBuilder, TrackingVisitor, Traverser, Uniqueness};
//!
//! let mut builder = GraphBuilder::new();
//! builder
//!     .named_vertices(&["v1", "v2", "v3", "v4"])
//!     .link("v1", "v2")
//!     .link("v2", "v3")
//!     .link("v1", "v4")
//!     .link("v4", "v3");
//! let graph = builder.build().unwrap();
//!
//! let traverser = Traverser::builder(&graph)
//!     .uniqueness(Uniqueness::Global, Uniqueness::None)
//!     .build()
//!     .unwrap();
//! let mut visitor = TrackingVisitor::new();
//! traverser.traverse_from(&mut visitor, "v1").unwrap();
//! assert_eq!(visitor.vertex_ids(), vec!["v1", "v2", "v3", "v4"]);
//! ```

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    AnyExpander, CountingVisitor, Directives, ExcludeVerticesFilter, Expander, Filter,
    FilterChain, InboundExpander, IncludeMatchingAttributesFilter, LabeledExpander,
    MaxDepthFilter, MinDepthFilter, OutboundExpander, PruneVerticesFilter,
    TrackingVisitor, TraversalContext, TraversalStats, Traverser, TraverserBuilder,
    UniquenessTracker, VisitAllFilter, Visitor,
};
pub use format::{GraphDefinition, GraphDocument, GraphReader, GraphWriter};
pub use graph::{Datasource, GraphBuilder, GraphCatalog, MemoryDatasource, Path, SortedDatasource};
pub use types::{
    Connection, Direction, Edge, ItemOrder, Order, Strategy, TraversalOptions, TraverseError,
    TraverseResult, Uniqueness, UniquenessOptions, Vertex, DEFAULT_MAX_ITERATIONS,
};
