//! Traversal engine: context, filters, expanders, uniqueness, visitors and the driver.

pub mod context;
pub mod expander;
pub mod filter;
pub mod traverser;
pub mod uniqueness;
pub mod visitor;

pub use context::TraversalContext;
pub use expander::{
    connected, for_direction, AnyExpander, Expander, InboundExpander, LabeledExpander,
    OutboundExpander,
};
pub use filter::{
    Directives, ExcludeVerticesFilter, Filter, FilterChain, IncludeMatchingAttributesFilter,
    MaxDepthFilter, MinDepthFilter, PruneVerticesFilter, VisitAllFilter,
};
pub use traverser::{TraversalStats, Traverser, TraverserBuilder};
pub use uniqueness::UniquenessTracker;
pub use visitor::{CountingVisitor, TrackingVisitor, Visitor};
