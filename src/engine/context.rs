//! Read-only view of the traversal options shared with every callback.

use serde_json::{Map, Value};

use crate::types::{ItemOrder, Order, Strategy, TraversalOptions, UniquenessOptions};

/// Per-traversal parameters handed to filters, expanders and visitors.
///
/// Built once when the traverser is built and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraversalContext {
    options: TraversalOptions,
}

impl TraversalContext {
    /// Wrap a set of options.
    pub fn new(options: TraversalOptions) -> Self {
        Self { options }
    }

    /// The underlying options.
    pub fn options(&self) -> &TraversalOptions {
        &self.options
    }

    /// Depth-first or breadth-first.
    pub fn strategy(&self) -> Strategy {
        self.options.strategy
    }

    /// Whether vertices are visited before or after their descendants.
    pub fn order(&self) -> Order {
        self.options.order
    }

    /// Order in which expanded neighbors are taken.
    pub fn item_order(&self) -> ItemOrder {
        self.options.item_order
    }

    /// Vertex and edge uniqueness modes.
    pub fn uniqueness(&self) -> UniquenessOptions {
        self.options.uniqueness
    }

    /// Shallowest depth handed to the visitor, if bounded.
    pub fn min_depth(&self) -> Option<usize> {
        self.options.min_depth
    }

    /// Deepest depth entered, if bounded.
    pub fn max_depth(&self) -> Option<usize> {
        self.options.max_depth
    }

    /// Processed items allowed before the traversal aborts.
    pub fn max_iterations(&self) -> usize {
        self.options.max_iterations
    }

    /// Labels accepted by labeled expanders.
    pub fn labels(&self) -> &[String] {
        &self.options.labels
    }

    /// Patterns for [`IncludeMatchingAttributesFilter`](super::IncludeMatchingAttributesFilter).
    pub fn matching_attributes(&self) -> &[Map<String, Value>] {
        &self.options.matching_attributes
    }

    /// A caller-supplied parameter.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.options.params.get(key)
    }

    /// A caller-supplied string parameter.
    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.param(key).and_then(Value::as_str)
    }
}
