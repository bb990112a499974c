//! Traversal policy: strategy, visitation order, uniqueness and depth bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{TraverseError, DEFAULT_MAX_ITERATIONS};

/// Order in which the graph is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Follow each branch to its end before the next sibling.
    #[default]
    DepthFirst,
    /// Visit all vertices of one depth before the next depth.
    BreadthFirst,
}

impl Strategy {
    /// Return the option name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "depth-first",
            Self::BreadthFirst => "breadth-first",
        }
    }
}

impl FromStr for Strategy {
    type Err = TraverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "depth-first" | "depthfirst" | "dfs" => Ok(Self::DepthFirst),
            "breadth-first" | "breadthfirst" | "bfs" => Ok(Self::BreadthFirst),
            _ => Err(TraverseError::invalid_option("strategy", s)),
        }
    }
}

/// Whether a vertex is handed to the visitor before or after its subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// Visit a vertex before its neighbors.
    #[default]
    PreOrder,
    /// Visit a vertex after its neighbors.
    PostOrder,
}

impl Order {
    /// Return the option name of this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PreOrder => "pre-order",
            Self::PostOrder => "post-order",
        }
    }
}

impl FromStr for Order {
    type Err = TraverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pre-order" | "preorder" | "pre" => Ok(Self::PreOrder),
            "post-order" | "postorder" | "post" => Ok(Self::PostOrder),
            _ => Err(TraverseError::invalid_option("order", s)),
        }
    }
}

/// Whether neighbor lists are processed as returned or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemOrder {
    /// Keep the expander's order.
    #[default]
    Forward,
    /// Reverse the expander's order.
    Backward,
}

impl ItemOrder {
    /// Return the option name of this item order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl FromStr for ItemOrder {
    type Err = TraverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Self::Forward),
            "backward" => Ok(Self::Backward),
            _ => Err(TraverseError::invalid_option("item order", s)),
        }
    }
}

/// Scope of deduplication for vertices or edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Uniqueness {
    /// No deduplication.
    #[default]
    None,
    /// Never twice on the same path from the start vertex.
    Path,
    /// Never twice in the whole traversal.
    Global,
}

impl Uniqueness {
    /// Return the option name of this uniqueness mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Path => "path",
            Self::Global => "global",
        }
    }
}

impl FromStr for Uniqueness {
    type Err = TraverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "path" => Ok(Self::Path),
            "global" => Ok(Self::Global),
            _ => Err(TraverseError::invalid_option("uniqueness", s)),
        }
    }
}

/// Independent uniqueness settings for vertices and edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UniquenessOptions {
    /// Vertex uniqueness.
    pub vertices: Uniqueness,
    /// Edge uniqueness.
    pub edges: Uniqueness,
}

impl UniquenessOptions {
    /// Settings with the given vertex and edge modes.
    pub fn new(vertices: Uniqueness, edges: Uniqueness) -> Self {
        Self { vertices, edges }
    }
}

/// Edge direction relative to a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Edges whose `from` is the vertex.
    #[default]
    Outbound,
    /// Edges whose `to` is the vertex.
    Inbound,
    /// Inbound edges followed by outbound edges.
    Any,
}

impl Direction {
    /// Return the option name of this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Outbound => "outbound",
            Self::Inbound => "inbound",
            Self::Any => "any",
        }
    }
}

impl FromStr for Direction {
    type Err = TraverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outbound" | "out" => Ok(Self::Outbound),
            "inbound" | "in" => Ok(Self::Inbound),
            "any" | "both" => Ok(Self::Any),
            _ => Err(TraverseError::invalid_option("direction", s)),
        }
    }
}

macro_rules! display_by_name {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        })*
    };
}

display_by_name!(Strategy, Order, ItemOrder, Uniqueness, Direction);

/// Caller-supplied policy for one traversal.
///
/// Everything a filter or expander may need to read lives here; it becomes
/// the read-only [`TraversalContext`](crate::engine::TraversalContext) of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalOptions {
    /// Exploration strategy.
    pub strategy: Strategy,
    /// Pre- or post-order visitation.
    pub order: Order,
    /// Forward or reversed neighbor processing.
    pub item_order: ItemOrder,
    /// Vertex and edge uniqueness.
    pub uniqueness: UniquenessOptions,
    /// Vertices shallower than this are not visited.
    pub min_depth: Option<usize>,
    /// Vertices at this depth are visited but not expanded.
    pub max_depth: Option<usize>,
    /// Upper bound on processed items before aborting.
    pub max_iterations: usize,
    /// Labels accepted by the labeled expanders.
    pub labels: Vec<String>,
    /// Attribute patterns for the include-matching-attributes filter.
    pub matching_attributes: Vec<Map<String, Value>>,
    /// Free-form parameters for user filters and expanders.
    pub params: Map<String, Value>,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            order: Order::default(),
            item_order: ItemOrder::default(),
            uniqueness: UniquenessOptions::default(),
            min_depth: None,
            max_depth: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            labels: Vec::new(),
            matching_attributes: Vec::new(),
            params: Map::new(),
        }
    }
}
