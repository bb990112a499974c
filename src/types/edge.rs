//! Edges and the connection unit produced by expanders.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Vertex;

/// A directed edge between two vertices, identified by ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique edge ID. Documents may omit it; the loader derives `from->to`.
    #[serde(default)]
    pub id: String,
    /// Source vertex ID.
    pub from: String,
    /// Target vertex ID.
    pub to: String,
    /// Optional relationship label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Attribute bag.
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl Edge {
    /// Create an unlabeled edge.
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            label: None,
            attributes: Map::new(),
        }
    }

    /// Create an edge whose ID is derived from its endpoints.
    pub fn connect(from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        let to = to.into();
        let id = Self::default_id(&from, &to);
        Self::new(id, from, to)
    }

    /// The ID used for edges that do not carry one.
    pub fn default_id(from: &str, to: &str) -> String {
        format!("{}->{}", from, to)
    }

    /// Set the label (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set a single attribute (builder style).
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The endpoint opposite to `vertex_id`, or `None` if the edge does not touch it.
    ///
    /// For a self-loop the vertex itself is returned.
    pub fn peer(&self, vertex_id: &str) -> Option<&str> {
        if self.from == vertex_id {
            Some(&self.to)
        } else if self.to == vertex_id {
            Some(&self.from)
        } else {
            None
        }
    }

    /// True if the edge label is one of `labels`.
    pub fn has_label_in(&self, labels: &[String]) -> bool {
        match &self.label {
            Some(label) => labels.iter().any(|l| l == label),
            None => false,
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One neighbor reached from a vertex: the edge followed and the vertex at its end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    /// The edge that was followed.
    pub edge: Edge,
    /// The vertex at the other end (possibly [`Vertex::missing`]).
    pub vertex: Vertex,
}

impl Connection {
    /// Pair an edge with the vertex it leads to.
    pub fn new(edge: Edge, vertex: Vertex) -> Self {
        Self { edge, vertex }
    }
}
