//! Serde model of a graph document.

use serde::{Deserialize, Serialize};

use crate::graph::{GraphBuilder, MemoryDatasource};
use crate::types::{Edge, TraverseResult, Vertex};

/// Top-level document: a list of named graphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub graphs: Vec<GraphDefinition>,
}

/// One named graph with its vertices and edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDefinition {
    pub name: String,
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphDefinition {
    /// Snapshot an in-memory graph under `name`.
    pub fn from_datasource(name: impl Into<String>, graph: &MemoryDatasource) -> Self {
        Self {
            name: name.into(),
            vertices: graph.vertices().to_vec(),
            edges: graph.all_edges().to_vec(),
        }
    }

    /// Build the in-memory graph. Edges without an ID get `from->to`.
    pub fn into_datasource(self) -> TraverseResult<MemoryDatasource> {
        let mut builder = GraphBuilder::new();
        for vertex in self.vertices {
            builder.add_vertex(vertex);
        }
        for edge in self.edges {
            builder.add_edge(edge);
        }
        builder.build()
    }
}
