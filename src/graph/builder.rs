//! Fluent API for building in-memory graphs.

use std::collections::{HashMap, HashSet};

use crate::types::{Edge, TraverseResult, Vertex};

use super::MemoryDatasource;

/// Fluent builder for constructing a [`MemoryDatasource`].
#[derive(Default)]
pub struct GraphBuilder {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with no attributes.
    pub fn vertex(&mut self, id: impl Into<String>) -> &mut Self {
        self.vertices.push(Vertex::new(id));
        self
    }

    /// Add a fully built vertex.
    pub fn add_vertex(&mut self, vertex: Vertex) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Add one vertex per ID, each with a `name` attribute equal to its ID suffix.
    ///
    /// `prefix/key` IDs get `name = key`; bare IDs use the whole ID.
    pub fn named_vertices(&mut self, ids: &[&str]) -> &mut Self {
        for id in ids {
            let name = id.rsplit('/').next().unwrap_or(id);
            self.vertices.push(Vertex::new(*id).attr("name", name));
        }
        self
    }

    /// Add an unlabeled edge with a derived ID.
    pub fn link(&mut self, from: &str, to: &str) -> &mut Self {
        self.edges.push(Edge::new("", from, to));
        self
    }

    /// Add a labeled edge with a derived ID.
    pub fn link_labeled(&mut self, from: &str, to: &str, label: &str) -> &mut Self {
        self.edges.push(Edge::new("", from, to).with_label(label));
        self
    }

    /// Add a fully built edge. An empty ID is replaced by a derived one.
    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Build the final graph. Fails on duplicate vertex or explicit edge IDs.
    ///
    /// Derived edge IDs are `from->to`, with `#2`, `#3`, ... for parallel
    /// edges. A derived ID never takes an ID given explicitly to another edge.
    pub fn build(self) -> TraverseResult<MemoryDatasource> {
        let mut graph = MemoryDatasource::new();
        for vertex in self.vertices {
            graph.add_vertex(vertex)?;
        }

        let taken: HashSet<String> = self
            .edges
            .iter()
            .filter(|edge| !edge.id.is_empty())
            .map(|edge| edge.id.clone())
            .collect();
        let mut link_counts = HashMap::new();
        for mut edge in self.edges {
            if edge.id.is_empty() {
                edge.id = derived_id(&mut link_counts, &taken, &edge.from, &edge.to);
            }
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }
}

fn derived_id(
    link_counts: &mut HashMap<String, usize>,
    taken: &HashSet<String>,
    from: &str,
    to: &str,
) -> String {
    let base = Edge::default_id(from, to);
    let count = link_counts.entry(base.clone()).or_insert(0);
    loop {
        *count += 1;
        let id = if *count == 1 {
            base.clone()
        } else {
            format!("{}#{}", base, count)
        };
        if !taken.contains(&id) {
            return id;
        }
    }
}
