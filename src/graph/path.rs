//! The route from the start vertex to the vertex currently being processed.

use serde::Serialize;

use crate::types::{Edge, Vertex};

/// Vertices `[v0, .., vn]` and the edges `[e1, .., en]` that connect them.
///
/// `edges.len() == vertices.len() - 1` always holds; a fresh path holds only
/// the start vertex. Only the traverser mutates a path, filters and visitors
/// see it by reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Path {
    /// A path consisting of the start vertex alone.
    pub fn new(start: Vertex) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
        }
    }

    /// A copy of this path extended by one step.
    pub fn extended(&self, edge: Edge, vertex: Vertex) -> Self {
        let mut path = self.clone();
        path.push(edge, vertex);
        path
    }

    /// All vertices, start first.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in traversal order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: a path holds at least its start vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges between the start and the last vertex.
    pub fn depth(&self) -> usize {
        self.edges.len()
    }

    /// The start vertex.
    pub fn start(&self) -> &Vertex {
        &self.vertices[0]
    }

    /// The vertex the path currently ends at.
    pub fn last_vertex(&self) -> &Vertex {
        &self.vertices[self.vertices.len() - 1]
    }

    /// The edge leading to the last vertex, if any.
    pub fn last_edge(&self) -> Option<&Edge> {
        self.edges.last()
    }

    /// True if a vertex with this ID is on the path.
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.iter().any(|v| v.id == id)
    }

    /// True if an edge with this ID is on the path.
    pub fn contains_edge(&self, id: &str) -> bool {
        self.edges.iter().any(|e| e.id == id)
    }

    /// Vertex IDs, start first.
    pub fn vertex_ids(&self) -> Vec<&str> {
        self.vertices.iter().map(|v| v.id.as_str()).collect()
    }

    /// Edge IDs in traversal order.
    pub fn edge_ids(&self) -> Vec<&str> {
        self.edges.iter().map(|e| e.id.as_str()).collect()
    }

    pub(crate) fn push(&mut self, edge: Edge, vertex: Vertex) {
        self.edges.push(edge);
        self.vertices.push(vertex);
    }

    /// Remove the last step. The start vertex is never removed.
    pub(crate) fn pop(&mut self) -> Option<(Edge, Vertex)> {
        let edge = self.edges.pop()?;
        let vertex = self.vertices.pop()?;
        Some((edge, vertex))
    }
}
