//! Vertex and edge providers consumed by the traverser.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{Direction, Edge, TraverseError, TraverseResult, Vertex};

/// Source of vertices and edges for a traversal.
pub trait Datasource {
    /// Edges touching `vertex_id` in the given direction.
    ///
    /// [`Direction::Any`] yields the inbound edges followed by the outbound ones.
    fn edges(&self, vertex_id: &str, direction: Direction) -> TraverseResult<Vec<Edge>>;

    /// Look up a vertex. `Ok(None)` means the ID is unknown, which is not an error.
    fn vertex(&self, vertex_id: &str) -> TraverseResult<Option<Vertex>>;

    /// Check that the datasource is usable. Called once when a traverser is built.
    fn validate(&self) -> TraverseResult<()> {
        Ok(())
    }
}

impl<D: Datasource + ?Sized> Datasource for &D {
    fn edges(&self, vertex_id: &str, direction: Direction) -> TraverseResult<Vec<Edge>> {
        (**self).edges(vertex_id, direction)
    }

    fn vertex(&self, vertex_id: &str) -> TraverseResult<Option<Vertex>> {
        (**self).vertex(vertex_id)
    }

    fn validate(&self) -> TraverseResult<()> {
        (**self).validate()
    }
}

/// In-memory graph with outbound and inbound adjacency indexes.
///
/// Edges are returned in insertion order. Edges may reference vertices that
/// were never added; such endpoints resolve to `None`.
#[derive(Debug, Default, Clone)]
pub struct MemoryDatasource {
    /// All vertices in insertion order.
    vertices: Vec<Vertex>,
    /// Vertex ID -> index in `vertices`.
    vertex_index: HashMap<String, usize>,
    /// All edges in insertion order.
    edges: Vec<Edge>,
    /// Edge ID -> index in `edges`.
    edge_index: HashMap<String, usize>,
    /// Source vertex ID -> edge indexes.
    outbound: HashMap<String, Vec<usize>>,
    /// Target vertex ID -> edge indexes.
    inbound: HashMap<String, Vec<usize>>,
}

impl MemoryDatasource {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in insertion order.
    pub fn all_edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a vertex by ID.
    pub fn get_vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertex_index.get(id).map(|&idx| &self.vertices[idx])
    }

    /// Get an edge by ID.
    pub fn get_edge(&self, id: &str) -> Option<&Edge> {
        self.edge_index.get(id).map(|&idx| &self.edges[idx])
    }

    /// Add a vertex. Fails if the ID is taken.
    pub fn add_vertex(&mut self, vertex: Vertex) -> TraverseResult<()> {
        if self.vertex_index.contains_key(&vertex.id) {
            return Err(TraverseError::DuplicateVertex(vertex.id));
        }
        self.vertex_index
            .insert(vertex.id.clone(), self.vertices.len());
        self.vertices.push(vertex);
        Ok(())
    }

    /// Add an edge. Fails if the ID is taken; endpoints need not exist.
    pub fn add_edge(&mut self, edge: Edge) -> TraverseResult<()> {
        if self.edge_index.contains_key(&edge.id) {
            return Err(TraverseError::DuplicateEdge(edge.id));
        }
        let idx = self.edges.len();
        self.edge_index.insert(edge.id.clone(), idx);
        self.outbound.entry(edge.from.clone()).or_default().push(idx);
        self.inbound.entry(edge.to.clone()).or_default().push(idx);
        self.edges.push(edge);
        Ok(())
    }

    /// Edges whose source is `vertex_id`.
    pub fn outbound_edges(&self, vertex_id: &str) -> impl Iterator<Item = &Edge> + '_ {
        Self::lookup(&self.outbound, vertex_id)
            .iter()
            .map(move |&idx| &self.edges[idx])
    }

    /// Edges whose target is `vertex_id`.
    pub fn inbound_edges(&self, vertex_id: &str) -> impl Iterator<Item = &Edge> + '_ {
        Self::lookup(&self.inbound, vertex_id)
            .iter()
            .map(move |&idx| &self.edges[idx])
    }

    fn lookup<'a>(index: &'a HashMap<String, Vec<usize>>, vertex_id: &str) -> &'a [usize] {
        index.get(vertex_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Datasource for MemoryDatasource {
    fn edges(&self, vertex_id: &str, direction: Direction) -> TraverseResult<Vec<Edge>> {
        let edges = match direction {
            Direction::Outbound => self.outbound_edges(vertex_id).cloned().collect(),
            Direction::Inbound => self.inbound_edges(vertex_id).cloned().collect(),
            Direction::Any => self
                .inbound_edges(vertex_id)
                .chain(self.outbound_edges(vertex_id))
                .cloned()
                .collect(),
        };
        Ok(edges)
    }

    fn vertex(&self, vertex_id: &str) -> TraverseResult<Option<Vertex>> {
        Ok(self.get_vertex(vertex_id).cloned())
    }
}

/// Wraps a datasource and sorts every edge list with a comparator.
///
/// Makes neighbor order reproducible for sources whose natural order is not.
pub struct SortedDatasource<D, F> {
    inner: D,
    compare: F,
}

impl<D, F> SortedDatasource<D, F>
where
    D: Datasource,
    F: Fn(&Edge, &Edge) -> Ordering,
{
    /// Sort edges of `inner` with `compare`.
    pub fn new(inner: D, compare: F) -> Self {
        Self { inner, compare }
    }

    /// The wrapped datasource.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: Datasource> SortedDatasource<D, fn(&Edge, &Edge) -> Ordering> {
    /// Sort edges of `inner` by edge ID.
    pub fn by_edge_id(inner: D) -> Self {
        Self {
            inner,
            compare: |a: &Edge, b: &Edge| a.id.cmp(&b.id),
        }
    }
}

impl<D, F> Datasource for SortedDatasource<D, F>
where
    D: Datasource,
    F: Fn(&Edge, &Edge) -> Ordering,
{
    fn edges(&self, vertex_id: &str, direction: Direction) -> TraverseResult<Vec<Edge>> {
        let mut edges = self.inner.edges(vertex_id, direction)?;
        edges.sort_by(|a, b| (self.compare)(a, b));
        Ok(edges)
    }

    fn vertex(&self, vertex_id: &str) -> TraverseResult<Option<Vertex>> {
        self.inner.vertex(vertex_id)
    }

    fn validate(&self) -> TraverseResult<()> {
        self.inner.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryDatasource {
        let mut ds = MemoryDatasource::new();
        for id in ["a", "b", "c"] {
            ds.add_vertex(Vertex::new(id)).unwrap();
        }
        ds.add_edge(Edge::connect("a", "c")).unwrap();
        ds.add_edge(Edge::connect("a", "b")).unwrap();
        ds.add_edge(Edge::connect("b", "a")).unwrap();
        ds
    }

    fn ids(edges: &[Edge]) -> Vec<&str> {
        edges.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn any_direction_lists_inbound_first() {
        let ds = sample();
        let edges = ds.edges("a", Direction::Any).unwrap();
        assert_eq!(ids(&edges), vec!["b->a", "a->c", "a->b"]);
        assert_eq!(ids(&ds.edges("a", Direction::Outbound).unwrap()), vec!["a->c", "a->b"]);
        assert_eq!(ids(&ds.edges("a", Direction::Inbound).unwrap()), vec!["b->a"]);
        assert!(ds.edges("zzz", Direction::Any).unwrap().is_empty());
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut ds = sample();
        assert!(matches!(
            ds.add_vertex(Vertex::new("a")),
            Err(TraverseError::DuplicateVertex(id)) if id == "a"
        ));
        assert!(matches!(
            ds.add_edge(Edge::connect("a", "b")),
            Err(TraverseError::DuplicateEdge(_))
        ));
    }

    #[test]
    fn dangling_endpoint_resolves_to_none() {
        let mut ds = sample();
        ds.add_edge(Edge::connect("c", "ghost")).unwrap();
        assert!(ds.vertex("ghost").unwrap().is_none());
        assert_eq!(ds.edges("c", Direction::Outbound).unwrap().len(), 1);
    }

    #[test]
    fn sorted_datasource_orders_edges() {
        let ds = sample();
        let sorted = SortedDatasource::by_edge_id(&ds);
        assert_eq!(ids(&sorted.edges("a", Direction::Outbound).unwrap()), vec!["a->b", "a->c"]);

        let reversed = SortedDatasource::new(&ds, |a: &Edge, b: &Edge| b.to.cmp(&a.to));
        assert_eq!(ids(&reversed.edges("a", Direction::Outbound).unwrap()), vec!["a->c", "a->b"]);
        assert_eq!(sorted.vertex("b").unwrap().unwrap().id, "b");
    }
}
