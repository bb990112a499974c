//! Visitors receive every vertex the traversal decides to visit.

use serde::Serialize;

use crate::graph::Path;
use crate::types::{TraverseResult, Vertex};

use super::TraversalContext;

/// Result accumulator invoked once per visited vertex.
///
/// `path.last_vertex()` is always `vertex`. Returning an error aborts the
/// traversal.
pub trait Visitor {
    fn visit(&mut self, ctx: &TraversalContext, vertex: &Vertex, path: &Path)
        -> TraverseResult<()>;
}

impl<F> Visitor for F
where
    F: FnMut(&TraversalContext, &Vertex, &Path) -> TraverseResult<()>,
{
    fn visit(
        &mut self,
        ctx: &TraversalContext,
        vertex: &Vertex,
        path: &Path,
    ) -> TraverseResult<()> {
        self(ctx, vertex, path)
    }
}

/// Records every visited vertex and, optionally, its path.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingVisitor {
    /// Visited vertices in visitation order.
    pub vertices: Vec<Vertex>,
    /// Paths of the visited vertices, parallel to `vertices`.
    pub paths: Vec<Path>,
    #[serde(skip)]
    track_paths: bool,
}

impl TrackingVisitor {
    /// Track vertices and paths.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            paths: Vec::new(),
            track_paths: true,
        }
    }

    /// Track vertices only.
    pub fn vertices_only() -> Self {
        Self {
            track_paths: false,
            ..Self::new()
        }
    }

    /// IDs of the visited vertices.
    pub fn vertex_ids(&self) -> Vec<&str> {
        self.vertices.iter().map(|v| v.id.as_str()).collect()
    }

    /// Vertex IDs of every recorded path.
    pub fn path_ids(&self) -> Vec<Vec<&str>> {
        self.paths.iter().map(Path::vertex_ids).collect()
    }

    /// Number of visited vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Default for TrackingVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for TrackingVisitor {
    fn visit(&mut self, _: &TraversalContext, vertex: &Vertex, path: &Path) -> TraverseResult<()> {
        self.vertices.push(vertex.clone());
        if self.track_paths {
            self.paths.push(path.clone());
        }
        Ok(())
    }
}

/// Counts visited vertices.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingVisitor {
    pub count: usize,
}

impl Visitor for CountingVisitor {
    fn visit(&mut self, _: &TraversalContext, _: &Vertex, _: &Path) -> TraverseResult<()> {
        self.count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Edge;

    #[test]
    fn tracking_visitor_records_vertices_and_paths() {
        let ctx = TraversalContext::default();
        let root = Path::new(Vertex::new("a"));
        let child = root.extended(Edge::connect("a", "b"), Vertex::new("b"));

        let mut visitor = TrackingVisitor::new();
        visitor.visit(&ctx, root.last_vertex(), &root).unwrap();
        visitor.visit(&ctx, child.last_vertex(), &child).unwrap();
        assert_eq!(visitor.vertex_ids(), vec!["a", "b"]);
        assert_eq!(visitor.path_ids(), vec![vec!["a"], vec!["a", "b"]]);

        let mut light = TrackingVisitor::vertices_only();
        light.visit(&ctx, child.last_vertex(), &child).unwrap();
        assert_eq!(light.len(), 1);
        assert!(light.paths.is_empty());
    }

    #[test]
    fn closures_are_visitors() {
        let mut seen = Vec::new();
        {
            let mut visitor = |_: &TraversalContext, v: &Vertex, _: &Path| -> TraverseResult<()> {
                seen.push(v.id.clone());
                Ok(())
            };
            let root = Path::new(Vertex::new("a"));
            visitor
                .visit(&TraversalContext::default(), root.last_vertex(), &root)
                .unwrap();
        }
        assert_eq!(seen, vec!["a"]);
    }
}
