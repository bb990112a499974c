//! Vertex and edge deduplication during a traversal.

use std::collections::HashSet;

use crate::graph::Path;
use crate::types::{Edge, Uniqueness, UniquenessOptions, Vertex};

/// Tracks which vertices and edges may still be entered.
///
/// Global sets only grow. Path uniqueness is answered from the path itself,
/// so it shrinks naturally when the traversal backtracks.
#[derive(Debug)]
pub struct UniquenessTracker {
    options: UniquenessOptions,
    seen_vertices: HashSet<String>,
    seen_edges: HashSet<String>,
}

impl UniquenessTracker {
    /// Empty tracker for the given settings.
    pub fn new(options: UniquenessOptions) -> Self {
        Self {
            options,
            seen_vertices: HashSet::new(),
            seen_edges: HashSet::new(),
        }
    }

    /// Record the start vertex, which is entered without an edge.
    pub fn mark_start(&mut self, vertex: &Vertex) {
        if self.options.vertices == Uniqueness::Global {
            self.seen_vertices.insert(vertex.id.clone());
        }
    }

    /// Decide whether `vertex` may be entered from the end of `parent` via `edge`.
    ///
    /// All checks run before anything is recorded, so a rejected step leaves
    /// no trace in the global sets.
    pub fn admit(&mut self, parent: &Path, edge: &Edge, vertex: &Vertex) -> bool {
        let vertex_ok = match self.options.vertices {
            Uniqueness::None => true,
            Uniqueness::Path => !parent.contains_vertex(&vertex.id),
            Uniqueness::Global => !self.seen_vertices.contains(&vertex.id),
        };
        let edge_ok = match self.options.edges {
            Uniqueness::None => true,
            Uniqueness::Path => !parent.contains_edge(&edge.id),
            Uniqueness::Global => !self.seen_edges.contains(&edge.id),
        };
        if !(vertex_ok && edge_ok) {
            return false;
        }

        if self.options.vertices == Uniqueness::Global {
            self.seen_vertices.insert(vertex.id.clone());
        }
        if self.options.edges == Uniqueness::Global {
            self.seen_edges.insert(edge.id.clone());
        }
        true
    }

    /// Number of vertices recorded in global mode.
    pub fn seen_vertex_count(&self) -> usize {
        self.seen_vertices.len()
    }

    /// Number of edges recorded in global mode.
    pub fn seen_edge_count(&self) -> usize {
        self.seen_edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: &str, to: &str) -> (Edge, Vertex) {
        (Edge::connect(from, to), Vertex::new(to))
    }

    #[test]
    fn none_admits_everything() {
        let mut tracker = UniquenessTracker::new(UniquenessOptions::default());
        let root = Path::new(Vertex::new("a"));
        let (edge, vertex) = step("a", "a");
        assert!(tracker.admit(&root, &edge, &vertex));
        assert!(tracker.admit(&root, &edge, &vertex));
    }

    #[test]
    fn global_vertices_admit_once() {
        let mut tracker =
            UniquenessTracker::new(UniquenessOptions::new(Uniqueness::Global, Uniqueness::None));
        let start = Vertex::new("a");
        tracker.mark_start(&start);
        let root = Path::new(start);

        let (edge, vertex) = step("a", "b");
        assert!(tracker.admit(&root, &edge, &vertex));
        assert!(!tracker.admit(&root, &Edge::new("other", "a", "b"), &vertex));

        let (back, start_again) = step("b", "a");
        assert!(!tracker.admit(&root, &back, &start_again));
        assert_eq!(tracker.seen_vertex_count(), 2);
    }

    #[test]
    fn path_vertices_check_current_path_only() {
        let mut tracker =
            UniquenessTracker::new(UniquenessOptions::new(Uniqueness::Path, Uniqueness::None));
        let root = Path::new(Vertex::new("a"));
        let (ab, b) = step("a", "b");
        let path_ab = root.extended(ab.clone(), b.clone());

        let (ba, a) = step("b", "a");
        assert!(!tracker.admit(&path_ab, &ba, &a));

        // Another branch may reach b again.
        assert!(tracker.admit(&root, &ab, &b));
        assert!(tracker.admit(&root, &ab, &b));
        assert_eq!(tracker.seen_vertex_count(), 0);
    }

    #[test]
    fn global_edges_are_independent_of_vertices() {
        let mut tracker =
            UniquenessTracker::new(UniquenessOptions::new(Uniqueness::None, Uniqueness::Global));
        let root = Path::new(Vertex::new("a"));
        let (ab, b) = step("a", "b");
        assert!(tracker.admit(&root, &ab, &b));
        assert!(!tracker.admit(&root, &ab, &b));
        assert!(tracker.admit(&root, &Edge::new("a->b#2", "a", "b"), &b));
        assert_eq!(tracker.seen_edge_count(), 2);
    }

    #[test]
    fn rejected_step_records_nothing() {
        let mut tracker =
            UniquenessTracker::new(UniquenessOptions::new(Uniqueness::Global, Uniqueness::Global));
        let root = Path::new(Vertex::new("a"));
        let (ab, b) = step("a", "b");
        assert!(tracker.admit(&root, &ab, &b));

        // Edge is fresh but the vertex is not: the edge must stay unrecorded.
        let fresh = Edge::new("fresh", "a", "b");
        assert!(!tracker.admit(&root, &fresh, &b));
        assert_eq!(tracker.seen_edge_count(), 1);
    }
}
