//! Expanders turn a vertex into the list of neighbors to explore next.

use crate::graph::{Datasource, Path};
use crate::types::{Connection, Direction, Edge, TraverseResult, Vertex};

use super::TraversalContext;

/// Produces the ordered neighbor list of `vertex`.
pub trait Expander {
    fn expand(
        &self,
        ctx: &TraversalContext,
        datasource: &dyn Datasource,
        vertex: &Vertex,
        path: &Path,
    ) -> TraverseResult<Vec<Connection>>;
}

impl<F> Expander for F
where
    F: Fn(&TraversalContext, &dyn Datasource, &Vertex, &Path) -> TraverseResult<Vec<Connection>>,
{
    fn expand(
        &self,
        ctx: &TraversalContext,
        datasource: &dyn Datasource,
        vertex: &Vertex,
        path: &Path,
    ) -> TraverseResult<Vec<Connection>> {
        self(ctx, datasource, vertex, path)
    }
}

/// Follow the edges of `vertex` in `direction`, keeping those `accept` allows.
///
/// The neighbor is the edge endpoint opposite to `vertex`. An endpoint the
/// datasource does not know becomes a [`Vertex::missing`].
pub fn connected(
    datasource: &dyn Datasource,
    vertex: &Vertex,
    direction: Direction,
    accept: impl Fn(&Edge) -> bool,
) -> TraverseResult<Vec<Connection>> {
    let edges = datasource.edges(&vertex.id, direction)?;
    let mut result = Vec::with_capacity(edges.len());

    for edge in edges {
        if !accept(&edge) {
            continue;
        }
        let peer_id = match direction {
            Direction::Outbound => edge.to.clone(),
            Direction::Inbound => edge.from.clone(),
            Direction::Any => edge.peer(&vertex.id).unwrap_or(edge.to.as_str()).to_string(),
        };
        let peer = match datasource.vertex(&peer_id)? {
            Some(peer) => peer,
            None => {
                log::debug!("Edge {} references missing vertex {}", edge.id, peer_id);
                Vertex::missing(peer_id)
            }
        };
        result.push(Connection::new(edge, peer));
    }

    Ok(result)
}

/// Follows outbound edges; the neighbor is the edge target.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutboundExpander;

impl Expander for OutboundExpander {
    fn expand(
        &self,
        _: &TraversalContext,
        datasource: &dyn Datasource,
        vertex: &Vertex,
        _: &Path,
    ) -> TraverseResult<Vec<Connection>> {
        connected(datasource, vertex, Direction::Outbound, |_| true)
    }
}

/// Follows inbound edges; the neighbor is the edge source.
#[derive(Debug, Clone, Copy, Default)]
pub struct InboundExpander;

impl Expander for InboundExpander {
    fn expand(
        &self,
        _: &TraversalContext,
        datasource: &dyn Datasource,
        vertex: &Vertex,
        _: &Path,
    ) -> TraverseResult<Vec<Connection>> {
        connected(datasource, vertex, Direction::Inbound, |_| true)
    }
}

/// Follows inbound then outbound edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyExpander;

impl Expander for AnyExpander {
    fn expand(
        &self,
        _: &TraversalContext,
        datasource: &dyn Datasource,
        vertex: &Vertex,
        _: &Path,
    ) -> TraverseResult<Vec<Connection>> {
        connected(datasource, vertex, Direction::Any, |_| true)
    }
}

/// Follows only edges whose label is in the context's label set.
#[derive(Debug, Clone, Copy)]
pub struct LabeledExpander {
    direction: Direction,
}

impl LabeledExpander {
    /// Labeled edges in `direction`.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Labeled outbound edges.
    pub fn outbound() -> Self {
        Self::new(Direction::Outbound)
    }

    /// Labeled inbound edges.
    pub fn inbound() -> Self {
        Self::new(Direction::Inbound)
    }

    /// Labeled edges in either direction.
    pub fn any() -> Self {
        Self::new(Direction::Any)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Expander for LabeledExpander {
    fn expand(
        &self,
        ctx: &TraversalContext,
        datasource: &dyn Datasource,
        vertex: &Vertex,
        _: &Path,
    ) -> TraverseResult<Vec<Connection>> {
        let labels = ctx.labels();
        connected(datasource, vertex, self.direction, |edge| {
            edge.has_label_in(labels)
        })
    }
}

/// The plain expander for a direction.
pub fn for_direction(direction: Direction) -> Box<dyn Expander> {
    match direction {
        Direction::Outbound => Box::new(OutboundExpander),
        Direction::Inbound => Box::new(InboundExpander),
        Direction::Any => Box::new(AnyExpander),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, MemoryDatasource, SortedDatasource};
    use crate::types::TraversalOptions;

    fn lettered() -> MemoryDatasource {
        let mut builder = GraphBuilder::new();
        builder.named_vertices(&["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
        for (from, to) in [
            ("A", "B"),
            ("B", "C"),
            ("C", "D"),
            ("A", "D"),
            ("D", "E"),
            ("D", "F"),
            ("B", "G"),
            ("B", "I"),
            ("G", "H"),
            ("I", "H"),
        ] {
            builder.link(from, to);
        }
        builder.build().unwrap()
    }

    fn neighbor_ids(expander: &dyn Expander, ds: &dyn Datasource, ctx: &TraversalContext, id: &str) -> Vec<String> {
        let vertex = ds.vertex(id).unwrap().unwrap();
        let path = Path::new(vertex.clone());
        expander
            .expand(ctx, ds, &vertex, &path)
            .unwrap()
            .into_iter()
            .map(|c| c.vertex.id)
            .collect()
    }

    #[test]
    fn outbound_and_inbound_expanders() {
        let graph = lettered();
        let ds = SortedDatasource::by_edge_id(&graph);
        let ctx = TraversalContext::default();

        assert_eq!(neighbor_ids(&OutboundExpander, &ds, &ctx, "A"), vec!["B", "D"]);
        assert_eq!(neighbor_ids(&OutboundExpander, &ds, &ctx, "D"), vec!["E", "F"]);
        assert!(neighbor_ids(&OutboundExpander, &ds, &ctx, "H").is_empty());

        assert_eq!(neighbor_ids(&InboundExpander, &ds, &ctx, "D"), vec!["A", "C"]);
        assert_eq!(neighbor_ids(&InboundExpander, &ds, &ctx, "H"), vec!["G", "I"]);
        assert!(neighbor_ids(&InboundExpander, &ds, &ctx, "A").is_empty());
    }

    #[test]
    fn any_expander_resolves_peers() {
        let graph = lettered();
        let ctx = TraversalContext::default();
        assert_eq!(neighbor_ids(&AnyExpander, &graph, &ctx, "D"), vec!["C", "A", "E", "F"]);
    }

    #[test]
    fn labeled_expander_keeps_matching_edges() {
        let mut builder = GraphBuilder::new();
        builder
            .named_vertices(&["Alice", "Bob", "Diana"])
            .link_labeled("Alice", "Bob", "likes")
            .link_labeled("Alice", "Diana", "hates")
            .link_labeled("Diana", "Alice", "likes");
        let graph = builder.build().unwrap();
        let ctx = TraversalContext::new(TraversalOptions {
            labels: vec!["likes".to_string()],
            ..Default::default()
        });

        assert_eq!(neighbor_ids(&LabeledExpander::outbound(), &graph, &ctx, "Alice"), vec!["Bob"]);
        assert_eq!(neighbor_ids(&LabeledExpander::inbound(), &graph, &ctx, "Alice"), vec!["Diana"]);
        assert_eq!(
            neighbor_ids(&LabeledExpander::any(), &graph, &ctx, "Alice"),
            vec!["Diana", "Bob"]
        );

        let no_labels = TraversalContext::default();
        assert!(neighbor_ids(&LabeledExpander::any(), &graph, &no_labels, "Alice").is_empty());
    }

    #[test]
    fn dangling_edge_yields_missing_vertex() {
        let mut graph = lettered();
        graph.add_edge(Edge::connect("H", "nowhere")).unwrap();
        let vertex = graph.vertex("H").unwrap().unwrap();
        let connections = OutboundExpander
            .expand(&TraversalContext::default(), &graph, &vertex, &Path::new(vertex.clone()))
            .unwrap();

        assert_eq!(connections.len(), 1);
        assert!(connections[0].vertex.is_missing());
        assert_eq!(connections[0].vertex.id, "nowhere");
    }
}
