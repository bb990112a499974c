//! Traversals over the lettered collection graph with edges sorted by ID.

use std::cmp::Ordering;

use graph_traverser::engine::{
    CountingVisitor, InboundExpander, TrackingVisitor, TraversalStats, Traverser,
    TraverserBuilder,
};
use graph_traverser::graph::{Datasource, GraphBuilder, MemoryDatasource, SortedDatasource};
use graph_traverser::types::{Edge, TraverseError, Uniqueness};

fn lettered() -> MemoryDatasource {
    let mut builder = GraphBuilder::new();
    builder.named_vertices(&["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
    // Inserted out of order; the sorted datasource restores ID order.
    for (from, to) in [
        ("B", "I"),
        ("A", "D"),
        ("B", "G"),
        ("A", "B"),
        ("B", "C"),
        ("C", "D"),
        ("D", "F"),
        ("D", "E"),
        ("I", "H"),
        ("G", "H"),
    ] {
        builder.link(from, to);
    }
    builder.build().unwrap()
}

fn run<'a>(
    datasource: &'a dyn Datasource,
    start: &str,
    configure: impl FnOnce(TraverserBuilder<'a>) -> TraverserBuilder<'a>,
) -> (TrackingVisitor, TraversalStats) {
    let _ = env_logger::builder().is_test(true).try_init();
    let traverser = configure(Traverser::builder(datasource)).build().unwrap();
    let mut visitor = TrackingVisitor::new();
    let stats = traverser.traverse_from(&mut visitor, start).unwrap();
    (visitor, stats)
}

#[test]
fn test_outbound_full_traversal() {
    let graph = lettered();
    let sorted = SortedDatasource::by_edge_id(&graph);
    let (visitor, stats) = run(&sorted, "A", |b| b);

    assert_eq!(
        visitor.vertex_ids(),
        vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "H", "D", "E", "F"]
    );
    assert_eq!(stats.visited, 13);
    assert_eq!(stats.iterations, 13);
    assert_eq!(visitor.path_ids()[3], vec!["A", "B", "C", "D"]);
    assert_eq!(visitor.path_ids()[10], vec!["A", "D"]);
}

#[test]
fn test_inbound_traversal() {
    let graph = lettered();
    let sorted = SortedDatasource::by_edge_id(&graph);
    let (visitor, _) = run(&sorted, "F", |b| b.expander(InboundExpander));

    assert_eq!(visitor.vertex_ids(), vec!["F", "D", "A", "C", "B", "A"]);
    assert_eq!(visitor.path_ids()[5], vec!["F", "D", "C", "B", "A"]);
}

#[test]
fn test_unique_global_vertices() {
    let graph = lettered();
    let sorted = SortedDatasource::by_edge_id(&graph);
    let (visitor, _) = run(&sorted, "A", |b| {
        b.uniqueness(Uniqueness::Global, Uniqueness::None)
    });
    assert_eq!(
        visitor.vertex_ids(),
        vec!["A", "B", "C", "D", "E", "F", "G", "H", "I"]
    );
}

#[test]
fn test_unique_path_vertices() {
    let graph = lettered();
    let sorted = SortedDatasource::by_edge_id(&graph);
    let (visitor, _) = run(&sorted, "A", |b| b.uniqueness(Uniqueness::Path, Uniqueness::None));
    assert_eq!(
        visitor.vertex_ids(),
        vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "H", "D", "E", "F"]
    );
}

#[test]
fn test_unique_global_edges() {
    let graph = lettered();
    let sorted = SortedDatasource::by_edge_id(&graph);
    let (visitor, _) = run(&sorted, "A", |b| {
        b.uniqueness(Uniqueness::None, Uniqueness::Global)
    });
    assert_eq!(
        visitor.vertex_ids(),
        vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "H", "D"]
    );
}

#[test]
fn test_unsorted_datasource_follows_insertion_order() {
    let graph = lettered();
    let (visitor, _) = run(&graph, "A", |b| {
        b.uniqueness(Uniqueness::Global, Uniqueness::None)
    });
    assert_eq!(
        visitor.vertex_ids(),
        vec!["A", "D", "F", "E", "B", "I", "H", "G", "C"]
    );
}

#[test]
fn test_custom_edge_order() {
    let graph = lettered();
    let descending = SortedDatasource::new(&graph, |a: &Edge, b: &Edge| -> Ordering {
        b.id.cmp(&a.id)
    });
    let (visitor, _) = run(&descending, "A", |b| {
        b.uniqueness(Uniqueness::Global, Uniqueness::None)
    });
    assert_eq!(
        visitor.vertex_ids(),
        vec!["A", "D", "F", "E", "B", "I", "H", "G", "C"]
    );
}

#[test]
fn test_dangling_edge_visits_missing_vertex() {
    let mut graph = lettered();
    graph.add_edge(Edge::new("H->ghost", "H", "ghost")).unwrap();
    let sorted = SortedDatasource::by_edge_id(&graph);
    let (visitor, _) = run(&sorted, "G", |b| b);

    assert_eq!(visitor.vertex_ids(), vec!["G", "H", "ghost"]);
    let ghost = &visitor.vertices[2];
    assert!(ghost.is_missing());
    assert_eq!(serde_json::to_value(ghost).unwrap(), serde_json::Value::Null);
}

#[test]
fn test_iteration_limit_counts_processed_items() {
    let graph = lettered();
    let sorted = SortedDatasource::by_edge_id(&graph);
    let traverser = Traverser::builder(&sorted).max_iterations(5).build().unwrap();
    let mut counter = CountingVisitor::default();
    let result = traverser.traverse_from(&mut counter, "A");

    assert!(matches!(result, Err(TraverseError::TooManyIterations(5))));
    assert_eq!(counter.count, 5);
}
