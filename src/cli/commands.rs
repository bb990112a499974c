//! CLI command implementations.

use std::path::Path;

use serde::Serialize;

use crate::engine::{
    for_direction, Expander, ExcludeVerticesFilter, FilterChain, LabeledExpander,
    PruneVerticesFilter, TrackingVisitor, TraversalContext, TraversalStats, Traverser,
};
use crate::format::GraphReader;
use crate::graph::{Datasource, GraphCatalog, SortedDatasource};
use crate::types::{Connection, Direction, TraversalOptions, TraverseError, TraverseResult};

/// Everything `gtrav traverse` needs besides the document path.
#[derive(Debug, Clone, Default)]
pub struct TraverseRequest {
    /// Graph name; optional when the document holds a single graph.
    pub graph: Option<String>,
    pub start: String,
    pub options: TraversalOptions,
    pub direction: Direction,
    /// Vertex IDs hidden from the output.
    pub exclude: Vec<String>,
    /// Vertex IDs whose neighbors are not followed.
    pub prune: Vec<String>,
    /// Order edges by ID before expanding.
    pub sort: bool,
}

/// Outcome of a traversal run by the CLI.
#[derive(Debug, Serialize)]
pub struct TraversalReport {
    pub graph: String,
    pub start: String,
    pub stats: TraversalStats,
    #[serde(flatten)]
    pub visits: TrackingVisitor,
}

/// Display information about a graph document.
pub fn cmd_info(path: &Path, json: bool) -> TraverseResult<()> {
    let catalog = GraphReader::read_from_file(path)?;

    if json {
        let graphs: Vec<serde_json::Value> = catalog
            .iter()
            .map(|(name, graph)| {
                serde_json::json!({
                    "name": name,
                    "vertices": graph.vertex_count(),
                    "edges": graph.edge_count(),
                })
            })
            .collect();
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "graphs": graphs,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Graphs: {}", catalog.len());
        for (name, graph) in catalog.iter() {
            println!(
                "  {}: {} vertices, {} edges",
                name,
                graph.vertex_count(),
                graph.edge_count()
            );
        }
    }
    Ok(())
}

/// List the neighbors of one vertex, as a single expander step would.
pub fn cmd_neighbors(
    path: &Path,
    graph: Option<&str>,
    vertex_id: &str,
    direction: Direction,
    labels: Vec<String>,
    json: bool,
) -> TraverseResult<()> {
    let catalog = GraphReader::read_from_file(path)?;
    let connections = neighbors(&catalog, graph, vertex_id, direction, labels)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&connections).unwrap_or_default()
        );
    } else {
        println!("{} neighbor(s) of {} ({})", connections.len(), vertex_id, direction);
        for connection in &connections {
            let label = connection.edge.label.as_deref().unwrap_or("-");
            let marker = if connection.vertex.is_missing() {
                " [missing]"
            } else {
                ""
            };
            println!(
                "  {} --[{}]-- {}{}",
                connection.edge.id, label, connection.vertex.id, marker
            );
        }
    }
    Ok(())
}

/// One expander step from `vertex_id` in the selected graph.
pub fn neighbors(
    catalog: &GraphCatalog,
    graph: Option<&str>,
    vertex_id: &str,
    direction: Direction,
    labels: Vec<String>,
) -> TraverseResult<Vec<Connection>> {
    let (_, datasource) = catalog.open_or_single(graph)?;
    let vertex = datasource
        .vertex(vertex_id)?
        .ok_or_else(|| TraverseError::VertexNotFound(vertex_id.to_string()))?;

    let options = TraversalOptions {
        labels,
        ..Default::default()
    };
    let expander = expander_for(direction, &options);
    let ctx = TraversalContext::new(options);
    let path = crate::graph::Path::new(vertex.clone());
    expander.expand(&ctx, datasource, &vertex, &path)
}

/// Run a traversal and print the visited vertices.
pub fn cmd_traverse(path: &Path, request: &TraverseRequest, json: bool) -> TraverseResult<()> {
    let catalog = GraphReader::read_from_file(path)?;
    let report = traverse(&catalog, request)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        for route in &report.visits.paths {
            let depth = route.depth();
            let indent = "  ".repeat(depth);
            println!(
                "{}[depth {}] {}  ({})",
                indent,
                depth,
                route.last_vertex().id,
                route.vertex_ids().join(" -> ")
            );
        }
        println!(
            "Visited {} vertices in {} iterations",
            report.stats.visited, report.stats.iterations
        );
    }
    Ok(())
}

/// Run the traversal described by `request` against the catalog.
pub fn traverse(catalog: &GraphCatalog, request: &TraverseRequest) -> TraverseResult<TraversalReport> {
    let (name, graph) = catalog.open_or_single(request.graph.as_deref())?;

    let sorted;
    let datasource: &dyn Datasource = if request.sort {
        sorted = SortedDatasource::by_edge_id(graph);
        &sorted
    } else {
        graph
    };

    let filter = FilterChain::new()
        .with(ExcludeVerticesFilter::new(request.exclude.iter().cloned()))
        .with(PruneVerticesFilter::new(request.prune.iter().cloned()));
    let traverser = Traverser::builder(datasource)
        .options(request.options.clone())
        .boxed_expander(expander_for(request.direction, &request.options))
        .filter(filter)
        .build()?;

    let mut visits = TrackingVisitor::new();
    let stats = traverser.traverse_from(&mut visits, &request.start)?;

    Ok(TraversalReport {
        graph: name.to_string(),
        start: request.start.clone(),
        stats,
        visits,
    })
}

fn expander_for(direction: Direction, options: &TraversalOptions) -> Box<dyn Expander> {
    if options.labels.is_empty() {
        for_direction(direction)
    } else {
        Box::new(LabeledExpander::new(direction))
    }
}
