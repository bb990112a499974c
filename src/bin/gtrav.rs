//! CLI entry point for the `gtrav` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_traverser::cli::commands::{self, TraverseRequest};
use graph_traverser::types::{
    Direction, TraversalOptions, TraverseError, TraverseResult, UniquenessOptions,
};

#[derive(Parser)]
#[command(
    name = "gtrav",
    about = "Run graph traversals over JSON graph documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the graphs of a document
    Info {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Show the neighbors of a vertex
    Neighbors {
        /// Path to the graph document
        file: PathBuf,
        /// Vertex ID
        vertex: String,
        /// Graph name (optional if the document holds one graph)
        #[arg(long)]
        graph: Option<String>,
        /// Direction: outbound, inbound, or any
        #[arg(long, default_value = "outbound")]
        direction: String,
        /// Comma-separated edge labels to follow
        #[arg(long)]
        labels: Option<String>,
    },
    /// Traverse from a start vertex
    Traverse {
        /// Path to the graph document
        file: PathBuf,
        /// Start vertex ID
        start: String,
        /// Graph name (optional if the document holds one graph)
        #[arg(long)]
        graph: Option<String>,
        /// Strategy: depth-first or breadth-first
        #[arg(long, default_value = "depth-first")]
        strategy: String,
        /// Order: pre-order or post-order
        #[arg(long, default_value = "pre-order")]
        order: String,
        /// Neighbor order: forward or backward
        #[arg(long, default_value = "forward")]
        item_order: String,
        /// Direction: outbound, inbound, or any
        #[arg(long, default_value = "outbound")]
        direction: String,
        /// Comma-separated edge labels to follow
        #[arg(long)]
        labels: Option<String>,
        /// Vertex uniqueness: none, path, or global
        #[arg(long, default_value = "none")]
        unique_vertices: String,
        /// Edge uniqueness: none, path, or global
        #[arg(long, default_value = "none")]
        unique_edges: String,
        /// Minimum depth of visited vertices
        #[arg(long)]
        min_depth: Option<usize>,
        /// Maximum depth of visited vertices
        #[arg(long)]
        max_depth: Option<usize>,
        /// Abort after this many processed items
        #[arg(long, default_value = "10000000")]
        max_iterations: usize,
        /// Comma-separated vertex IDs not to visit
        #[arg(long)]
        exclude: Option<String>,
        /// Comma-separated vertex IDs not to expand
        #[arg(long)]
        prune: Option<String>,
        /// Expand edges in edge ID order
        #[arg(long)]
        sort: bool,
    },
}

fn split_list(list: Option<String>) -> Vec<String> {
    list.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result: TraverseResult<()> = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Neighbors {
            file,
            vertex,
            graph,
            direction,
            labels,
        } => direction.parse::<Direction>().and_then(|direction| {
            commands::cmd_neighbors(
                &file,
                graph.as_deref(),
                &vertex,
                direction,
                split_list(labels),
                json,
            )
        }),
        Commands::Traverse {
            file,
            start,
            graph,
            strategy,
            order,
            item_order,
            direction,
            labels,
            unique_vertices,
            unique_edges,
            min_depth,
            max_depth,
            max_iterations,
            exclude,
            prune,
            sort,
        } => (|| -> TraverseResult<()> {
            let options = TraversalOptions {
                strategy: strategy.parse()?,
                order: order.parse()?,
                item_order: item_order.parse()?,
                uniqueness: UniquenessOptions::new(
                    unique_vertices.parse()?,
                    unique_edges.parse()?,
                ),
                min_depth,
                max_depth,
                max_iterations,
                labels: split_list(labels),
                ..Default::default()
            };
            let request = TraverseRequest {
                graph,
                start,
                options,
                direction: direction.parse()?,
                exclude: split_list(exclude),
                prune: split_list(prune),
                sort,
            };
            commands::cmd_traverse(&file, &request, json)
        })(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            TraverseError::Io(_) => 1,
            TraverseError::Json(_)
            | TraverseError::DuplicateVertex(_)
            | TraverseError::DuplicateEdge(_) => 2,
            TraverseError::InvalidOption { .. } => 3,
            TraverseError::GraphNotFound(_) | TraverseError::VertexNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
