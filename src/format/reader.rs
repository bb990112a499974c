//! Reads graph documents into a catalog.

use std::io::{BufReader, Read};
use std::path::Path;

use crate::graph::GraphCatalog;
use crate::types::TraverseResult;

use super::GraphDocument;

/// Reader for JSON graph documents.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph document file into a catalog.
    pub fn read_from_file(path: &Path) -> TraverseResult<GraphCatalog> {
        let file = std::fs::File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Read from any reader into a catalog.
    pub fn read_from(reader: impl Read) -> TraverseResult<GraphCatalog> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        Self::load(document)
    }

    /// Read a document held in a string.
    pub fn read_str(json: &str) -> TraverseResult<GraphCatalog> {
        let document: GraphDocument = serde_json::from_str(json)?;
        Self::load(document)
    }

    /// Build every graph of an already parsed document.
    pub fn load(document: GraphDocument) -> TraverseResult<GraphCatalog> {
        let mut catalog = GraphCatalog::new();
        for definition in document.graphs {
            let name = definition.name.clone();
            let graph = definition.into_datasource()?;
            log::debug!(
                "Loaded graph {}: {} vertices, {} edges",
                name,
                graph.vertex_count(),
                graph.edge_count()
            );
            if catalog.open(&name).is_ok() {
                log::warn!("Graph {} defined twice; keeping the last definition", name);
            }
            catalog.insert(name, graph);
        }
        Ok(catalog)
    }
}
