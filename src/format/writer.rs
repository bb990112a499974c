//! Writes a catalog out as a graph document.

use std::io::Write;
use std::path::Path;

use crate::graph::GraphCatalog;
use crate::types::TraverseResult;

use super::{GraphDefinition, GraphDocument};

/// Writer for JSON graph documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphWriter {
    pretty: bool,
}

impl GraphWriter {
    /// Compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Write every graph of `catalog` to a file.
    pub fn write_to_file(&self, catalog: &GraphCatalog, path: &Path) -> TraverseResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(catalog, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write every graph of `catalog` to any writer.
    pub fn write_to(&self, catalog: &GraphCatalog, writer: &mut impl Write) -> TraverseResult<()> {
        let document = Self::document(catalog);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &document)?;
        } else {
            serde_json::to_writer(&mut *writer, &document)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// The document describing `catalog`, graphs in name order.
    pub fn document(catalog: &GraphCatalog) -> GraphDocument {
        GraphDocument {
            graphs: catalog
                .iter()
                .map(|(name, graph)| GraphDefinition::from_datasource(name, graph))
                .collect(),
        }
    }
}
