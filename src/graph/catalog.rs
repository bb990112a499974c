//! Registry of named graphs.

use std::collections::BTreeMap;

use crate::types::{TraverseError, TraverseResult};

use super::MemoryDatasource;

/// Named in-memory graphs. Opening an unknown name is a configuration error.
#[derive(Debug, Default)]
pub struct GraphCatalog {
    graphs: BTreeMap<String, MemoryDatasource>,
}

impl GraphCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a graph, replacing any graph of the same name.
    pub fn insert(&mut self, name: impl Into<String>, graph: MemoryDatasource) {
        self.graphs.insert(name.into(), graph);
    }

    /// Datasource for the named graph.
    pub fn open(&self, name: &str) -> TraverseResult<&MemoryDatasource> {
        self.graphs
            .get(name)
            .ok_or_else(|| TraverseError::GraphNotFound(name.to_string()))
    }

    /// The only graph in the catalog, or the named one.
    ///
    /// Without a name, a catalog holding zero or several graphs is ambiguous
    /// and reports `GraphNotFound("")`.
    pub fn open_or_single(&self, name: Option<&str>) -> TraverseResult<(&str, &MemoryDatasource)> {
        match name {
            Some(name) => {
                let (key, graph) = self
                    .graphs
                    .get_key_value(name)
                    .ok_or_else(|| TraverseError::GraphNotFound(name.to_string()))?;
                Ok((key.as_str(), graph))
            }
            None if self.graphs.len() == 1 => {
                let (key, graph) = self
                    .graphs
                    .iter()
                    .next()
                    .ok_or_else(|| TraverseError::GraphNotFound(String::new()))?;
                Ok((key.as_str(), graph))
            }
            None => Err(TraverseError::GraphNotFound(String::new())),
        }
    }

    /// Graph names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.graphs.keys().map(String::as_str)
    }

    /// All graphs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MemoryDatasource)> {
        self.graphs.iter().map(|(name, graph)| (name.as_str(), graph))
    }

    /// Number of registered graphs.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// True if no graph is registered.
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}
