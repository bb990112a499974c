//! JSON graph documents: load into and save from a [`GraphCatalog`](crate::graph::GraphCatalog).

pub mod document;
pub mod reader;
pub mod writer;

pub use document::{GraphDefinition, GraphDocument};
pub use reader::GraphReader;
pub use writer::GraphWriter;
