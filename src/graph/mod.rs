//! Graph data access: datasources, paths and the named-graph catalog.

pub mod builder;
pub mod catalog;
pub mod datasource;
pub mod path;

pub use builder::GraphBuilder;
pub use catalog::GraphCatalog;
pub use datasource::{Datasource, MemoryDatasource, SortedDatasource};
pub use path::Path;
