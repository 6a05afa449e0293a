//! # endecja-graph
//!
//! Data model and per-call analysis graph for the Endecja GraphLab
//! knowledge graph:
//! - [`model::NodeRecord`] — graph node: string id, domain fields, four engine-written metrics
//! - [`model::Link`]       — relationship edge with polymorphic endpoints
//! - [`graph::AnalysisGraph`] — ephemeral index-based graph built per decoration pass
//! - [`dataset::GraphData`]   — JSON interchange + extension-payload merge

pub mod dataset;
pub mod error;
pub mod graph;
pub mod model;

pub use dataset::{GraphData, MergeReport};
pub use error::GraphError;
pub use graph::AnalysisGraph;
pub use model::{EmbeddedNode, Endpoint, Link, NodeRecord, NodeType};
