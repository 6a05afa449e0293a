//! Graph analytics for Endecja GraphLab.
//!
//! Runs client-side over the small in-memory knowledge graph and feeds
//! node coloring, sizing, and ranking in the exploration UI:
//!
//! - **Centrality**: PageRank (power iteration), normalized degree
//! - **Community**: Louvain modularity optimization
//! - **Structure**: k-core decomposition, weakly connected components
//! - **Decoration**: [`decorate`] — the one entry point the
//!   application layer calls; merges all metrics into the node records

pub mod centrality;
pub mod community;
pub mod components;
pub mod decorate;
pub mod kcore;
pub mod pagerank;

pub use centrality::degree_centrality;
pub use community::{LouvainConfig, LouvainResult, louvain};
pub use components::{ComponentResult, weakly_connected_components};
pub use decorate::{
    decorate, decorate_with_report, Influencer, NetworkReport, IMPORTANCE_SCALE,
};
pub use kcore::{KCoreConfig, KCoreResult, kcore};
pub use pagerank::{PageRankConfig, PageRankResult, pagerank};
