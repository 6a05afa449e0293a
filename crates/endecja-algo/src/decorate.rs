//! Decoration: the single entry point the application layer calls.
//!
//! Builds the ephemeral analysis graph, runs PageRank, Louvain, and
//! k-core over it, and merges the metrics into copies of the input
//! records. Reruns wholesale whenever the graph changes (initial load
//! or an extension payload) — no incremental update.

use std::collections::HashMap;
use std::time::Instant;

use tracing::debug;

use endecja_graph::{AnalysisGraph, Link, NodeRecord};

use crate::community::{louvain, LouvainConfig};
use crate::components::weakly_connected_components;
use crate::kcore::{kcore, KCoreConfig};
use crate::pagerank::{pagerank, PageRankConfig};

/// `importance = centrality × IMPORTANCE_SCALE`, exactly. A presentation
/// convention for visual sizing, not a mathematical property.
pub const IMPORTANCE_SCALE: f64 = 10.0;

/// How many top-ranked nodes the network report lists.
const TOP_INFLUENCERS: usize = 5;

/// One entry of the report's PageRank ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Influencer {
    pub id: String,
    pub label: String,
    pub score: f64,
}

/// Whole-graph summary shown in the analysis panel.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkReport {
    pub node_count: usize,
    /// Directed edges that survived construction (dedup + endpoint checks).
    pub edge_count: usize,
    /// Directed density: `edges / (n · (n − 1))`.
    pub density: f64,
    pub is_connected: bool,
    pub component_count: usize,
    pub modularity: f64,
    pub community_count: usize,
    pub max_shell: u32,
    pub top_influencers: Vec<Influencer>,
}

/// Decorate every node with the four computed metrics.
///
/// The output is the input node list with only `importance`,
/// `centrality`, `group`, and `k_core` rewritten — same nodes, same
/// order, every other field untouched. Never fails: malformed edges
/// are absorbed at construction and degenerate graphs produce zero
/// metrics.
pub fn decorate(nodes: &[NodeRecord], edges: &[Link]) -> Vec<NodeRecord> {
    decorate_with_report(nodes, edges).0
}

/// [`decorate`], plus the whole-graph [`NetworkReport`].
pub fn decorate_with_report(
    nodes: &[NodeRecord],
    edges: &[Link],
) -> (Vec<NodeRecord>, NetworkReport) {
    let start = Instant::now();
    let graph = AnalysisGraph::build(nodes, edges);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "analytics: graph built"
    );

    // The three metrics are independent reads of the same graph.
    let ranks = pagerank(&graph, &PageRankConfig::default());
    let communities = louvain(&graph, &LouvainConfig::default());
    let cores = kcore(&graph, &KCoreConfig::default());
    let wcc = weakly_connected_components(&graph);

    let rank_by_id: HashMap<&str, f64> = ranks
        .scores
        .iter()
        .map(|(id, s)| (id.as_str(), *s))
        .collect();
    let group_by_id: HashMap<&str, u64> = communities
        .communities
        .iter()
        .map(|(id, c)| (id.as_str(), *c))
        .collect();
    let shell_by_id: HashMap<&str, u32> = cores
        .shells
        .iter()
        .map(|(id, s)| (id.as_str(), *s))
        .collect();

    let decorated: Vec<NodeRecord> = nodes
        .iter()
        .map(|node| {
            let rank = rank_by_id.get(node.id.as_str()).copied().unwrap_or(0.0);
            let mut out = node.clone();
            out.importance = rank * IMPORTANCE_SCALE;
            out.centrality = rank;
            out.group = group_by_id.get(node.id.as_str()).copied().unwrap_or(0);
            out.k_core = shell_by_id.get(node.id.as_str()).copied().unwrap_or(0);
            out
        })
        .collect();

    let label_by_id: HashMap<&str, &str> = nodes
        .iter()
        .map(|n| (n.id.as_str(), n.label.as_str()))
        .collect();
    let top_influencers: Vec<Influencer> = ranks
        .scores
        .iter()
        .take(TOP_INFLUENCERS)
        .map(|(id, score)| Influencer {
            id: id.clone(),
            label: label_by_id.get(id.as_str()).unwrap_or(&"").to_string(),
            score: *score,
        })
        .collect();

    let n = graph.node_count();
    let density = if n > 1 {
        graph.edge_count() as f64 / (n as f64 * (n as f64 - 1.0))
    } else {
        0.0
    };

    let report = NetworkReport {
        node_count: n,
        edge_count: graph.edge_count(),
        density,
        is_connected: wcc.component_count == 1,
        component_count: wcc.component_count,
        modularity: communities.modularity,
        community_count: communities.community_count,
        max_shell: cores.max_shell,
        top_influencers,
    };

    debug!(
        pagerank_iterations = ranks.iterations,
        pagerank_converged = ranks.converged,
        communities = report.community_count,
        components = report.component_count,
        max_shell = report.max_shell,
        duration_ms = start.elapsed().as_millis() as u64,
        "analytics: decoration complete"
    );

    (decorated, report)
}
