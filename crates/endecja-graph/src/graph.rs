use std::collections::{HashMap, HashSet};

use crate::model::{Link, NodeRecord};

// ─────────────────────────────────────────────
// AnalysisGraph
// ─────────────────────────────────────────────

/// In-memory graph built fresh for a single decoration pass.
///
/// Index-based: nodes are addressed by their insertion position, with a
/// side map from string id to index. Keeps both the directed adjacency
/// (PageRank follows edge direction) and a deduplicated undirected
/// projection (community detection, k-core, and degree ignore direction).
///
/// Never shared and never retained: the value is owned by one call and
/// dropped when it returns. Construction never fails — malformed input
/// only makes the graph smaller:
/// - adding an already-present node id is a no-op
/// - edges whose endpoint id is unknown are skipped
/// - a repeated `(source, target)` ordered pair is skipped
#[derive(Debug, Default)]
pub struct AnalysisGraph {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    out: Vec<Vec<usize>>,
    inc: Vec<Vec<usize>>,
    undirected: Vec<Vec<usize>>,
    seen: HashSet<(usize, usize)>,
    edge_count: usize,
}

impl AnalysisGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the application's node/edge lists (the only constructor
    /// the decoration pipeline uses).
    pub fn build(nodes: &[NodeRecord], edges: &[Link]) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(&node.id);
        }
        for edge in edges {
            graph.add_link(edge);
        }
        graph
    }

    // ── Mutations ──────────────────────────────────────

    /// Insert a node id, returning its index. Idempotent.
    pub fn add_node(&mut self, id: &str) -> usize {
        if let Some(&i) = self.index.get(id) {
            return i;
        }
        let i = self.ids.len();
        self.ids.push(id.to_string());
        self.index.insert(id.to_string(), i);
        self.out.push(Vec::new());
        self.inc.push(Vec::new());
        self.undirected.push(Vec::new());
        i
    }

    /// Register a relationship edge, normalizing both endpoints to ids.
    /// Returns whether the edge was actually added.
    pub fn add_link(&mut self, link: &Link) -> bool {
        self.add_edge(link.source.id(), link.target.id())
    }

    /// Register a directed edge between two known node ids.
    ///
    /// Silently refuses unknown endpoints and duplicate ordered pairs.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        let (s, t) = match (self.index.get(source), self.index.get(target)) {
            (Some(&s), Some(&t)) => (s, t),
            _ => return false,
        };
        if !self.seen.insert((s, t)) {
            return false;
        }

        self.out[s].push(t);
        self.inc[t].push(s);
        self.edge_count += 1;

        // Undirected projection: one entry per unordered pair, so a
        // reverse duplicate (t, s) does not double the degree.
        if !self.undirected[s].contains(&t) {
            self.undirected[s].push(t);
            if s != t {
                self.undirected[t].push(s);
            }
        }
        true
    }

    // ── Queries ────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Directed edges actually registered (after dedup and endpoint checks).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges of the undirected projection (unordered pairs).
    pub fn undirected_edge_count(&self) -> usize {
        let entries: usize = self.undirected.iter().map(|n| n.len()).sum();
        let self_loops = (0..self.ids.len())
            .filter(|&i| self.undirected[i].contains(&i))
            .count();
        (entries - self_loops) / 2 + self_loops
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Node ids in insertion order. Algorithms iterate this order, which
    /// is what makes their tie-breaking deterministic.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn id_at(&self, i: usize) -> &str {
        &self.ids[i]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Outgoing neighbors (directed).
    pub fn neighbors_out(&self, i: usize) -> &[usize] {
        &self.out[i]
    }

    /// Incoming neighbors (directed).
    pub fn neighbors_in(&self, i: usize) -> &[usize] {
        &self.inc[i]
    }

    /// Neighbors in the undirected projection, deduplicated.
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.undirected[i]
    }

    pub fn out_degree(&self, i: usize) -> usize {
        self.out[i].len()
    }

    pub fn in_degree(&self, i: usize) -> usize {
        self.inc[i].len()
    }

    /// Degree in the undirected projection.
    pub fn degree(&self, i: usize) -> usize {
        self.undirected[i].len()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Endpoint, NodeType};

    fn ids(names: &[&str]) -> Vec<NodeRecord> {
        names
            .iter()
            .map(|n| NodeRecord::new(*n, *n, NodeType::Concept))
            .collect()
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = AnalysisGraph::new();
        let a = g.add_node("a");
        let again = g.add_node("a");
        assert_eq!(a, again);
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn unknown_endpoints_are_skipped() {
        let nodes = ids(&["a", "b"]);
        let edges = vec![
            Link::new("a", "b", "zna"),
            Link::new("a", "ghost", "zna"),
            Link::new("ghost", "b", "zna"),
        ];
        let g = AnalysisGraph::build(&nodes, &edges);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn duplicate_ordered_pairs_are_skipped() {
        let nodes = ids(&["a", "b"]);
        let edges = vec![
            Link::new("a", "b", "pierwszy"),
            Link::new("a", "b", "drugi"),
        ];
        let g = AnalysisGraph::build(&nodes, &edges);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn reverse_edge_is_directed_but_not_doubled_undirected() {
        let nodes = ids(&["a", "b"]);
        let edges = vec![Link::new("a", "b", ""), Link::new("b", "a", "")];
        let g = AnalysisGraph::build(&nodes, &edges);

        // Two directed edges...
        assert_eq!(g.edge_count(), 2);
        let (a, b) = (g.index_of("a").unwrap(), g.index_of("b").unwrap());
        assert_eq!(g.neighbors_out(a), &[b]);
        assert_eq!(g.neighbors_out(b), &[a]);

        // ...but a single undirected pair
        assert_eq!(g.degree(a), 1);
        assert_eq!(g.degree(b), 1);
        assert_eq!(g.undirected_edge_count(), 1);
    }

    #[test]
    fn self_loop_registers_once() {
        let nodes = ids(&["a"]);
        let edges = vec![Link::new("a", "a", ""), Link::new("a", "a", "")];
        let g = AnalysisGraph::build(&nodes, &edges);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.undirected_edge_count(), 1);
    }

    #[test]
    fn embedded_endpoint_resolves_to_id() {
        let nodes = ids(&["a", "b"]);
        let mut link = Link::new("a", "b", "");
        link.source = Endpoint::Embedded(crate::model::EmbeddedNode {
            id: "a".into(),
            extra: Default::default(),
        });
        let g = AnalysisGraph::build(&nodes, &[link]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let nodes = ids(&["c", "a", "b"]);
        let g = AnalysisGraph::build(&nodes, &[]);
        assert_eq!(g.ids(), &["c".to_string(), "a".to_string(), "b".to_string()]);
    }

    #[test]
    fn empty_graph_is_valid() {
        let g = AnalysisGraph::build(&[], &[]);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }
}
