//! Degree centrality.

use endecja_graph::AnalysisGraph;

/// Degree centrality over the undirected projection, normalized by the
/// maximum degree so the best-connected node scores 1.0. Used by the
/// presentation layer as a cheap sizing fallback when PageRank is not
/// wanted.
pub fn degree_centrality(graph: &AnalysisGraph) -> Vec<(String, f64)> {
    let n = graph.node_count();
    if n == 0 {
        return vec![];
    }

    let degrees: Vec<usize> = (0..n).map(|i| graph.degree(i)).collect();
    let max_degree = degrees.iter().copied().max().unwrap_or(0).max(1);

    let mut result: Vec<(String, f64)> = graph
        .ids()
        .iter()
        .cloned()
        .zip(degrees.iter().map(|&d| d as f64 / max_degree as f64))
        .collect();
    result.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use endecja_graph::{Link, NodeRecord, NodeType};

    fn build(names: &[&str], edges: &[(&str, &str)]) -> AnalysisGraph {
        let nodes: Vec<NodeRecord> = names
            .iter()
            .map(|n| NodeRecord::new(*n, *n, NodeType::Concept))
            .collect();
        let links: Vec<Link> = edges
            .iter()
            .map(|(s, t)| Link::new(*s, *t, ""))
            .collect();
        AnalysisGraph::build(&nodes, &links)
    }

    #[test]
    fn empty_graph() {
        assert!(degree_centrality(&build(&[], &[])).is_empty());
    }

    #[test]
    fn edgeless_nodes_score_zero() {
        let result = degree_centrality(&build(&["a", "b"], &[]));
        for (_, score) in &result {
            assert_eq!(*score, 0.0);
        }
    }

    #[test]
    fn star_center_scores_one() {
        let result = degree_centrality(&build(
            &["h", "l1", "l2", "l3"],
            &[("h", "l1"), ("h", "l2"), ("h", "l3")],
        ));
        assert_eq!(result[0].0, "h");
        assert_eq!(result[0].1, 1.0);
        // Leaves: degree 1 out of max 3
        for (_, score) in &result[1..] {
            assert!((score - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn direction_is_ignored() {
        // a→b and c→a give a undirected degree 2 either way
        let result = degree_centrality(&build(&["a", "b", "c"], &[("a", "b"), ("c", "a")]));
        assert_eq!(result[0].0, "a");
        assert_eq!(result[0].1, 1.0);
    }
}
