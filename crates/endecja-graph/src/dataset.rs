//! Dataset interchange: the node/edge list pair the application owns,
//! JSON in/out, and the graph-extension merge.

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::error::GraphError;
use crate::model::{Link, NodeRecord};

/// Result of merging an extension payload into an existing dataset.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added_nodes: usize,
    pub skipped_nodes: usize,
    pub added_edges: usize,
}

/// The canonical application-side graph: a plain node list and edge list.
///
/// This is the long-lived value; the analyzable structure is rebuilt from
/// it on every decoration pass. Seed data and externally proposed
/// extension payloads both arrive in this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<Link>,
}

impl GraphData {
    pub fn new(nodes: Vec<NodeRecord>, edges: Vec<Link>) -> Self {
        Self { nodes, edges }
    }

    /// Parse a dataset from JSON. Unknown node fields are preserved.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Merge an extension payload into this dataset.
    ///
    /// New nodes whose id already exists are dropped; edges are appended
    /// as-is (the construction boundary dedups and discards unknown
    /// endpoints on the next decoration pass). The caller is expected to
    /// re-decorate the whole merged set afterwards — there is no
    /// incremental update.
    pub fn merge(&mut self, new_nodes: Vec<NodeRecord>, new_edges: Vec<Link>) -> MergeReport {
        let existing: std::collections::HashSet<String> =
            self.nodes.iter().map(|n| n.id.clone()).collect();

        let mut report = MergeReport::default();
        for node in new_nodes {
            if existing.contains(&node.id) {
                debug!(id = %node.id, "merge: duplicate node id skipped");
                report.skipped_nodes += 1;
            } else {
                self.nodes.push(node);
                report.added_nodes += 1;
            }
        }

        report.added_edges = new_edges.len();
        self.edges.extend(new_edges);

        debug!(
            added_nodes = report.added_nodes,
            skipped_nodes = report.skipped_nodes,
            added_edges = report.added_edges,
            "merge: extension payload applied"
        );
        report
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeType;

    fn seed() -> GraphData {
        GraphData::new(
            vec![
                NodeRecord::new("dmowski_roman", "Roman Dmowski", NodeType::Person),
                NodeRecord::new("liga_narodowa", "Liga Narodowa", NodeType::Organization),
            ],
            vec![Link::new("dmowski_roman", "liga_narodowa", "założył")],
        )
    }

    #[test]
    fn json_roundtrip_keeps_everything() {
        let data = seed();
        let json = data.to_json().unwrap();
        let back = GraphData::from_json(&json).unwrap();
        assert_eq!(back.nodes, data.nodes);
        assert_eq!(back.edges, data.edges);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = GraphData::from_json("not json").unwrap_err();
        assert!(matches!(err, GraphError::Serialization(_)));
    }

    #[test]
    fn merge_dedups_nodes_by_id() {
        let mut data = seed();
        let report = data.merge(
            vec![
                NodeRecord::new("dmowski_roman", "Duplikat", NodeType::Person),
                NodeRecord::new("balicki_zygmunt", "Zygmunt Balicki", NodeType::Person),
            ],
            vec![Link::new("balicki_zygmunt", "liga_narodowa", "współzałożył")],
        );

        assert_eq!(report, MergeReport { added_nodes: 1, skipped_nodes: 1, added_edges: 1 });
        assert_eq!(data.nodes.len(), 3);
        // The original record wins over the duplicate
        assert_eq!(data.nodes[0].label, "Roman Dmowski");
        assert_eq!(data.edges.len(), 2);
    }

    #[test]
    fn merge_keeps_edges_with_unknown_endpoints() {
        // Unknown endpoints are the construction boundary's problem,
        // not the merge's — the edge list stays as given.
        let mut data = seed();
        data.merge(vec![], vec![Link::new("ghost", "liga_narodowa", "")]);
        assert_eq!(data.edges.len(), 2);
    }
}
