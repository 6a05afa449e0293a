use std::collections::HashMap;
use serde::{Serialize, Deserialize};

// ─────────────────────────────────────────────
// NodeType
// ─────────────────────────────────────────────

/// Domain category of a graph node. Opaque to the analytics engine —
/// carried through decoration untouched, used by the presentation layer
/// for the type-based color lens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Person,
    Organization,
    Event,
    Publication,
    Concept,
}

impl Default for NodeType {
    fn default() -> Self {
        Self::Concept
    }
}

// ─────────────────────────────────────────────
// NodeRecord
// ─────────────────────────────────────────────

/// A node of the knowledge graph.
///
/// Everything except the four metric fields is domain data the engine
/// never interprets. The metrics are overwritten wholesale on every
/// decoration pass:
/// - `importance` — PageRank scaled for visual sizing (raw × 10)
/// - `centrality` — raw PageRank, sums to 1 across the graph
/// - `group`      — Louvain community id
/// - `k_core`     — k-core shell index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Unique identifier, e.g. `"dmowski_roman"`.
    pub id: String,

    /// Display label.
    #[serde(default)]
    pub label: String,

    /// Domain category.
    #[serde(rename = "type", default)]
    pub node_type: NodeType,

    /// Free-form date range, e.g. `"1864-1939"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,

    /// Free-form description shown in the inspector sidebar.
    #[serde(default)]
    pub description: String,

    /// PageRank × 10. Presentation scale, always consistent with
    /// `centrality` by that factor.
    #[serde(default)]
    pub importance: f64,

    /// Raw PageRank score in [0, 1].
    #[serde(default)]
    pub centrality: f64,

    /// Community id. Recomputed from scratch each run; not stable
    /// across runs on different inputs.
    #[serde(default)]
    pub group: u64,

    /// K-core shell index.
    #[serde(rename = "kCore", default)]
    pub k_core: u32,

    /// Unrecognized domain fields (layout coordinates, velocities, …)
    /// pass through serialization untouched.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl NodeRecord {
    /// Construct a bare node with required fields; metrics default to 0.
    pub fn new(id: impl Into<String>, label: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            node_type,
            dates: None,
            description: String::new(),
            importance: 0.0,
            centrality: 0.0,
            group: 0,
            k_core: 0,
            extra: HashMap::new(),
        }
    }
}

// ─────────────────────────────────────────────
// Endpoint
// ─────────────────────────────────────────────

/// One end of a relationship edge.
///
/// The application's edge lists carry either a bare node id or a whole
/// embedded node object (force-layout libraries rewrite `source`/`target`
/// in place). Both forms deserialize here; [`Endpoint::id`] is the only
/// accessor the engine uses — representation never leaks past the
/// construction boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    Id(String),
    Embedded(EmbeddedNode),
}

/// Embedded-object endpoint form. Only `id` matters; the rest is kept
/// for lossless round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedNode {
    pub id: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Endpoint {
    /// Canonical node id, whichever form the endpoint arrived in.
    pub fn id(&self) -> &str {
        match self {
            Endpoint::Id(id) => id,
            Endpoint::Embedded(node) => &node.id,
        }
    }
}

impl From<&str> for Endpoint {
    fn from(id: &str) -> Self {
        Endpoint::Id(id.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(id: String) -> Self {
        Endpoint::Id(id)
    }
}

// ─────────────────────────────────────────────
// Link
// ─────────────────────────────────────────────

/// A directed relationship edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: Endpoint,
    pub target: Endpoint,

    /// Relationship label, e.g. `"założył"`. Opaque to the engine.
    #[serde(default)]
    pub relationship: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,

    /// Optional edge strength used by the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl Link {
    pub fn new(
        source: impl Into<Endpoint>,
        target: impl Into<Endpoint>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relationship: relationship.into(),
            dates: None,
            value: None,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_json_roundtrip() {
        let mut node = NodeRecord::new("liga_narodowa", "Liga Narodowa", NodeType::Organization);
        node.dates = Some("1893-1928".into());
        node.centrality = 0.25;
        node.importance = 2.5;

        let encoded = serde_json::to_string(&node).expect("serialize");
        let decoded: NodeRecord = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(node, decoded);
    }

    #[test]
    fn node_metric_fields_default_to_zero() {
        let node: NodeRecord = serde_json::from_str(
            r#"{"id": "onr", "label": "ONR", "type": "organization"}"#,
        ).unwrap();
        assert_eq!(node.importance, 0.0);
        assert_eq!(node.centrality, 0.0);
        assert_eq!(node.group, 0);
        assert_eq!(node.k_core, 0);
    }

    #[test]
    fn node_preserves_unknown_fields() {
        let json = r#"{"id": "a", "label": "A", "type": "person", "x": 12.5, "vy": -0.3}"#;
        let node: NodeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(node.extra["x"], serde_json::json!(12.5));

        let back = serde_json::to_string(&node).unwrap();
        let reparsed: NodeRecord = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed.extra["vy"], serde_json::json!(-0.3));
    }

    #[test]
    fn endpoint_deserializes_bare_id() {
        let link: Link = serde_json::from_str(
            r#"{"source": "a", "target": "b", "relationship": "rywalizacja"}"#,
        ).unwrap();
        assert_eq!(link.source.id(), "a");
        assert_eq!(link.target.id(), "b");
    }

    #[test]
    fn endpoint_deserializes_embedded_object() {
        // Force-layout libraries replace endpoint ids with node objects
        let link: Link = serde_json::from_str(
            r#"{"source": {"id": "a", "x": 1.0}, "target": "b", "relationship": ""}"#,
        ).unwrap();
        assert_eq!(link.source.id(), "a");
    }

    #[test]
    fn kcore_uses_camel_case_on_the_wire() {
        let mut node = NodeRecord::new("a", "A", NodeType::Person);
        node.k_core = 3;
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"kCore\":3"), "got: {json}");
    }
}
