//! Weakly connected components via Union-Find.

use std::collections::HashMap;
use std::time::Instant;

use endecja_graph::AnalysisGraph;

pub struct ComponentResult {
    /// `(node id, component id)` in node insertion order.
    pub components: Vec<(String, u64)>,
    pub component_count: usize,
    pub largest_component_size: usize,
    pub duration_ms: u64,
}

// ── Union-Find ──────────────────────────────────────────────────────────────

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]); // path compression
        }
        self.parent[x]
    }

    fn union(&mut self, x: usize, y: usize) {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry { return; }
        // union by rank
        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = rx;
        } else {
            self.parent[ry] = rx;
            self.rank[rx] += 1;
        }
    }
}

/// Weakly connected components: edge direction is ignored.
pub fn weakly_connected_components(graph: &AnalysisGraph) -> ComponentResult {
    let start = Instant::now();

    let n = graph.node_count();
    if n == 0 {
        return ComponentResult {
            components: vec![],
            component_count: 0,
            largest_component_size: 0,
            duration_ms: 0,
        };
    }

    let mut uf = UnionFind::new(n);
    for i in 0..n {
        for &j in graph.neighbors(i) {
            uf.union(i, j);
        }
    }

    // Component ids numbered in node insertion order
    let mut comp_map: HashMap<usize, u64> = HashMap::new();
    let mut next_id = 0u64;
    let mut comp_sizes: HashMap<u64, usize> = HashMap::new();

    let components: Vec<(String, u64)> = graph
        .ids()
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let root = uf.find(i);
            let comp_id = *comp_map.entry(root).or_insert_with(|| {
                let c = next_id;
                next_id += 1;
                c
            });
            *comp_sizes.entry(comp_id).or_default() += 1;
            (id.clone(), comp_id)
        })
        .collect();

    let largest = comp_sizes.values().copied().max().unwrap_or(0);

    ComponentResult {
        components,
        component_count: comp_map.len(),
        largest_component_size: largest,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}
