//! Community detection: Louvain modularity optimization.

use std::collections::BTreeMap;
use std::time::Instant;

use endecja_graph::AnalysisGraph;

pub struct LouvainConfig {
    pub max_iterations: usize,
    pub resolution: f64,
}

impl Default for LouvainConfig {
    fn default() -> Self {
        Self { max_iterations: 10, resolution: 1.0 }
    }
}

pub struct LouvainResult {
    /// `(node id, community id)` in node insertion order. Community ids
    /// are renumbered contiguously from 0.
    pub communities: Vec<(String, u64)>,
    pub modularity: f64,
    pub community_count: usize,
    pub iterations: usize,
    pub duration_ms: u64,
}

/// Louvain community detection over the undirected projection — edge
/// direction is irrelevant to clustering.
///
/// Greedy local moves: each node is detached from its community and
/// re-attached to the neighboring community with the best modularity
/// gain, repeated until a full sweep makes no move. Candidate
/// communities are scanned in ascending id order and a move requires a
/// strictly better gain, so the partition is deterministic for a given
/// node insertion order.
pub fn louvain(graph: &AnalysisGraph, config: &LouvainConfig) -> LouvainResult {
    let start = Instant::now();

    let n = graph.node_count();
    if n == 0 {
        return LouvainResult {
            communities: vec![],
            modularity: 0.0,
            community_count: 0,
            iterations: 0,
            duration_ms: 0,
        };
    }

    // Undirected degree per node; their sum is 2m.
    let k: Vec<f64> = (0..n).map(|i| graph.degree(i) as f64).collect();
    let two_m: f64 = k.iter().sum();

    if two_m == 0.0 {
        // No edges: every node is its own community.
        let communities: Vec<(String, u64)> = graph
            .ids()
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i as u64))
            .collect();
        return LouvainResult {
            communities,
            modularity: 0.0,
            community_count: n,
            iterations: 0,
            duration_ms: start.elapsed().as_millis() as u64,
        };
    }

    // Each node starts in its own community; sigma[c] tracks the total
    // degree of community c and is updated incrementally on every move.
    let mut community: Vec<usize> = (0..n).collect();
    let mut sigma: Vec<f64> = k.clone();
    let mut iterations = 0;

    for _ in 0..config.max_iterations {
        iterations += 1;
        let mut improved = false;

        for i in 0..n {
            let current = community[i];

            // Edge weight from i to each neighboring community,
            // in ascending community-id order.
            let mut comm_weights: BTreeMap<usize, f64> = BTreeMap::new();
            for &j in graph.neighbors(i) {
                if j == i { continue; }
                *comm_weights.entry(community[j]).or_default() += 1.0;
            }

            // Detach i, then compare re-attaching to the current
            // community against every neighboring candidate.
            sigma[current] -= k[i];
            let w_current = comm_weights.get(&current).copied().unwrap_or(0.0);
            let mut best_comm = current;
            let mut best_gain =
                w_current - config.resolution * k[i] * sigma[current] / two_m;

            for (&c, &w_ic) in &comm_weights {
                if c == current { continue; }
                let gain = w_ic - config.resolution * k[i] * sigma[c] / two_m;
                if gain > best_gain {
                    best_gain = gain;
                    best_comm = c;
                }
            }

            sigma[best_comm] += k[i];
            if best_comm != current {
                community[i] = best_comm;
                improved = true;
            }
        }

        if !improved { break; }
    }

    // Modularity Q = Σ_c [ L_c/m − (σ_c/2m)² ], L_c counted from the
    // adjacency (each intra-community edge visited twice below).
    let m = two_m / 2.0;
    let mut intra_ordered = 0.0_f64;
    for i in 0..n {
        for &j in graph.neighbors(i) {
            if j != i && community[i] == community[j] {
                intra_ordered += 1.0;
            }
        }
    }
    let null_term: f64 = sigma.iter().map(|s| (s / two_m) * (s / two_m)).sum();
    let modularity = intra_ordered / 2.0 / m - null_term;

    // Renumber communities to be contiguous, in node insertion order
    let mut comm_map: BTreeMap<usize, u64> = BTreeMap::new();
    let mut next_id = 0u64;
    let communities: Vec<(String, u64)> = graph
        .ids()
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let c = *comm_map.entry(community[i]).or_insert_with(|| {
                let c = next_id;
                next_id += 1;
                c
            });
            (id.clone(), c)
        })
        .collect();

    LouvainResult {
        communities,
        modularity,
        community_count: comm_map.len(),
        iterations,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}
