//! K-core decomposition via iterative peeling.

use std::collections::VecDeque;
use std::time::Instant;

use endecja_graph::AnalysisGraph;

pub struct KCoreConfig {
    /// Hard ceiling on the outer peel loop. A safety valve against
    /// pathological state, not a domain property — the loop terminates
    /// naturally once the graph empties.
    pub safety_ceiling: u32,
}

impl Default for KCoreConfig {
    fn default() -> Self {
        Self { safety_ceiling: 100 }
    }
}

pub struct KCoreResult {
    /// `(node id, shell index)` in node insertion order.
    pub shells: Vec<(String, u32)>,
    /// Largest shell index assigned (the graph's degeneracy).
    pub max_shell: u32,
    pub duration_ms: u64,
}

/// K-core shell index for every node, over the undirected projection.
///
/// For k = 0, 1, 2, …: repeatedly remove every remaining node whose
/// current degree is below k, assigning it shell `k − 1` (clamped to 0)
/// at the moment of removal; removals cascade within a pass via a
/// worklist. A node's shell is fixed when it is peeled and never
/// revisited. If the safety ceiling trips first, nodes still standing
/// keep shell 0 — a partial but valid result.
pub fn kcore(graph: &AnalysisGraph, config: &KCoreConfig) -> KCoreResult {
    let start = Instant::now();

    let n = graph.node_count();
    let mut shell = vec![0u32; n];
    let mut degree: Vec<usize> = (0..n).map(|i| graph.degree(i)).collect();
    let mut removed = vec![false; n];
    let mut remaining = n;

    let mut k = 0u32;
    while remaining > 0 && k < config.safety_ceiling {
        // Seed the worklist with every survivor below the threshold,
        // then cascade: peeling a node may drag its neighbors under.
        let mut queue: VecDeque<usize> = (0..n)
            .filter(|&i| !removed[i] && degree[i] < k as usize)
            .collect();

        while let Some(i) = queue.pop_front() {
            if removed[i] { continue; }
            removed[i] = true;
            remaining -= 1;
            shell[i] = k.saturating_sub(1);

            for &j in graph.neighbors(i) {
                if !removed[j] {
                    degree[j] -= 1;
                    if degree[j] < k as usize {
                        queue.push_back(j);
                    }
                }
            }
        }
        k += 1;
    }

    let max_shell = shell.iter().copied().max().unwrap_or(0);
    let shells: Vec<(String, u32)> = graph
        .ids()
        .iter()
        .cloned()
        .zip(shell.into_iter())
        .collect();

    KCoreResult {
        shells,
        max_shell,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}
