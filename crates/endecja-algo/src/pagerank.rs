//! PageRank via power iteration.

use std::time::Instant;

use endecja_graph::AnalysisGraph;

pub struct PageRankConfig {
    pub damping_factor: f64,
    pub max_iterations: usize,
    pub convergence_threshold: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 50,
            convergence_threshold: 1e-7,
        }
    }
}

pub struct PageRankResult {
    /// `(node id, score)` sorted by score, highest first.
    pub scores: Vec<(String, f64)>,
    pub iterations: usize,
    pub converged: bool,
    pub duration_ms: u64,
}

/// PageRank via power iteration over the directed graph as built —
/// edge direction is followed, no implicit symmetrization.
///
/// Scores sum to 1.0. Convergence is measured by the L1 norm of the
/// score-delta vector falling below `convergence_threshold`. Dangling
/// nodes (no outgoing edges) spread their rank uniformly, so isolated
/// nodes end up at the `(1 - d) / n` baseline rather than zero.
pub fn pagerank(graph: &AnalysisGraph, config: &PageRankConfig) -> PageRankResult {
    let start = Instant::now();

    let n = graph.node_count();
    if n == 0 {
        return PageRankResult {
            scores: vec![],
            iterations: 0,
            converged: true,
            duration_ms: 0,
        };
    }

    let d = config.damping_factor;
    let base = (1.0 - d) / n as f64;

    let mut scores = vec![1.0 / n as f64; n];
    let mut new_scores = vec![0.0_f64; n];
    let mut converged = false;
    let mut iterations = 0;

    for _ in 0..config.max_iterations {
        iterations += 1;

        // Reset
        for s in new_scores.iter_mut() {
            *s = base;
        }

        // Distribute rank
        for u in 0..n {
            let out_deg = graph.out_degree(u);
            if out_deg == 0 {
                // Dangling node: distribute evenly
                let share = d * scores[u] / n as f64;
                for s in new_scores.iter_mut() {
                    *s += share;
                }
            } else {
                let share = d * scores[u] / out_deg as f64;
                for &v in graph.neighbors_out(u) {
                    new_scores[v] += share;
                }
            }
        }

        // Check convergence (L1 norm)
        let diff: f64 = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();

        std::mem::swap(&mut scores, &mut new_scores);

        if diff < config.convergence_threshold {
            converged = true;
            break;
        }
    }

    let mut result: Vec<(String, f64)> = graph
        .ids()
        .iter()
        .cloned()
        .zip(scores.into_iter())
        .collect();
    result.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    PageRankResult {
        scores: result,
        iterations,
        converged,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}
