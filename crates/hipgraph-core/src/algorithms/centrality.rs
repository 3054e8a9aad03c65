//! Centrality algorithms: PageRank and betweenness.
//!
//! PageRank runs power iteration with dangling-vertex redistribution and
//! reports whether it converged within the iteration budget. Betweenness
//! uses Brandes' algorithm over unweighted shortest paths.

use crate::error::{EngineError, EngineResult};
use crate::graph::CsrGraph;

/// Result of a centrality computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CentralityOutput {
    /// Original vertex ids, one per graph vertex, in internal order.
    pub vertices: Vec<i64>,
    /// Centrality value per vertex.
    pub values: Vec<f64>,
    /// Iterations actually run (0 for non-iterative methods).
    pub iterations: usize,
    /// Whether the method converged within its budget (always `true` for
    /// non-iterative methods).
    pub converged: bool,
}

/// PageRank by power iteration.
///
/// `alpha` is the damping factor, `epsilon` the L-inf convergence tolerance.
/// Weighted graphs distribute rank proportionally to edge weight.
///
/// # Complexity
///
/// O(iterations x (V + E))
pub fn pagerank(
    graph: &CsrGraph,
    alpha: f64,
    epsilon: f64,
    max_iterations: usize,
) -> EngineResult<CentralityOutput> {
    if !(0.0..1.0).contains(&alpha) {
        return Err(EngineError::InvalidValue(format!(
            "damping factor {alpha} outside [0, 1)"
        )));
    }
    let n = graph.num_vertices();
    if n == 0 {
        return Ok(CentralityOutput {
            vertices: Vec::new(),
            values: Vec::new(),
            iterations: 0,
            converged: true,
        });
    }

    // Total outgoing weight per vertex; zero marks a dangling vertex.
    let mut out_weight = vec![0.0f64; n];
    for v in 0..n {
        for slot in graph.edge_range(v) {
            out_weight[v] += graph.weight(slot);
        }
    }
    let dangling: Vec<usize> = (0..n).filter(|&v| out_weight[v] == 0.0).collect();

    let mut scores = vec![1.0 / n as f64; n];
    let mut next = vec![0.0f64; n];
    let teleport = (1.0 - alpha) / n as f64;

    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_iterations {
        iterations += 1;

        let dangling_sum: f64 = dangling.iter().map(|&v| scores[v]).sum();
        let dangling_contrib = alpha * dangling_sum / n as f64;
        for slot in next.iter_mut() {
            *slot = teleport + dangling_contrib;
        }

        for v in 0..n {
            if out_weight[v] == 0.0 {
                continue;
            }
            let scale = alpha * scores[v] / out_weight[v];
            for slot in graph.edge_range(v) {
                next[graph.target_at(slot) as usize] += scale * graph.weight(slot);
            }
        }

        let max_diff = scores
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);
        std::mem::swap(&mut scores, &mut next);

        if max_diff < epsilon {
            converged = true;
            break;
        }
    }

    Ok(CentralityOutput {
        vertices: graph.external_ids(),
        values: scores,
        iterations,
        converged,
    })
}

/// Betweenness centrality via Brandes' algorithm (unweighted).
///
/// # Complexity
///
/// O(V x E)
pub fn betweenness_centrality(graph: &CsrGraph, normalized: bool) -> EngineResult<CentralityOutput> {
    let n = graph.num_vertices();
    let mut centrality = vec![0.0f64; n];

    if n > 2 {
        let mut sigma = vec![0.0f64; n];
        let mut dist = vec![-1i64; n];
        let mut delta = vec![0.0f64; n];
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

        for source in 0..n {
            sigma.fill(0.0);
            dist.fill(-1);
            delta.fill(0.0);
            for preds in predecessors.iter_mut() {
                preds.clear();
            }

            sigma[source] = 1.0;
            dist[source] = 0;

            let mut stack: Vec<usize> = Vec::new();
            let mut queue = std::collections::VecDeque::new();
            queue.push_back(source);

            while let Some(v) = queue.pop_front() {
                stack.push(v);
                let dist_v = dist[v];
                for &w in graph.neighbors(v) {
                    let w = w as usize;
                    if dist[w] < 0 {
                        dist[w] = dist_v + 1;
                        queue.push_back(w);
                    }
                    if dist[w] == dist_v + 1 {
                        sigma[w] += sigma[v];
                        predecessors[w].push(v);
                    }
                }
            }

            while let Some(w) = stack.pop() {
                if w == source {
                    continue;
                }
                let coeff = (1.0 + delta[w]) / sigma[w];
                for &v in &predecessors[w] {
                    delta[v] += sigma[v] * coeff;
                }
                centrality[w] += delta[w];
            }
        }

        if normalized {
            let norm = 1.0 / ((n - 1) * (n - 2)) as f64;
            for value in centrality.iter_mut() {
                *value *= norm;
            }
        }
    }

    Ok(CentralityOutput {
        vertices: graph.external_ids(),
        values: centrality,
        iterations: 0,
        converged: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypedBuffer;
    use crate::graph::EdgeListInput;
    use hipgraph_common::types::{GraphFlags, GraphProperties};

    fn triangle_with_tail() -> CsrGraph {
        // A -> B -> C, A -> C
        let src = TypedBuffer::from_vec(vec![0i32, 1, 0]);
        let dst = TypedBuffer::from_vec(vec![1i32, 2, 2]);
        CsrGraph::from_edge_list(
            GraphProperties::default(),
            &EdgeListInput {
                src: &src,
                dst: &dst,
                weights: None,
                edge_ids: None,
                edge_types: None,
            },
            GraphFlags::default(),
        )
        .unwrap()
    }

    fn line_graph(n: i32) -> CsrGraph {
        let src = TypedBuffer::from_vec((0..n - 1).collect::<Vec<i32>>());
        let dst = TypedBuffer::from_vec((1..n).collect::<Vec<i32>>());
        CsrGraph::from_edge_list(
            GraphProperties::default(),
            &EdgeListInput {
                src: &src,
                dst: &dst,
                weights: None,
                edge_ids: None,
                edge_types: None,
            },
            GraphFlags::default(),
        )
        .unwrap()
    }

    #[test]
    fn pagerank_sums_to_one() {
        let g = triangle_with_tail();
        let out = pagerank(&g, 0.85, 1e-6, 100).unwrap();
        assert!(out.converged);
        assert!(out.iterations > 0);
        let total: f64 = out.values.iter().sum();
        assert!((total - 1.0).abs() < 0.01);
        for &v in &out.values {
            assert!(v > 0.0);
        }
    }

    #[test]
    fn pagerank_dangling_vertex_keeps_rank() {
        // 0 -> 1, vertex 1 dangling
        let src = TypedBuffer::from_vec(vec![0i32]);
        let dst = TypedBuffer::from_vec(vec![1i32]);
        let g = CsrGraph::from_edge_list(
            GraphProperties::default(),
            &EdgeListInput {
                src: &src,
                dst: &dst,
                weights: None,
                edge_ids: None,
                edge_types: None,
            },
            GraphFlags::default(),
        )
        .unwrap();
        let out = pagerank(&g, 0.85, 1e-6, 100).unwrap();
        assert!(out.values[1] > 0.0);
    }

    #[test]
    fn pagerank_reports_non_convergence() {
        let g = triangle_with_tail();
        let out = pagerank(&g, 0.85, 0.0, 3).unwrap();
        assert!(!out.converged);
        assert_eq!(out.iterations, 3);
    }

    #[test]
    fn pagerank_rejects_bad_damping() {
        let g = triangle_with_tail();
        assert!(pagerank(&g, 1.5, 1e-6, 10).is_err());
        assert!(pagerank(&g, -0.1, 1e-6, 10).is_err());
    }

    #[test]
    fn betweenness_peaks_in_the_middle() {
        let g = line_graph(5);
        let out = betweenness_centrality(&g, false).unwrap();
        // Middle vertex lies on the most shortest paths.
        assert!(out.values[2] >= out.values[0]);
        assert!(out.values[2] >= out.values[4]);
        assert_eq!(out.values[0], 0.0);
    }

    #[test]
    fn betweenness_tiny_graph_is_all_zero() {
        let g = line_graph(2);
        let out = betweenness_centrality(&g, true).unwrap();
        assert_eq!(out.values, vec![0.0, 0.0]);
    }
}
