//! Path algorithms: breadth-first search and single-source shortest paths.
//!
//! Both produce one row per graph vertex: a distance column and an optional
//! predecessor column. Unreachable vertices get a distance of -1 (BFS) or
//! +inf (SSSP) and a predecessor of -1.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::error::{EngineError, EngineResult};
use crate::graph::CsrGraph;

/// Distance column of a paths result.
#[derive(Debug, Clone, PartialEq)]
pub enum Distances {
    /// Hop counts from BFS; -1 marks unreachable.
    Hops(Vec<i64>),
    /// Weighted distances from SSSP; +inf marks unreachable.
    Weighted(Vec<f64>),
}

/// Result of a paths computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PathsOutput {
    /// Original vertex ids, one per graph vertex, in internal order.
    pub vertices: Vec<i64>,
    /// Distance from the nearest source.
    pub distances: Distances,
    /// Predecessor on one shortest path, as original ids; -1 for sources and
    /// unreachable vertices. `None` when not requested.
    pub predecessors: Option<Vec<i64>>,
}

/// Multi-source breadth-first search over out-edges.
///
/// `sources` are original ids; an id not in the graph is an error.
/// `depth_limit` bounds expansion: vertices beyond the limit stay
/// unreachable.
pub fn bfs(
    graph: &CsrGraph,
    sources: &[i64],
    depth_limit: Option<usize>,
    compute_predecessors: bool,
) -> EngineResult<PathsOutput> {
    if sources.is_empty() {
        return Err(EngineError::InvalidValue(
            "BFS requires at least one source vertex".into(),
        ));
    }
    let n = graph.num_vertices();
    let mut dist = vec![-1i64; n];
    let mut pred = compute_predecessors.then(|| vec![-1i64; n]);
    let mut queue: VecDeque<usize> = VecDeque::new();

    for &source in sources {
        let s = graph.internal_id(source)?;
        if dist[s] < 0 {
            dist[s] = 0;
            queue.push_back(s);
        }
    }

    while let Some(v) = queue.pop_front() {
        let d = dist[v];
        if let Some(limit) = depth_limit
            && d as usize >= limit
        {
            continue;
        }
        for &t in graph.neighbors(v) {
            let t = t as usize;
            if dist[t] < 0 {
                dist[t] = d + 1;
                if let Some(pred) = pred.as_mut() {
                    pred[t] = graph.external_id(v);
                }
                queue.push_back(t);
            }
        }
    }

    Ok(PathsOutput {
        vertices: graph.external_ids(),
        distances: Distances::Hops(dist),
        predecessors: pred,
    })
}

/// Dijkstra single-source shortest paths over weighted out-edges.
///
/// An unweighted graph is treated as uniformly weighted 1. A negative edge
/// weight is an error. `cutoff` prunes paths longer than the given distance.
pub fn sssp(
    graph: &CsrGraph,
    source: i64,
    cutoff: Option<f64>,
    compute_predecessors: bool,
) -> EngineResult<PathsOutput> {
    let n = graph.num_vertices();
    let s = graph.internal_id(source)?;
    let mut dist = vec![f64::INFINITY; n];
    let mut pred = compute_predecessors.then(|| vec![-1i64; n]);

    // Lexicographic (distance, vertex) min-heap; f64 wrapped as ordered bits.
    let mut heap: BinaryHeap<Reverse<(OrderedF64, usize)>> = BinaryHeap::new();
    dist[s] = 0.0;
    heap.push(Reverse((OrderedF64(0.0), s)));

    while let Some(Reverse((OrderedF64(d), v))) = heap.pop() {
        if d > dist[v] {
            continue;
        }
        for slot in graph.edge_range(v) {
            let t = graph.target_at(slot) as usize;
            let w = graph.weight(slot);
            if w < 0.0 {
                return Err(EngineError::InvalidValue(format!(
                    "negative edge weight {w} on edge to vertex {}",
                    graph.external_id(t)
                )));
            }
            let next = d + w;
            if let Some(cutoff) = cutoff
                && next > cutoff
            {
                continue;
            }
            if next < dist[t] {
                dist[t] = next;
                if let Some(pred) = pred.as_mut() {
                    pred[t] = graph.external_id(v);
                }
                heap.push(Reverse((OrderedF64(next), t)));
            }
        }
    }

    Ok(PathsOutput {
        vertices: graph.external_ids(),
        distances: Distances::Weighted(dist),
        predecessors: pred,
    })
}

/// Total order over non-NaN distances. Weights are validated non-negative
/// before insertion, so NaN cannot reach the heap.
#[derive(PartialEq, PartialOrd)]
struct OrderedF64(f64);

impl Eq for OrderedF64 {}

#[allow(clippy::derive_ord_xor_partial_ord)]
impl Ord for OrderedF64 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.partial_cmp(other).expect("distances are never NaN")
    }
}
