//! Connected-component labeling.
//!
//! Weak connectivity: edge direction is ignored. Each vertex is labeled with
//! the original id of its component's first-discovered vertex, so labels are
//! arbitrary non-consecutive integers, not ordered by component size.

use std::collections::VecDeque;

use crate::error::EngineResult;
use crate::graph::CsrGraph;

/// Result of a labeling computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelingOutput {
    /// Original vertex ids, one per graph vertex, in internal order.
    pub vertices: Vec<i64>,
    /// Component label per vertex.
    pub labels: Vec<i64>,
}

/// Labels weakly connected components.
pub fn weakly_connected_components(graph: &CsrGraph) -> EngineResult<LabelingOutput> {
    let n = graph.num_vertices();
    let (rev_offsets, rev_sources, _slots) = graph.reverse_adjacency();

    let mut labels = vec![-1i64; n];
    let mut queue = VecDeque::new();

    for start in 0..n {
        if labels[start] >= 0 {
            continue;
        }
        let label = graph.external_id(start);
        labels[start] = label;
        queue.push_back(start);

        while let Some(v) = queue.pop_front() {
            let forward = graph.neighbors(v).iter().map(|&t| t as usize);
            let backward = rev_sources[rev_offsets[v]..rev_offsets[v + 1]]
                .iter()
                .map(|&s| s as usize);
            for t in forward.chain(backward) {
                if labels[t] < 0 {
                    labels[t] = label;
                    queue.push_back(t);
                }
            }
        }
    }

    Ok(LabelingOutput {
        vertices: graph.external_ids(),
        labels,
    })
}
