//! Induced subgraph extraction.
//!
//! Given one or more vertex lists, returns every stored edge whose endpoints
//! both fall inside the same list. The offsets array delimits the per-list
//! vertex ranges on input and the per-list edge ranges on output, so several
//! subgraphs extract in one call.

use hipgraph_common::utils::hash::FxHashSet;

use crate::error::{EngineError, EngineResult};
use crate::graph::CsrGraph;

/// Result of an induced-subgraph extraction: one row per surviving edge.
#[derive(Debug, Clone, PartialEq)]
pub struct InducedSubgraphOutput {
    /// Edge sources, original ids.
    pub sources: Vec<i64>,
    /// Edge destinations, original ids.
    pub destinations: Vec<i64>,
    /// Edge weights, when the graph is weighted.
    pub weights: Option<Vec<f64>>,
    /// Edge range of each requested subgraph:
    /// `subgraph_offsets[i]..subgraph_offsets[i+1]` indexes the rows of
    /// subgraph `i`.
    pub subgraph_offsets: Vec<usize>,
}

/// Extracts the subgraph(s) induced by `vertices`, sliced by `offsets`.
///
/// `offsets` must start at 0, end at `vertices.len()`, and be
/// non-decreasing. Vertex ids are original ids.
pub fn induced_subgraph(
    graph: &CsrGraph,
    offsets: &[usize],
    vertices: &[i64],
) -> EngineResult<InducedSubgraphOutput> {
    if offsets.first() != Some(&0) || offsets.last() != Some(&vertices.len()) {
        return Err(EngineError::InvalidValue(format!(
            "subgraph offsets must span 0..={}",
            vertices.len()
        )));
    }

    let mut out = InducedSubgraphOutput {
        sources: Vec::new(),
        destinations: Vec::new(),
        weights: graph.is_weighted().then(Vec::new),
        subgraph_offsets: vec![0],
    };

    for window in offsets.windows(2) {
        let (lo, hi) = (window[0], window[1]);
        if hi < lo {
            return Err(EngineError::InvalidValue(
                "subgraph offsets must be non-decreasing".into(),
            ));
        }
        let mut ordered: Vec<usize> = vertices[lo..hi]
            .iter()
            .map(|&id| graph.internal_id(id))
            .collect::<EngineResult<_>>()?;
        ordered.sort_unstable();
        let members: FxHashSet<usize> = ordered.iter().copied().collect();

        for &v in &ordered {
            for slot in graph.edge_range(v) {
                let t = graph.target_at(slot) as usize;
                if members.contains(&t) {
                    out.sources.push(graph.external_id(v));
                    out.destinations.push(graph.external_id(t));
                    if let Some(weights) = out.weights.as_mut() {
                        weights.push(graph.weight(slot));
                    }
                }
            }
        }
        out.subgraph_offsets.push(out.sources.len());
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypedBuffer;
    use crate::graph::EdgeListInput;
    use hipgraph_common::types::{GraphFlags, GraphProperties};

    fn square_with_diagonal() -> CsrGraph {
        // 0->1, 1->2, 2->3, 3->0, 0->2
        let src = TypedBuffer::from_vec(vec![0i32, 1, 2, 3, 0]);
        let dst = TypedBuffer::from_vec(vec![1i32, 2, 3, 0, 2]);
        let w = TypedBuffer::from_vec(vec![1.0f64, 2.0, 3.0, 4.0, 5.0]);
        CsrGraph::from_edge_list(
            GraphProperties::default(),
            &EdgeListInput {
                src: &src,
                dst: &dst,
                weights: Some(&w),
                edge_ids: None,
                edge_types: None,
            },
            GraphFlags::default(),
        )
        .unwrap()
    }

    #[test]
    fn keeps_only_internal_edges() {
        let g = square_with_diagonal();
        let out = induced_subgraph(&g, &[0, 3], &[0, 1, 2]).unwrap();
        // Surviving edges: 0->1, 1->2, 0->2.
        assert_eq!(out.sources.len(), 3);
        assert_eq!(out.subgraph_offsets, vec![0, 3]);
        for (&s, &d) in out.sources.iter().zip(out.destinations.iter()) {
            assert!([0, 1, 2].contains(&s));
            assert!([0, 1, 2].contains(&d));
        }
        assert_eq!(out.weights.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn multiple_subgraphs_share_one_call() {
        let g = square_with_diagonal();
        let out = induced_subgraph(&g, &[0, 2, 4], &[0, 1, 2, 3]).unwrap();
        // {0,1} keeps 0->1; {2,3} keeps 2->3.
        assert_eq!(out.subgraph_offsets, vec![0, 1, 2]);
        assert_eq!(out.sources, vec![0, 2]);
        assert_eq!(out.destinations, vec![1, 3]);
    }

    #[test]
    fn rejects_malformed_offsets() {
        let g = square_with_diagonal();
        assert!(induced_subgraph(&g, &[0, 1], &[0, 1]).is_err());
        assert!(induced_subgraph(&g, &[1, 2], &[0, 1]).is_err());
    }
}
