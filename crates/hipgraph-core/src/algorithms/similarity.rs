//! Vertex-pair similarity: Jaccard, Sorensen, Overlap.
//!
//! All three coefficients compare the undirected neighbor sets of a vertex
//! pair; they differ only in the denominator. A pair with two empty
//! neighborhoods scores 0.

use hipgraph_common::utils::hash::FxHashSet;

use crate::error::{EngineError, EngineResult};
use crate::graph::CsrGraph;

/// The similarity coefficient to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityCoefficient {
    /// |A ∩ B| / |A ∪ B|
    Jaccard,
    /// 2 |A ∩ B| / (|A| + |B|)
    Sorensen,
    /// |A ∩ B| / min(|A|, |B|)
    Overlap,
}

/// Result of a similarity computation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityOutput {
    /// First vertex of each pair, original ids.
    pub first: Vec<i64>,
    /// Second vertex of each pair, original ids.
    pub second: Vec<i64>,
    /// Coefficient per pair.
    pub coefficients: Vec<f64>,
}

/// Computes a similarity coefficient for each vertex pair.
///
/// `first` and `second` are parallel arrays of original ids; an id not in
/// the graph is an error, as are mismatched lengths.
pub fn similarity(
    graph: &CsrGraph,
    first: &[i64],
    second: &[i64],
    coefficient: SimilarityCoefficient,
) -> EngineResult<SimilarityOutput> {
    if first.len() != second.len() {
        return Err(EngineError::InvalidValue(format!(
            "pair arrays differ in length: {} vs {}",
            first.len(),
            second.len()
        )));
    }

    let n = graph.num_vertices();
    let mut neighbors: Vec<FxHashSet<u32>> = vec![FxHashSet::default(); n];
    for v in 0..n {
        for &t in graph.neighbors(v) {
            if t as usize != v {
                neighbors[v].insert(t);
                neighbors[t as usize].insert(v as u32);
            }
        }
    }

    let mut coefficients = Vec::with_capacity(first.len());
    for (&a, &b) in first.iter().zip(second.iter()) {
        let a = graph.internal_id(a)?;
        let b = graph.internal_id(b)?;
        let (small, large) = if neighbors[a].len() <= neighbors[b].len() {
            (&neighbors[a], &neighbors[b])
        } else {
            (&neighbors[b], &neighbors[a])
        };
        let intersection = small.iter().filter(|v| large.contains(v)).count() as f64;
        let na = neighbors[a].len() as f64;
        let nb = neighbors[b].len() as f64;

        let value = match coefficient {
            SimilarityCoefficient::Jaccard => {
                let union = na + nb - intersection;
                if union == 0.0 { 0.0 } else { intersection / union }
            }
            SimilarityCoefficient::Sorensen => {
                let total = na + nb;
                if total == 0.0 {
                    0.0
                } else {
                    2.0 * intersection / total
                }
            }
            SimilarityCoefficient::Overlap => {
                let min = na.min(nb);
                if min == 0.0 { 0.0 } else { intersection / min }
            }
        };
        coefficients.push(value);
    }

    Ok(SimilarityOutput {
        first: first.to_vec(),
        second: second.to_vec(),
        coefficients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypedBuffer;
    use crate::graph::EdgeListInput;
    use hipgraph_common::types::{GraphFlags, GraphProperties};

    fn diamond() -> CsrGraph {
        // Undirected neighborhoods: 0:{1,2}  1:{0,2,3}  2:{0,1,3}  3:{1,2}
        let src = TypedBuffer::from_vec(vec![0i32, 0, 3, 3, 1]);
        let dst = TypedBuffer::from_vec(vec![1i32, 2, 1, 2, 2]);
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
    fn jaccard_of_identical_neighborhoods() {
        let g = diamond();
        let out = similarity(&g, &[0], &[3], SimilarityCoefficient::Jaccard).unwrap();
        assert_eq!(out.coefficients, vec![1.0]);
    }

    #[test]
    fn coefficients_disagree_on_partial_overlap() {
        let g = diamond();
        let j = similarity(&g, &[0], &[1], SimilarityCoefficient::Jaccard).unwrap();
        let s = similarity(&g, &[0], &[1], SimilarityCoefficient::Sorensen).unwrap();
        let o = similarity(&g, &[0], &[1], SimilarityCoefficient::Overlap).unwrap();
        // Intersection {2}: sizes 2 and 3 -> jaccard 1/4, sorensen 2/5, overlap 1/2.
        assert!((j.coefficients[0] - 0.25).abs() < 1e-12);
        assert!((s.coefficients[0] - 0.4).abs() < 1e-12);
        assert!((o.coefficients[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mismatched_pair_arrays_rejected() {
        let g = diamond();
        assert!(similarity(&g, &[0, 1], &[2], SimilarityCoefficient::Jaccard).is_err());
    }

    #[test]
    fn unknown_vertex_rejected() {
        let g = diamond();
        assert!(similarity(&g, &[0], &[77], SimilarityCoefficient::Jaccard).is_err());
    }
}
