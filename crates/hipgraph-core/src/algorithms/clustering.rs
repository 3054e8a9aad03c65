//! Triangle counting.
//!
//! Counts, per vertex, the triangles it participates in, treating the graph
//! as undirected. With the `parallel` feature the per-vertex counting fans
//! out over rayon; results are identical either way.

use hipgraph_common::utils::hash::FxHashSet;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::EngineResult;
use crate::graph::CsrGraph;

/// Result of a clustering computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusteringOutput {
    /// Original vertex ids the counts are parallel to.
    pub vertices: Vec<i64>,
    /// Triangles containing each vertex.
    pub counts: Vec<i64>,
}

/// Builds undirected neighbor sets by combining both edge directions.
fn build_undirected_neighbors(graph: &CsrGraph) -> Vec<FxHashSet<u32>> {
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
    neighbors
}

/// Triangles through one vertex: pairs of its neighbors that are themselves
/// adjacent.
fn count_vertex_triangles(mine: &FxHashSet<u32>, all: &[FxHashSet<u32>]) -> i64 {
    let list: Vec<u32> = mine.iter().copied().collect();
    let mut triangles = 0i64;
    for i in 0..list.len() {
        for j in (i + 1)..list.len() {
            if all[list[i] as usize].contains(&list[j]) {
                triangles += 1;
            }
        }
    }
    triangles
}

/// Counts triangles per vertex, optionally restricted to a subset.
///
/// Subset ids are original ids; an id not in the graph is an error.
pub fn triangle_count(graph: &CsrGraph, subset: Option<&[i64]>) -> EngineResult<ClusteringOutput> {
    let internal: Vec<usize> = match subset {
        Some(ids) => ids
            .iter()
            .map(|&id| graph.internal_id(id))
            .collect::<EngineResult<_>>()?,
        None => (0..graph.num_vertices()).collect(),
    };
    let neighbors = build_undirected_neighbors(graph);

    #[cfg(feature = "parallel")]
    let counts: Vec<i64> = internal
        .par_iter()
        .map(|&v| count_vertex_triangles(&neighbors[v], &neighbors))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let counts: Vec<i64> = internal
        .iter()
        .map(|&v| count_vertex_triangles(&neighbors[v], &neighbors))
        .collect();

    let vertices: Vec<i64> = internal.iter().map(|&v| graph.external_id(v)).collect();
    Ok(ClusteringOutput { vertices, counts })
}

/// Total unique triangles in the graph: each triangle touches three
/// vertices, so the per-vertex counts sum to three times the total.
pub fn total_triangles(graph: &CsrGraph) -> EngineResult<i64> {
    let out = triangle_count(graph, None)?;
    Ok(out.counts.iter().sum::<i64>() / 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypedBuffer;
    use crate::graph::EdgeListInput;
    use hipgraph_common::types::{GraphFlags, GraphProperties};

    fn graph_from(src: &[i32], dst: &[i32]) -> CsrGraph {
        let src = TypedBuffer::from_vec(src.to_vec());
        let dst = TypedBuffer::from_vec(dst.to_vec());
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
    fn one_triangle_counted_at_each_corner() {
        let g = graph_from(&[0, 1, 2, 3], &[1, 2, 0, 0]);
        let out = triangle_count(&g, None).unwrap();
        assert_eq!(out.counts, vec![1, 1, 1, 0]);
        assert_eq!(total_triangles(&g).unwrap(), 1);
    }

    #[test]
    fn triangle_free_graph() {
        let g = graph_from(&[0, 1, 2], &[1, 2, 3]);
        let out = triangle_count(&g, None).unwrap();
        assert!(out.counts.iter().all(|&c| c == 0));
    }

    #[test]
    fn subset_restricts_rows() {
        let g = graph_from(&[0, 1, 2], &[1, 2, 0]);
        let out = triangle_count(&g, Some(&[1])).unwrap();
        assert_eq!(out.vertices, vec![1]);
        assert_eq!(out.counts, vec![1]);
        assert!(triangle_count(&g, Some(&[9])).is_err());
    }
}
