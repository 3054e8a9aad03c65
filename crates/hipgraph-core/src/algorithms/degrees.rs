//! Vertex degree computation.
//!
//! Out-degrees come straight from the CSR offsets; in-degrees from one scan
//! of the stored targets. On a graph declared symmetric the two are equal by
//! definition, so the combined form computes a single column and marks it
//! shared - the layer above exposes it through both accessors without
//! copying.

use crate::error::EngineResult;
use crate::graph::CsrGraph;

/// Which degree columns to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeKind {
    /// In-degrees only.
    In,
    /// Out-degrees only.
    Out,
    /// Both in- and out-degrees.
    Combined,
}

/// Degree columns, shaped by [`DegreeKind`] and graph symmetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegreeColumns {
    /// In-degrees only.
    InOnly(Vec<i64>),
    /// Out-degrees only.
    OutOnly(Vec<i64>),
    /// Distinct in- and out-degree columns.
    Separate {
        /// In-degrees, parallel to the vertices column.
        in_degrees: Vec<i64>,
        /// Out-degrees, parallel to the vertices column.
        out_degrees: Vec<i64>,
    },
    /// One column serving as both (symmetric graph).
    Shared(Vec<i64>),
}

/// Result of a degree computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreesOutput {
    /// Original vertex ids the columns are parallel to.
    pub vertices: Vec<i64>,
    /// The degree column(s).
    pub columns: DegreeColumns,
}

/// Computes vertex degrees, optionally restricted to a subset of vertices.
///
/// Subset ids are original ids; an id not in the graph is an error. Without
/// a subset, the result covers every vertex in internal order.
pub fn degrees(
    graph: &CsrGraph,
    subset: Option<&[i64]>,
    kind: DegreeKind,
) -> EngineResult<DegreesOutput> {
    let internal: Vec<usize> = match subset {
        Some(ids) => ids
            .iter()
            .map(|&id| graph.internal_id(id))
            .collect::<EngineResult<_>>()?,
        None => (0..graph.num_vertices()).collect(),
    };
    let vertices: Vec<i64> = internal.iter().map(|&v| graph.external_id(v)).collect();

    let gather_out =
        |picks: &[usize]| -> Vec<i64> { picks.iter().map(|&v| graph.out_degree(v) as i64).collect() };
    let gather_in = |picks: &[usize]| -> Vec<i64> {
        let all = graph.in_degrees();
        picks.iter().map(|&v| all[v] as i64).collect()
    };

    let columns = match kind {
        DegreeKind::In => DegreeColumns::InOnly(gather_in(&internal)),
        DegreeKind::Out => DegreeColumns::OutOnly(gather_out(&internal)),
        DegreeKind::Combined if graph.properties().is_symmetric => {
            DegreeColumns::Shared(gather_out(&internal))
        }
        DegreeKind::Combined => DegreeColumns::Separate {
            in_degrees: gather_in(&internal),
            out_degrees: gather_out(&internal),
        },
    };

    Ok(DegreesOutput { vertices, columns })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypedBuffer;
    use crate::graph::EdgeListInput;
    use hipgraph_common::types::{GraphFlags, GraphProperties};

    fn spec_graph(symmetric: bool) -> CsrGraph {
        // The canonical 6-vertex, 8-edge fixture.
        let src = TypedBuffer::from_vec(vec![0i32, 1, 1, 2, 2, 2, 3, 4]);
        let dst = TypedBuffer::from_vec(vec![1i32, 3, 4, 0, 1, 3, 5, 5]);
        CsrGraph::from_edge_list(
            GraphProperties {
                is_symmetric: symmetric,
                is_multigraph: false,
            },
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
    fn combined_degrees_full_graph() {
        let g = spec_graph(false);
        let out = degrees(&g, None, DegreeKind::Combined).unwrap();
        assert_eq!(out.vertices, vec![0, 1, 2, 3, 4, 5]);
        match out.columns {
            DegreeColumns::Separate {
                in_degrees,
                out_degrees,
            } => {
                assert_eq!(in_degrees, vec![1, 2, 0, 2, 1, 2]);
                assert_eq!(out_degrees, vec![1, 2, 3, 1, 1, 0]);
            }
            other => panic!("expected separate columns, got {other:?}"),
        }
    }

    #[test]
    fn subset_degrees_match_full_graph() {
        let g = spec_graph(false);
        let out = degrees(&g, Some(&[2, 3, 5]), DegreeKind::Combined).unwrap();
        assert_eq!(out.vertices, vec![2, 3, 5]);
        match out.columns {
            DegreeColumns::Separate {
                in_degrees,
                out_degrees,
            } => {
                assert_eq!(in_degrees, vec![0, 2, 2]);
                assert_eq!(out_degrees, vec![3, 1, 0]);
            }
            other => panic!("expected separate columns, got {other:?}"),
        }
    }

    #[test]
    fn unknown_subset_vertex_is_an_error() {
        let g = spec_graph(false);
        assert!(degrees(&g, Some(&[99]), DegreeKind::Combined).is_err());
    }

    #[test]
    fn symmetric_graph_shares_one_column() {
        let g = spec_graph(true);
        let out = degrees(&g, None, DegreeKind::Combined).unwrap();
        assert!(matches!(out.columns, DegreeColumns::Shared(_)));
    }

    #[test]
    fn single_kind_requests() {
        let g = spec_graph(false);
        let out = degrees(&g, None, DegreeKind::In).unwrap();
        assert_eq!(out.columns, DegreeColumns::InOnly(vec![1, 2, 0, 2, 1, 2]));
        let out = degrees(&g, None, DegreeKind::Out).unwrap();
        assert_eq!(out.columns, DegreeColumns::OutOnly(vec![1, 2, 3, 1, 1, 0]));
    }
}
