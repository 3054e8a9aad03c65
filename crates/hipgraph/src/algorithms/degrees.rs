//! Vertex degrees.

use hipgraph_backends::{DegreeColumns, DegreeKind};
use hipgraph_common::utils::error::Result;

use crate::array::ArrayView;
use crate::graph::Graph;
use crate::resource::ResourceHandle;
use crate::{Backend, BackendBuffer, GraphBackend, translate};

/// Owning result of a degree computation.
///
/// On a symmetric graph the in- and out-degree accessors return views of
/// the same underlying column.
pub struct DegreesResult {
    vertices: BackendBuffer,
    columns: DegreeColumns<Backend>,
}

impl DegreesResult {
    /// The vertex ids the degree columns are parallel to.
    #[must_use]
    pub fn vertices(&self) -> ArrayView<'_> {
        ArrayView::of(&self.vertices)
    }

    /// Number of result rows.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        Backend::buffer_len(&self.vertices)
    }

    /// In-degrees, when the call produced them.
    #[must_use]
    pub fn in_degrees(&self) -> Option<ArrayView<'_>> {
        match &self.columns {
            DegreeColumns::InOnly(col) | DegreeColumns::Shared(col) => Some(ArrayView::of(col)),
            DegreeColumns::Separate { in_degrees, .. } => Some(ArrayView::of(in_degrees)),
            DegreeColumns::OutOnly(_) => None,
        }
    }

    /// Out-degrees, when the call produced them.
    #[must_use]
    pub fn out_degrees(&self) -> Option<ArrayView<'_>> {
        match &self.columns {
            DegreeColumns::OutOnly(col) | DegreeColumns::Shared(col) => Some(ArrayView::of(col)),
            DegreeColumns::Separate { out_degrees, .. } => Some(ArrayView::of(out_degrees)),
            DegreeColumns::InOnly(_) => None,
        }
    }
}

fn run(
    handle: &ResourceHandle,
    graph: &Graph,
    start_vertices: Option<&ArrayView<'_>>,
    kind: DegreeKind,
    do_expensive_check: bool,
) -> Result<DegreesResult> {
    let out = Backend::degrees(
        handle.ctx(),
        graph.inner(),
        start_vertices.map(ArrayView::buffer),
        kind,
        do_expensive_check,
    )
    .map_err(translate::backend_error)?;
    Ok(DegreesResult {
        vertices: out.vertices,
        columns: out.columns,
    })
}

/// Computes both in- and out-degrees, for every vertex or for
/// `start_vertices` only.
pub fn degrees(
    handle: &ResourceHandle,
    graph: &Graph,
    start_vertices: Option<&ArrayView<'_>>,
    do_expensive_check: bool,
) -> Result<DegreesResult> {
    run(
        handle,
        graph,
        start_vertices,
        DegreeKind::Combined,
        do_expensive_check,
    )
}

/// Computes in-degrees only.
pub fn in_degrees(
    handle: &ResourceHandle,
    graph: &Graph,
    start_vertices: Option<&ArrayView<'_>>,
    do_expensive_check: bool,
) -> Result<DegreesResult> {
    run(
        handle,
        graph,
        start_vertices,
        DegreeKind::In,
        do_expensive_check,
    )
}

/// Computes out-degrees only.
pub fn out_degrees(
    handle: &ResourceHandle,
    graph: &Graph,
    start_vertices: Option<&ArrayView<'_>>,
    do_expensive_check: bool,
) -> Result<DegreesResult> {
    run(
        handle,
        graph,
        start_vertices,
        DegreeKind::Out,
        do_expensive_check,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeviceArray, GraphFlags, GraphProperties};

    fn fixture(symmetric: bool) -> (ResourceHandle, Graph) {
        let h = ResourceHandle::new().unwrap();
        let src = DeviceArray::from_slice(&h, &[0i32, 1, 2]).unwrap();
        let dst = DeviceArray::from_slice(&h, &[1i32, 2, 0]).unwrap();
        let graph = Graph::from_edge_list(
            &h,
            GraphProperties {
                is_symmetric: symmetric,
                is_multigraph: false,
            },
            GraphFlags::default(),
            &src.view(),
            &dst.view(),
            None,
            None,
            None,
        )
        .unwrap();
        (h, graph)
    }

    #[test]
    fn combined_produces_both_columns() {
        let (h, graph) = fixture(false);
        let result = degrees(&h, &graph, None, false).unwrap();
        assert_eq!(result.num_vertices(), 3);
        assert_eq!(
            result.in_degrees().unwrap().to_vec::<i64>(&h).unwrap(),
            vec![1, 1, 1]
        );
        assert_eq!(
            result.out_degrees().unwrap().to_vec::<i64>(&h).unwrap(),
            vec![1, 1, 1]
        );
    }

    #[test]
    fn single_direction_omits_the_other() {
        let (h, graph) = fixture(false);
        let result = in_degrees(&h, &graph, None, false).unwrap();
        assert!(result.in_degrees().is_some());
        assert!(result.out_degrees().is_none());

        let result = out_degrees(&h, &graph, None, false).unwrap();
        assert!(result.in_degrees().is_none());
        assert!(result.out_degrees().is_some());
    }

    #[test]
    fn symmetric_graph_aliases_one_column() {
        let (h, graph) = fixture(true);
        let result = degrees(&h, &graph, None, false).unwrap();
        let in_view = result.in_degrees().unwrap();
        let out_view = result.out_degrees().unwrap();
        // Both accessors view the same backend storage.
        assert_eq!(in_view.as_raw_ptr(), out_view.as_raw_ptr());
    }

    #[test]
    fn expensive_check_rejects_duplicate_subset() {
        let (h, graph) = fixture(false);
        let subset = DeviceArray::from_slice(&h, &[1i32, 1]).unwrap();
        assert!(degrees(&h, &graph, Some(&subset.view()), false).is_ok());
        let err = degrees(&h, &graph, Some(&subset.view()), true).unwrap_err();
        assert_eq!(err.status(), crate::Status::InvalidInput);
    }
}
