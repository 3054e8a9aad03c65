//! Clustering: per-vertex triangle counts.

use hipgraph_common::utils::error::Result;

use crate::array::ArrayView;
use crate::graph::Graph;
use crate::resource::ResourceHandle;
use crate::{Backend, BackendBuffer, GraphBackend, translate};

/// Owning result of a triangle count.
pub struct TriangleCountResult {
    vertices: BackendBuffer,
    counts: BackendBuffer,
}

impl TriangleCountResult {
    /// The vertex ids the counts are parallel to.
    #[must_use]
    pub fn vertices(&self) -> ArrayView<'_> {
        ArrayView::of(&self.vertices)
    }

    /// Triangles containing each vertex (int64).
    #[must_use]
    pub fn counts(&self) -> ArrayView<'_> {
        ArrayView::of(&self.counts)
    }
}

/// Counts triangles per vertex, treating edges as undirected. Restricts to
/// `start_vertices` when given.
pub fn triangle_count(
    handle: &ResourceHandle,
    graph: &Graph,
    start_vertices: Option<&ArrayView<'_>>,
    do_expensive_check: bool,
) -> Result<TriangleCountResult> {
    let out = Backend::triangle_count(
        handle.ctx(),
        graph.inner(),
        start_vertices.map(ArrayView::buffer),
        do_expensive_check,
    )
    .map_err(translate::backend_error)?;
    Ok(TriangleCountResult {
        vertices: out.vertices,
        counts: out.counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeviceArray, GraphFlags, GraphProperties};

    #[test]
    fn counts_one_triangle() {
        let h = ResourceHandle::new().unwrap();
        let src = DeviceArray::from_slice(&h, &[0i32, 1, 2]).unwrap();
        let dst = DeviceArray::from_slice(&h, &[1i32, 2, 0]).unwrap();
        let graph = Graph::from_edge_list(
            &h,
            GraphProperties::default(),
            GraphFlags::default(),
            &src.view(),
            &dst.view(),
            None,
            None,
            None,
        )
        .unwrap();
        let result = triangle_count(&h, &graph, None, false).unwrap();
        assert_eq!(
            result.counts().to_vec::<i64>(&h).unwrap(),
            vec![1, 1, 1]
        );
    }
}
