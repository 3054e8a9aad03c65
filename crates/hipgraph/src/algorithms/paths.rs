//! Paths: breadth-first search and single-source shortest paths.

use hipgraph_backends::{BfsParams, SsspParams};
use hipgraph_common::utils::error::Result;

use crate::array::ArrayView;
use crate::graph::Graph;
use crate::resource::ResourceHandle;
use crate::{Backend, BackendBuffer, GraphBackend, translate};

/// Owning result of a paths computation.
pub struct PathsResult {
    vertices: BackendBuffer,
    distances: BackendBuffer,
    predecessors: Option<BackendBuffer>,
}

impl PathsResult {
    /// The vertex ids the columns are parallel to (every graph vertex).
    #[must_use]
    pub fn vertices(&self) -> ArrayView<'_> {
        ArrayView::of(&self.vertices)
    }

    /// Distances: hop counts (vertex dtype) for BFS with -1 unreachable,
    /// weighted distances (weight dtype) for SSSP with +inf unreachable.
    #[must_use]
    pub fn distances(&self) -> ArrayView<'_> {
        ArrayView::of(&self.distances)
    }

    /// Predecessor column, when requested; -1 marks sources and unreachable
    /// vertices.
    #[must_use]
    pub fn predecessors(&self) -> Option<ArrayView<'_>> {
        self.predecessors.as_ref().map(ArrayView::of)
    }
}

/// Multi-source BFS. `sources` must use the graph's vertex dtype.
pub fn bfs(
    handle: &ResourceHandle,
    graph: &Graph,
    sources: &ArrayView<'_>,
    params: &BfsParams,
) -> Result<PathsResult> {
    let out = Backend::bfs(handle.ctx(), graph.inner(), sources.buffer(), params)
        .map_err(translate::backend_error)?;
    Ok(PathsResult {
        vertices: out.vertices,
        distances: out.distances,
        predecessors: out.predecessors,
    })
}

/// Single-source shortest paths from `source` (an original vertex id).
pub fn sssp(
    handle: &ResourceHandle,
    graph: &Graph,
    source: i64,
    params: &SsspParams,
) -> Result<PathsResult> {
    let out = Backend::sssp(handle.ctx(), graph.inner(), source, params)
        .map_err(translate::backend_error)?;
    Ok(PathsResult {
        vertices: out.vertices,
        distances: out.distances,
        predecessors: out.predecessors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeviceArray, GraphFlags, GraphProperties};

    fn fixture() -> (ResourceHandle, Graph) {
        let h = ResourceHandle::new().unwrap();
        // 0 -> 1 -> 2 with weights 1.0, 2.0
        let src = DeviceArray::from_slice(&h, &[0i32, 1]).unwrap();
        let dst = DeviceArray::from_slice(&h, &[1i32, 2]).unwrap();
        let w = DeviceArray::from_slice(&h, &[1.0f32, 2.0]).unwrap();
        let graph = Graph::from_edge_list(
            &h,
            GraphProperties::default(),
            GraphFlags::default(),
            &src.view(),
            &dst.view(),
            Some(&w.view()),
            None,
            None,
        )
        .unwrap();
        (h, graph)
    }

    #[test]
    fn bfs_distances_and_predecessors() {
        let (h, graph) = fixture();
        let sources = DeviceArray::from_slice(&h, &[0i32]).unwrap();
        let params = BfsParams {
            compute_predecessors: true,
            ..BfsParams::default()
        };
        let result = bfs(&h, &graph, &sources.view(), &params).unwrap();
        assert_eq!(
            result.distances().to_vec::<i32>(&h).unwrap(),
            vec![0, 1, 2]
        );
        assert_eq!(
            result.predecessors().unwrap().to_vec::<i32>(&h).unwrap(),
            vec![-1, 0, 1]
        );
    }

    #[test]
    fn bfs_without_predecessors_returns_none() {
        let (h, graph) = fixture();
        let sources = DeviceArray::from_slice(&h, &[0i32]).unwrap();
        let result = bfs(&h, &graph, &sources.view(), &BfsParams::default()).unwrap();
        assert!(result.predecessors().is_none());
    }

    #[test]
    fn sssp_uses_weight_dtype() {
        let (h, graph) = fixture();
        let result = sssp(&h, &graph, 0, &SsspParams::default()).unwrap();
        let distances = result.distances().to_vec::<f32>(&h).unwrap();
        assert_eq!(distances, vec![0.0, 1.0, 3.0]);
    }

    #[test]
    fn unknown_source_is_invalid_input() {
        let (h, graph) = fixture();
        let err = sssp(&h, &graph, 9, &SsspParams::default()).unwrap_err();
        assert_eq!(err.status(), crate::Status::InvalidInput);
    }
}
