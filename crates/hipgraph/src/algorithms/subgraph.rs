//! Induced subgraph extraction.

use hipgraph_common::utils::error::Result;

use crate::array::ArrayView;
use crate::graph::Graph;
use crate::resource::ResourceHandle;
use crate::{Backend, BackendBuffer, GraphBackend, translate};

/// Owning result of an induced-subgraph extraction: one row per surviving
/// edge.
pub struct InducedSubgraphResult {
    sources: BackendBuffer,
    destinations: BackendBuffer,
    weights: Option<BackendBuffer>,
    subgraph_offsets: BackendBuffer,
}

impl InducedSubgraphResult {
    /// Edge sources.
    #[must_use]
    pub fn sources(&self) -> ArrayView<'_> {
        ArrayView::of(&self.sources)
    }

    /// Edge destinations.
    #[must_use]
    pub fn destinations(&self) -> ArrayView<'_> {
        ArrayView::of(&self.destinations)
    }

    /// Edge weights, when the graph is weighted.
    #[must_use]
    pub fn weights(&self) -> Option<ArrayView<'_>> {
        self.weights.as_ref().map(ArrayView::of)
    }

    /// Row range of each requested subgraph (size_t):
    /// `offsets[i]..offsets[i+1]` are the rows of subgraph `i`.
    #[must_use]
    pub fn subgraph_offsets(&self) -> ArrayView<'_> {
        ArrayView::of(&self.subgraph_offsets)
    }
}

/// Extracts the subgraph(s) induced by `vertices`.
///
/// `subgraph_offsets` is a host-side array slicing `vertices` into one
/// vertex list per requested subgraph; it must start at 0 and end at the
/// vertex count.
pub fn induced_subgraph(
    handle: &ResourceHandle,
    graph: &Graph,
    subgraph_offsets: &[usize],
    vertices: &ArrayView<'_>,
    do_expensive_check: bool,
) -> Result<InducedSubgraphResult> {
    let out = Backend::induced_subgraph(
        handle.ctx(),
        graph.inner(),
        subgraph_offsets,
        vertices.buffer(),
        do_expensive_check,
    )
    .map_err(translate::backend_error)?;
    Ok(InducedSubgraphResult {
        sources: out.sources,
        destinations: out.destinations,
        weights: out.weights,
        subgraph_offsets: out.subgraph_offsets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeviceArray, GraphFlags, GraphProperties};

    #[test]
    fn extracts_internal_edges_only() {
        let h = ResourceHandle::new().unwrap();
        // Triangle 0-1-2 plus pendant edge 2 -> 3.
        let src = DeviceArray::from_slice(&h, &[0i32, 1, 2, 2]).unwrap();
        let dst = DeviceArray::from_slice(&h, &[1i32, 2, 0, 3]).unwrap();
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
        let vertices = DeviceArray::from_slice(&h, &[0i32, 1, 2]).unwrap();
        let result =
            induced_subgraph(&h, &graph, &[0, 3], &vertices.view(), false).unwrap();
        assert_eq!(result.sources().len(), 3);
        assert_eq!(
            result.subgraph_offsets().to_vec::<usize>(&h).unwrap(),
            vec![0, 3]
        );
        let dsts = result.destinations().to_vec::<i32>(&h).unwrap();
        assert!(!dsts.contains(&3));
    }
}
