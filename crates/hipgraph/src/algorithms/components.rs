//! Labeling: weakly connected components.

use hipgraph_common::utils::error::Result;

use crate::array::ArrayView;
use crate::graph::Graph;
use crate::resource::ResourceHandle;
use crate::{Backend, BackendBuffer, GraphBackend, translate};

/// Owning result of a component labeling.
pub struct ComponentsResult {
    vertices: BackendBuffer,
    labels: BackendBuffer,
}

impl ComponentsResult {
    /// The vertex ids the labels are parallel to.
    #[must_use]
    pub fn vertices(&self) -> ArrayView<'_> {
        ArrayView::of(&self.vertices)
    }

    /// Component label per vertex. Labels are arbitrary non-consecutive
    /// integers; equal label means same component, nothing more.
    #[must_use]
    pub fn labels(&self) -> ArrayView<'_> {
        ArrayView::of(&self.labels)
    }
}

/// Labels weakly connected components (edge direction ignored).
pub fn weakly_connected_components(
    handle: &ResourceHandle,
    graph: &Graph,
    do_expensive_check: bool,
) -> Result<ComponentsResult> {
    let out =
        Backend::weakly_connected_components(handle.ctx(), graph.inner(), do_expensive_check)
            .map_err(translate::backend_error)?;
    Ok(ComponentsResult {
        vertices: out.vertices,
        labels: out.labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeviceArray, GraphFlags, GraphProperties};

    #[test]
    fn components_partition_the_graph() {
        let h = ResourceHandle::new().unwrap();
        // {0,1} and {2,3}
        let src = DeviceArray::from_slice(&h, &[0i32, 2]).unwrap();
        let dst = DeviceArray::from_slice(&h, &[1i32, 3]).unwrap();
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
        let result = weakly_connected_components(&h, &graph, false).unwrap();
        let labels = result.labels().to_vec::<i32>(&h).unwrap();
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
    }
}
