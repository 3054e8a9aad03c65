//! Centrality: PageRank and betweenness.

use hipgraph_backends::{BetweennessParams, PagerankParams};
use hipgraph_common::utils::error::Result;

use crate::array::ArrayView;
use crate::graph::Graph;
use crate::resource::ResourceHandle;
use crate::{Backend, BackendBuffer, GraphBackend, translate};

/// Owning result of a centrality computation.
pub struct CentralityResult {
    vertices: BackendBuffer,
    values: BackendBuffer,
    iterations: usize,
    converged: bool,
}

impl CentralityResult {
    /// The vertex ids the values are parallel to.
    #[must_use]
    pub fn vertices(&self) -> ArrayView<'_> {
        ArrayView::of(&self.vertices)
    }

    /// Centrality value per vertex, in the graph's weight dtype.
    #[must_use]
    pub fn values(&self) -> ArrayView<'_> {
        ArrayView::of(&self.values)
    }

    /// Iterations run; 0 for non-iterative methods.
    #[must_use]
    pub fn num_iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the method converged within its iteration budget.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.converged
    }
}

/// PageRank over the graph's out-edges.
pub fn pagerank(
    handle: &ResourceHandle,
    graph: &Graph,
    params: &PagerankParams,
) -> Result<CentralityResult> {
    let out = Backend::pagerank(handle.ctx(), graph.inner(), params)
        .map_err(translate::backend_error)?;
    Ok(CentralityResult {
        vertices: out.vertices,
        values: out.values,
        iterations: out.iterations,
        converged: out.converged,
    })
}

/// Betweenness centrality (Brandes, unweighted shortest paths).
pub fn betweenness_centrality(
    handle: &ResourceHandle,
    graph: &Graph,
    params: &BetweennessParams,
) -> Result<CentralityResult> {
    let out = Backend::betweenness_centrality(handle.ctx(), graph.inner(), params)
        .map_err(translate::backend_error)?;
    Ok(CentralityResult {
        vertices: out.vertices,
        values: out.values,
        iterations: out.iterations,
        converged: out.converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeviceArray, GraphFlags, GraphProperties};

    fn fixture() -> (ResourceHandle, Graph) {
        let h = ResourceHandle::new().unwrap();
        let src = DeviceArray::from_slice(&h, &[0i64, 1, 0]).unwrap();
        let dst = DeviceArray::from_slice(&h, &[1i64, 2, 2]).unwrap();
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
        (h, graph)
    }

    #[test]
    fn pagerank_converges_and_reports_metadata() {
        let (h, graph) = fixture();
        let result = pagerank(&h, &graph, &PagerankParams::default()).unwrap();
        assert!(result.converged());
        assert!(result.num_iterations() > 0);
        let values = result.values().to_vec::<f64>(&h).unwrap();
        assert_eq!(values.len(), 3);
        assert!((values.iter().sum::<f64>() - 1.0).abs() < 0.01);
    }

    #[test]
    fn pagerank_invalid_damping_is_rejected() {
        let (h, graph) = fixture();
        let params = PagerankParams {
            alpha: 1.5,
            ..PagerankParams::default()
        };
        let err = pagerank(&h, &graph, &params).unwrap_err();
        assert_eq!(err.status(), crate::Status::InvalidInput);
    }

    #[test]
    fn betweenness_shapes_match() {
        let (h, graph) = fixture();
        let result =
            betweenness_centrality(&h, &graph, &BetweennessParams::default()).unwrap();
        assert_eq!(result.vertices().len(), result.values().len());
        assert!(result.converged());
        assert_eq!(result.num_iterations(), 0);
    }
}
