//! Uniform neighbor sampling.

use hipgraph_backends::SamplingParams;
use hipgraph_common::utils::error::{Error, Result};

use crate::array::ArrayView;
use crate::graph::Graph;
use crate::resource::ResourceHandle;
use crate::{Backend, BackendBuffer, GraphBackend, translate};

/// Owning result of a neighbor-sampling run: one row per sampled edge.
pub struct SamplingResult {
    sources: BackendBuffer,
    destinations: BackendBuffer,
    weights: Option<BackendBuffer>,
    edge_ids: Option<BackendBuffer>,
    hops: BackendBuffer,
}

impl SamplingResult {
    /// Sampled edge sources.
    #[must_use]
    pub fn sources(&self) -> ArrayView<'_> {
        ArrayView::of(&self.sources)
    }

    /// Sampled edge destinations.
    #[must_use]
    pub fn destinations(&self) -> ArrayView<'_> {
        ArrayView::of(&self.destinations)
    }

    /// Sampled edge weights, when the graph is weighted.
    #[must_use]
    pub fn weights(&self) -> Option<ArrayView<'_>> {
        self.weights.as_ref().map(ArrayView::of)
    }

    /// Sampled edge ids, when the graph carries them.
    #[must_use]
    pub fn edge_ids(&self) -> Option<ArrayView<'_>> {
        self.edge_ids.as_ref().map(ArrayView::of)
    }

    /// Hop index (int32) each edge was drawn at, starting from 0.
    #[must_use]
    pub fn hops(&self) -> ArrayView<'_> {
        ArrayView::of(&self.hops)
    }
}

/// Uniformly samples out-neighbors of `start_vertices`, hop by hop.
///
/// `fan_out` is a host-side array: entry `h` bounds the edges kept per
/// frontier vertex at hop `h`, with negative meaning "all". It must be
/// non-empty.
pub fn uniform_neighbor_sample(
    handle: &ResourceHandle,
    graph: &Graph,
    start_vertices: &ArrayView<'_>,
    fan_out: &[i32],
    params: &SamplingParams,
) -> Result<SamplingResult> {
    if fan_out.is_empty() {
        return Err(Error::InvalidInput(
            "fan-out must name at least one hop".into(),
        ));
    }
    let out = Backend::uniform_neighbor_sample(
        handle.ctx(),
        graph.inner(),
        start_vertices.buffer(),
        fan_out,
        params,
    )
    .map_err(translate::backend_error)?;
    Ok(SamplingResult {
        sources: out.sources,
        destinations: out.destinations,
        weights: out.weights,
        edge_ids: out.edge_ids,
        hops: out.hops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeviceArray, GraphFlags, GraphProperties};

    #[test]
    fn samples_within_fan_out() {
        let h = ResourceHandle::new().unwrap();
        let src = DeviceArray::from_slice(&h, &[0i32, 0, 0]).unwrap();
        let dst = DeviceArray::from_slice(&h, &[1i32, 2, 3]).unwrap();
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
        let starts = DeviceArray::from_slice(&h, &[0i32]).unwrap();
        let params = SamplingParams {
            random_seed: 17,
            ..SamplingParams::default()
        };
        let result =
            uniform_neighbor_sample(&h, &graph, &starts.view(), &[2], &params).unwrap();
        assert_eq!(result.sources().len(), 2);
        assert_eq!(result.hops().to_vec::<i32>(&h).unwrap(), vec![0, 0]);
        assert!(result.weights().is_none());
        assert!(result.edge_ids().is_none());

        let err =
            uniform_neighbor_sample(&h, &graph, &starts.view(), &[], &params).unwrap_err();
        assert_eq!(err.status(), crate::Status::InvalidInput);
    }
}
