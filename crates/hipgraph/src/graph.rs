//! Graph construction and destruction.
//!
//! A [`Graph`] owns the backend's internal (renumbered, possibly transposed)
//! representation, built from caller-supplied edge-list or CSR arrays.
//! Destruction is `Drop`.
//!
//! The multi-process ("MG") constructors are declared for ABI completeness
//! but inactive: they return [`Error::NotImplemented`] until a distributed
//! backend exists. Single-process construction is the authoritative
//! protocol.

use hipgraph_backends::{CsrRefs, EdgeListRefs};
use hipgraph_common::types::{DataTypeId, GraphFlags, GraphProperties};
use hipgraph_common::utils::error::{Error, Result};
use tracing::debug;

use crate::array::ArrayView;
use crate::resource::ResourceHandle;
use crate::{Backend, BackendGraph, GraphBackend, translate};

/// An owned graph object.
///
/// Algorithm entry points borrow it immutably; some backends may
/// nonetheless reorganize internal storage (e.g. materialize a transpose)
/// during a call, which is invisible through this API.
pub struct Graph {
    inner: BackendGraph,
}

impl Graph {
    /// Builds a graph from parallel edge arrays.
    ///
    /// `src` and `dst` must share one integer dtype and one length. The
    /// optional `weights`, `edge_ids`, and `edge_types` arrays run parallel
    /// to them. Set `flags.renumber` whenever vertex ids are not already a
    /// dense `0..num_vertices` range.
    #[allow(clippy::too_many_arguments)]
    pub fn from_edge_list(
        handle: &ResourceHandle,
        properties: GraphProperties,
        flags: GraphFlags,
        src: &ArrayView<'_>,
        dst: &ArrayView<'_>,
        weights: Option<&ArrayView<'_>>,
        edge_ids: Option<&ArrayView<'_>>,
        edge_types: Option<&ArrayView<'_>>,
    ) -> Result<Self> {
        let inner = Backend::graph_from_edge_list(
            handle.ctx(),
            properties,
            EdgeListRefs {
                src: src.buffer(),
                dst: dst.buffer(),
                weights: weights.map(ArrayView::buffer),
                edge_ids: edge_ids.map(ArrayView::buffer),
                edge_types: edge_types.map(ArrayView::buffer),
            },
            flags,
        )
        .map_err(translate::backend_error)?;
        let graph = Self { inner };
        debug!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            "graph constructed from edge list"
        );
        Ok(graph)
    }

    /// Builds a graph from CSR arrays: `offsets` of length
    /// `num_vertices + 1` and `indices` of length `num_edges`, plus the same
    /// optional payload arrays as [`Graph::from_edge_list`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_csr(
        handle: &ResourceHandle,
        properties: GraphProperties,
        flags: GraphFlags,
        offsets: &ArrayView<'_>,
        indices: &ArrayView<'_>,
        weights: Option<&ArrayView<'_>>,
        edge_ids: Option<&ArrayView<'_>>,
        edge_types: Option<&ArrayView<'_>>,
    ) -> Result<Self> {
        let inner = Backend::graph_from_csr(
            handle.ctx(),
            properties,
            CsrRefs {
                offsets: offsets.buffer(),
                indices: indices.buffer(),
                weights: weights.map(ArrayView::buffer),
                edge_ids: edge_ids.map(ArrayView::buffer),
                edge_types: edge_types.map(ArrayView::buffer),
            },
            flags,
        )
        .map_err(translate::backend_error)?;
        Ok(Self { inner })
    }

    /// Multi-process edge-list construction: one array chunk per rank-local
    /// shard, concatenated in the order given before the backend sees them.
    ///
    /// Inactive: single-process builds have no distributed backend to hand
    /// the shards to, so this returns [`Error::NotImplemented`].
    pub fn from_edge_list_multi(
        handle: &ResourceHandle,
        properties: GraphProperties,
        flags: GraphFlags,
        src_chunks: &[ArrayView<'_>],
        dst_chunks: &[ArrayView<'_>],
        weight_chunks: Option<&[ArrayView<'_>]>,
    ) -> Result<Self> {
        let _ = (
            handle,
            properties,
            flags,
            src_chunks,
            dst_chunks,
            weight_chunks,
        );
        Err(Error::NotImplemented(
            "multi-process graph construction requires a distributed backend".into(),
        ))
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        Backend::graph_num_vertices(&self.inner)
    }

    /// Number of stored edges (after any self-loop/multi-edge dropping).
    #[must_use]
    pub fn num_edges(&self) -> usize {
        Backend::graph_num_edges(&self.inner)
    }

    /// Vertex id dtype of the arrays the graph was built from.
    #[must_use]
    pub fn vertex_dtype(&self) -> DataTypeId {
        Backend::graph_vertex_dtype(&self.inner)
    }

    /// Weight dtype; `Float64` when the graph is unweighted.
    #[must_use]
    pub fn weight_dtype(&self) -> DataTypeId {
        Backend::graph_weight_dtype(&self.inner)
    }

    pub(crate) fn inner(&self) -> &BackendGraph {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeviceArray;

    fn handle() -> ResourceHandle {
        ResourceHandle::new().unwrap()
    }

    #[test]
    fn edge_list_construction() {
        let h = handle();
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
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.vertex_dtype(), DataTypeId::Int32);
    }

    #[test]
    fn csr_construction() {
        let h = handle();
        let offsets = DeviceArray::from_slice(&h, &[0usize, 1, 2, 3]).unwrap();
        let indices = DeviceArray::from_slice(&h, &[1i64, 2, 0]).unwrap();
        let graph = Graph::from_csr(
            &h,
            GraphProperties::default(),
            GraphFlags::default(),
            &offsets.view(),
            &indices.view(),
            None,
            None,
            None,
        )
        .unwrap();
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.vertex_dtype(), DataTypeId::Int64);
    }

    #[test]
    fn mismatched_lengths_surface_as_invalid_input() {
        let h = handle();
        let src = DeviceArray::from_slice(&h, &[0i32, 1]).unwrap();
        let dst = DeviceArray::from_slice(&h, &[1i32]).unwrap();
        let err = Graph::from_edge_list(
            &h,
            GraphProperties::default(),
            GraphFlags::default(),
            &src.view(),
            &dst.view(),
            None,
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err.status(), crate::Status::InvalidInput);
    }

    #[test]
    fn mg_construction_is_declared_but_inactive() {
        let h = handle();
        let src = DeviceArray::from_slice(&h, &[0i32]).unwrap();
        let dst = DeviceArray::from_slice(&h, &[1i32]).unwrap();
        let err = Graph::from_edge_list_multi(
            &h,
            GraphProperties::default(),
            GraphFlags::default(),
            &[src.view()],
            &[dst.view()],
            None,
        )
        .unwrap_err();
        assert_eq!(err.status(), crate::Status::NotImplemented);
    }
}
