//! Graph construction and destruction functions.

use hipgraph::{ArrayView, Graph};
use hipgraph_common::types::{GraphFlags, GraphProperties};
use hipgraph_common::utils::error::Error;

use crate::error::{HipgraphError, HipgraphStatus, report};
use crate::types::{
    HipgraphDeviceArrayView, HipgraphGraph, HipgraphGraphProperties, HipgraphResourceHandle,
    c_bool, hipgraph_bool_t,
};

/// Resolves a view pointer into a facade array view.
///
/// Only array-backed views (taken from a device array) can feed graph
/// construction and algorithm entry points; views over raw caller memory or
/// result storage are rejected.
pub(crate) fn input_view<'a>(
    view: &'a HipgraphDeviceArrayView,
    what: &str,
) -> Result<ArrayView<'a>, Error> {
    if view.array.is_null() {
        return Err(Error::InvalidInput(format!(
            "{what} view does not reference a device array"
        )));
    }
    // SAFETY: Caller guarantees the view's owning array is still alive.
    Ok(unsafe { (*view.array).inner.view() })
}

/// Resolves an optional (nullable) view pointer.
pub(crate) fn optional_input_view<'a>(
    view: *const HipgraphDeviceArrayView,
    what: &str,
) -> Result<Option<ArrayView<'a>>, Error> {
    if view.is_null() {
        return Ok(None);
    }
    // SAFETY: Caller guarantees a live view object.
    input_view(unsafe { &*view }, what).map(Some)
}

fn read_properties(properties: *const HipgraphGraphProperties) -> GraphProperties {
    if properties.is_null() {
        return GraphProperties::default();
    }
    // SAFETY: Caller guarantees a valid properties struct.
    let properties = unsafe { &*properties };
    GraphProperties {
        is_symmetric: c_bool(properties.is_symmetric),
        is_multigraph: c_bool(properties.is_multigraph),
    }
}

/// Builds a single-process graph from edge-list arrays.
///
/// `weights`, `edge_ids`, and `edge_type_ids` are nullable. Set `renumber`
/// whenever vertex ids are not already a dense `0..num_vertices` range.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn hipgraph_graph_create_sg(
    handle: *const HipgraphResourceHandle,
    properties: *const HipgraphGraphProperties,
    src: *const HipgraphDeviceArrayView,
    dst: *const HipgraphDeviceArrayView,
    weights: *const HipgraphDeviceArrayView,
    edge_ids: *const HipgraphDeviceArrayView,
    edge_type_ids: *const HipgraphDeviceArrayView,
    store_transposed: hipgraph_bool_t,
    renumber: hipgraph_bool_t,
    drop_self_loops: hipgraph_bool_t,
    drop_multi_edges: hipgraph_bool_t,
    do_expensive_check: hipgraph_bool_t,
    graph_out: *mut *mut HipgraphGraph,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let src = try_ref!(src, "source view", error);
    let dst = try_ref!(dst, "destination view", error);
    if graph_out.is_null() {
        return report(&Error::InvalidInput("null graph out-pointer".into()), error);
    }

    let built = (|| {
        let src = input_view(src, "source")?;
        let dst = input_view(dst, "destination")?;
        let weights = optional_input_view(weights, "weights")?;
        let edge_ids = optional_input_view(edge_ids, "edge ids")?;
        let edge_type_ids = optional_input_view(edge_type_ids, "edge types")?;
        Graph::from_edge_list(
            &handle.inner,
            read_properties(properties),
            GraphFlags {
                store_transposed: c_bool(store_transposed),
                renumber: c_bool(renumber),
                drop_self_loops: c_bool(drop_self_loops),
                drop_multi_edges: c_bool(drop_multi_edges),
                do_expensive_check: c_bool(do_expensive_check),
            },
            &src,
            &dst,
            weights.as_ref(),
            edge_ids.as_ref(),
            edge_type_ids.as_ref(),
        )
    })();

    match built {
        Ok(inner) => {
            // SAFETY: graph_out checked non-null above.
            unsafe { *graph_out = Box::into_raw(Box::new(HipgraphGraph { inner })) };
            HipgraphStatus::Success
        }
        Err(err) => report(&err, error),
    }
}

/// Builds a single-process graph from CSR arrays.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn hipgraph_graph_create_sg_from_csr(
    handle: *const HipgraphResourceHandle,
    properties: *const HipgraphGraphProperties,
    offsets: *const HipgraphDeviceArrayView,
    indices: *const HipgraphDeviceArrayView,
    weights: *const HipgraphDeviceArrayView,
    edge_ids: *const HipgraphDeviceArrayView,
    edge_type_ids: *const HipgraphDeviceArrayView,
    store_transposed: hipgraph_bool_t,
    renumber: hipgraph_bool_t,
    do_expensive_check: hipgraph_bool_t,
    graph_out: *mut *mut HipgraphGraph,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let offsets = try_ref!(offsets, "offsets view", error);
    let indices = try_ref!(indices, "indices view", error);
    if graph_out.is_null() {
        return report(&Error::InvalidInput("null graph out-pointer".into()), error);
    }

    let built = (|| {
        let offsets = input_view(offsets, "offsets")?;
        let indices = input_view(indices, "indices")?;
        let weights = optional_input_view(weights, "weights")?;
        let edge_ids = optional_input_view(edge_ids, "edge ids")?;
        let edge_type_ids = optional_input_view(edge_type_ids, "edge types")?;
        Graph::from_csr(
            &handle.inner,
            read_properties(properties),
            GraphFlags {
                store_transposed: c_bool(store_transposed),
                renumber: c_bool(renumber),
                do_expensive_check: c_bool(do_expensive_check),
                ..GraphFlags::default()
            },
            &offsets,
            &indices,
            weights.as_ref(),
            edge_ids.as_ref(),
            edge_type_ids.as_ref(),
        )
    })();

    match built {
        Ok(inner) => {
            // SAFETY: graph_out checked non-null above.
            unsafe { *graph_out = Box::into_raw(Box::new(HipgraphGraph { inner })) };
            HipgraphStatus::Success
        }
        Err(err) => report(&err, error),
    }
}

/// Multi-process graph construction: declared for ABI completeness,
/// inactive pending a distributed backend. Always reports `NotImplemented`.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn hipgraph_graph_create_mg(
    handle: *const HipgraphResourceHandle,
    properties: *const HipgraphGraphProperties,
    src_chunks: *const *const HipgraphDeviceArrayView,
    dst_chunks: *const *const HipgraphDeviceArrayView,
    num_chunks: usize,
    store_transposed: hipgraph_bool_t,
    renumber: hipgraph_bool_t,
    do_expensive_check: hipgraph_bool_t,
    graph_out: *mut *mut HipgraphGraph,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let _ = (
        handle,
        properties,
        src_chunks,
        dst_chunks,
        num_chunks,
        store_transposed,
        renumber,
        do_expensive_check,
        graph_out,
    );
    report(
        &Error::NotImplemented(
            "multi-process graph construction requires a distributed backend".into(),
        ),
        error,
    )
}

/// Frees a graph and all backend storage behind it. The pointer must not be
/// used afterwards.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_graph_free(graph: *mut HipgraphGraph) {
    if graph.is_null() {
        return;
    }
    // SAFETY: Caller guarantees single ownership of the pointer.
    drop(unsafe { Box::from_raw(graph) });
}

/// Deprecated alias of [`hipgraph_graph_free`].
#[unsafe(no_mangle)]
#[deprecated = "use hipgraph_graph_free"]
pub extern "C" fn hipgraph_sg_graph_free(graph: *mut HipgraphGraph) {
    hipgraph_graph_free(graph);
}

/// Deprecated alias of [`hipgraph_graph_free`].
#[unsafe(no_mangle)]
#[deprecated = "use hipgraph_graph_free"]
pub extern "C" fn hipgraph_mg_graph_free(graph: *mut HipgraphGraph) {
    hipgraph_graph_free(graph);
}
