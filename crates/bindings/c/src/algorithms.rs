//! Algorithm entry points, result accessors, and result free functions.
//!
//! Every family follows the identical shape:
//! `hipgraph_<algorithm>(handle, graph, <params>, do_expensive_check,
//! &result, &error) -> status`, then `hipgraph_<family>_result_get_<field>`
//! accessors returning views that alias result-owned storage, then
//! `hipgraph_<family>_result_free`. Views become invalid when the result is
//! freed; the caller copies fields out with the array-view copy protocol
//! first.

use hipgraph::algorithms::{
    CentralityResult, ComponentsResult, DegreesResult, InducedSubgraphResult, PathsResult,
    SamplingResult, SimilarityResult, TriangleCountResult, betweenness_centrality, bfs, degrees,
    in_degrees, induced_subgraph, jaccard, out_degrees, overlap, pagerank, sorensen, sssp,
    uniform_neighbor_sample, weakly_connected_components,
};
use hipgraph::{
    ArrayView, BetweennessParams, BfsParams, PagerankParams, SamplingParams, SsspParams,
};
use hipgraph_common::utils::error::{Error, Result};

use crate::error::{HipgraphError, HipgraphStatus, report};
use crate::graph::{input_view, optional_input_view};
use crate::types::{
    HipgraphDeviceArrayView, HipgraphGraph, HipgraphResourceHandle, c_bool, hipgraph_bool_t,
    to_c_bool,
};

// ---------------------------------------------------------------------------
// Shared plumbing
// ---------------------------------------------------------------------------

/// Heap-allocates a view object over result-owned storage.
fn export_view(view: ArrayView<'_>) -> *mut HipgraphDeviceArrayView {
    Box::into_raw(Box::new(HipgraphDeviceArrayView::over_storage(
        view.as_raw_ptr(),
        view.len(),
        view.dtype(),
    )))
}

/// Like [`export_view`], null when the field is absent.
fn export_optional_view(view: Option<ArrayView<'_>>) -> *mut HipgraphDeviceArrayView {
    view.map_or(std::ptr::null_mut(), export_view)
}

/// Reads a host-side parameter view as a typed slice.
///
/// The view must carry the expected dtype; the storage must be aligned for
/// it, which every view taken from a hipGRAPH array is.
unsafe fn param_slice<'a, T: hipgraph::DataType>(
    view: &HipgraphDeviceArrayView,
    what: &str,
) -> Result<&'a [T]> {
    if view.dtype != T::ID {
        return Err(Error::InvalidInput(format!(
            "{what} must be {}, got {}",
            T::ID,
            view.dtype
        )));
    }
    if view.len == 0 {
        return Ok(&[]);
    }
    // SAFETY: Caller guarantees the view's owner is alive and its storage
    // aligned for T.
    Ok(unsafe { std::slice::from_raw_parts(view.ptr.cast::<T>(), view.len) })
}

/// Boxes a successful result into the out-parameter, or reports the error.
macro_rules! finish {
    ($built:expr, $wrapper:ident, $result_out:expr, $error:expr) => {
        match $built {
            Ok(inner) => {
                // SAFETY: result_out checked non-null by the caller.
                unsafe { *$result_out = Box::into_raw(Box::new($wrapper { inner })) };
                HipgraphStatus::Success
            }
            Err(err) => report(&err, $error),
        }
    };
}

/// Null-checks a result out-pointer.
macro_rules! check_out {
    ($result_out:expr, $error:expr) => {
        if $result_out.is_null() {
            return report(
                &Error::InvalidInput("null result out-pointer".into()),
                $error,
            );
        }
    };
}

/// Emits a `<family>_result_free` function.
macro_rules! result_free {
    ($(#[$doc:meta])* $fn_name:ident, $ty:ty) => {
        $(#[$doc])*
        #[unsafe(no_mangle)]
        pub extern "C" fn $fn_name(result: *mut $ty) {
            if result.is_null() {
                return;
            }
            // SAFETY: Caller guarantees single ownership of the result.
            drop(unsafe { Box::from_raw(result) });
        }
    };
}

/// Emits a result accessor returning a (possibly absent) view.
macro_rules! result_accessor {
    ($(#[$doc:meta])* $fn_name:ident, $ty:ty, required $method:ident) => {
        $(#[$doc])*
        #[unsafe(no_mangle)]
        pub extern "C" fn $fn_name(result: *const $ty) -> *mut HipgraphDeviceArrayView {
            let result = try_ref_or_null!(result);
            export_view(result.inner.$method())
        }
    };
    ($(#[$doc:meta])* $fn_name:ident, $ty:ty, optional $method:ident) => {
        $(#[$doc])*
        #[unsafe(no_mangle)]
        pub extern "C" fn $fn_name(result: *const $ty) -> *mut HipgraphDeviceArrayView {
            let result = try_ref_or_null!(result);
            export_optional_view(result.inner.$method())
        }
    };
}

// ---------------------------------------------------------------------------
// Degrees
// ---------------------------------------------------------------------------

/// Opaque degrees result.
pub struct HipgraphDegreesResult {
    inner: DegreesResult,
}

fn run_degrees(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    start_vertices: *const HipgraphDeviceArrayView,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphDegreesResult,
    error: *mut *mut HipgraphError,
    run: impl Fn(
        &hipgraph::ResourceHandle,
        &hipgraph::Graph,
        Option<&ArrayView<'_>>,
        bool,
    ) -> Result<DegreesResult>,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let graph = try_ref!(graph, "graph", error);
    check_out!(result_out, error);
    let built = optional_input_view(start_vertices, "start vertices").and_then(|subset| {
        run(
            &handle.inner,
            &graph.inner,
            subset.as_ref(),
            c_bool(do_expensive_check),
        )
    });
    finish!(built, HipgraphDegreesResult, result_out, error)
}

/// Computes both in- and out-degrees, for every vertex or for
/// `start_vertices` only (nullable).
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_degrees(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    start_vertices: *const HipgraphDeviceArrayView,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphDegreesResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    run_degrees(
        handle,
        graph,
        start_vertices,
        do_expensive_check,
        result_out,
        error,
        degrees,
    )
}

/// Computes in-degrees only.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_in_degrees(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    start_vertices: *const HipgraphDeviceArrayView,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphDegreesResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    run_degrees(
        handle,
        graph,
        start_vertices,
        do_expensive_check,
        result_out,
        error,
        in_degrees,
    )
}

/// Computes out-degrees only.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_out_degrees(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    start_vertices: *const HipgraphDeviceArrayView,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphDegreesResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    run_degrees(
        handle,
        graph,
        start_vertices,
        do_expensive_check,
        result_out,
        error,
        out_degrees,
    )
}

result_accessor!(
    /// Vertex ids the degree columns are parallel to.
    hipgraph_degrees_result_get_vertices,
    HipgraphDegreesResult,
    required vertices
);
result_accessor!(
    /// In-degrees; null when the call did not produce them. On a symmetric
    /// graph this aliases the same storage as the out-degrees view.
    hipgraph_degrees_result_get_in_degrees,
    HipgraphDegreesResult,
    optional in_degrees
);
result_accessor!(
    /// Out-degrees; null when the call did not produce them.
    hipgraph_degrees_result_get_out_degrees,
    HipgraphDegreesResult,
    optional out_degrees
);
result_free!(
    /// Frees a degrees result; its views become invalid.
    hipgraph_degrees_result_free,
    HipgraphDegreesResult
);

// ---------------------------------------------------------------------------
// Centrality
// ---------------------------------------------------------------------------

/// Opaque centrality result.
pub struct HipgraphCentralityResult {
    inner: CentralityResult,
}

/// PageRank. `alpha` is the damping factor, `epsilon` the convergence
/// tolerance, `max_iterations` the iteration budget.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn hipgraph_pagerank(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    alpha: f64,
    epsilon: f64,
    max_iterations: usize,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphCentralityResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let graph = try_ref!(graph, "graph", error);
    check_out!(result_out, error);
    let built = pagerank(
        &handle.inner,
        &graph.inner,
        &PagerankParams {
            alpha,
            epsilon,
            max_iterations,
            do_expensive_check: c_bool(do_expensive_check),
        },
    );
    finish!(built, HipgraphCentralityResult, result_out, error)
}

/// Betweenness centrality over unweighted shortest paths.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_betweenness_centrality(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    normalized: hipgraph_bool_t,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphCentralityResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let graph = try_ref!(graph, "graph", error);
    check_out!(result_out, error);
    let built = betweenness_centrality(
        &handle.inner,
        &graph.inner,
        &BetweennessParams {
            normalized: c_bool(normalized),
            do_expensive_check: c_bool(do_expensive_check),
        },
    );
    finish!(built, HipgraphCentralityResult, result_out, error)
}

result_accessor!(
    /// Vertex ids the centrality values are parallel to.
    hipgraph_centrality_result_get_vertices,
    HipgraphCentralityResult,
    required vertices
);
result_accessor!(
    /// Centrality value per vertex, in the graph's weight dtype.
    hipgraph_centrality_result_get_values,
    HipgraphCentralityResult,
    required values
);

/// Iterations the method ran; 0 on a null result or a non-iterative method.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_centrality_result_get_num_iterations(
    result: *const HipgraphCentralityResult,
) -> usize {
    if result.is_null() {
        return 0;
    }
    // SAFETY: Caller guarantees a live result.
    unsafe { (*result).inner.num_iterations() }
}

/// Whether the method converged within its budget; false on null.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_centrality_result_converged(
    result: *const HipgraphCentralityResult,
) -> hipgraph_bool_t {
    if result.is_null() {
        return crate::types::HIPGRAPH_FALSE;
    }
    // SAFETY: Caller guarantees a live result.
    to_c_bool(unsafe { (*result).inner.converged() })
}

result_free!(
    /// Frees a centrality result; its views become invalid.
    hipgraph_centrality_result_free,
    HipgraphCentralityResult
);

// ---------------------------------------------------------------------------
// Paths (BFS / SSSP)
// ---------------------------------------------------------------------------

/// Opaque paths result.
pub struct HipgraphPathsResult {
    inner: PathsResult,
}

/// Multi-source BFS. `depth_limit` of 0 means unlimited.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn hipgraph_bfs(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    sources: *const HipgraphDeviceArrayView,
    depth_limit: usize,
    compute_predecessors: hipgraph_bool_t,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphPathsResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let graph = try_ref!(graph, "graph", error);
    let sources = try_ref!(sources, "sources view", error);
    check_out!(result_out, error);
    let built = input_view(sources, "sources").and_then(|sources| {
        bfs(
            &handle.inner,
            &graph.inner,
            &sources,
            &BfsParams {
                depth_limit: (depth_limit > 0).then_some(depth_limit),
                compute_predecessors: c_bool(compute_predecessors),
                do_expensive_check: c_bool(do_expensive_check),
            },
        )
    });
    finish!(built, HipgraphPathsResult, result_out, error)
}

/// Single-source shortest paths. A non-finite `cutoff` means no cutoff.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn hipgraph_sssp(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    source: i64,
    cutoff: f64,
    compute_predecessors: hipgraph_bool_t,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphPathsResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let graph = try_ref!(graph, "graph", error);
    check_out!(result_out, error);
    let built = sssp(
        &handle.inner,
        &graph.inner,
        source,
        &SsspParams {
            cutoff: cutoff.is_finite().then_some(cutoff),
            compute_predecessors: c_bool(compute_predecessors),
            do_expensive_check: c_bool(do_expensive_check),
        },
    );
    finish!(built, HipgraphPathsResult, result_out, error)
}

result_accessor!(
    /// Vertex ids, one per graph vertex.
    hipgraph_paths_result_get_vertices,
    HipgraphPathsResult,
    required vertices
);
result_accessor!(
    /// Distances: hop counts for BFS (-1 unreachable), weighted distances
    /// for SSSP (+inf unreachable).
    hipgraph_paths_result_get_distances,
    HipgraphPathsResult,
    required distances
);
result_accessor!(
    /// Predecessor per vertex; null when not requested.
    hipgraph_paths_result_get_predecessors,
    HipgraphPathsResult,
    optional predecessors
);
result_free!(
    /// Frees a paths result; its views become invalid.
    hipgraph_paths_result_free,
    HipgraphPathsResult
);

// ---------------------------------------------------------------------------
// Labeling (weakly connected components)
// ---------------------------------------------------------------------------

/// Opaque labeling result.
pub struct HipgraphLabelingResult {
    inner: ComponentsResult,
}

/// Labels weakly connected components. Labels are arbitrary non-consecutive
/// integers, not ordered by component size.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_weakly_connected_components(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphLabelingResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let graph = try_ref!(graph, "graph", error);
    check_out!(result_out, error);
    let built =
        weakly_connected_components(&handle.inner, &graph.inner, c_bool(do_expensive_check));
    finish!(built, HipgraphLabelingResult, result_out, error)
}

result_accessor!(
    /// Vertex ids the labels are parallel to.
    hipgraph_labeling_result_get_vertices,
    HipgraphLabelingResult,
    required vertices
);
result_accessor!(
    /// Component label per vertex.
    hipgraph_labeling_result_get_labels,
    HipgraphLabelingResult,
    required labels
);
result_free!(
    /// Frees a labeling result; its views become invalid.
    hipgraph_labeling_result_free,
    HipgraphLabelingResult
);

// ---------------------------------------------------------------------------
// Clustering (triangle count)
// ---------------------------------------------------------------------------

/// Opaque triangle-count result.
pub struct HipgraphTriangleCountResult {
    inner: TriangleCountResult,
}

/// Per-vertex triangle counts, treating edges as undirected.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_triangle_count(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    start_vertices: *const HipgraphDeviceArrayView,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphTriangleCountResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let graph = try_ref!(graph, "graph", error);
    check_out!(result_out, error);
    let built = optional_input_view(start_vertices, "start vertices").and_then(|subset| {
        hipgraph::algorithms::triangle_count(
            &handle.inner,
            &graph.inner,
            subset.as_ref(),
            c_bool(do_expensive_check),
        )
    });
    finish!(built, HipgraphTriangleCountResult, result_out, error)
}

result_accessor!(
    /// Vertex ids the counts are parallel to.
    hipgraph_triangle_count_result_get_vertices,
    HipgraphTriangleCountResult,
    required vertices
);
result_accessor!(
    /// Triangles containing each vertex (int64).
    hipgraph_triangle_count_result_get_counts,
    HipgraphTriangleCountResult,
    required counts
);
result_free!(
    /// Frees a triangle-count result; its views become invalid.
    hipgraph_triangle_count_result_free,
    HipgraphTriangleCountResult
);

// ---------------------------------------------------------------------------
// Similarity
// ---------------------------------------------------------------------------

/// Opaque similarity result.
pub struct HipgraphSimilarityResult {
    inner: SimilarityResult,
}

fn run_similarity(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    first: *const HipgraphDeviceArrayView,
    second: *const HipgraphDeviceArrayView,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphSimilarityResult,
    error: *mut *mut HipgraphError,
    run: impl Fn(
        &hipgraph::ResourceHandle,
        &hipgraph::Graph,
        &ArrayView<'_>,
        &ArrayView<'_>,
        bool,
    ) -> Result<SimilarityResult>,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let graph = try_ref!(graph, "graph", error);
    let first = try_ref!(first, "first pair view", error);
    let second = try_ref!(second, "second pair view", error);
    check_out!(result_out, error);
    let built = (|| {
        let first = input_view(first, "first pair column")?;
        let second = input_view(second, "second pair column")?;
        run(
            &handle.inner,
            &graph.inner,
            &first,
            &second,
            c_bool(do_expensive_check),
        )
    })();
    finish!(built, HipgraphSimilarityResult, result_out, error)
}

/// Jaccard coefficient for each vertex pair.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_jaccard_coefficients(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    first: *const HipgraphDeviceArrayView,
    second: *const HipgraphDeviceArrayView,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphSimilarityResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    run_similarity(
        handle,
        graph,
        first,
        second,
        do_expensive_check,
        result_out,
        error,
        jaccard,
    )
}

/// Sorensen coefficient for each vertex pair.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_sorensen_coefficients(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    first: *const HipgraphDeviceArrayView,
    second: *const HipgraphDeviceArrayView,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphSimilarityResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    run_similarity(
        handle,
        graph,
        first,
        second,
        do_expensive_check,
        result_out,
        error,
        sorensen,
    )
}

/// Overlap coefficient for each vertex pair.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_overlap_coefficients(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    first: *const HipgraphDeviceArrayView,
    second: *const HipgraphDeviceArrayView,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphSimilarityResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    run_similarity(
        handle,
        graph,
        first,
        second,
        do_expensive_check,
        result_out,
        error,
        overlap,
    )
}

result_accessor!(
    /// First vertex of each pair.
    hipgraph_similarity_result_get_first,
    HipgraphSimilarityResult,
    required first
);
result_accessor!(
    /// Second vertex of each pair.
    hipgraph_similarity_result_get_second,
    HipgraphSimilarityResult,
    required second
);
result_accessor!(
    /// Coefficient per pair, in the graph's weight dtype.
    hipgraph_similarity_result_get_similarity,
    HipgraphSimilarityResult,
    required coefficients
);
result_free!(
    /// Frees a similarity result; its views become invalid.
    hipgraph_similarity_result_free,
    HipgraphSimilarityResult
);

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// Opaque sampling result.
pub struct HipgraphSampleResult {
    inner: SamplingResult,
}

/// Uniform neighbor sampling. `fan_out` is a host-side int32 array: entry
/// `h` bounds the edges kept per frontier vertex at hop `h`, negative
/// meaning "all".
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn hipgraph_uniform_neighbor_sample(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    start_vertices: *const HipgraphDeviceArrayView,
    fan_out: *const HipgraphDeviceArrayView,
    with_replacement: hipgraph_bool_t,
    random_seed: u64,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphSampleResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let graph = try_ref!(graph, "graph", error);
    let start_vertices = try_ref!(start_vertices, "start vertices view", error);
    let fan_out = try_ref!(fan_out, "fan-out view", error);
    check_out!(result_out, error);
    let built = (|| {
        let starts = input_view(start_vertices, "start vertices")?;
        // SAFETY: fan-out views come from hipGRAPH host arrays, whose
        // storage is aligned for their dtype.
        let fan_out = unsafe { param_slice::<i32>(fan_out, "fan-out") }?;
        uniform_neighbor_sample(
            &handle.inner,
            &graph.inner,
            &starts,
            fan_out,
            &SamplingParams {
                with_replacement: c_bool(with_replacement),
                random_seed,
                do_expensive_check: c_bool(do_expensive_check),
            },
        )
    })();
    finish!(built, HipgraphSampleResult, result_out, error)
}

result_accessor!(
    /// Sampled edge sources.
    hipgraph_sample_result_get_sources,
    HipgraphSampleResult,
    required sources
);
result_accessor!(
    /// Sampled edge destinations.
    hipgraph_sample_result_get_destinations,
    HipgraphSampleResult,
    required destinations
);
result_accessor!(
    /// Sampled edge weights; null on an unweighted graph.
    hipgraph_sample_result_get_weights,
    HipgraphSampleResult,
    optional weights
);
result_accessor!(
    /// Sampled edge ids; null when the graph carries none.
    hipgraph_sample_result_get_edge_ids,
    HipgraphSampleResult,
    optional edge_ids
);
result_accessor!(
    /// Hop index (int32) each edge was drawn at.
    hipgraph_sample_result_get_hops,
    HipgraphSampleResult,
    required hops
);
result_free!(
    /// Frees a sampling result; its views become invalid.
    hipgraph_sample_result_free,
    HipgraphSampleResult
);

// ---------------------------------------------------------------------------
// Induced subgraph
// ---------------------------------------------------------------------------

/// Opaque induced-subgraph result.
pub struct HipgraphInducedSubgraphResult {
    inner: InducedSubgraphResult,
}

/// Extracts the subgraph(s) induced by `subgraph_vertices`, sliced into one
/// vertex list per subgraph by the host-side `subgraph_offsets` array
/// (size_t, starting at 0 and ending at the vertex count).
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn hipgraph_extract_induced_subgraph(
    handle: *const HipgraphResourceHandle,
    graph: *const HipgraphGraph,
    subgraph_offsets: *const HipgraphDeviceArrayView,
    subgraph_vertices: *const HipgraphDeviceArrayView,
    do_expensive_check: hipgraph_bool_t,
    result_out: *mut *mut HipgraphInducedSubgraphResult,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let handle = try_ref!(handle, "resource handle", error);
    let graph = try_ref!(graph, "graph", error);
    let subgraph_offsets = try_ref!(subgraph_offsets, "subgraph offsets view", error);
    let subgraph_vertices = try_ref!(subgraph_vertices, "subgraph vertices view", error);
    check_out!(result_out, error);
    let built = (|| {
        let vertices = input_view(subgraph_vertices, "subgraph vertices")?;
        // SAFETY: offset views come from hipGRAPH host arrays, whose
        // storage is aligned for their dtype.
        let offsets = unsafe { param_slice::<usize>(subgraph_offsets, "subgraph offsets") }?;
        induced_subgraph(
            &handle.inner,
            &graph.inner,
            offsets,
            &vertices,
            c_bool(do_expensive_check),
        )
    })();
    finish!(built, HipgraphInducedSubgraphResult, result_out, error)
}

result_accessor!(
    /// Edge sources of the extracted subgraph(s).
    hipgraph_induced_subgraph_get_sources,
    HipgraphInducedSubgraphResult,
    required sources
);
result_accessor!(
    /// Edge destinations of the extracted subgraph(s).
    hipgraph_induced_subgraph_get_destinations,
    HipgraphInducedSubgraphResult,
    required destinations
);
result_accessor!(
    /// Edge weights; null on an unweighted graph.
    hipgraph_induced_subgraph_get_edge_weights,
    HipgraphInducedSubgraphResult,
    optional weights
);
result_accessor!(
    /// Row range (size_t) of each requested subgraph.
    hipgraph_induced_subgraph_get_subgraph_offsets,
    HipgraphInducedSubgraphResult,
    required subgraph_offsets
);
result_free!(
    /// Frees an induced-subgraph result; its views become invalid.
    hipgraph_induced_subgraph_result_free,
    HipgraphInducedSubgraphResult
);
