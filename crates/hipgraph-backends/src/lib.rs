//! Backend dispatch for hipGRAPH.
//!
//! Exactly one backend is selected at build time through mutually exclusive
//! cargo features; [`ActiveBackend`] is the chosen implementation and
//! everything above this crate is written against it. The in-tree backend is
//! the host (CPU) engine; a GPU backend implements [`GraphBackend`] out of
//! tree and is selected the same way.
//!
//! Each backend brings its own native failure type. [`BackendFailure`]
//! requires a *total* translation onto the public [`Status`] set - anything
//! a backend cannot classify collapses to `UnknownError`, and the layer
//! above never sees a native code.

pub mod types;

#[cfg(feature = "backend-host")]
pub mod host;

use hipgraph_common::types::{DataTypeId, GraphFlags, GraphProperties};
use hipgraph_common::utils::error::Status;

pub use types::{
    BetweennessParams, BfsParams, CentralityOutput, ClusteringOutput, CsrRefs, DegreeColumns,
    DegreeKind, DegreesOutput, EdgeListRefs, InducedSubgraphOutput, LabelingOutput, PagerankParams,
    PathsOutput, SamplingOutput, SamplingParams, SimilarityCoefficient, SimilarityOutput,
    SsspParams,
};

#[cfg(feature = "backend-host")]
pub use host::HostBackend as ActiveBackend;

#[cfg(not(any(feature = "backend-host")))]
compile_error!(
    "no hipGRAPH backend selected: enable exactly one `backend-*` feature \
     (the in-tree reference backend is `backend-host`)"
);

/// A backend's native failure, translatable into the public status set.
pub trait BackendFailure: std::error::Error + Send + Sync + 'static {
    /// Total mapping onto the closed public status set. Must never return
    /// [`Status::Success`].
    fn status(&self) -> Status;
}

/// The strategy interface every backend implements once.
///
/// All methods are synchronous and add no locking; thread-safety of a
/// context under concurrent calls is a property of the implementation.
/// Buffers, graphs, and contexts are opaque to the layer above - it moves
/// them around but only ever inspects them through the accessors here.
pub trait GraphBackend: Sized + Send + Sync + 'static {
    /// Compute context behind a resource handle.
    type Context: Send + Sync;
    /// Type-erased element buffer.
    type Buffer: Send;
    /// Constructed graph object.
    type Graph: Send + Sync;
    /// Native failure type.
    type Error: BackendFailure;

    /// Human-readable backend name.
    fn name() -> &'static str;

    // ---- resource handles -------------------------------------------------

    /// Creates a compute context. `device` is a pre-existing native device
    /// ordinal; `None` uses the process-wide default.
    fn create_context(device: Option<usize>) -> Result<Self::Context, Self::Error>;

    /// Rank of this process within the compute group.
    fn rank(ctx: &Self::Context) -> i32;

    /// Size of the compute group.
    fn comm_size(ctx: &Self::Context) -> i32;

    // ---- type-erased buffers ----------------------------------------------

    /// Allocates `len` elements of `dtype`. Contents are unspecified.
    fn alloc(
        ctx: &Self::Context,
        dtype: DataTypeId,
        len: usize,
    ) -> Result<Self::Buffer, Self::Error>;

    /// Element type of a buffer.
    fn buffer_dtype(buf: &Self::Buffer) -> DataTypeId;

    /// Element count of a buffer.
    fn buffer_len(buf: &Self::Buffer) -> usize;

    /// Bulk-copies native-endian host bytes into a buffer. The byte count
    /// must equal `len * dtype.size_of()`.
    fn copy_from_bytes(
        ctx: &Self::Context,
        buf: &mut Self::Buffer,
        src: &[u8],
    ) -> Result<(), Self::Error>;

    /// Bulk-copies a buffer into native-endian host bytes.
    fn copy_to_bytes(
        ctx: &Self::Context,
        buf: &Self::Buffer,
        dst: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Copies between buffers; dtype and element count must match.
    fn copy_buffer(
        ctx: &Self::Context,
        dst: &mut Self::Buffer,
        src: &Self::Buffer,
    ) -> Result<(), Self::Error>;

    /// Raw pointer to a buffer's storage. ABI escape hatch for the C layer;
    /// dereferencing is on the caller.
    fn buffer_ptr(buf: &Self::Buffer) -> *const u8;

    /// Mutable counterpart of [`GraphBackend::buffer_ptr`].
    fn buffer_ptr_mut(buf: &mut Self::Buffer) -> *mut u8;

    // ---- graphs -----------------------------------------------------------

    /// Builds a graph from parallel edge arrays.
    fn graph_from_edge_list(
        ctx: &Self::Context,
        properties: GraphProperties,
        input: EdgeListRefs<'_, Self>,
        flags: GraphFlags,
    ) -> Result<Self::Graph, Self::Error>;

    /// Builds a graph from CSR arrays.
    fn graph_from_csr(
        ctx: &Self::Context,
        properties: GraphProperties,
        input: CsrRefs<'_, Self>,
        flags: GraphFlags,
    ) -> Result<Self::Graph, Self::Error>;

    /// Number of vertices.
    fn graph_num_vertices(graph: &Self::Graph) -> usize;

    /// Number of stored edges.
    fn graph_num_edges(graph: &Self::Graph) -> usize;

    /// Vertex id dtype.
    fn graph_vertex_dtype(graph: &Self::Graph) -> DataTypeId;

    /// Weight dtype (`Float64` when unweighted).
    fn graph_weight_dtype(graph: &Self::Graph) -> DataTypeId;

    // ---- algorithms -------------------------------------------------------

    /// Vertex degrees, optionally restricted to `subset`.
    fn degrees(
        ctx: &Self::Context,
        graph: &Self::Graph,
        subset: Option<&Self::Buffer>,
        kind: DegreeKind,
        do_expensive_check: bool,
    ) -> Result<DegreesOutput<Self>, Self::Error>;

    /// Multi-source breadth-first search.
    fn bfs(
        ctx: &Self::Context,
        graph: &Self::Graph,
        sources: &Self::Buffer,
        params: &BfsParams,
    ) -> Result<PathsOutput<Self>, Self::Error>;

    /// Single-source shortest paths.
    fn sssp(
        ctx: &Self::Context,
        graph: &Self::Graph,
        source: i64,
        params: &SsspParams,
    ) -> Result<PathsOutput<Self>, Self::Error>;

    /// PageRank.
    fn pagerank(
        ctx: &Self::Context,
        graph: &Self::Graph,
        params: &PagerankParams,
    ) -> Result<CentralityOutput<Self>, Self::Error>;

    /// Betweenness centrality.
    fn betweenness_centrality(
        ctx: &Self::Context,
        graph: &Self::Graph,
        params: &BetweennessParams,
    ) -> Result<CentralityOutput<Self>, Self::Error>;

    /// Weakly connected components.
    fn weakly_connected_components(
        ctx: &Self::Context,
        graph: &Self::Graph,
        do_expensive_check: bool,
    ) -> Result<LabelingOutput<Self>, Self::Error>;

    /// Per-vertex triangle counts, optionally restricted to `subset`.
    fn triangle_count(
        ctx: &Self::Context,
        graph: &Self::Graph,
        subset: Option<&Self::Buffer>,
        do_expensive_check: bool,
    ) -> Result<ClusteringOutput<Self>, Self::Error>;

    /// Pairwise similarity coefficients.
    fn similarity(
        ctx: &Self::Context,
        graph: &Self::Graph,
        first: &Self::Buffer,
        second: &Self::Buffer,
        coefficient: SimilarityCoefficient,
        do_expensive_check: bool,
    ) -> Result<SimilarityOutput<Self>, Self::Error>;

    /// Uniform neighbor sampling.
    fn uniform_neighbor_sample(
        ctx: &Self::Context,
        graph: &Self::Graph,
        starts: &Self::Buffer,
        fan_out: &[i32],
        params: &SamplingParams,
    ) -> Result<SamplingOutput<Self>, Self::Error>;

    /// Induced subgraph extraction.
    fn induced_subgraph(
        ctx: &Self::Context,
        graph: &Self::Graph,
        subgraph_offsets: &[usize],
        vertices: &Self::Buffer,
        do_expensive_check: bool,
    ) -> Result<InducedSubgraphOutput<Self>, Self::Error>;
}
