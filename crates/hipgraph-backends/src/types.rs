//! Dispatch-level vocabulary: parameter structs, protocol enums, and the
//! backend-generic output shapes.
//!
//! Outputs carry backend buffers (`B::Buffer`), so result objects built from
//! them own backend-allocated storage directly - no copy between the backend
//! and the result accessors above.

use serde::{Deserialize, Serialize};

use crate::GraphBackend;

/// Which degree columns an entry point requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeKind {
    /// In-degrees only.
    In,
    /// Out-degrees only.
    Out,
    /// Both in- and out-degrees.
    Combined,
}

/// The similarity coefficient an entry point requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarityCoefficient {
    /// Jaccard: |A ∩ B| / |A ∪ B|
    Jaccard,
    /// Sorensen: 2 |A ∩ B| / (|A| + |B|)
    Sorensen,
    /// Overlap: |A ∩ B| / min(|A|, |B|)
    Overlap,
}

/// PageRank parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PagerankParams {
    /// Damping factor in `[0, 1)`.
    pub alpha: f64,
    /// L-inf convergence tolerance.
    pub epsilon: f64,
    /// Iteration budget.
    pub max_iterations: usize,
    /// Request extra input validation from the backend.
    pub do_expensive_check: bool,
}

impl Default for PagerankParams {
    fn default() -> Self {
        Self {
            alpha: 0.85,
            epsilon: 1e-6,
            max_iterations: 100,
            do_expensive_check: false,
        }
    }
}

/// BFS parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsParams {
    /// Stop expanding past this many hops.
    pub depth_limit: Option<usize>,
    /// Also produce the predecessor column.
    pub compute_predecessors: bool,
    /// Request extra input validation from the backend.
    pub do_expensive_check: bool,
}

/// SSSP parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SsspParams {
    /// Prune paths longer than this distance.
    pub cutoff: Option<f64>,
    /// Also produce the predecessor column.
    pub compute_predecessors: bool,
    /// Request extra input validation from the backend.
    pub do_expensive_check: bool,
}

/// Betweenness centrality parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetweennessParams {
    /// Scale scores by 1 / ((n-1)(n-2)).
    pub normalized: bool,
    /// Request extra input validation from the backend.
    pub do_expensive_check: bool,
}

/// Neighbor-sampling parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Draw each sampled edge independently.
    pub with_replacement: bool,
    /// RNG seed; equal seeds reproduce the sample.
    pub random_seed: u64,
    /// Request extra input validation from the backend.
    pub do_expensive_check: bool,
}

/// Borrowed edge-list arrays handed to a backend.
pub struct EdgeListRefs<'a, B: GraphBackend> {
    /// Edge source vertex ids.
    pub src: &'a B::Buffer,
    /// Edge destination vertex ids.
    pub dst: &'a B::Buffer,
    /// Optional edge weights.
    pub weights: Option<&'a B::Buffer>,
    /// Optional edge ids.
    pub edge_ids: Option<&'a B::Buffer>,
    /// Optional edge type tags.
    pub edge_types: Option<&'a B::Buffer>,
}

/// Borrowed CSR arrays handed to a backend.
pub struct CsrRefs<'a, B: GraphBackend> {
    /// Row offsets, length `num_vertices + 1`.
    pub offsets: &'a B::Buffer,
    /// Column indices.
    pub indices: &'a B::Buffer,
    /// Optional edge weights.
    pub weights: Option<&'a B::Buffer>,
    /// Optional edge ids.
    pub edge_ids: Option<&'a B::Buffer>,
    /// Optional edge type tags.
    pub edge_types: Option<&'a B::Buffer>,
}

/// Degree columns produced by a backend.
pub enum DegreeColumns<B: GraphBackend> {
    /// In-degrees only.
    InOnly(B::Buffer),
    /// Out-degrees only.
    OutOnly(B::Buffer),
    /// Distinct in- and out-degree columns.
    Separate {
        /// In-degrees, parallel to the vertices column.
        in_degrees: B::Buffer,
        /// Out-degrees, parallel to the vertices column.
        out_degrees: B::Buffer,
    },
    /// One column serving both accessors (symmetric graph).
    Shared(B::Buffer),
}

/// Degrees result payload.
pub struct DegreesOutput<B: GraphBackend> {
    /// Vertex ids the columns are parallel to.
    pub vertices: B::Buffer,
    /// The degree column(s).
    pub columns: DegreeColumns<B>,
}

/// Paths (BFS/SSSP) result payload.
pub struct PathsOutput<B: GraphBackend> {
    /// Vertex ids, one per graph vertex.
    pub vertices: B::Buffer,
    /// Distances; hop counts for BFS, weighted for SSSP.
    pub distances: B::Buffer,
    /// Predecessors, when requested.
    pub predecessors: Option<B::Buffer>,
}

/// Centrality result payload.
pub struct CentralityOutput<B: GraphBackend> {
    /// Vertex ids, one per graph vertex.
    pub vertices: B::Buffer,
    /// Centrality values.
    pub values: B::Buffer,
    /// Iterations run (0 for non-iterative methods).
    pub iterations: usize,
    /// Whether the method converged within its budget.
    pub converged: bool,
}

/// Labeling (components) result payload.
pub struct LabelingOutput<B: GraphBackend> {
    /// Vertex ids, one per graph vertex.
    pub vertices: B::Buffer,
    /// Component label per vertex; arbitrary non-consecutive integers.
    pub labels: B::Buffer,
}

/// Clustering (triangle count) result payload.
pub struct ClusteringOutput<B: GraphBackend> {
    /// Vertex ids the counts are parallel to.
    pub vertices: B::Buffer,
    /// Triangle count per vertex.
    pub counts: B::Buffer,
}

/// Similarity result payload.
pub struct SimilarityOutput<B: GraphBackend> {
    /// First vertex of each pair.
    pub first: B::Buffer,
    /// Second vertex of each pair.
    pub second: B::Buffer,
    /// Coefficient per pair.
    pub coefficients: B::Buffer,
}

/// Sampling result payload: one row per sampled edge.
pub struct SamplingOutput<B: GraphBackend> {
    /// Edge sources.
    pub sources: B::Buffer,
    /// Edge destinations.
    pub destinations: B::Buffer,
    /// Edge weights, when the graph is weighted.
    pub weights: Option<B::Buffer>,
    /// Edge ids, when the graph carries them.
    pub edge_ids: Option<B::Buffer>,
    /// Hop index each edge was drawn at.
    pub hops: B::Buffer,
}

/// Induced-subgraph result payload: one row per surviving edge.
pub struct InducedSubgraphOutput<B: GraphBackend> {
    /// Edge sources.
    pub sources: B::Buffer,
    /// Edge destinations.
    pub destinations: B::Buffer,
    /// Edge weights, when the graph is weighted.
    pub weights: Option<B::Buffer>,
    /// Row range of each requested subgraph.
    pub subgraph_offsets: B::Buffer,
}
