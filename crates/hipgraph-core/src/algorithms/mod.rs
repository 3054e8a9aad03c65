//! Reference algorithm implementations over [`CsrGraph`](crate::CsrGraph).
//!
//! Each module returns plain output structs in terms of original (external)
//! vertex ids; the dispatch layer above turns them into typed result buffers.
//! These are deliberately simple CPU implementations - they exist to make
//! the protocol real, not to compete with a GPU library.

pub mod centrality;
pub mod clustering;
pub mod components;
pub mod degrees;
pub mod sampling;
pub mod similarity;
pub mod subgraph;
pub mod traversal;

pub use centrality::{CentralityOutput, betweenness_centrality, pagerank};
pub use clustering::{ClusteringOutput, total_triangles, triangle_count};
pub use components::{LabelingOutput, weakly_connected_components};
pub use degrees::{DegreeColumns, DegreeKind, DegreesOutput, degrees};
pub use sampling::{SamplingOutput, uniform_neighbor_sample};
pub use similarity::{SimilarityCoefficient, SimilarityOutput, similarity};
pub use subgraph::{InducedSubgraphOutput, induced_subgraph};
pub use traversal::{Distances, PathsOutput, bfs, sssp};
