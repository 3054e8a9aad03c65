//! Algorithm entry points and their result objects.
//!
//! Every family follows one shape: the entry point borrows the resource
//! handle and graph, validates what can be checked locally, dispatches to
//! the active backend, and wraps the output buffers in an owning result
//! object. Result accessors return [`ArrayView`](crate::ArrayView)s that
//! alias the result's own storage - copy them out with the array-view copy
//! protocol before dropping the result if the data must live longer.

pub mod centrality;
pub mod clustering;
pub mod components;
pub mod degrees;
pub mod paths;
pub mod sampling;
pub mod similarity;
pub mod subgraph;

pub use centrality::{CentralityResult, betweenness_centrality, pagerank};
pub use clustering::{TriangleCountResult, triangle_count};
pub use components::{ComponentsResult, weakly_connected_components};
pub use degrees::{DegreesResult, degrees, in_degrees, out_degrees};
pub use paths::{PathsResult, bfs, sssp};
pub use sampling::{SamplingResult, uniform_neighbor_sample};
pub use similarity::{SimilarityResult, jaccard, overlap, sorensen};
pub use subgraph::{InducedSubgraphResult, induced_subgraph};
