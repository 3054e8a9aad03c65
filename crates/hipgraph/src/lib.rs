//! hipGRAPH: a graph-analytics API over interchangeable compute backends.
//!
//! The crate exposes the protocol every caller follows:
//!
//! 1. create a [`ResourceHandle`]
//! 2. create [`DeviceArray`]s and copy edge data in
//! 3. build a [`Graph`] from edge lists or CSR arrays
//! 4. call an algorithm entry point from [`algorithms`]
//! 5. read the result object's columns through borrowing views
//!
//! Results own backend-allocated buffers; their accessors return
//! [`ArrayView`]s that borrow the result, so a view can never outlive the
//! object it aliases. Releasing any object is `Drop` - there are no free
//! functions to forget. The C ABI in `bindings/c` re-exposes the same
//! protocol with explicit status codes, error objects, and free functions
//! for callers outside Rust.
//!
//! The compute backend is chosen at build time by a `backend-*` cargo
//! feature (see `hipgraph-backends`); this crate is written against
//! whichever one is active.
//!
//! ```
//! use hipgraph::algorithms::degrees;
//! use hipgraph::{DeviceArray, Graph, GraphFlags, GraphProperties, ResourceHandle};
//!
//! # fn main() -> hipgraph::Result<()> {
//! let handle = ResourceHandle::new()?;
//! let src = DeviceArray::from_slice(&handle, &[0i32, 1, 2])?;
//! let dst = DeviceArray::from_slice(&handle, &[1i32, 2, 0])?;
//! let graph = Graph::from_edge_list(
//!     &handle,
//!     GraphProperties::default(),
//!     GraphFlags::default(),
//!     &src.view(),
//!     &dst.view(),
//!     None,
//!     None,
//!     None,
//! )?;
//! let result = degrees::degrees(&handle, &graph, None, false)?;
//! assert_eq!(result.num_vertices(), 3);
//! # Ok(())
//! # }
//! ```

pub mod algorithms;
pub mod array;
pub mod graph;
pub mod resource;

pub(crate) mod translate;

pub use hipgraph_backends::{
    ActiveBackend, BetweennessParams, BfsParams, DegreeKind, GraphBackend, PagerankParams,
    SamplingParams, SimilarityCoefficient, SsspParams,
};
pub use hipgraph_common::types::{DataType, DataTypeId, GraphFlags, GraphProperties};
pub use hipgraph_common::utils::error::{Error, Result, Status};

pub use array::{ArrayView, ArrayViewMut, DeviceArray};
pub use graph::Graph;
pub use resource::ResourceHandle;

/// The backend everything in this crate dispatches to.
pub(crate) type Backend = ActiveBackend;
/// The active backend's compute context.
pub(crate) type BackendContext = <Backend as GraphBackend>::Context;
/// The active backend's type-erased buffer.
pub(crate) type BackendBuffer = <Backend as GraphBackend>::Buffer;
/// The active backend's graph object.
pub(crate) type BackendGraph = <Backend as GraphBackend>::Graph;
