//! The in-tree host graph engine.
//!
//! This crate is the reference backend behind the hipGRAPH protocol: a
//! CPU-resident implementation of type-erased buffers, the CSR graph store,
//! and the algorithm families the public API dispatches to. It plays the
//! role a native GPU library plays for the real wrappers - which is why its
//! error type is the "backend-native" status set the dispatch layer
//! translates from, not the public one.
//!
//! - [`buffer`] - [`TypedBuffer`](buffer::TypedBuffer), the type-erased
//!   element store
//! - [`graph`] - [`CsrGraph`](graph::CsrGraph) construction and access
//! - [`algorithms`] - degrees, paths, centrality, components, clustering,
//!   similarity, sampling, induced subgraph
//! - [`error`] - the engine-native [`EngineError`](error::EngineError)

pub mod algorithms;
pub mod buffer;
pub mod error;
pub mod graph;

pub use buffer::{Element, TypedBuffer};
pub use error::{EngineError, EngineResult};
pub use graph::CsrGraph;
