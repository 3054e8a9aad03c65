//! Shared vocabulary used throughout hipGRAPH.
//!
//! - [`types`] - Data-type tags, graph properties, and construction flags
//! - [`utils`] - Error types like [`Error`] and the [`Status`] code set
//!
//! Everything here is plain data: no handles, no buffers, no backend state.
//! The heavier protocol objects live in the `hipgraph` facade crate.

pub mod types;
pub mod utils;

pub use types::{DataType, DataTypeId, GraphFlags, GraphProperties};
pub use utils::error::{Error, Result, Status};
