//! Engine-native errors.
//!
//! These are the host backend's own failure codes, deliberately distinct
//! from the public [`Status`](hipgraph_common::Status) set: the dispatch
//! layer owns the (total) translation between the two, exactly as it would
//! for a native GPU library's status enumeration.

use thiserror::Error;

/// Failure codes native to the host engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Buffer or workspace allocation failed.
    #[error("out of memory: {0}")]
    OutOfMemory(String),

    /// An argument is malformed: mismatched lengths, bad flag combination,
    /// negative weight where none is allowed.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A vertex or edge id is outside the graph.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(String),

    /// Element types that cannot be combined, e.g. a float vertex array or a
    /// vertex count exceeding the internal index width.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// The engine does not implement the requested operation.
    #[error("not supported: {0}")]
    NotSupported(String),

    /// An engine invariant was broken. Always a bug.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;
