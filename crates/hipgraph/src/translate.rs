//! Backend-failure translation.
//!
//! The single point where a backend's native failure becomes a public
//! [`Error`]. The mapping is total by construction: `BackendFailure::status`
//! covers every native code, and a status the facade cannot classify
//! collapses to the catch-all inside [`Error::from_status`].

use hipgraph_backends::BackendFailure;
use hipgraph_common::utils::error::Error;

/// Translates the active backend's failure into the public error.
pub(crate) fn backend_error<E: BackendFailure>(err: E) -> Error {
    Error::from_status(err.status(), err.to_string())
}
