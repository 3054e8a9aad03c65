//! Common utilities used throughout hipGRAPH.
//!
//! - [`error`] - The library [`Error`](error::Error) type and the closed
//!   [`Status`](error::Status) code set
//! - [`hash`] - Fast hashing with FxHash (non-cryptographic)

pub mod error;
pub mod hash;

pub use error::{Error, Result, Status};
