//! C FFI bindings for hipGRAPH.
//!
//! This crate exposes the protocol as a C-compatible API: opaque handles,
//! a closed status-code set, explicit error objects, and one free function
//! per owning object. Callable from C, C++, or any language with C interop.
//!
//! # Memory Management
//!
//! Every pointer returned by a `hipgraph_*` factory must be released by its
//! matching `hipgraph_*_free` function, exactly once. Views returned by
//! array and result accessors are small heap objects the caller frees with
//! [`hipgraph_type_erased_device_array_view_free`]; the storage they alias
//! belongs to the array or result that produced them and dies with it.
//! Use-after-free and double-free are undefined, exactly as in any C API.
//!
//! # Error Handling
//!
//! Fallible functions return a [`HipgraphStatus`] and take a trailing
//! `*mut *mut HipgraphError` out-parameter. On non-success the out-parameter
//! receives an error object whose message [`hipgraph_error_message`]
//! returns; the caller frees it with [`hipgraph_error_free`] (freeing null
//! is a no-op). On success the out-parameter is left untouched.
//!
//! # Thread Safety
//!
//! This layer adds no locking. A resource handle may be used from multiple
//! threads only as far as the compiled-in backend allows.

#![allow(unsafe_code)]

#[macro_use]
mod error;
mod algorithms;
mod array;
mod graph;
mod resource;
mod types;

pub use algorithms::*;
pub use array::*;
pub use error::{HipgraphError, HipgraphStatus, hipgraph_error_free, hipgraph_error_message};
pub use graph::*;
pub use resource::*;
pub use types::{
    HIPGRAPH_FALSE, HIPGRAPH_TRUE, HipgraphDeviceArray, HipgraphDeviceArrayView, HipgraphGraph,
    HipgraphGraphProperties, HipgraphHostArray, HipgraphResourceHandle, hipgraph_bool_t,
};
