//! Status codes and error objects for the C FFI layer.
//!
//! Unlike the thread-local pattern of SQLite and libgit2, this ABI carries
//! an explicit error object through a `*mut *mut HipgraphError`
//! out-parameter: a failing call allocates one, a successful call leaves the
//! out-parameter untouched, and the caller frees whatever it received.

use std::ffi::CString;
use std::os::raw::c_char;

use hipgraph_common::utils::error::{Error, Status};

/// Status codes returned by C FFI functions. Mirrors the public status set
/// value-for-value.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HipgraphStatus {
    Success = 0,
    UnknownError = 1,
    InvalidHandle = 2,
    AllocError = 3,
    InvalidInput = 4,
    NotImplemented = 5,
    UnsupportedTypeCombination = 6,
}

impl From<Status> for HipgraphStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => HipgraphStatus::Success,
            Status::UnknownError => HipgraphStatus::UnknownError,
            Status::InvalidHandle => HipgraphStatus::InvalidHandle,
            Status::AllocError => HipgraphStatus::AllocError,
            Status::InvalidInput => HipgraphStatus::InvalidInput,
            Status::NotImplemented => HipgraphStatus::NotImplemented,
            Status::UnsupportedTypeCombination => HipgraphStatus::UnsupportedTypeCombination,
        }
    }
}

/// Opaque error object. Created by a failing call, freed by
/// [`hipgraph_error_free`].
pub struct HipgraphError {
    message: CString,
}

impl HipgraphError {
    pub(crate) fn new(message: &str) -> Self {
        // A NUL inside the message would truncate it; replace and keep going.
        let sanitized = message.replace('\0', " ");
        Self {
            message: CString::new(sanitized).unwrap_or_default(),
        }
    }
}

/// Writes `err` into the out-parameter (when non-null) and returns its
/// status code.
pub(crate) fn report(err: &Error, error_out: *mut *mut HipgraphError) -> HipgraphStatus {
    if !error_out.is_null() {
        let boxed = Box::new(HipgraphError::new(&err.to_string()));
        // SAFETY: Caller passed a valid location for the error pointer.
        unsafe { *error_out = Box::into_raw(boxed) };
    }
    HipgraphStatus::from(err.status())
}

/// Dereference an opaque pointer, reporting `InvalidHandle` through the
/// error out-parameter on null.
macro_rules! try_ref {
    ($ptr:expr, $what:expr, $error:expr) => {{
        if $ptr.is_null() {
            return $crate::error::report(
                &hipgraph_common::utils::error::Error::InvalidHandle(format!(
                    "null {} pointer",
                    $what
                )),
                $error,
            );
        }
        // SAFETY: Caller guarantees the pointer came from the matching
        // factory and has not been freed.
        unsafe { &*$ptr }
    }};
}

/// Same as `try_ref!` but for functions that report errors by returning
/// null.
macro_rules! try_ref_or_null {
    ($ptr:expr) => {{
        if $ptr.is_null() {
            return std::ptr::null_mut();
        }
        // SAFETY: Caller guarantees the pointer came from the matching
        // factory and has not been freed.
        unsafe { &*$ptr }
    }};
}

/// Returns the error's human-readable message.
///
/// The pointer is owned by the error object and valid until
/// [`hipgraph_error_free`].
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_error_message(error: *const HipgraphError) -> *const c_char {
    if error.is_null() {
        return std::ptr::null();
    }
    // SAFETY: Caller guarantees a live error object.
    unsafe { (*error).message.as_ptr() }
}

/// Frees an error object. Freeing null is a no-op.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_error_free(error: *mut HipgraphError) {
    if error.is_null() {
        return;
    }
    // SAFETY: Caller guarantees this pointer came from a failing call and
    // has not been freed before.
    drop(unsafe { Box::from_raw(error) });
}
