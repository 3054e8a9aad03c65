//! Error handling for hipGRAPH.
//!
//! [`Status`] is the closed code set every fallible entry point resolves to;
//! it is what crosses the C ABI. [`Error`] is the library-side error carrying
//! a message, with a total mapping onto [`Status`]. Backend-native statuses
//! are translated into [`Error`] by the dispatch layer; anything it does not
//! recognize collapses to [`Status::UnknownError`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Status codes crossing the public ABI.
///
/// The set is closed: translation from any backend's own status enumeration
/// is a total function into exactly these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Status {
    /// The call succeeded.
    Success = 0,
    /// Catch-all, including untranslatable backend statuses.
    UnknownError = 1,
    /// Malformed or stale resource handle.
    InvalidHandle = 2,
    /// Backend memory allocation failure.
    AllocError = 3,
    /// Malformed arguments, including size/type mismatches.
    InvalidInput = 4,
    /// The backend lacks the requested feature.
    NotImplemented = 5,
    /// A type combination the backend cannot represent, e.g. a vertex count
    /// exceeding the chosen index width.
    UnsupportedTypeCombination = 6,
}

impl Status {
    /// All codes, in raw-value order. Handy for exhaustive mapping tests.
    pub const ALL: [Status; 7] = [
        Status::Success,
        Status::UnknownError,
        Status::InvalidHandle,
        Status::AllocError,
        Status::InvalidInput,
        Status::NotImplemented,
        Status::UnsupportedTypeCombination,
    ];

    /// Returns the code for a raw value, or `None` outside the closed set.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Status::Success),
            1 => Some(Status::UnknownError),
            2 => Some(Status::InvalidHandle),
            3 => Some(Status::AllocError),
            4 => Some(Status::InvalidInput),
            5 => Some(Status::NotImplemented),
            6 => Some(Status::UnsupportedTypeCombination),
            _ => None,
        }
    }

    /// The raw value carried over the C ABI.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::UnknownError => write!(f, "unknown error"),
            Status::InvalidHandle => write!(f, "invalid handle"),
            Status::AllocError => write!(f, "allocation error"),
            Status::InvalidInput => write!(f, "invalid input"),
            Status::NotImplemented => write!(f, "not implemented"),
            Status::UnsupportedTypeCombination => write!(f, "unsupported type combination"),
        }
    }
}

/// The hipGRAPH library error.
///
/// One variant per non-success [`Status`], plus [`Error::Backend`] for
/// failures a backend reported but the translation layer could not classify.
#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum Error {
    /// Malformed or stale resource handle.
    #[error("invalid handle: {0}")]
    InvalidHandle(String),

    /// Backend memory allocation failure.
    #[error("allocation failed: {0}")]
    Alloc(String),

    /// Malformed arguments, including size/type mismatches.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The backend lacks the requested feature.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// A type combination the backend cannot represent.
    #[error("unsupported type combination: {0}")]
    UnsupportedTypeCombination(String),

    /// Unclassifiable backend failure.
    #[error("backend error: {0}")]
    Backend(String),
}

impl Error {
    /// The public status code this error resolves to.
    ///
    /// Total: every variant maps to exactly one non-success code.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::from(self)
    }

    /// Reconstructs an error from a status code and message.
    ///
    /// Used by the dispatch layer when a backend hands back a status it has
    /// already translated. `Success` is not an error; it maps to the
    /// catch-all so a misbehaving backend cannot smuggle a success code
    /// through the failure path.
    #[must_use]
    pub fn from_status(status: Status, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            Status::InvalidHandle => Error::InvalidHandle(message),
            Status::AllocError => Error::Alloc(message),
            Status::InvalidInput => Error::InvalidInput(message),
            Status::NotImplemented => Error::NotImplemented(message),
            Status::UnsupportedTypeCombination => Error::UnsupportedTypeCombination(message),
            Status::UnknownError | Status::Success => Error::Backend(message),
        }
    }
}

impl From<&Error> for Status {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidHandle(_) => Status::InvalidHandle,
            Error::Alloc(_) => Status::AllocError,
            Error::InvalidInput(_) => Status::InvalidInput,
            Error::NotImplemented(_) => Status::NotImplemented,
            Error::UnsupportedTypeCombination(_) => Status::UnsupportedTypeCombination,
            Error::Backend(_) => Status::UnknownError,
        }
    }
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;
