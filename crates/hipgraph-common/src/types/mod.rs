//! Core vocabulary types: runtime data-type tags and graph metadata.
//!
//! [`DataTypeId`] is the closed set of element types a type-erased array can
//! carry. [`DataType`] maps concrete Rust element types onto those tags so
//! typed entry points never take a tag the element type contradicts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Runtime element-type tag for type-erased arrays.
///
/// The set is closed: every array, view, and result buffer in the protocol
/// carries exactly one of these. Raw values arriving over the C ABI are
/// validated with [`DataTypeId::from_raw`] before anything else happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum DataTypeId {
    /// 32-bit signed integer
    Int32 = 0,
    /// 64-bit signed integer
    Int64 = 1,
    /// 32-bit IEEE float
    Float32 = 2,
    /// 64-bit IEEE float
    Float64 = 3,
    /// Platform-width unsigned integer (`size_t`)
    SizeT = 4,
}

impl DataTypeId {
    /// All tags, in raw-value order. Handy for exhaustive mapping tests.
    pub const ALL: [DataTypeId; 5] = [
        DataTypeId::Int32,
        DataTypeId::Int64,
        DataTypeId::Float32,
        DataTypeId::Float64,
        DataTypeId::SizeT,
    ];

    /// Width of one element in bytes.
    #[inline]
    #[must_use]
    pub const fn size_of(self) -> usize {
        match self {
            DataTypeId::Int32 | DataTypeId::Float32 => 4,
            DataTypeId::Int64 | DataTypeId::Float64 => 8,
            DataTypeId::SizeT => size_of::<usize>(),
        }
    }

    /// Returns the tag for a raw value, or `None` if the value is outside the
    /// closed set. Callers on the C ABI path reject `None` before dispatching.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(DataTypeId::Int32),
            1 => Some(DataTypeId::Int64),
            2 => Some(DataTypeId::Float32),
            3 => Some(DataTypeId::Float64),
            4 => Some(DataTypeId::SizeT),
            _ => None,
        }
    }

    /// The raw value carried over the C ABI.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Is this one of the two integer vertex-id types?
    #[inline]
    #[must_use]
    pub const fn is_vertex_type(self) -> bool {
        matches!(self, DataTypeId::Int32 | DataTypeId::Int64)
    }

    /// Is this one of the two floating-point weight types?
    #[inline]
    #[must_use]
    pub const fn is_weight_type(self) -> bool {
        matches!(self, DataTypeId::Float32 | DataTypeId::Float64)
    }
}

impl fmt::Display for DataTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataTypeId::Int32 => write!(f, "int32"),
            DataTypeId::Int64 => write!(f, "int64"),
            DataTypeId::Float32 => write!(f, "float32"),
            DataTypeId::Float64 => write!(f, "float64"),
            DataTypeId::SizeT => write!(f, "size_t"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for usize {}
}

/// A Rust element type usable in a type-erased array.
///
/// Sealed over exactly the types in [`DataTypeId`], so an unsupported element
/// type is a compile error rather than a runtime tag check.
pub trait DataType: sealed::Sealed + Copy + Default + 'static {
    /// The tag this element type carries at runtime.
    const ID: DataTypeId;

    /// Reads one element from native-endian bytes.
    ///
    /// `bytes` must be exactly `Self::ID.size_of()` long; callers slice
    /// accordingly.
    fn read_ne(bytes: &[u8]) -> Self;

    /// Writes one element as native-endian bytes into `out`.
    fn write_ne(self, out: &mut [u8]);
}

macro_rules! impl_data_type {
    ($ty:ty, $id:expr) => {
        impl DataType for $ty {
            const ID: DataTypeId = $id;

            #[inline]
            fn read_ne(bytes: &[u8]) -> Self {
                let mut raw = [0u8; size_of::<$ty>()];
                raw.copy_from_slice(bytes);
                <$ty>::from_ne_bytes(raw)
            }

            #[inline]
            fn write_ne(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }
        }
    };
}

impl_data_type!(i32, DataTypeId::Int32);
impl_data_type!(i64, DataTypeId::Int64);
impl_data_type!(f32, DataTypeId::Float32);
impl_data_type!(f64, DataTypeId::Float64);
impl_data_type!(usize, DataTypeId::SizeT);

/// Declared structural properties of a graph.
///
/// These are caller assertions, not derived facts: a backend may exploit
/// `is_symmetric` (e.g. in/out degrees alias one buffer) without verifying it
/// unless an expensive check is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphProperties {
    /// Every edge (u, v) has a mirror edge (v, u).
    pub is_symmetric: bool,
    /// Parallel edges between the same vertex pair may exist.
    pub is_multigraph: bool,
}

/// Construction flags shared by the edge-list and CSR graph constructors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFlags {
    /// Store the adjacency transposed (by destination). Algorithms that
    /// prefer the other orientation may materialize it.
    pub store_transposed: bool,
    /// Renumber vertex ids into a dense `0..num_vertices` range. Required
    /// whenever the input ids are not already dense.
    pub renumber: bool,
    /// Drop edges whose source equals their destination.
    pub drop_self_loops: bool,
    /// Collapse parallel edges between the same vertex pair, keeping the
    /// first occurrence.
    pub drop_multi_edges: bool,
    /// Validate input consistency (bounds, lengths, monotonicity) at extra
    /// cost. With this off, invalid input is undefined.
    pub do_expensive_check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dtype_raw_round_trip() {
        for dtype in DataTypeId::ALL {
            assert_eq!(DataTypeId::from_raw(dtype.as_raw()), Some(dtype));
        }
    }

    #[test]
    fn dtype_rejects_out_of_range_raw() {
        assert_eq!(DataTypeId::from_raw(5), None);
        assert_eq!(DataTypeId::from_raw(u32::MAX), None);
    }

    #[test]
    fn dtype_widths() {
        assert_eq!(DataTypeId::Int32.size_of(), 4);
        assert_eq!(DataTypeId::Int64.size_of(), 8);
        assert_eq!(DataTypeId::Float32.size_of(), 4);
        assert_eq!(DataTypeId::Float64.size_of(), 8);
        assert_eq!(DataTypeId::SizeT.size_of(), size_of::<usize>());
    }

    #[test]
    fn element_byte_round_trip() {
        let mut buf = [0u8; 8];
        (-42i64).write_ne(&mut buf);
        assert_eq!(i64::read_ne(&buf), -42);

        let mut buf = [0u8; 4];
        1.5f32.write_ne(&mut buf);
        assert_eq!(f32::read_ne(&buf), 1.5);
    }

    #[test]
    fn vertex_and_weight_type_classification() {
        assert!(DataTypeId::Int32.is_vertex_type());
        assert!(DataTypeId::Int64.is_vertex_type());
        assert!(!DataTypeId::Float32.is_vertex_type());
        assert!(DataTypeId::Float64.is_weight_type());
        assert!(!DataTypeId::SizeT.is_weight_type());
    }
}
