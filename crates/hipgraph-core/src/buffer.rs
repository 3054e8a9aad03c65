//! Type-erased element storage.
//!
//! [`TypedBuffer`] is a tagged union over the closed dtype set - the storage
//! behind every device array and result column in the host backend. Making
//! the tag part of the representation (rather than a side-channel integer)
//! means an invalid dtype is unrepresentable once a buffer exists; raw tags
//! are only ever validated at the ABI boundary, before a buffer is created.

use hipgraph_common::types::{DataType, DataTypeId};

use crate::error::{EngineError, EngineResult};

/// A type-erased, owned element buffer.
///
/// Allocation does not promise zero-initialization to callers (the current
/// implementation happens to zero-fill; the protocol contract does not).
#[derive(Debug, Clone, PartialEq)]
pub enum TypedBuffer {
    /// 32-bit signed integers
    Int32(Vec<i32>),
    /// 64-bit signed integers
    Int64(Vec<i64>),
    /// 32-bit floats
    Float32(Vec<f32>),
    /// 64-bit floats
    Float64(Vec<f64>),
    /// Platform-width unsigned integers
    SizeT(Vec<usize>),
}

/// Dispatch a block over every variant, binding the inner `Vec`.
macro_rules! with_vec {
    ($buf:expr, $v:ident => $body:expr) => {
        match $buf {
            TypedBuffer::Int32($v) => $body,
            TypedBuffer::Int64($v) => $body,
            TypedBuffer::Float32($v) => $body,
            TypedBuffer::Float64($v) => $body,
            TypedBuffer::SizeT($v) => $body,
        }
    };
}

impl TypedBuffer {
    /// Allocates a buffer of `len` elements of the given dtype.
    #[must_use]
    pub fn alloc(dtype: DataTypeId, len: usize) -> Self {
        match dtype {
            DataTypeId::Int32 => TypedBuffer::Int32(vec![0; len]),
            DataTypeId::Int64 => TypedBuffer::Int64(vec![0; len]),
            DataTypeId::Float32 => TypedBuffer::Float32(vec![0.0; len]),
            DataTypeId::Float64 => TypedBuffer::Float64(vec![0.0; len]),
            DataTypeId::SizeT => TypedBuffer::SizeT(vec![0; len]),
        }
    }

    /// Wraps an owned `Vec<T>` without copying.
    #[must_use]
    pub fn from_vec<T: Element>(v: Vec<T>) -> Self {
        T::buffer_from_vec(v)
    }

    /// The runtime element type of this buffer.
    #[must_use]
    pub fn dtype(&self) -> DataTypeId {
        match self {
            TypedBuffer::Int32(_) => DataTypeId::Int32,
            TypedBuffer::Int64(_) => DataTypeId::Int64,
            TypedBuffer::Float32(_) => DataTypeId::Float32,
            TypedBuffer::Float64(_) => DataTypeId::Float64,
            TypedBuffer::SizeT(_) => DataTypeId::SizeT,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        with_vec!(self, v => v.len())
    }

    /// `true` when the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total storage size in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.len() * self.dtype().size_of()
    }

    /// Borrows the elements as `&[T]`, checking the dtype.
    pub fn as_slice<T: Element>(&self) -> EngineResult<&[T]> {
        T::slice(self).ok_or_else(|| {
            EngineError::InvalidValue(format!(
                "buffer holds {}, requested {}",
                self.dtype(),
                T::ID
            ))
        })
    }

    /// Borrows the elements as `&mut [T]`, checking the dtype.
    pub fn as_mut_slice<T: Element>(&mut self) -> EngineResult<&mut [T]> {
        let dtype = self.dtype();
        T::slice_mut(self).ok_or_else(|| {
            EngineError::InvalidValue(format!("buffer holds {dtype}, requested {}", T::ID))
        })
    }

    /// Bulk-copies raw host bytes into the buffer.
    ///
    /// `src` must be exactly `byte_len()` bytes of native-endian elements of
    /// the buffer's dtype; the element count is the only guard, per the
    /// protocol contract.
    pub fn copy_from_bytes(&mut self, src: &[u8]) -> EngineResult<()> {
        if src.len() != self.byte_len() {
            return Err(EngineError::InvalidValue(format!(
                "host buffer is {} bytes, array needs {}",
                src.len(),
                self.byte_len()
            )));
        }
        let width = self.dtype().size_of();
        with_vec!(self, v => {
            for (elem, chunk) in v.iter_mut().zip(src.chunks_exact(width)) {
                *elem = Element::read_element(chunk);
            }
        });
        Ok(())
    }

    /// Bulk-copies the buffer into raw host bytes.
    pub fn copy_to_bytes(&self, dst: &mut [u8]) -> EngineResult<()> {
        if dst.len() != self.byte_len() {
            return Err(EngineError::InvalidValue(format!(
                "host buffer is {} bytes, array holds {}",
                dst.len(),
                self.byte_len()
            )));
        }
        let width = self.dtype().size_of();
        with_vec!(self, v => {
            for (elem, chunk) in v.iter().zip(dst.chunks_exact_mut(width)) {
                elem.write_element(chunk);
            }
        });
        Ok(())
    }

    /// Copies another buffer's contents into this one.
    ///
    /// Element count and dtype must both match.
    pub fn copy_from(&mut self, src: &TypedBuffer) -> EngineResult<()> {
        if self.dtype() != src.dtype() {
            return Err(EngineError::InvalidValue(format!(
                "cannot copy {} into {}",
                src.dtype(),
                self.dtype()
            )));
        }
        if self.len() != src.len() {
            return Err(EngineError::InvalidValue(format!(
                "cannot copy {} elements into {}",
                src.len(),
                self.len()
            )));
        }
        match (self, src) {
            (TypedBuffer::Int32(d), TypedBuffer::Int32(s)) => d.clone_from_slice(s),
            (TypedBuffer::Int64(d), TypedBuffer::Int64(s)) => d.clone_from_slice(s),
            (TypedBuffer::Float32(d), TypedBuffer::Float32(s)) => d.clone_from_slice(s),
            (TypedBuffer::Float64(d), TypedBuffer::Float64(s)) => d.clone_from_slice(s),
            (TypedBuffer::SizeT(d), TypedBuffer::SizeT(s)) => d.clone_from_slice(s),
            _ => unreachable!("dtype equality checked above"),
        }
        Ok(())
    }

    /// Raw pointer to the element storage. ABI escape hatch for the C layer;
    /// dereferencing is on the caller.
    #[must_use]
    pub fn as_byte_ptr(&self) -> *const u8 {
        with_vec!(self, v => v.as_ptr().cast())
    }

    /// Mutable raw pointer to the element storage.
    #[must_use]
    pub fn as_byte_ptr_mut(&mut self) -> *mut u8 {
        with_vec!(self, v => v.as_mut_ptr().cast())
    }

    /// Widens integer elements to `i64`. Vertex-id and edge-id paths use
    /// this; float buffers are rejected.
    pub fn to_i64_vec(&self) -> EngineResult<Vec<i64>> {
        match self {
            TypedBuffer::Int32(v) => Ok(v.iter().map(|&x| i64::from(x)).collect()),
            TypedBuffer::Int64(v) => Ok(v.clone()),
            TypedBuffer::SizeT(v) => Ok(v.iter().map(|&x| x as i64).collect()),
            _ => Err(EngineError::UnsupportedType(format!(
                "expected an integer buffer, got {}",
                self.dtype()
            ))),
        }
    }

    /// Widens float elements to `f64`. Weight paths use this; integer
    /// buffers are rejected.
    pub fn to_f64_vec(&self) -> EngineResult<Vec<f64>> {
        match self {
            TypedBuffer::Float32(v) => Ok(v.iter().map(|&x| f64::from(x)).collect()),
            TypedBuffer::Float64(v) => Ok(v.clone()),
            _ => Err(EngineError::UnsupportedType(format!(
                "expected a float buffer, got {}",
                self.dtype()
            ))),
        }
    }

    /// Narrows an `i64` vector into a buffer of the given integer dtype.
    pub fn from_i64_values(values: &[i64], dtype: DataTypeId) -> EngineResult<Self> {
        match dtype {
            DataTypeId::Int32 => {
                let mut out = Vec::with_capacity(values.len());
                for &v in values {
                    let narrowed = i32::try_from(v).map_err(|_| {
                        EngineError::UnsupportedType(format!("value {v} does not fit in int32"))
                    })?;
                    out.push(narrowed);
                }
                Ok(TypedBuffer::Int32(out))
            }
            DataTypeId::Int64 => Ok(TypedBuffer::Int64(values.to_vec())),
            DataTypeId::SizeT => {
                let mut out = Vec::with_capacity(values.len());
                for &v in values {
                    let narrowed = usize::try_from(v).map_err(|_| {
                        EngineError::UnsupportedType(format!("value {v} does not fit in size_t"))
                    })?;
                    out.push(narrowed);
                }
                Ok(TypedBuffer::SizeT(out))
            }
            other => Err(EngineError::UnsupportedType(format!(
                "{other} is not an integer dtype"
            ))),
        }
    }

    /// Narrows an `f64` vector into a buffer of the given float dtype.
    pub fn from_f64_values(values: &[f64], dtype: DataTypeId) -> EngineResult<Self> {
        match dtype {
            DataTypeId::Float32 => Ok(TypedBuffer::Float32(
                values.iter().map(|&v| v as f32).collect(),
            )),
            DataTypeId::Float64 => Ok(TypedBuffer::Float64(values.to_vec())),
            other => Err(EngineError::UnsupportedType(format!(
                "{other} is not a float dtype"
            ))),
        }
    }
}

/// Element types storable in a [`TypedBuffer`].
///
/// Extends the ABI-level [`DataType`] tag mapping with the buffer plumbing
/// the engine needs. Implemented for exactly the closed dtype set.
pub trait Element: DataType {
    /// Wraps a vector of this element type.
    fn buffer_from_vec(v: Vec<Self>) -> TypedBuffer;
    /// Borrows the matching variant's storage, or `None` on a dtype mismatch.
    fn slice(buf: &TypedBuffer) -> Option<&[Self]>;
    /// Mutable counterpart of [`Element::slice`].
    fn slice_mut(buf: &mut TypedBuffer) -> Option<&mut [Self]>;
    /// Reads one element from native-endian bytes.
    fn read_element(bytes: &[u8]) -> Self;
    /// Writes one element as native-endian bytes.
    fn write_element(&self, out: &mut [u8]);
}

macro_rules! impl_element {
    ($ty:ty, $variant:ident) => {
        impl Element for $ty {
            fn buffer_from_vec(v: Vec<Self>) -> TypedBuffer {
                TypedBuffer::$variant(v)
            }

            fn slice(buf: &TypedBuffer) -> Option<&[Self]> {
                match buf {
                    TypedBuffer::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn slice_mut(buf: &mut TypedBuffer) -> Option<&mut [Self]> {
                match buf {
                    TypedBuffer::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn read_element(bytes: &[u8]) -> Self {
                <$ty as DataType>::read_ne(bytes)
            }

            fn write_element(&self, out: &mut [u8]) {
                <$ty as DataType>::write_ne(*self, out)
            }
        }
    };
}

impl_element!(i32, Int32);
impl_element!(i64, Int64);
impl_element!(f32, Float32);
impl_element!(f64, Float64);
impl_element!(usize, SizeT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_has_requested_shape() {
        for dtype in DataTypeId::ALL {
            let buf = TypedBuffer::alloc(dtype, 7);
            assert_eq!(buf.dtype(), dtype);
            assert_eq!(buf.len(), 7);
            assert_eq!(buf.byte_len(), 7 * dtype.size_of());
        }
    }

    #[test]
    fn byte_round_trip_every_dtype() {
        fn round_trip<T: Element + PartialEq + std::fmt::Debug>(values: Vec<T>) {
            let n = values.len();
            let src = TypedBuffer::from_vec(values.clone());
            let mut bytes = vec![0u8; src.byte_len()];
            src.copy_to_bytes(&mut bytes).unwrap();

            let mut dst = TypedBuffer::alloc(T::ID, n);
            dst.copy_from_bytes(&bytes).unwrap();
            assert_eq!(dst.as_slice::<T>().unwrap(), values.as_slice());
        }

        round_trip::<i32>(vec![-1, 0, i32::MAX]);
        round_trip::<i64>(vec![i64::MIN, 7]);
        round_trip::<f32>(vec![0.5, -2.25]);
        round_trip::<f64>(vec![1e300, -0.0]);
        round_trip::<usize>(vec![0, usize::MAX]);
        round_trip::<i32>(vec![]);
    }

    #[test]
    fn copy_rejects_byte_count_mismatch() {
        let mut buf = TypedBuffer::alloc(DataTypeId::Int32, 3);
        let err = buf.copy_from_bytes(&[0u8; 8]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidValue(_)));

        let mut out = vec![0u8; 13];
        let err = buf.copy_to_bytes(&mut out).unwrap_err();
        assert!(matches!(err, EngineError::InvalidValue(_)));
    }

    #[test]
    fn buffer_copy_checks_dtype_and_len() {
        let src = TypedBuffer::from_vec(vec![1i32, 2, 3]);
        let mut wrong_type = TypedBuffer::alloc(DataTypeId::Int64, 3);
        assert!(wrong_type.copy_from(&src).is_err());

        let mut wrong_len = TypedBuffer::alloc(DataTypeId::Int32, 2);
        assert!(wrong_len.copy_from(&src).is_err());

        let mut ok = TypedBuffer::alloc(DataTypeId::Int32, 3);
        ok.copy_from(&src).unwrap();
        assert_eq!(ok.as_slice::<i32>().unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn typed_slice_checks_dtype() {
        let buf = TypedBuffer::from_vec(vec![1.0f64]);
        assert!(buf.as_slice::<f64>().is_ok());
        assert!(buf.as_slice::<i32>().is_err());
    }

    #[test]
    fn widening_and_narrowing() {
        let buf = TypedBuffer::from_vec(vec![1i32, -2, 3]);
        assert_eq!(buf.to_i64_vec().unwrap(), vec![1, -2, 3]);
        assert!(buf.to_f64_vec().is_err());

        let narrowed = TypedBuffer::from_i64_values(&[5, 6], DataTypeId::Int32).unwrap();
        assert_eq!(narrowed.as_slice::<i32>().unwrap(), &[5, 6]);

        let too_big = TypedBuffer::from_i64_values(&[i64::MAX], DataTypeId::Int32);
        assert!(too_big.is_err());
    }
}
