//! Type-erased device arrays and views.
//!
//! A [`DeviceArray`] owns backend storage of one runtime dtype. Views borrow
//! it: [`ArrayView`] for reading, [`ArrayViewMut`] for the host-to-device
//! copy direction. Borrowing makes the protocol's "a view must not outlive
//! the viewed array" rule a compile-time fact instead of caller discipline.
//!
//! Copies are byte-exact bulk transfers guarded by element count and dtype;
//! the typed helpers (`from_slice`, `to_vec`) are sugar over the same path.

use hipgraph_common::types::{DataType, DataTypeId};
use hipgraph_common::utils::error::{Error, Result};

use crate::resource::ResourceHandle;
use crate::{Backend, BackendBuffer, GraphBackend, translate};

/// Serializes a typed slice into native-endian bytes.
pub(crate) fn slice_to_bytes<T: DataType>(data: &[T]) -> Vec<u8> {
    let width = T::ID.size_of();
    let mut bytes = vec![0u8; data.len() * width];
    for (value, chunk) in data.iter().zip(bytes.chunks_exact_mut(width)) {
        value.write_ne(chunk);
    }
    bytes
}

/// Deserializes native-endian bytes into a typed vector.
pub(crate) fn bytes_to_vec<T: DataType>(bytes: &[u8]) -> Vec<T> {
    bytes
        .chunks_exact(T::ID.size_of())
        .map(T::read_ne)
        .collect()
}

/// An owned, type-erased array in backend storage.
pub struct DeviceArray {
    buf: BackendBuffer,
}

impl DeviceArray {
    /// Allocates `len` elements of `dtype`. Contents are unspecified.
    pub fn create(handle: &ResourceHandle, dtype: DataTypeId, len: usize) -> Result<Self> {
        let buf = Backend::alloc(handle.ctx(), dtype, len).map_err(translate::backend_error)?;
        Ok(Self { buf })
    }

    /// Allocates and fills an array from a typed host slice.
    pub fn from_slice<T: DataType>(handle: &ResourceHandle, data: &[T]) -> Result<Self> {
        let mut array = Self::create(handle, T::ID, data.len())?;
        array
            .view_mut()
            .copy_from_host_bytes(handle, &slice_to_bytes(data))?;
        Ok(array)
    }

    /// The runtime element type.
    #[must_use]
    pub fn dtype(&self) -> DataTypeId {
        Backend::buffer_dtype(&self.buf)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        Backend::buffer_len(&self.buf)
    }

    /// `true` when the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A non-owning read view of the whole array.
    #[must_use]
    pub fn view(&self) -> ArrayView<'_> {
        ArrayView { buf: &self.buf }
    }

    /// A non-owning write view of the whole array.
    #[must_use]
    pub fn view_mut(&mut self) -> ArrayViewMut<'_> {
        ArrayViewMut { buf: &mut self.buf }
    }
}

/// A non-owning read view of backend storage.
///
/// Obtained from an owning [`DeviceArray`] or from a result object's
/// accessors; either way it borrows its owner for its whole lifetime.
#[derive(Clone, Copy)]
pub struct ArrayView<'a> {
    buf: &'a BackendBuffer,
}

impl<'a> ArrayView<'a> {
    pub(crate) fn of(buf: &'a BackendBuffer) -> Self {
        Self { buf }
    }

    pub(crate) fn buffer(&self) -> &'a BackendBuffer {
        self.buf
    }

    /// The runtime element type.
    #[must_use]
    pub fn dtype(&self) -> DataTypeId {
        Backend::buffer_dtype(self.buf)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        Backend::buffer_len(self.buf)
    }

    /// `true` when the view covers no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bulk-copies the viewed elements into `dst` as native-endian bytes.
    /// `dst` must be exactly `len * dtype.size_of()` bytes.
    pub fn copy_to_host_bytes(&self, handle: &ResourceHandle, dst: &mut [u8]) -> Result<()> {
        Backend::copy_to_bytes(handle.ctx(), self.buf, dst).map_err(translate::backend_error)
    }

    /// Copies the viewed elements into a typed host vector, checking the
    /// dtype.
    pub fn to_vec<T: DataType>(&self, handle: &ResourceHandle) -> Result<Vec<T>> {
        if self.dtype() != T::ID {
            return Err(Error::InvalidInput(format!(
                "view holds {}, requested {}",
                self.dtype(),
                T::ID
            )));
        }
        let mut bytes = vec![0u8; self.len() * T::ID.size_of()];
        self.copy_to_host_bytes(handle, &mut bytes)?;
        Ok(bytes_to_vec(&bytes))
    }

    /// Raw pointer to the viewed storage. ABI escape hatch for the C layer;
    /// dereferencing is on the caller, and the pointer dies with the owner.
    #[must_use]
    pub fn as_raw_ptr(&self) -> *const u8 {
        Backend::buffer_ptr(self.buf)
    }
}

/// A non-owning write view of backend storage.
pub struct ArrayViewMut<'a> {
    buf: &'a mut BackendBuffer,
}

impl ArrayViewMut<'_> {
    /// The runtime element type.
    #[must_use]
    pub fn dtype(&self) -> DataTypeId {
        Backend::buffer_dtype(self.buf)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        Backend::buffer_len(self.buf)
    }

    /// `true` when the view covers no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bulk-copies native-endian host bytes into the viewed storage. `src`
    /// must be exactly `len * dtype.size_of()` bytes.
    pub fn copy_from_host_bytes(&mut self, handle: &ResourceHandle, src: &[u8]) -> Result<()> {
        Backend::copy_from_bytes(handle.ctx(), self.buf, src).map_err(translate::backend_error)
    }

    /// Copies a typed host slice into the viewed storage, checking dtype and
    /// element count.
    pub fn copy_from_slice<T: DataType>(&mut self, handle: &ResourceHandle, src: &[T]) -> Result<()> {
        if self.dtype() != T::ID {
            return Err(Error::InvalidInput(format!(
                "view holds {}, source is {}",
                self.dtype(),
                T::ID
            )));
        }
        self.copy_from_host_bytes(handle, &slice_to_bytes(src))
    }

    /// Copies another view's elements into this one; dtype and element
    /// count must match.
    pub fn copy_from_view(&mut self, handle: &ResourceHandle, src: &ArrayView<'_>) -> Result<()> {
        Backend::copy_buffer(handle.ctx(), self.buf, src.buf).map_err(translate::backend_error)
    }

    /// Mutable raw pointer to the viewed storage. ABI escape hatch for the
    /// C layer; dereferencing is on the caller.
    #[must_use]
    pub fn as_raw_ptr_mut(&mut self) -> *mut u8 {
        Backend::buffer_ptr_mut(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> ResourceHandle {
        ResourceHandle::new().unwrap()
    }

    #[test]
    fn round_trip_every_dtype() {
        let h = handle();

        fn check<T: DataType + PartialEq + std::fmt::Debug>(h: &ResourceHandle, data: Vec<T>) {
            let array = DeviceArray::from_slice(h, &data).unwrap();
            assert_eq!(array.dtype(), T::ID);
            assert_eq!(array.len(), data.len());
            assert_eq!(array.view().to_vec::<T>(h).unwrap(), data);
        }

        check::<i32>(&h, vec![]);
        check::<i32>(&h, vec![42]);
        check::<i32>(&h, (0..4096).collect());
        check::<i64>(&h, vec![i64::MIN, 0, i64::MAX]);
        check::<f32>(&h, vec![0.5, -1.5]);
        check::<f64>(&h, vec![1e300, -2.5]);
        check::<usize>(&h, vec![0, usize::MAX]);
    }

    #[test]
    fn view_observes_writes_through_owner() {
        let h = handle();
        let mut array = DeviceArray::from_slice(&h, &[1i32, 2, 3]).unwrap();
        array
            .view_mut()
            .copy_from_slice(&h, &[7i32, 8, 9])
            .unwrap();
        assert_eq!(array.view().to_vec::<i32>(&h).unwrap(), vec![7, 8, 9]);
    }

    #[test]
    fn typed_copy_checks_dtype() {
        let h = handle();
        let mut array = DeviceArray::create(&h, DataTypeId::Int64, 2).unwrap();
        let err = array
            .view_mut()
            .copy_from_slice(&h, &[1i32, 2])
            .unwrap_err();
        assert_eq!(err.status(), crate::Status::InvalidInput);
        assert!(array.view().to_vec::<i32>(&h).is_err());
    }

    #[test]
    fn byte_copy_checks_length() {
        let h = handle();
        let mut array = DeviceArray::create(&h, DataTypeId::Int32, 4).unwrap();
        let err = array
            .view_mut()
            .copy_from_host_bytes(&h, &[0u8; 7])
            .unwrap_err();
        assert_eq!(err.status(), crate::Status::InvalidInput);
    }

    #[test]
    fn view_to_view_copy() {
        let h = handle();
        let src = DeviceArray::from_slice(&h, &[5i64, 6]).unwrap();
        let mut dst = DeviceArray::create(&h, DataTypeId::Int64, 2).unwrap();
        dst.view_mut().copy_from_view(&h, &src.view()).unwrap();
        assert_eq!(dst.view().to_vec::<i64>(&h).unwrap(), vec![5, 6]);

        let mut wrong = DeviceArray::create(&h, DataTypeId::Int32, 2).unwrap();
        assert!(wrong.view_mut().copy_from_view(&h, &src.view()).is_err());
    }

    #[test]
    fn create_use_drop_cycles() {
        let h = handle();
        for i in 0..500 {
            let array = DeviceArray::from_slice(&h, &[i as i32; 16]).unwrap();
            assert_eq!(array.len(), 16);
        }
    }
}
