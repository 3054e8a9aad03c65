//! Type-erased array and array-view functions.
//!
//! Copies at this layer are byte-exact bulk transfers: the element count and
//! dtype recorded in the views are the only guard, and the caller's host
//! buffers must match `len * size_of(dtype)` bytes. Runtime dtype values
//! arriving from C are validated against the closed set before anything is
//! allocated; an unrecognized value is rejected with `UnknownError` without
//! reaching the backend.

use std::os::raw::c_void;

use hipgraph::DeviceArray;
use hipgraph_common::types::DataTypeId;
use hipgraph_common::utils::error::Error;

use crate::error::{HipgraphError, HipgraphStatus, report};
use crate::types::{HipgraphDeviceArray, HipgraphDeviceArrayView, HipgraphHostArray,
    HipgraphResourceHandle};

/// Validates a raw dtype value against the closed set.
pub(crate) fn parse_dtype(raw: u32) -> Result<DataTypeId, Error> {
    DataTypeId::from_raw(raw)
        .ok_or_else(|| Error::Backend(format!("unrecognized data type value {raw}")))
}

fn array_create(
    handle: *const HipgraphResourceHandle,
    n_elems: usize,
    dtype: u32,
    error: *mut *mut HipgraphError,
) -> Result<DeviceArray, HipgraphStatus> {
    if handle.is_null() {
        return Err(report(
            &Error::InvalidHandle("null resource handle pointer".into()),
            error,
        ));
    }
    let dtype = match parse_dtype(dtype) {
        Ok(dtype) => dtype,
        Err(err) => return Err(report(&err, error)),
    };
    // SAFETY: Caller guarantees a live handle.
    let handle = unsafe { &(*handle).inner };
    DeviceArray::create(handle, dtype, n_elems).map_err(|err| report(&err, error))
}

/// Creates a type-erased device array of `n_elems` elements of `dtype`.
/// Zero-initialization is not guaranteed.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_device_array_create(
    handle: *const HipgraphResourceHandle,
    n_elems: usize,
    dtype: u32,
    array_out: *mut *mut HipgraphDeviceArray,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    if array_out.is_null() {
        return report(&Error::InvalidInput("null array out-pointer".into()), error);
    }
    match array_create(handle, n_elems, dtype, error) {
        Ok(inner) => {
            // SAFETY: array_out checked non-null above.
            unsafe { *array_out = Box::into_raw(Box::new(HipgraphDeviceArray { inner })) };
            HipgraphStatus::Success
        }
        Err(status) => status,
    }
}

/// Frees a device array. Views taken from it become invalid.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_device_array_free(array: *mut HipgraphDeviceArray) {
    if array.is_null() {
        return;
    }
    // SAFETY: Caller guarantees single ownership of the pointer.
    drop(unsafe { Box::from_raw(array) });
}

/// Creates a view of an owning device array. The caller frees the view
/// object; the storage stays with the array.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_device_array_view(
    array: *mut HipgraphDeviceArray,
) -> *mut HipgraphDeviceArrayView {
    if array.is_null() {
        return std::ptr::null_mut();
    }
    // SAFETY: Caller guarantees a live, uniquely-owned array.
    let inner = unsafe { &mut (*array).inner };
    let view = HipgraphDeviceArrayView {
        ptr: inner.view_mut().as_raw_ptr_mut(),
        len: inner.len(),
        dtype: inner.dtype(),
        array: array.cast_const(),
    };
    Box::into_raw(Box::new(view))
}

/// Wraps caller-owned memory in a view without copying. The memory must
/// hold `n_elems` elements of `dtype` and outlive the view.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_device_array_view_create(
    pointer: *mut c_void,
    n_elems: usize,
    dtype: u32,
    view_out: *mut *mut HipgraphDeviceArrayView,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    if view_out.is_null() {
        return report(&Error::InvalidInput("null view out-pointer".into()), error);
    }
    if pointer.is_null() && n_elems > 0 {
        return report(
            &Error::InvalidInput("null pointer for non-empty view".into()),
            error,
        );
    }
    let dtype = match parse_dtype(dtype) {
        Ok(dtype) => dtype,
        Err(err) => return report(&err, error),
    };
    let view = HipgraphDeviceArrayView {
        ptr: pointer.cast(),
        len: n_elems,
        dtype,
        array: std::ptr::null(),
    };
    // SAFETY: view_out checked non-null above.
    unsafe { *view_out = Box::into_raw(Box::new(view)) };
    HipgraphStatus::Success
}

/// Frees a view object. The storage it aliased is untouched. Freeing null
/// is a no-op.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_device_array_view_free(
    view: *mut HipgraphDeviceArrayView,
) {
    if view.is_null() {
        return;
    }
    // SAFETY: Caller guarantees single ownership of the view object.
    drop(unsafe { Box::from_raw(view) });
}

/// Element count of a view; 0 on null.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_device_array_view_size(
    view: *const HipgraphDeviceArrayView,
) -> usize {
    if view.is_null() {
        return 0;
    }
    // SAFETY: Caller guarantees a live view.
    unsafe { (*view).len }
}

/// Raw dtype value of a view; `u32::MAX` on null.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_device_array_view_type(
    view: *const HipgraphDeviceArrayView,
) -> u32 {
    if view.is_null() {
        return u32::MAX;
    }
    // SAFETY: Caller guarantees a live view.
    unsafe { (*view).dtype.as_raw() }
}

/// Bulk-copies host bytes into the viewed storage. `h_src` must hold
/// exactly `size * size_of(dtype)` bytes.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_device_array_view_copy_from_host(
    handle: *const HipgraphResourceHandle,
    dst: *mut HipgraphDeviceArrayView,
    h_src: *const c_void,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let _ = try_ref!(handle, "resource handle", error);
    if dst.is_null() {
        return report(&Error::InvalidInput("null destination view".into()), error);
    }
    // SAFETY: Caller guarantees a live view.
    let dst = unsafe { &*dst };
    if h_src.is_null() && dst.len > 0 {
        return report(&Error::InvalidInput("null host source buffer".into()), error);
    }
    // SAFETY: Caller guarantees h_src holds byte_len() readable bytes and
    // the view's owner is still alive.
    unsafe {
        std::ptr::copy_nonoverlapping(h_src.cast::<u8>(), dst.ptr, dst.byte_len());
    }
    HipgraphStatus::Success
}

/// Bulk-copies the viewed storage into host bytes. `h_dst` must hold
/// exactly `size * size_of(dtype)` writable bytes.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_device_array_view_copy_to_host(
    handle: *const HipgraphResourceHandle,
    h_dst: *mut c_void,
    src: *const HipgraphDeviceArrayView,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let _ = try_ref!(handle, "resource handle", error);
    if src.is_null() {
        return report(&Error::InvalidInput("null source view".into()), error);
    }
    // SAFETY: Caller guarantees a live view.
    let src = unsafe { &*src };
    if h_dst.is_null() && src.len > 0 {
        return report(
            &Error::InvalidInput("null host destination buffer".into()),
            error,
        );
    }
    // SAFETY: Caller guarantees h_dst holds byte_len() writable bytes and
    // the view's owner is still alive.
    unsafe {
        std::ptr::copy_nonoverlapping(src.ptr.cast_const(), h_dst.cast::<u8>(), src.byte_len());
    }
    HipgraphStatus::Success
}

/// Copies between two views. Element counts and dtypes must match.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_device_array_view_copy(
    handle: *const HipgraphResourceHandle,
    dst: *mut HipgraphDeviceArrayView,
    src: *const HipgraphDeviceArrayView,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    let _ = try_ref!(handle, "resource handle", error);
    if dst.is_null() || src.is_null() {
        return report(&Error::InvalidInput("null view pointer".into()), error);
    }
    // SAFETY: Caller guarantees live views.
    let (dst, src) = unsafe { (&*dst, &*src) };
    if dst.dtype != src.dtype {
        return report(
            &Error::InvalidInput(format!(
                "cannot copy {} into {}",
                src.dtype, dst.dtype
            )),
            error,
        );
    }
    if dst.len != src.len {
        return report(
            &Error::InvalidInput(format!(
                "cannot copy {} elements into {}",
                src.len, dst.len
            )),
            error,
        );
    }
    // SAFETY: Shapes checked above; caller guarantees both owners alive and
    // the ranges disjoint.
    unsafe {
        std::ptr::copy_nonoverlapping(src.ptr.cast_const(), dst.ptr, dst.byte_len());
    }
    HipgraphStatus::Success
}

// ---------------------------------------------------------------------------
// Host-array mirror
// ---------------------------------------------------------------------------

/// Creates a host-resident type-erased array for parameter marshalling.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_host_array_create(
    handle: *const HipgraphResourceHandle,
    n_elems: usize,
    dtype: u32,
    array_out: *mut *mut HipgraphHostArray,
    error: *mut *mut HipgraphError,
) -> HipgraphStatus {
    if array_out.is_null() {
        return report(&Error::InvalidInput("null array out-pointer".into()), error);
    }
    match array_create(handle, n_elems, dtype, error) {
        Ok(inner) => {
            // SAFETY: array_out checked non-null above.
            unsafe { *array_out = Box::into_raw(Box::new(HipgraphHostArray { inner })) };
            HipgraphStatus::Success
        }
        Err(status) => status,
    }
}

/// Frees a host array. Views taken from it become invalid.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_host_array_free(array: *mut HipgraphHostArray) {
    if array.is_null() {
        return;
    }
    // SAFETY: Caller guarantees single ownership of the pointer.
    drop(unsafe { Box::from_raw(array) });
}

/// Creates a view of a host array. Host views drive the byte-copy functions
/// and host-side parameters (fan-out lists); they are not valid graph or
/// algorithm inputs.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_type_erased_host_array_view(
    array: *mut HipgraphHostArray,
) -> *mut HipgraphDeviceArrayView {
    if array.is_null() {
        return std::ptr::null_mut();
    }
    // SAFETY: Caller guarantees a live, uniquely-owned array.
    let inner = unsafe { &mut (*array).inner };
    let view = HipgraphDeviceArrayView {
        ptr: inner.view_mut().as_raw_ptr_mut(),
        len: inner.len(),
        dtype: inner.dtype(),
        array: std::ptr::null(),
    };
    Box::into_raw(Box::new(view))
}
