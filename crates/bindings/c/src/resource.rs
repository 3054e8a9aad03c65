//! Resource-handle functions.

use std::os::raw::c_void;

use hipgraph::ResourceHandle;

use crate::types::HipgraphResourceHandle;

/// Creates a resource handle.
///
/// `raw_handle` optionally carries a pre-existing native device ordinal
/// (cast to `void*`); pass null to use the process-wide default device.
/// Returns null on failure.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_create_resource_handle(
    raw_handle: *const c_void,
) -> *mut HipgraphResourceHandle {
    let device = if raw_handle.is_null() {
        None
    } else {
        Some(raw_handle as usize)
    };
    match ResourceHandle::with_device(device) {
        Ok(inner) => Box::into_raw(Box::new(HipgraphResourceHandle { inner })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Rank of this process within its compute group; single-process callers
/// always observe 0. Returns -1 on a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_resource_handle_get_rank(
    handle: *const HipgraphResourceHandle,
) -> i32 {
    if handle.is_null() {
        return -1;
    }
    // SAFETY: Caller guarantees a live handle.
    unsafe { (*handle).inner.rank() }
}

/// Size of the compute group; single-process callers always observe 1.
/// Returns -1 on a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_resource_handle_get_comm_size(
    handle: *const HipgraphResourceHandle,
) -> i32 {
    if handle.is_null() {
        return -1;
    }
    // SAFETY: Caller guarantees a live handle.
    unsafe { (*handle).inner.comm_size() }
}

/// Frees a resource handle. Freeing null is a no-op; every other object
/// created against the handle must already be gone.
#[unsafe(no_mangle)]
pub extern "C" fn hipgraph_free_resource_handle(handle: *mut HipgraphResourceHandle) {
    if handle.is_null() {
        return;
    }
    // SAFETY: Caller guarantees this pointer came from
    // `hipgraph_create_resource_handle` and has not been freed before.
    drop(unsafe { Box::from_raw(handle) });
}
