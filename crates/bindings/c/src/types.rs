//! Opaque handle types for the C FFI layer.
//!
//! The structs behind the opaque pointers the ABI hands out. Callers only
//! ever see forward declarations; everything here is reached through the
//! `hipgraph_*` functions.

use hipgraph::{DeviceArray, Graph, ResourceHandle};
use hipgraph_common::types::DataTypeId;

/// ABI-stable boolean: 0 is false, any non-zero value is true.
#[allow(non_camel_case_types)]
pub type hipgraph_bool_t = u8;

/// The canonical false value.
pub const HIPGRAPH_FALSE: hipgraph_bool_t = 0;
/// The canonical true value.
pub const HIPGRAPH_TRUE: hipgraph_bool_t = 1;

/// Converts an ABI boolean into a Rust `bool`.
pub(crate) fn c_bool(value: hipgraph_bool_t) -> bool {
    value != 0
}

/// Converts a Rust `bool` into an ABI boolean.
pub(crate) fn to_c_bool(value: bool) -> hipgraph_bool_t {
    if value { HIPGRAPH_TRUE } else { HIPGRAPH_FALSE }
}

/// Graph properties as they cross the ABI.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HipgraphGraphProperties {
    /// Every edge has a mirror edge.
    pub is_symmetric: hipgraph_bool_t,
    /// Parallel edges may exist.
    pub is_multigraph: hipgraph_bool_t,
}

/// Opaque resource handle. Created by `hipgraph_create_resource_handle`,
/// freed by `hipgraph_free_resource_handle`.
pub struct HipgraphResourceHandle {
    pub(crate) inner: ResourceHandle,
}

/// Opaque owning device array. Created by
/// `hipgraph_type_erased_device_array_create`, freed by
/// `hipgraph_type_erased_device_array_free`.
pub struct HipgraphDeviceArray {
    pub(crate) inner: DeviceArray,
}

/// Opaque host-resident array for parameter marshalling (fan-out lists,
/// subgraph offsets). Mirrors the device array's create/view/free protocol.
pub struct HipgraphHostArray {
    pub(crate) inner: DeviceArray,
}

/// Opaque non-owning array view.
///
/// Aliases storage owned by a device array, a host array, a result object,
/// or caller memory (`view_create`). The view object itself is heap
/// allocated and freed by `hipgraph_type_erased_device_array_view_free`;
/// the aliased storage is not touched by that free. A view is valid only
/// while its owner is - using it afterwards is undefined.
pub struct HipgraphDeviceArrayView {
    /// Aliased storage.
    pub(crate) ptr: *mut u8,
    /// Element count.
    pub(crate) len: usize,
    /// Element type.
    pub(crate) dtype: DataTypeId,
    /// The device array this view was taken from, when it was; views over
    /// raw caller memory or result storage carry null. Only array-backed
    /// views can be handed to graph constructors and algorithm entry
    /// points.
    pub(crate) array: *const HipgraphDeviceArray,
}

impl HipgraphDeviceArrayView {
    /// A view over a result object's (or array's) storage.
    pub(crate) fn over_storage(ptr: *const u8, len: usize, dtype: DataTypeId) -> Self {
        Self {
            ptr: ptr.cast_mut(),
            len,
            dtype,
            array: std::ptr::null(),
        }
    }

    /// Total size of the aliased storage in bytes.
    pub(crate) fn byte_len(&self) -> usize {
        self.len * self.dtype.size_of()
    }
}

/// Opaque graph object. Created by the `hipgraph_graph_create_*` functions,
/// freed by `hipgraph_graph_free`.
pub struct HipgraphGraph {
    pub(crate) inner: Graph,
}
