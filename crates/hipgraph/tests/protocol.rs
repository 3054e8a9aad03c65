//! Protocol-invariant tests: dtype round-trips, lifecycle cycling, view
//! aliasing, and error pairing across the public API.

use hipgraph::algorithms::{pagerank, weakly_connected_components};
use hipgraph::{
    DataTypeId, DeviceArray, Graph, GraphFlags, GraphProperties, PagerankParams, ResourceHandle,
    Status,
};

#[test]
fn round_trip_every_dtype_at_every_size() {
    let handle = ResourceHandle::new().unwrap();

    fn check<T>(handle: &ResourceHandle, values: Vec<T>)
    where
        T: hipgraph::DataType + PartialEq + std::fmt::Debug,
    {
        let array = DeviceArray::from_slice(handle, &values).unwrap();
        assert_eq!(array.view().to_vec::<T>(handle).unwrap(), values);
    }

    for n in [0usize, 1, 4096] {
        check::<i32>(&handle, (0..n as i32).collect());
        check::<i64>(&handle, (0..n as i64).map(|v| v - 7).collect());
        check::<f32>(&handle, (0..n).map(|v| v as f32 * 0.5).collect());
        check::<f64>(&handle, (0..n).map(|v| v as f64 * -1.25).collect());
        check::<usize>(&handle, (0..n).collect());
    }
}

#[test]
fn dtype_raw_values_outside_the_closed_set_are_rejected() {
    for raw in [5u32, 6, 100, u32::MAX] {
        assert_eq!(DataTypeId::from_raw(raw), None);
    }
    for dtype in DataTypeId::ALL {
        assert_eq!(DataTypeId::from_raw(dtype.as_raw()), Some(dtype));
    }
}

#[test]
fn status_translation_is_total_over_the_public_set() {
    for status in Status::ALL {
        assert_eq!(Status::from_raw(status.as_raw()), Some(status));
    }
    assert_eq!(Status::from_raw(7), None);
}

#[test]
fn every_public_error_carries_a_non_empty_message() {
    let handle = ResourceHandle::new().unwrap();
    let src = DeviceArray::from_slice(&handle, &[0i32, 1]).unwrap();
    let dst = DeviceArray::from_slice(&handle, &[1i32]).unwrap();
    let err = Graph::from_edge_list(
        &handle,
        GraphProperties::default(),
        GraphFlags::default(),
        &src.view(),
        &dst.view(),
        None,
        None,
        None,
    )
    .unwrap_err();
    assert_ne!(err.status(), Status::Success);
    assert!(!err.to_string().is_empty());
}

#[test]
fn create_free_cycling_all_object_kinds() {
    let handle = ResourceHandle::new().unwrap();
    for round in 0..200 {
        let src = DeviceArray::from_slice(&handle, &[0i64, 1, 2, round as i64 % 3]).unwrap();
        let dst = DeviceArray::from_slice(&handle, &[1i64, 2, 0, (round as i64 + 1) % 3]).unwrap();
        let graph = Graph::from_edge_list(
            &handle,
            GraphProperties::default(),
            GraphFlags {
                drop_multi_edges: true,
                ..GraphFlags::default()
            },
            &src.view(),
            &dst.view(),
            None,
            None,
            None,
        )
        .unwrap();
        let result = pagerank(&handle, &graph, &PagerankParams::default()).unwrap();
        assert_eq!(result.vertices().len(), graph.num_vertices());
        // graph, arrays, and result all drop here
    }
}

#[test]
fn result_views_alias_result_storage_until_drop() {
    let handle = ResourceHandle::new().unwrap();
    let src = DeviceArray::from_slice(&handle, &[0i32, 1, 2]).unwrap();
    let dst = DeviceArray::from_slice(&handle, &[1i32, 2, 0]).unwrap();
    let graph = Graph::from_edge_list(
        &handle,
        GraphProperties::default(),
        GraphFlags::default(),
        &src.view(),
        &dst.view(),
        None,
        None,
        None,
    )
    .unwrap();

    let result = weakly_connected_components(&handle, &graph, false).unwrap();
    let vertices = result.vertices();
    let labels = result.labels();
    // Two reads through the same views observe identical bytes.
    assert_eq!(
        vertices.to_vec::<i32>(&handle).unwrap(),
        vertices.to_vec::<i32>(&handle).unwrap()
    );
    assert_eq!(labels.len(), graph.num_vertices());
    // `result` outlives both views by construction; dropping it first would
    // not compile, which is the point of the borrowing design.
}

#[test]
fn unweighted_graph_defaults_to_float64_values() {
    let handle = ResourceHandle::new().unwrap();
    let src = DeviceArray::from_slice(&handle, &[0i32, 1]).unwrap();
    let dst = DeviceArray::from_slice(&handle, &[1i32, 0]).unwrap();
    let graph = Graph::from_edge_list(
        &handle,
        GraphProperties::default(),
        GraphFlags::default(),
        &src.view(),
        &dst.view(),
        None,
        None,
        None,
    )
    .unwrap();
    assert_eq!(graph.weight_dtype(), DataTypeId::Float64);
    let result = pagerank(&handle, &graph, &PagerankParams::default()).unwrap();
    assert_eq!(result.values().dtype(), DataTypeId::Float64);
}
