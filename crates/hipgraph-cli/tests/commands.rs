//! Integration tests for the CLI's underlying flow: edge-list file on disk
//! to graph to algorithm output.

use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

use hipgraph::algorithms::{degrees, pagerank};
use hipgraph::{
    DeviceArray, Graph, GraphFlags, GraphProperties, PagerankParams, ResourceHandle,
};

/// Writes a small edge-list file the way users feed the CLI.
fn write_edge_file(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("edges.txt");
    let mut file = std::fs::File::create(&path).expect("create edge file");
    writeln!(file, "# tiny triangle with a pendant vertex").unwrap();
    writeln!(file, "0 1").unwrap();
    writeln!(file, "1 2").unwrap();
    writeln!(file, "2 0").unwrap();
    writeln!(file, "2 3").unwrap();
    path
}

fn parse_edges(path: &Path) -> (Vec<i64>, Vec<i64>) {
    let text = std::fs::read_to_string(path).expect("read edge file");
    let mut src = Vec::new();
    let mut dst = Vec::new();
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        src.push(fields.next().unwrap().parse::<i64>().unwrap());
        dst.push(fields.next().unwrap().parse::<i64>().unwrap());
    }
    (src, dst)
}

fn build(handle: &ResourceHandle, src: &[i64], dst: &[i64]) -> Graph {
    let src = DeviceArray::from_slice(handle, src).unwrap();
    let dst = DeviceArray::from_slice(handle, dst).unwrap();
    Graph::from_edge_list(
        handle,
        GraphProperties::default(),
        GraphFlags {
            renumber: true,
            ..GraphFlags::default()
        },
        &src.view(),
        &dst.view(),
        None,
        None,
        None,
    )
    .unwrap()
}

#[test]
fn edge_file_to_degrees() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_edge_file(dir.path());
    let (src, dst) = parse_edges(&path);

    let handle = ResourceHandle::new().unwrap();
    let graph = build(&handle, &src, &dst);
    assert_eq!(graph.num_vertices(), 4);
    assert_eq!(graph.num_edges(), 4);

    let result = degrees(&handle, &graph, None, false).unwrap();
    assert_eq!(
        result
            .out_degrees()
            .unwrap()
            .to_vec::<i64>(&handle)
            .unwrap(),
        vec![1, 1, 2, 0]
    );
}

#[test]
fn edge_file_to_pagerank() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_edge_file(dir.path());
    let (src, dst) = parse_edges(&path);

    let handle = ResourceHandle::new().unwrap();
    let graph = build(&handle, &src, &dst);
    let result = pagerank(&handle, &graph, &PagerankParams::default()).unwrap();
    assert!(result.converged());
    let values = result.values().to_vec::<f64>(&handle).unwrap();
    assert_eq!(values.len(), 4);
    assert!(values.iter().all(|&v| v > 0.0));
}
