//! Benchmarks for graph construction and PageRank.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use hipgraph_common::types::{GraphFlags, GraphProperties};
use hipgraph_core::TypedBuffer;
use hipgraph_core::algorithms::pagerank;
use hipgraph_core::graph::{CsrGraph, EdgeListInput};

/// Ring graph with chords: every vertex links to its successor and to the
/// vertex 7 positions ahead.
fn ring_edges(n: i32) -> (TypedBuffer, TypedBuffer) {
    let mut src = Vec::with_capacity(2 * n as usize);
    let mut dst = Vec::with_capacity(2 * n as usize);
    for v in 0..n {
        src.push(v);
        dst.push((v + 1) % n);
        src.push(v);
        dst.push((v + 7) % n);
    }
    (TypedBuffer::from_vec(src), TypedBuffer::from_vec(dst))
}

fn build_graph(src: &TypedBuffer, dst: &TypedBuffer) -> CsrGraph {
    CsrGraph::from_edge_list(
        GraphProperties::default(),
        &EdgeListInput {
            src,
            dst,
            weights: None,
            edge_ids: None,
            edge_types: None,
        },
        GraphFlags::default(),
    )
    .unwrap()
}

fn bench_edge_list_construction(c: &mut Criterion) {
    let (src, dst) = ring_edges(10_000);
    c.bench_function("graph_from_edge_list_20k", |b| {
        b.iter(|| black_box(build_graph(&src, &dst)));
    });
}

fn bench_pagerank(c: &mut Criterion) {
    let (src, dst) = ring_edges(10_000);
    let graph = build_graph(&src, &dst);
    c.bench_function("pagerank_10k", |b| {
        b.iter(|| black_box(pagerank(&graph, 0.85, 1e-6, 50).unwrap()));
    });
}

criterion_group!(benches, bench_edge_list_construction, bench_pagerank);
criterion_main!(benches);
