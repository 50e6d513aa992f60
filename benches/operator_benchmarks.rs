use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use grapharray::{AdjacencyMatrix, BaseGraph, GraphArray, GraphOperator, IncidenceMatrix};
use std::sync::Arc;

/// Ring with chords: every node links to the next two
fn build_graph(size: usize) -> Arc<BaseGraph<usize>> {
    let edges = (0..size).flat_map(|i| [(i, (i + 1) % size), (i, (i + 2) % size)]);
    BaseGraph::from_edges(edges).freeze_shared()
}

/// Benchmark freezing (index construction)
fn bench_freeze(c: &mut Criterion) {
    let mut group = c.benchmark_group("freeze");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| criterion::black_box(build_graph(size)));
        });
    }
    group.finish();
}

/// Benchmark adjacency matrix-vector products
fn bench_adjacency_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency_multiply");

    for size in [100, 1000, 10_000].iter() {
        let g = build_graph(*size);
        let weights = GraphArray::edge_array(&g, 1.5).unwrap();
        let adj = AdjacencyMatrix::new(&weights).unwrap();
        let x = GraphArray::node_array(&g, 2.0).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(adj.multiply(&x).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark divergence and gradient through the incidence matrix
fn bench_incidence_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("incidence_multiply");

    for size in [100, 1000, 10_000].iter() {
        let g = build_graph(*size);
        let flow = GraphArray::edge_array(&g, 1.0).unwrap();
        let potential = GraphArray::node_array(&g, 3.0).unwrap();
        let divergence = IncidenceMatrix::new(&g).unwrap();
        let mut gradient = divergence.clone();
        gradient.transpose();

        group.bench_with_input(BenchmarkId::new("divergence", size), size, |b, _| {
            b.iter(|| criterion::black_box(divergence.multiply(&flow).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("gradient", size), size, |b, _| {
            b.iter(|| criterion::black_box(gradient.multiply(&potential).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark elementwise arithmetic
fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");

    for size in [1000, 10_000].iter() {
        let g = build_graph(*size);
        let a = GraphArray::edge_array(&g, 2.0).unwrap();
        let b_arr = GraphArray::edge_array(&g, 3.0).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(a.mul(&b_arr).unwrap().add(1.0).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_freeze,
    bench_adjacency_multiply,
    bench_incidence_multiply,
    bench_elementwise
);
criterion_main!(benches);
