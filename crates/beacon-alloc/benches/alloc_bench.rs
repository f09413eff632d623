//! Benchmarks for Beacon Channel Allocation
//!
//! Measures performance of:
//! - Haversine distance
//! - Interference graph construction
//! - Degree ordering
//! - Greedy coloring
//! - End-to-end allocation

use beacon_alloc::{
    allocate, color_greedy, degree_order, haversine_km, AllocConfig, Coordinate,
    InterferenceGraph, Node, Palette,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Deterministic square grid of nodes around the origin, `spacing` degrees apart.
fn grid(count: usize, spacing: f64) -> Vec<Node> {
    let side = (count as f64).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let row = (i / side) as f64;
            let col = (i % side) as f64;
            Node::new(format!("n{}", i), row * spacing, col * spacing)
        })
        .collect()
}

/// Benchmark a single distance computation
fn bench_haversine(c: &mut Criterion) {
    let a = Coordinate::new(51.5074, -0.1278);
    let b = Coordinate::new(40.7128, -74.0060);
    c.bench_function("haversine_km", |bench| {
        bench.iter(|| haversine_km(black_box(a), black_box(b)))
    });
}

/// Benchmark graph construction at different scales
fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    for &count in &[10usize, 100, 500, 1000] {
        let nodes = grid(count, 0.002);
        // N(N-1)/2 distance computations
        group.throughput(Throughput::Elements((count * (count - 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &nodes, |b, nodes| {
            b.iter(|| InterferenceGraph::build(black_box(nodes), 0.5))
        });
    }
    group.finish();
}

/// Benchmark ordering and coloring on a prebuilt graph
fn bench_coloring(c: &mut Criterion) {
    let mut group = c.benchmark_group("coloring");
    let palette = Palette::new(1..=12).expect("valid palette");

    for &count in &[100usize, 1000] {
        let nodes = grid(count, 0.002);
        let graph = InterferenceGraph::build(&nodes, 0.5);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("degree_order", count), &graph, |b, g| {
            b.iter(|| degree_order(black_box(g)))
        });

        let order = degree_order(&graph);
        group.bench_with_input(BenchmarkId::new("color_greedy", count), &graph, |b, g| {
            b.iter(|| color_greedy(black_box(g), &order, &palette))
        });
    }
    group.finish();
}

/// Benchmark the full allocation call
fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");
    let config = AllocConfig::new(0.5, Palette::new([1, 6, 11]).expect("valid palette"))
        .expect("valid config");

    for &count in &[100usize, 1000] {
        let nodes = grid(count, 0.003);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &nodes, |b, nodes| {
            b.iter(|| allocate(black_box(nodes), &config))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_haversine,
    bench_graph_build,
    bench_coloring,
    bench_allocate,
);
criterion_main!(benches);
