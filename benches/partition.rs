//! Benchmarks comparing the partitioning algorithms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use partitum::decompose::{convex_decomposition, optimal_convex_decomposition};
use partitum::triangulate::{ear_clipping, min_weight, monotone};
use partitum::{Point2, Polygon};

/// Generates a star-shaped polygon with deterministic pseudo-random radii.
///
/// Always simple and counter-clockwise, with roughly half the vertices
/// reflex, which keeps all algorithms on their general path.
fn generate_star(num_vertices: usize, seed: u64) -> Polygon<f64> {
    let mut state = seed;
    let mut vertices = Vec::with_capacity(num_vertices);

    for i in 0..num_vertices {
        // Simple xorshift for deterministic "random" radii
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;

        let radius = 1.0 + (state % 1024) as f64 / 512.0;
        let angle = i as f64 / num_vertices as f64 * 2.0 * std::f64::consts::PI;
        vertices.push(Point2::new(radius * angle.cos(), radius * angle.sin()));
    }

    Polygon::new(vertices)
}

fn bench_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");

    for size in [16, 64, 256, 1024] {
        let poly = generate_star(size, 12345);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ear_clipping", size), &poly, |b, p| {
            b.iter(|| ear_clipping(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("monotone", size), &poly, |b, p| {
            b.iter(|| monotone(black_box(p)))
        });
    }

    // The cubic algorithm only gets the small sizes.
    for size in [16, 64] {
        let poly = generate_star(size, 12345);
        group.bench_with_input(BenchmarkId::new("min_weight", size), &poly, |b, p| {
            b.iter(|| min_weight(black_box(p)))
        });
    }

    group.finish();
}

fn bench_decomposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    for size in [16, 64, 256] {
        let poly = generate_star(size, 6789);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("hertel_mehlhorn", size),
            &poly,
            |b, p| b.iter(|| convex_decomposition(black_box(p))),
        );
    }

    for size in [16, 32] {
        let poly = generate_star(size, 6789);
        group.bench_with_input(BenchmarkId::new("keil_snoeyink", size), &poly, |b, p| {
            b.iter(|| optimal_convex_decomposition(black_box(p)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_triangulation, bench_decomposition);
criterion_main!(benches);
