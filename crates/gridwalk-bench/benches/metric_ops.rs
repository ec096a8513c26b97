//! Criterion micro-benchmarks for the scalar metric evaluators.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridwalk_bench::deterministic_centers;
use gridwalk_core::Point;
use gridwalk_space::{
    chebyshev_distance, euclidean_distance, manhattan_distance, minkowski_distance,
};

/// Benchmark: integer Manhattan and Chebyshev distances over 1000 pairs.
fn bench_integer_metrics(c: &mut Criterion) {
    let a = deterministic_centers(1000, 10_000);
    let b = deterministic_centers(1500, 10_000)[500..].to_vec();

    c.bench_function("manhattan_chebyshev_1k_pairs", |bench| {
        bench.iter(|| {
            for (p, q) in a.iter().zip(&b) {
                black_box(manhattan_distance(*p, *q));
                black_box(chebyshev_distance(*p, *q));
            }
        });
    });
}

/// Benchmark: Euclidean and Minkowski(r = 3) distances over 1000 float pairs.
fn bench_float_metrics(c: &mut Criterion) {
    let to_f64 = |p: &Point<i32>| Point::new(p.x as f64, p.y as f64);
    let a: Vec<_> = deterministic_centers(1000, 10_000).iter().map(to_f64).collect();
    let b: Vec<_> = deterministic_centers(1500, 10_000)[500..]
        .iter()
        .map(to_f64)
        .collect();

    c.bench_function("euclidean_minkowski_1k_pairs", |bench| {
        bench.iter(|| {
            for (p, q) in a.iter().zip(&b) {
                black_box(euclidean_distance(*p, *q));
                black_box(minkowski_distance(*p, *q, 3.0));
            }
        });
    });
}

criterion_group!(benches, bench_integer_metrics, bench_float_metrics);
criterion_main!(benches);
