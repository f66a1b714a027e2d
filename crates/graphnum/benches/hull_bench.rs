//! Criterion benchmarks for the planar convex hull.
//! Focus sizes: n in {10, 100, 1_000, 10_000}; points uniform in a square.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use graphnum::geom2::convex_hull;
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_cloud(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

fn random_circle(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    // Every point is a hull vertex: worst case for output size.
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
            Vector2::new(theta.cos(), theta.sin())
        })
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("square_cloud", n), &n, |b, &n| {
            b.iter_batched(
                || random_cloud(n, 43),
                |pts| {
                    let _h = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("circle", n), &n, |b, &n| {
            b.iter_batched(
                || random_circle(n, 44),
                |pts| {
                    let _h = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
