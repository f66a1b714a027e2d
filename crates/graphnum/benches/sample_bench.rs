//! Criterion microbenches for the sequential sampler.
//!
//! - Fixed count, growing interval: cost should stay flat (Method D).
//! - Dense draws (count close to pool): Method A territory.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphnum::sample::{sample_sequence_cfg, SampleCfg};
use rand::{rngs::StdRng, SeedableRng};

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let cfg = SampleCfg::default();
    for &width in &[1_000i64, 1_000_000, 1_000_000_000, 1_000_000_000_000] {
        group.bench_with_input(BenchmarkId::new("k100_sparse", width), &width, |b, &width| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let _ = sample_sequence_cfg(&mut rng, 0, width, 100, cfg);
            })
        });
    }
    for &count in &[100u64, 500, 900] {
        group.bench_with_input(BenchmarkId::new("pool1000_dense", count), &count, |b, &count| {
            let mut rng = StdRng::seed_from_u64(8);
            b.iter(|| {
                let _ = sample_sequence_cfg(&mut rng, 1, 1000, count, cfg);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
