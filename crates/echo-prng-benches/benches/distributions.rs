// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use echo_prng_benches::bench_prng;
use std::{hint::black_box, time::Duration};

const N: u64 = 1_024;

fn bench_gaussian(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(5));
    group.throughput(Throughput::Elements(N));
    group.bench_function("gaussian", |b| {
        let mut prng = bench_prng();
        b.iter(|| {
            for _ in 0..N {
                black_box(prng.gaussian());
            }
        });
    });
    group.finish();
}

fn bench_poisson(c: &mut Criterion) {
    let mut group = c.benchmark_group("poisson");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(5));
    group.throughput(Throughput::Elements(N));
    // Cost is linear in the mean: one uniform per unit of output plus one.
    for ev in [0.5_f64, 4.0, 32.0] {
        group.bench_with_input(BenchmarkId::from_parameter(ev), &ev, |b, &ev| {
            let mut prng = bench_prng();
            b.iter(|| {
                for _ in 0..N {
                    black_box(prng.poisson(black_box(ev)));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gaussian, bench_poisson);
criterion_main!(benches);
