use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use binoculars_confidence::{binomial_confidence, BinomialConfidence, IntervalMethod, DEFAULT_Z};

/// Generate `(proportion, trials)` pairs with integer success counts
fn generate_observations(count: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let n = rng.gen_range(5u32..5000);
            let k = rng.gen_range(0..=n);
            (k as f64 / n as f64, n as f64)
        })
        .unzip()
}

fn bench_single_interval(c: &mut Criterion) {
    let mut group = c.benchmark_group("Interval");

    for method in IntervalMethod::ALL {
        let settings = BinomialConfidence::new(method);
        group.bench_with_input(
            BenchmarkId::new(method.as_str(), 100),
            &(0.37, 100.0),
            |b, &(p, n)| b.iter(|| settings.interval(black_box(p), black_box(n))),
        );
    }

    group.finish();
}

fn bench_string_dispatch(c: &mut Criterion) {
    c.bench_function("binomial_confidence/wilson", |b| {
        b.iter(|| {
            binomial_confidence(
                black_box(0.37),
                black_box(100.0),
                None,
                DEFAULT_Z,
                "wilson",
            )
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch");
    let sizes = [100, 1000];

    for &size in &sizes {
        let (proportions, trials) = generate_observations(size, 42);
        for method in [IntervalMethod::Wilson, IntervalMethod::Jeffreys] {
            let settings = BinomialConfidence::new(method);
            group.bench_with_input(
                BenchmarkId::new(method.as_str(), size),
                &(&proportions, &trials),
                |b, (proportions, trials)| b.iter(|| settings.intervals(proportions, trials)),
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_interval,
    bench_string_dispatch,
    bench_batch
);
criterion_main!(benches);
