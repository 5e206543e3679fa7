use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lloyd::cluster::{Init, Kmeans};
use rand::prelude::*;

fn synthetic(n: usize, d: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f32>()).collect())
        .collect()
}

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");

    let (n, d, k) = (1000, 16, 10);
    let data = synthetic(n, d, 42);

    for (name, init) in [("random", Init::Random), ("kmeans++", Init::KmeansPlusPlus)] {
        group.bench_with_input(BenchmarkId::new("fit_n1000_d16_k10", name), &init, |b, init| {
            b.iter(|| {
                let model = Kmeans::new(k)
                    .with_max_iter(10)
                    .with_seed(42)
                    .with_init(init.clone());
                model.fit(black_box(&data)).unwrap();
            })
        });
    }

    group.finish();
}

fn bench_seeding(c: &mut Criterion) {
    // k close to n is the worst case for rejection sampling; sampling without
    // replacement should stay flat.
    let data = synthetic(2000, 4, 7);
    c.bench_function("seed_k1900_n2000_single_iter", |b| {
        b.iter(|| {
            Kmeans::new(1900)
                .with_max_iter(1)
                .with_seed(1)
                .fit(black_box(&data))
                .unwrap();
        })
    });
}

criterion_group!(benches, bench_kmeans, bench_seeding);
criterion_main!(benches);
