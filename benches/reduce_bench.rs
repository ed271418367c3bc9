//! Drive-loop benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

use scalar_reduce::{consume, consume_if, Accumulator, CentralMoments, MinMaxSum, Sum};

const N: usize = 1 << 20;

fn bench_data() -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    (0..N).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
}

fn bench_consume(c: &mut Criterion) {
    let data = bench_data();

    let mut group = c.benchmark_group("consume");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("sum", |b| {
        b.iter(|| {
            consume(black_box(&data), 0, N, Sum::new())
                .unwrap()
                .finalize()
        })
    });

    group.bench_function("min_max_sum", |b| {
        b.iter(|| {
            consume(black_box(&data), 0, N, MinMaxSum::new())
                .unwrap()
                .finalize()
        })
    });

    group.bench_function("moments", |b| {
        let mean = consume(&data, 0, N, Sum::new()).unwrap().finalize().mean();
        b.iter(|| {
            consume(black_box(&data), 0, N, CentralMoments::new(mean))
                .unwrap()
                .finalize()
        })
    });

    group.bench_function("filtered_sum", |b| {
        b.iter(|| {
            consume_if(black_box(&data), 0, N, Sum::new(), &|v: f64| v > 0.0)
                .unwrap()
                .finalize()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_consume);
criterion_main!(benches);
