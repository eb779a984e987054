//! Benchmarks for linlog-rs operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use linlog_core::{LogLinParams, Mode};
use linlog_ops::LogLinOp;
use linlog_transfer::cineon;

/// Benchmark the scalar kernels.
fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");
    let [coeffs, _, _] = LogLinParams::film().coeffs().unwrap();

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f32> = (0..*size).map(|i| i as f32 / *size as f32).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| cineon::encode(black_box(x), &coeffs))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| cineon::decode(black_box(x), &coeffs))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark full-frame interleaved application.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    group.sample_size(20);

    let op = LogLinOp::new(Mode::LinToLog, &LogLinParams::film()).unwrap();

    let width = 1920usize;
    let height = 1080usize;
    let frame: Vec<f32> = (0..width * height * 4)
        .map(|i| (i % 1024) as f32 / 1023.0)
        .collect();

    group.throughput(Throughput::Elements((width * height) as u64));

    group.bench_function("apply_rgba_hd", |b| {
        b.iter_batched(
            || frame.clone(),
            |mut pixels| op.apply_rgba(&mut pixels).unwrap(),
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_function("apply_rows_hd", |b| {
        b.iter_batched(
            || frame.clone(),
            |mut pixels| linlog_ops::parallel::apply_rows(&op, &mut pixels, width, 4).unwrap(),
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_scalar, bench_frame);
criterion_main!(benches);
