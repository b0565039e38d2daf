//! Criterion benchmarks for reverie-core DSP primitives
//!
//! Run with: cargo bench -p reverie-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use reverie_core::{
    AllpassFilter, Biquad, CombFilter, DelayLine, OnePole, cubic_soft_clip, lowpass_coefficients,
    one_pole,
};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_biquad(c: &mut Criterion) {
    let mut group = c.benchmark_group("Biquad");

    let coeffs = lowpass_coefficients(7000.0, 0.707, SAMPLE_RATE);

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("process", block_size),
            &block_size,
            |b, _| {
                let mut biquad = Biquad::new(coeffs);
                b.iter(|| {
                    for &sample in &input {
                        black_box(biquad.process(black_box(sample)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_one_pole(c: &mut Criterion) {
    let mut group = c.benchmark_group("OnePole");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("process", block_size),
            &block_size,
            |b, _| {
                let mut lp = OnePole::new(one_pole::lowpass_coefficients(6000.0, SAMPLE_RATE));
                b.iter(|| {
                    for &sample in &input {
                        black_box(lp.process(black_box(sample)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_comb(c: &mut Criterion) {
    let mut group = c.benchmark_group("CombFilter");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("process", block_size),
            &block_size,
            |b, _| {
                let mut storage = vec![0.0f32; 2048];
                let damping = OnePole::new(one_pole::lowpass_coefficients(8000.0, SAMPLE_RATE));
                let mut comb =
                    CombFilter::new(DelayLine::new(&mut storage).unwrap(), 1117, damping).unwrap();
                comb.set_feedback(0.9);
                b.iter(|| {
                    for &sample in &input {
                        black_box(comb.process(black_box(sample)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_allpass(c: &mut Criterion) {
    let mut group = c.benchmark_group("AllpassFilter");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("process", block_size),
            &block_size,
            |b, _| {
                let mut storage = vec![0.0f32; 1024];
                let mut allpass =
                    AllpassFilter::new(DelayLine::new(&mut storage).unwrap(), 953, 0.7).unwrap();
                b.iter(|| {
                    for &sample in &input {
                        black_box(allpass.process(black_box(sample)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("DelayLine");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("read_write", block_size),
            &block_size,
            |b, _| {
                let mut storage = vec![0.0f32; 2048];
                let mut delay = DelayLine::new(&mut storage).unwrap();
                b.iter(|| {
                    for &sample in &input {
                        black_box(delay.read_write(black_box(sample), 1440));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_soft_clip(c: &mut Criterion) {
    let input = generate_test_signal(1024);

    c.bench_function("cubic_soft_clip/1024", |b| {
        b.iter(|| {
            for &sample in &input {
                black_box(cubic_soft_clip(black_box(sample * 3.0), 1.0 / 3.0));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_biquad,
    bench_one_pole,
    bench_comb,
    bench_allpass,
    bench_delay,
    bench_soft_clip,
);

criterion_main!(benches);
