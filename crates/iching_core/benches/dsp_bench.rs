//! Criterion benchmarks for iching_core
//!
//! Run with: cargo bench -p iching_core
//!
//! Covers the per-sample building blocks and the full block callback so
//! regressions on the audio path show up early.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use iching_core::dsp::{
    Entropy, HexagramScheduler, NoiseBank, NoiseKind, Xorshift32, quantize_index, scale,
};
use iching_core::host::NUM_BUSSES;
use iching_core::{IChingParams, IChingRandom};
use serde_json::json;

const SAMPLE_RATE: f32 = 48000.0;
const FRAMES_PER_ITER: u64 = 480; // 10ms worth

/// Bus buffer with a square clock on bus 1 and a slower trigger on bus 2.
fn bus_buffer(num_frames: usize) -> Vec<f32> {
    let mut buses = vec![0.0; NUM_BUSSES as usize * num_frames];
    for i in 0..num_frames {
        buses[i] = if i % 48 < 24 { 5.0 } else { 0.0 };
        buses[num_frames + i] = if i % 96 < 8 { 5.0 } else { 0.0 };
    }
    buses
}

fn generator(params: serde_json::Value) -> IChingRandom {
    let params = IChingParams::from_json(params).unwrap_or_default();
    IChingRandom::new(params, SAMPLE_RATE)
}

// ============================================================================
// Building blocks
// ============================================================================

fn bench_quantizer(c: &mut Criterion) {
    scale::warm();
    let mut group = c.benchmark_group("quantize");
    // short standard scale, long standard scale, longest exotic scale
    for scale_index in [10, 0, 16, 57] {
        group.bench_with_input(
            BenchmarkId::new("scale", scale_index),
            &scale_index,
            |b, &scale_index| {
                let mut value = 0.0f32;
                b.iter(|| {
                    value = (value + 0.013) % 4.0;
                    black_box(quantize_index(black_box(value), scale_index, 3, -5, 2))
                })
            },
        );
    }
    group.finish();
}

fn bench_scheduler(c: &mut Criterion) {
    c.bench_function("hexagram/draw", |b| {
        let mut rng = Xorshift32::default();
        let mut scheduler = HexagramScheduler::new(&mut rng);
        b.iter(|| black_box(scheduler.draw(&mut rng)))
    });
}

fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise");
    group.throughput(Throughput::Elements(FRAMES_PER_ITER));
    for kind in NoiseKind::ALL {
        group.bench_function(kind.name(), |b| {
            let mut rng = Xorshift32::default();
            let mut bank = NoiseBank::default();
            b.iter(|| {
                for _ in 0..FRAMES_PER_ITER {
                    black_box(bank.process(kind, rng.white(), SAMPLE_RATE));
                }
            })
        });
    }
    group.finish();
}

// ============================================================================
// Block callback
// ============================================================================

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    let configs = [
        ("default", json!({})),
        ("pendulum_pink", json!({ "intSeqDir": 1, "noiseType": 1, "intSeqLen": 64 })),
        ("exotic_blue", json!({ "scale": 57, "noiseType": 3, "clockDiv": 7 })),
    ];

    for (name, params) in configs {
        let mut g = generator(params);
        let template = bus_buffer(FRAMES_PER_ITER as usize);
        group.throughput(Throughput::Elements(FRAMES_PER_ITER));
        group.bench_function(BenchmarkId::new("params", name), |b| {
            let mut buses = template.clone();
            b.iter(|| {
                buses[..2 * FRAMES_PER_ITER as usize]
                    .copy_from_slice(&template[..2 * FRAMES_PER_ITER as usize]);
                g.step(&mut buses, FRAMES_PER_ITER as usize);
                black_box(&buses);
            })
        });
    }
    group.finish();
}

fn bench_block_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_size");
    for block in [16usize, 64, 128, 512] {
        let mut g = generator(json!({}));
        let mut buses = bus_buffer(block);
        group.throughput(Throughput::Elements(block as u64));
        group.bench_with_input(BenchmarkId::from_parameter(block), &block, |b, &block| {
            b.iter(|| g.step(black_box(&mut buses), block))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_quantizer,
    bench_scheduler,
    bench_noise,
    bench_step,
    bench_block_sizes,
);
criterion_main!(benches);
