// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Codec performance benchmarks
//!
//! Benchmarks:
//! - Gzip and brotli compression at fast vs. baseline (maximum) settings
//! - Decompression throughput per algorithm

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use distpress_compression::{resolve, Algorithm, CodecOptions, LEVEL, QUALITY};
use std::hint::black_box;

/// Synthetic web asset: repetitive, text-heavy
fn generate_asset(size: usize) -> Vec<u8> {
    b"function render(state) { return `<div class=\"app\">${state.title}</div>`; }\n"
        .iter()
        .cycle()
        .take(size)
        .copied()
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let data = generate_asset(256 * 1024);
    let mut group = c.benchmark_group("compress");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for (label, algorithm, user) in [
        ("gzip/9", Algorithm::Gzip, CodecOptions::new()),
        ("gzip/1", Algorithm::Gzip, CodecOptions::new().with(LEVEL, 1)),
        ("brotli/11", Algorithm::Brotli, CodecOptions::new()),
        (
            "brotli/4",
            Algorithm::Brotli,
            CodecOptions::new().with(QUALITY, 4),
        ),
        ("deflate-raw/9", Algorithm::DeflateRaw, CodecOptions::new()),
    ] {
        let codec = algorithm.codec(&resolve(algorithm, &user));
        group.bench_with_input(BenchmarkId::from_parameter(label), &data, |b, data| {
            b.iter(|| codec.compress(black_box(data)).expect("compress"));
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let data = generate_asset(256 * 1024);
    let mut group = c.benchmark_group("decompress");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for algorithm in Algorithm::ALL {
        let codec = algorithm.codec(&resolve(algorithm, &CodecOptions::new()));
        let compressed = codec.compress(&data).expect("compress");
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.as_str()),
            &compressed,
            |b, compressed| {
                b.iter(|| codec.decompress(black_box(compressed)).expect("decompress"));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
