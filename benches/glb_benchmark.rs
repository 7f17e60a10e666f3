// SPDX-License-Identifier: MIT
//! Benchmarks for GLB container encode and decode

use criterion::{criterion_group, criterion_main, Criterion};
use glb_container::{decode, encode, Document};
use serde_json::json;
use std::hint::black_box;

fn create_test_document() -> Document {
    // Metadata roughly the shape of a small exported scene.
    let mut doc = Document::new(json!({
        "asset": {"version": "2.0", "generator": "glb-benchmark"},
        "scene": 0,
        "scenes": [{"nodes": [0, 1, 2, 3]}],
        "nodes": (0..4).map(|i| json!({"mesh": i, "name": format!("node-{i}")})).collect::<Vec<_>>(),
        "buffers": [{"byteLength": 1024 * 1024}],
    }));

    // 1 MiB geometry-like payload.
    doc.set_binary(vec![0xAB; 1024 * 1024]);
    doc
}

fn benchmark_encode(c: &mut Criterion) {
    let doc = create_test_document();

    c.bench_function("glb_encode", |b| {
        b.iter(|| encode(black_box(&doc)).unwrap())
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let bytes = encode(&create_test_document()).unwrap();

    c.bench_function("glb_decode", |b| {
        b.iter(|| decode(black_box(&bytes)).unwrap())
    });
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let doc = create_test_document();

    c.bench_function("glb_roundtrip", |b| {
        b.iter(|| {
            let bytes = encode(black_box(&doc)).unwrap();
            decode(&bytes).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_roundtrip
);
criterion_main!(benches);
