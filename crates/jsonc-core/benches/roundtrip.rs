//! Parse/deparse throughput over a representative config-style document.

use criterion::{criterion_group, criterion_main, Criterion};
use jsonc_core::{deparse, parse, tokenize, ParseOptions};
use std::hint::black_box;

const SAMPLE: &str = r#"
// deployment manifest
{
    "name": "edge-cache",
    "replicas": 12,
    "ports": [80, 443, 8080,],
    "limits": { "cpu": 1.5, "memory_mb": 2048 },
    "regions": ["us-east", "eu-west", "ap-south"],
    /* feature gates */
    "features": { "http2": true, "tls13": true, "legacy": false },
    "owner": null
}
"#;

fn bench_roundtrip(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box(SAMPLE), true).unwrap())
    });

    c.bench_function("parse", |b| {
        b.iter(|| parse(black_box(SAMPLE), ParseOptions::default()).unwrap())
    });

    let tree = parse(SAMPLE, ParseOptions::default()).unwrap();
    c.bench_function("deparse", |b| b.iter(|| deparse(black_box(&tree))));
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
