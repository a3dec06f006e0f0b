//! Parsing and comparison benchmarks for vergate-version.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vergate_version::Version;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("short", |b| b.iter(|| Version::parse(black_box("11"))));
    group.bench_function("long_mixed", |b| {
        b.iter(|| Version::parse(black_box("11.1.2_4.048")))
    });
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let installed = Version::parse("11.1.2.4.010").unwrap();
    let threshold = Version::parse("11.1.2").unwrap();
    let threshold_components: &[u32] = &[11, 1, 2];

    let mut group = c.benchmark_group("compare");
    group.bench_function("padded", |b| {
        b.iter(|| black_box(&installed).compare(black_box(&threshold)))
    });
    group.bench_function("components", |b| {
        b.iter(|| black_box(&installed).is_greater_or_equal_components(black_box(threshold_components)))
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_compare);
criterion_main!(benches);
