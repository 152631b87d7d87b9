//! Criterion benchmarks for the synthesis pipeline

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use indexmap::IndexMap;

use mirror_synthesis::*;

fn council(size: usize) -> IndexMap<String, String> {
    (0..size)
        .map(|i| {
            let name = format!("model-{i}");
            // Three rough camps of responses plus per-model variation
            let text = match i % 3 {
                0 => format!("the main bottleneck is the database layer, shard it ({i})"),
                1 => format!("the main bottleneck is the render loop, batch draw calls ({i})"),
                _ => format!("rewrite the hot path in a lower level language ({i})"),
            };
            (name, text)
        })
        .collect()
}

/// Benchmark: raw similarity scoring
fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    let short_a = "the quick brown fox jumps over the lazy dog";
    let short_b = "the quick brown fox jumps over the lazy cat";
    group.bench_function("short", |b| {
        b.iter(|| similarity(black_box(short_a), black_box(short_b)));
    });

    let long_a = short_a.repeat(50);
    let long_b = short_b.repeat(50);
    group.bench_function("long", |b| {
        b.iter(|| similarity(black_box(&long_a), black_box(&long_b)));
    });

    group.finish();
}

/// Benchmark: clustering across council sizes
fn bench_clustering(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustering");

    for size in [5, 10, 25].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let input = council(size);
            b.iter(|| cluster_perspectives(black_box(&input), 0.70));
        });
    }

    group.finish();
}

/// Benchmark: gap detection across council sizes
fn bench_gap_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("gap_detection");

    for size in [5, 10, 25].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let input = council(size);
            b.iter(|| find_unique_insights(black_box(&input), 0.40, 240));
        });
    }

    group.finish();
}

/// Benchmark: the full pipeline with in-memory collaborators
fn bench_find_the_gap(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("find_the_gap");

    for size in [5, 10, 25].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let engine = SynthesisEngine::new(
                Arc::new(StaticSummarizer::new()),
                Arc::new(InMemoryLessonStore::with_lessons(vec![
                    "shard the database layer".to_string(),
                    "batch the draw calls".to_string(),
                ])),
            );
            let input = council(size);

            b.to_async(&runtime).iter(|| async {
                engine.find_the_gap(black_box(&input)).await.unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_similarity,
    bench_clustering,
    bench_gap_detection,
    bench_find_the_gap
);

criterion_main!(benches);
