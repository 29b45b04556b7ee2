//! Criterion benchmarks for rust_leveled_logger

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rust_leveled_logger::core::format_line;
use rust_leveled_logger::fields;
use rust_leveled_logger::prelude::*;

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| black_box(Logger::new()));
    });

    group.bench_function("from_config", |b| {
        let config = Config::default().with_level("warning");
        b.iter(|| black_box(Logger::from_config(black_box(&config))));
    });

    group.finish();
}

// ============================================================================
// Derivation Benchmarks
// ============================================================================

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::new()
        .with_prefix("service")
        .with_fields(fields! { "region" => "eu", "shard" => 3 });

    group.bench_function("with_prefix", |b| {
        b.iter(|| black_box(logger.with_prefix(black_box("handler"))));
    });

    group.bench_function("with_fields", |b| {
        b.iter(|| black_box(logger.with_fields([("request_id", 42)])));
    });

    group.bench_function("with_level", |b| {
        b.iter(|| black_box(logger.with_level(black_box("error"))));
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let empty = Fields::new();
    let populated = fields! { "user" => "alice", "attempt" => 2, "ok" => true };

    group.bench_function("plain", |b| {
        b.iter(|| {
            black_box(format_line(
                LogLevel::Info,
                "",
                &empty,
                black_box("Simple message"),
                "2024-01-01 00:00:00",
            ))
        });
    });

    group.bench_function("prefix_and_fields", |b| {
        b.iter(|| {
            black_box(format_line(
                LogLevel::Warning,
                "api.v1",
                &populated,
                black_box("Structured message"),
                "2024-01-01 00:00:00",
            ))
        });
    });

    group.bench_function("timestamp_standard", |b| {
        let format = TimestampFormat::Standard;
        b.iter(|| black_box(format.now()));
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::new().with_level("error");

    group.bench_function("below_threshold", |b| {
        b.iter(|| logger.debug(black_box("This should be filtered")));
    });

    group.bench_function("below_threshold_formatted", |b| {
        b.iter(|| logger.debugf(format_args!("filtered {}", black_box(7))));
    });

    group.finish();
}

// ============================================================================
// Recording Benchmarks
// ============================================================================

fn bench_mock_recording(c: &mut Criterion) {
    let mut group = c.benchmark_group("mock_recording");
    group.throughput(Throughput::Elements(100));

    group.bench_function("nested_chain", |b| {
        b.iter_batched(
            || {
                MockLogger::new()
                    .with_prefix("a")
                    .with_prefix("b")
                    .with_fields(fields! { "k" => 1 })
            },
            |mock| {
                for i in 0..100 {
                    mock.infof(format_args!("message {}", i));
                }
                mock
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_derivation,
    bench_formatting,
    bench_level_filtering,
    bench_mock_recording
);

criterion_main!(benches);
