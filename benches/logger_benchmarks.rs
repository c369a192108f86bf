//! Criterion benchmarks for tinted_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use tinted_logger::prelude::*;

fn null_logger(name: &str) -> Logger {
    Logger::builder(name)
        .sink(WriterSink::new(std::io::sink()))
        .shared_config(Arc::new(SharedConfig::new()))
        .build()
}

// ============================================================================
// Emission
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger("bench");

    group.bench_function("info_default_pipeline", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("info_fmt", |b| {
        b.iter(|| tinted_logger::info!(logger, "value {} of {}", black_box(7), 10));
    });

    let filtered = null_logger("filtered");
    filtered.shared_config().set_level(LogLevel::Error);
    group.bench_function("info_prefiltered", |b| {
        b.iter(|| tinted_logger::info!(filtered, "never {}", black_box(1)));
    });

    group.finish();
}

// ============================================================================
// Color resolution
// ============================================================================

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");
    group.throughput(Throughput::Elements(1));

    let rules = Arc::new(
        ColorRuleSet::load(concat!(
            r#"[{"Text":"timeout","Color":"yellow"},"#,
            r#"{"Text":"fail","Color":"red"},"#,
            r#"{"Text":"ok","Color":"green"}]"#,
        ))
        .expect("valid rules"),
    );

    let logger = null_logger("color");
    logger.enable_color(true);
    logger.set_color_rules(Arc::clone(&rules));

    group.bench_function("rule_match", |b| {
        b.iter(|| logger.info(black_box("request ok in 3ms")));
    });

    group.bench_function("rule_miss", |b| {
        b.iter(|| logger.info(black_box("nothing to see here")));
    });

    group.bench_function("resolve_only", |b| {
        b.iter(|| {
            tinted_logger::resolve_color(
                Color::None,
                LogLevel::Info,
                black_box("operation fail now"),
                Some(&rules),
                true,
            )
        });
    });

    group.finish();
}

// ============================================================================
// Concurrency
// ============================================================================

fn bench_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("contention");
    let logger = Arc::new(null_logger("shared"));

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                tinted_logger::info!(logger, "message {}", i);
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_emission, bench_color, bench_contention);
criterion_main!(benches);
