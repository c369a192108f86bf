//! Stress tests for concurrent emission
//!
//! These tests verify:
//! - One sink write per call, never interleaved, under many threads
//! - Transient per-call settings do not leak between concurrent callers
//! - Reconfiguration while other threads log does not tear output

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;
use tinted_logger::prelude::*;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

fn shared_logger(sink: impl Sink + 'static) -> Arc<Logger> {
    Arc::new(
        Logger::builder("stress")
            .sink(sink)
            .parts([part(parts::level_label)])
            .enable_color(true)
            .shared_config(Arc::new(SharedConfig::new()))
            .build(),
    )
}

#[test]
fn test_concurrent_writes_never_interleave() {
    let sink = MemorySink::new();
    let logger = shared_logger(sink.clone());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    tinted_logger::info!(logger, "thread {} message {}", t, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Logging thread panicked");
    }

    let chunks = sink.chunks();
    assert_eq!(chunks.len(), THREADS * PER_THREAD);

    let mut seen = HashSet::new();
    for chunk in chunks {
        let line = String::from_utf8(chunk).expect("utf8 line");
        assert!(line.starts_with("[INFO] thread "), "torn line: {:?}", line);
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1, "two calls in one chunk: {:?}", line);
        assert!(seen.insert(line), "duplicate line");
    }
    assert_eq!(logger.metrics().total_written(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn test_severity_colors_under_contention() {
    let sink = MemorySink::new();
    let logger = shared_logger(sink.clone());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    if t % 2 == 0 {
                        logger.warn(format!("w{}", i));
                    } else {
                        logger.error(format!("e{}", i));
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Logging thread panicked");
    }

    for chunk in sink.chunks() {
        let line = String::from_utf8(chunk).expect("utf8 line");
        if line.contains("[WARN]") {
            assert!(line.starts_with("\x1b[033m"), "warn not yellow: {:?}", line);
        } else {
            assert!(line.starts_with("\x1b[031m[ERRO]"), "error not red: {:?}", line);
        }
        assert!(line.ends_with("\x1b[0m\n"));
    }
}

#[test]
fn test_reconfiguration_while_logging() {
    let sink = MemorySink::new();
    let logger = shared_logger(sink.clone());
    let rules = Arc::new(
        ColorRuleSet::load(r#"[{"Text":"odd","Color":"purple"}]"#).expect("valid rules"),
    );

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let kind = if i % 2 == 0 { "even" } else { "odd" };
                    logger.log_text(LogLevel::Info, format!("{} {} {}", t, i, kind));
                }
            })
        })
        .collect();

    let configurer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..PER_THREAD {
                logger.enable_color(i % 2 == 0);
                if i % 3 == 0 {
                    logger.set_color_rules(Arc::clone(&rules));
                } else {
                    logger.clear_color_rules();
                }
            }
        })
    };

    for handle in writers {
        handle.join().expect("Logging thread panicked");
    }
    configurer.join().expect("Configuring thread panicked");

    for chunk in sink.chunks() {
        let line = String::from_utf8(chunk).expect("utf8 line");
        let colored = line.starts_with("\x1b[035m");
        assert_eq!(colored, line.ends_with("\x1b[0m\n"), "unbalanced framing: {:?}", line);
        if colored {
            assert!(line.contains(" odd"), "only odd lines match: {:?}", line);
        }
    }
}

#[test]
fn test_concurrent_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");
    let logger = Arc::new(
        Logger::builder("file")
            .sink(FileSink::new(&log_file).expect("Failed to open log file"))
            .full_parts([part(parts::text), part(parts::line_end)])
            .shared_config(Arc::new(SharedConfig::new()))
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.error(format!("{:02}-{:04}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Logging thread panicked");
    }
    logger.flush().expect("Failed to flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    assert!(lines.iter().all(|l| l.len() == 7));
}
