//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Concurrent callers on one logger never interleave lines
//! - Concurrent callers on separate loggers sharing a sink never interleave lines

use kage::{info, Logger, MemorySink};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 100;

#[test]
fn test_concurrent_callers_produce_whole_lines() {
    let out = MemorySink::new();
    let logger = Arc::new(
        Logger::new()
            .without_colors()
            .with_prefix("Stress")
            .with_stdout(out.clone()),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                info!(logger, "message from thread {:03} {}", i, "x".repeat(64));
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = out.lines();
    assert_eq!(lines.len(), THREADS);

    let expected: BTreeSet<String> = (0..THREADS)
        .map(|i| {
            format!(
                "INFO    [Stress]        message from thread {:03} {}",
                i,
                "x".repeat(64)
            )
        })
        .collect();
    let actual: BTreeSet<String> = lines.into_iter().collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_separate_loggers_sharing_a_sink() {
    let out = MemorySink::new();
    let first = Arc::new(
        Logger::new()
            .without_colors()
            .with_prefix("One")
            .with_stdout(out.clone()),
    );
    let second = Arc::new(
        Logger::new()
            .without_colors()
            .with_prefix("Two")
            .with_stdout(out.clone()),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let logger = if i % 2 == 0 {
                Arc::clone(&first)
            } else {
                Arc::clone(&second)
            };
            thread::spawn(move || {
                for n in 0..10 {
                    info!(logger, "thread {} line {}", i, n);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = out.lines();
    assert_eq!(lines.len(), THREADS * 10);
    for line in lines {
        assert!(
            line.starts_with("INFO    [One]") || line.starts_with("INFO    [Two]"),
            "interleaved line: {:?}",
            line
        );
        assert_eq!(line.matches("line").count(), 1, "interleaved line: {:?}", line);
    }
}
