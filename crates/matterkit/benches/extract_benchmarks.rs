//! Performance benchmarks for detection and extraction

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use matterkit::prelude::*;
use std::hint::black_box;
use tempfile::TempDir;
use tokio::runtime::Runtime;

/// Build a document with `fields` metadata lines and a body of `body_lines` lines
fn document(fields: usize, body_lines: usize) -> String {
    let mut doc = String::from("---\n");
    for i in 0..fields {
        doc.push_str(&format!("field{}: value {}\n", i, i));
    }
    doc.push_str("---\n");
    for i in 0..body_lines {
        doc.push_str(&format!("Body line {} with some text.\n", i));
    }
    doc
}

/// Benchmark presence checks, which never parse metadata
fn bench_test(c: &mut Criterion) {
    let options = MatterOptions::default();
    let doc = document(20, 1000);

    c.bench_function("test_present", |b| {
        b.iter(|| test(black_box(&doc), &options))
    });

    let plain = "No front matter here.\n".repeat(1000);
    c.bench_function("test_absent", |b| {
        b.iter(|| test(black_box(&plain), &options))
    });
}

/// Benchmark full extraction by metadata size
fn bench_extract(c: &mut Criterion) {
    let options = MatterOptions::default();
    let mut group = c.benchmark_group("extract_yaml");

    for fields in [1, 10, 100] {
        let doc = document(fields, 100);
        group.bench_with_input(BenchmarkId::from_parameter(fields), &doc, |b, doc| {
            b.iter(|| extract(black_box(doc), &options).unwrap())
        });
    }

    group.finish();
}

/// Benchmark async file extraction
fn bench_read_file(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("note.md");
    std::fs::write(&path, document(10, 200)).expect("Failed to write file");

    let reader = MatterReader::new(MatterOptions::default()).unwrap();
    c.bench_function("read_async", |b| {
        b.to_async(&rt)
            .iter(|| async { reader.read_async(black_box(&path)).await.unwrap() })
    });
}

criterion_group!(benches, bench_test, bench_extract, bench_read_file);
criterion_main!(benches);
