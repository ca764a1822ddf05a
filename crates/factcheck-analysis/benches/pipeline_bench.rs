//! Consistency pipeline benchmarks.
//!
//! Benchmarks: extraction over in-memory documents and a full directory check.
//! Run with: cargo bench -p factcheck-analysis --bench pipeline_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use factcheck_analysis::corpus::{DirectoryCorpus, Document};
use factcheck_analysis::ConsistencyChecker;
use factcheck_core::config::ScanConfig;
use tempfile::TempDir;

/// A paragraph with a few facts whose values vary per document.
fn paragraph(i: usize) -> String {
    format!(
        "In its annual letter the board confirmed that ${} million was donated to the shelter fund. \
         Every morning the rescue team checks all {} vehicles before leaving the depot. \
         The sanctuary now covers {} acres of restored wetland near the river.\n",
        i % 7 + 1,
        i % 13 + 2,
        i % 5 + 20,
    )
}

fn make_documents(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| Document::new(format!("doc_{i:05}.md"), paragraph(i).repeat(4)))
        .collect()
}

/// Create a temp directory with N markdown files.
fn create_test_files(count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..count {
        let subdir = dir.path().join(format!("dir_{:03}", i / 100));
        std::fs::create_dir_all(&subdir).ok();
        std::fs::write(subdir.join(format!("f_{i:05}.md")), paragraph(i).repeat(4)).unwrap();
    }
    dir
}

fn pipeline_in_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_in_memory");
    group.sample_size(10);

    for size in [100, 1000, 5000] {
        let docs = make_documents(size);
        let checker = ConsistencyChecker::default();

        group.bench_with_input(BenchmarkId::new("check_documents", size), &size, |b, _| {
            b.iter(|| checker.check_documents(&docs));
        });
    }
    group.finish();
}

fn pipeline_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_directory");
    group.sample_size(10);

    for size in [1000, 5000] {
        let dir = create_test_files(size);
        let corpus = DirectoryCorpus::new(dir.path(), &ScanConfig::default());
        let checker = ConsistencyChecker::default();

        group.bench_with_input(BenchmarkId::new("check", size), &size, |b, _| {
            b.iter(|| checker.check(&corpus).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, pipeline_in_memory, pipeline_directory);
criterion_main!(benches);
