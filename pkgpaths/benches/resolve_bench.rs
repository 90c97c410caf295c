use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pkgpaths::path::{normalize, PathFilter, PathResolver};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("absolute_path", |b| {
        b.iter(|| normalize::normalize(black_box("/absolute/path/to/pkg")));
    });

    group.bench_function("explicit_relative", |b| {
        b.iter(|| normalize::normalize(black_box("./relative/path")));
    });

    group.bench_function("bare_relative", |b| {
        b.iter(|| normalize::normalize(black_box("relative/path")));
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let filter = PathFilter::new(["vendor", "testdata", "internal/generated", "skip.go"]);

    group.bench_function("plain_name", |b| {
        b.iter(|| filter.is_excluded(black_box("handlers")));
    });

    group.bench_function("nested_skip_match", |b| {
        b.iter(|| filter.is_excluded(black_box("internal/generated")));
    });

    group.bench_function("hidden_name", |b| {
        b.iter(|| filter.is_excluded(black_box(".git")));
    });

    group.finish();
}

/// Build `width` packages per level, `depth` levels deep.
fn build_tree(root: &Path, width: usize, depth: usize) {
    if depth == 0 {
        return;
    }
    for i in 0..width {
        let dir = root.join(format!("pkg{i}"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("file.go"), "package p").unwrap();
        build_tree(&dir, width, depth - 1);
    }
    fs::create_dir_all(root.join("vendor").join("dep")).unwrap();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let filter = PathFilter::new(["vendor"]);

    for (width, depth) in [(4, 2), (4, 3), (6, 3)] {
        let temp = TempDir::new().unwrap();
        build_tree(temp.path(), width, depth);
        let resolver = PathResolver::new(temp.path());

        group.bench_with_input(
            BenchmarkId::new("expand", format!("{width}x{depth}")),
            &resolver,
            |b, resolver| {
                b.iter(|| resolver.resolve(black_box(&["./..."]), &filter).unwrap());
            },
        );
    }

    let literal = PathResolver::new("/nonexistent");
    let specs: Vec<String> = (0..100).map(|i| format!("pkg/{i}")).collect();
    group.bench_function("literal_100", |b| {
        b.iter(|| literal.resolve(black_box(&specs), &filter).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_filter, bench_resolve);
criterion_main!(benches);
