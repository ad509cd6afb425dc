use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strview::{compare, find, find_all, separate, StringBuffer, StringView};

fn csv_line(fields: usize) -> String {
    (0..fields)
        .map(|i| format!("field{i}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for size in [100, 1000, 10_000].iter() {
        let haystack = "a".repeat(*size) + "needle";
        group.throughput(Throughput::Bytes(haystack.len() as u64));

        group.bench_with_input(BenchmarkId::new("case_sensitive", size), &haystack, |b, h| {
            b.iter(|| black_box(find(h.as_str(), &["needle"], true).unwrap()));
        });
        group.bench_with_input(
            BenchmarkId::new("case_insensitive", size),
            &haystack,
            |b, h| {
                b.iter(|| black_box(find(h.as_str(), &["NEEDLE"], false).unwrap()));
            },
        );
        group.bench_with_input(BenchmarkId::new("three_needles", size), &haystack, |b, h| {
            b.iter(|| black_box(find(h.as_str(), &["nope", "ab", "needle"], true).unwrap()));
        });
    }
    group.finish();
}

fn bench_find_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_all");

    for fields in [10, 100, 1000].iter() {
        let line = csv_line(*fields);
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::new("commas", fields), &line, |b, l| {
            b.iter(|| black_box(find_all(l.as_str(), &[","], true).unwrap().len()));
        });
    }
    group.finish();
}

fn bench_separate(c: &mut Criterion) {
    let mut group = c.benchmark_group("separate");

    for fields in [10, 100, 1000].iter() {
        let line = csv_line(*fields);
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::new("csv", fields), &line, |b, l| {
            b.iter(|| black_box(separate(l.as_str(), &[","], true).unwrap().len()));
        });
    }
    group.finish();
}

fn bench_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("concat");

    for count in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("growing", count), count, |b, &count| {
            b.iter(|| {
                let mut s = StringBuffer::new();
                for _ in 0..count {
                    s.concat(StringView::from("chunk")).unwrap();
                }
                black_box(s.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("reserved", count), count, |b, &count| {
            b.iter(|| {
                let mut s = StringBuffer::new();
                s.reserve(count * 5).unwrap();
                for _ in 0..count {
                    s.concat(StringView::from("chunk")).unwrap();
                }
                black_box(s.len())
            });
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let left = "x".repeat(4096);
    let right = left.to_uppercase();

    c.bench_function("compare_4k_case_insensitive", |b| {
        b.iter(|| black_box(compare(left.as_str(), right.as_str(), false)));
    });
}

criterion_group!(
    benches,
    bench_find,
    bench_find_all,
    bench_separate,
    bench_concat,
    bench_compare
);
criterion_main!(benches);
