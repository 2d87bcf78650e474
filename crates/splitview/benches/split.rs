//! Benchmark – `splitview::Split` against `str::split`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use splitview::{Split, split_all};

/// Builds a deterministic mixed-script document of at least `target_len`
/// bytes, one comma-separated record per line.
fn make_records(target_len: usize) -> String {
    const FIELDS: &[&str] = &[
        "plain ascii",
        "Κάρολος Δαρβίνος",
        "",
        "語彙の解析",
        "naïve café",
        "1234567",
    ];
    let mut s = String::with_capacity(target_len + 64);
    let mut i = 0usize;
    while s.len() < target_len {
        s.push_str(FIELDS[i % FIELDS.len()]);
        s.push_str(if i % 7 == 6 { ",\n" } else { ", " });
        i += 1;
    }
    s
}

fn count_split(haystack: &str, needle: &str) -> usize {
    let mut it = Split::new(haystack, needle);
    let mut total = 0usize;
    while it.advance() {
        total += it.current().len();
    }
    total
}

fn bench_split(c: &mut Criterion) {
    let payload = make_records(64 * 1024);

    let mut group = c.benchmark_group("split");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    for needle in [", ", ",\n", ""] {
        let label = format!("{needle:?}");
        group.bench_with_input(BenchmarkId::new("splitview", &label), &needle, |b, &n| {
            b.iter(|| black_box(count_split(black_box(&payload), n)));
        });
        group.bench_with_input(BenchmarkId::new("splitview_all", &label), &needle, |b, &n| {
            b.iter(|| black_box(split_all(black_box(payload.as_str()), n).count()));
        });
        if !needle.is_empty() {
            group.bench_with_input(BenchmarkId::new("std", &label), &needle, |b, &n| {
                b.iter(|| {
                    black_box(
                        black_box(&payload)
                            .split(n)
                            .filter(|s| !s.is_empty())
                            .map(str::len)
                            .sum::<usize>(),
                    )
                });
            });
        }
    }

    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_split }
criterion_main!(benches);
