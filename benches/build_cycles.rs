/// Benchmarks for log parsing and cycle construction
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gcycles::cycles::{build_cycles, parse_records};
use gcycles::model::CommitRecord;

/// Helper to produce a synthetic log, roughly three commits per day
fn synthetic_log(count: usize) -> String {
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut raw = String::new();
    for i in 0..count {
        let date = base + Duration::days((i / 3) as i64);
        raw.push_str(&format!("{date}|commit message {i}\n"));
    }
    raw
}

fn synthetic_records(count: usize) -> Vec<CommitRecord> {
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    (0..count)
        .map(|i| CommitRecord {
            date: base + Duration::days((i / 3) as i64),
            message: format!("commit message {i}"),
        })
        .collect()
}

fn benchmark_parse_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_records");

    for commit_count in [1_000, 10_000, 50_000].iter() {
        let raw = synthetic_log(*commit_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_commits", commit_count)),
            &raw,
            |b, raw| {
                b.iter(|| parse_records(black_box(raw.as_str()), None));
            },
        );
    }

    group.finish();
}

fn benchmark_build_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_cycles");

    for commit_count in [1_000, 10_000, 50_000].iter() {
        let records = synthetic_records(*commit_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_commits", commit_count)),
            &records,
            |b, records| {
                b.iter(|| build_cycles(black_box(records.clone()), 15));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse_records, benchmark_build_cycles);
criterion_main!(benches);
