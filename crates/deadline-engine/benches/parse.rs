use std::hint::black_box;

use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use deadline_engine::parse_expression;

fn bench_parse(c: &mut Criterion) {
    let anchor = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();

    // phrase-table hit, resolved by the first strategy
    c.bench_function("parse_phrase", |b| {
        b.iter(|| parse_expression(black_box("2 недели"), anchor))
    });

    // pattern hit, resolved after a full table miss
    c.bench_function("parse_pattern", |b| {
        b.iter(|| parse_expression(black_box("45 минут"), anchor))
    });

    // miss on both strategies
    c.bench_function("parse_miss", |b| {
        b.iter(|| parse_expression(black_box("через неделю"), anchor))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
