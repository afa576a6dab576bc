use cigar_core::{compress, expand, tokenize};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// A read-alignment-shaped CIGAR: soft clips, long matches, scattered indels.
fn sample_cigar(runs: usize) -> String {
    let mut cigar = String::from("5S");
    for i in 0..runs {
        let op = match i % 4 {
            0 | 2 => 'M',
            1 => 'I',
            _ => 'D',
        };
        let count = if op == 'M' { 40 + i % 60 } else { 1 + i % 3 };
        cigar.push_str(&format!("{}{}", count, op));
    }
    cigar.push_str("5S");
    cigar
}

fn bench_codec(c: &mut Criterion) {
    let cigar = sample_cigar(500);
    let edits = expand(&cigar).unwrap();

    c.bench_function("tokenize_500_runs", |b| {
        b.iter(|| tokenize(black_box(&cigar)).unwrap())
    });
    c.bench_function("expand_500_runs", |b| {
        b.iter(|| expand(black_box(&cigar)).unwrap())
    });
    c.bench_function("compress_500_runs", |b| {
        b.iter(|| compress(black_box(&edits)))
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
