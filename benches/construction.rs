//! Construction and query benchmarks
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gstree::SuffixTree;

/// Deterministic pseudo-random DNA-like text (xorshift)
fn dna(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            b"ACGT"[(state % 4) as usize]
        })
        .collect()
}

/// Highly repetitive text: worst case for the remainder
fn repetitive(len: usize) -> Vec<u8> {
    b"abcabcabd".iter().copied().cycle().take(len).collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &len in &[10_000usize, 100_000, 1_000_000] {
        let text = dna(len, 42);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("dna", len), &text, |b, text| {
            b.iter(|| {
                let mut tree = SuffixTree::new();
                tree.extend(text.iter().copied());
                tree.append(b'$');
                black_box(tree.node_count())
            })
        });
    }

    let text = repetitive(100_000);
    group.throughput(Throughput::Elements(text.len() as u64));
    group.bench_function("repetitive_100000", |b| {
        b.iter(|| {
            let mut tree = SuffixTree::new();
            tree.extend(text.iter().copied());
            tree.append(b'$');
            black_box(tree.node_count())
        })
    });

    group.finish();
}

fn bench_multi_string(c: &mut Criterion) {
    let reads: Vec<Vec<u32>> = (0..1_000)
        .map(|i| {
            dna(150, i + 1)
                .into_iter()
                .map(u32::from)
                .chain(std::iter::once(1_000 + i as u32))
                .collect()
        })
        .collect();

    c.bench_function("add_string_1000_reads", |b| {
        b.iter(|| {
            let mut tree = SuffixTree::new();
            for read in &reads {
                tree.add_string(read.iter().copied()).unwrap();
            }
            black_box(tree.string_count())
        })
    });
}

fn bench_queries(c: &mut Criterion) {
    let text = dna(1_000_000, 7);
    let mut tree = SuffixTree::new();
    tree.add_string(text.iter().copied().chain(std::iter::once(b'$')))
        .unwrap();

    let patterns: Vec<Vec<u8>> = (0..1_000)
        .map(|i| text[i * 997..i * 997 + 12].to_vec())
        .collect();

    let mut group = c.benchmark_group("queries");
    group.throughput(Throughput::Elements(patterns.len() as u64));

    group.bench_function("is_substring", |b| {
        b.iter(|| {
            patterns
                .iter()
                .filter(|p| tree.is_substring(black_box(p)))
                .count()
        })
    });

    group.bench_function("substring_count", |b| {
        b.iter(|| {
            patterns
                .iter()
                .map(|p| tree.substring_count(black_box(p)))
                .sum::<usize>()
        })
    });

    group.bench_function("query_batch", |b| {
        b.iter(|| black_box(tree.query_batch(&patterns)).len())
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_multi_string, bench_queries);
criterion_main!(benches);
