// Criterion benchmarks for rbspell-tree.
//
// Run:
//   cargo bench -p rbspell-tree

use std::collections::HashSet;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rbspell_tree::RbTree;

const BENCH_SEED: u64 = 0x2545_f491_4f6c_dd1d;

/// Deterministic word list: 20k distinct five-letter strings in a
/// scrambled order.
fn wordlist() -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    let mut words = Vec::with_capacity(20_000);
    let mut seen = HashSet::new();
    while words.len() < 20_000 {
        let word: String = (0..5).map(|_| rng.random_range(b'a'..=b'z') as char).collect();
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}

fn bench_insert(c: &mut Criterion) {
    let words = wordlist();
    c.bench_function("insert_20k_words", |b| {
        b.iter(|| {
            let mut tree = RbTree::new();
            for w in &words {
                std::hint::black_box(tree.insert(w.as_str()).ok());
            }
            tree
        });
    });
}

fn bench_lookup(c: &mut Criterion) {
    let words = wordlist();
    let tree: RbTree<&str> = words.iter().map(String::as_str).collect();
    c.bench_function("lookup_20k_words", |b| {
        b.iter(|| {
            for w in &words {
                std::hint::black_box(tree.lookup(&w.as_str()));
            }
        });
    });
}

/// The checker's filter pass: scan in order and remove every other key.
fn bench_filter_scan(c: &mut Criterion) {
    let words = wordlist();
    c.bench_function("filter_scan_20k_words", |b| {
        b.iter(|| {
            let mut tree: RbTree<&str> = words.iter().map(String::as_str).collect();
            let mut keep = false;
            tree.retain(|_| {
                keep = !keep;
                keep
            })
            .ok();
            std::hint::black_box(tree.len())
        });
    });
}

criterion_group!(benches, bench_insert, bench_lookup, bench_filter_scan);
criterion_main!(benches);
