//! Criterion benchmarks for the grid word search.

use criterion::{criterion_group, criterion_main, Criterion};
use squaredle_solver::{AdjacencyGraph, DictionaryIndex, SolveOptions, Solver};
use std::hint::black_box;

const GRID: &str = "tecssneirrsnidye";

/// Every string of length 4..=6 over a few of the grid's letters.
fn generate_words() -> Vec<String> {
    let alphabet = ['e', 'i', 'n', 'r', 's', 't'];
    let mut words = vec![String::new()];
    let mut all = Vec::new();
    for length in 1..=6 {
        words = words
            .iter()
            .flat_map(|w| alphabet.iter().map(move |&c| format!("{}{}", w, c)))
            .collect();
        if length >= 4 {
            all.extend(words.iter().cloned());
        }
    }
    all
}

fn bench_solve(c: &mut Criterion) {
    let words = generate_words();
    let graph = AdjacencyGraph::parse(GRID).unwrap();
    let dictionary = DictionaryIndex::new(&words, 4);

    let paths = Solver::new(graph.clone(), dictionary.clone(), SolveOptions::new()).unwrap();
    c.bench_function("solve_4x4_paths", |b| b.iter(|| black_box(paths.solve().unwrap())));

    let words_only = Solver::new(graph.clone(), dictionary.clone(), SolveOptions::new().words_only()).unwrap();
    c.bench_function("solve_4x4_words_only", |b| b.iter(|| black_box(words_only.solve().unwrap())));

    let single = Solver::new(graph, dictionary, SolveOptions::new().with_threads(1)).unwrap();
    c.bench_function("solve_4x4_single_thread", |b| b.iter(|| black_box(single.solve().unwrap())));
}

fn bench_index(c: &mut Criterion) {
    let words = generate_words();
    c.bench_function("index_build", |b| b.iter(|| black_box(DictionaryIndex::new(&words, 4))));

    let index = DictionaryIndex::new(&words, 4);
    c.bench_function("prefix_lookup", |b| {
        b.iter(|| black_box(index.has_prefix_candidate(black_box("stre"))))
    });
}

criterion_group!(benches, bench_solve, bench_index);
criterion_main!(benches);
