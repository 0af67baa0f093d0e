use codonforge::config::{AnnealingConfig, ScoringWeights};
use codonforge::optimizer::{greedy_optimize, random_synonymous_swap, stochastic_optimize};
use codonforge::presets::KnownTable;
use codonforge::scorer::{score_sequence, CodonUsageTable};
use criterion::{criterion_group, criterion_main, Criterion};
use fastrand::Rng;
use std::hint::black_box;

fn setup_table() -> CodonUsageTable {
    KnownTable::Human.load().expect("Failed to load built-in table")
}

/// Random 1 kb coding sequence with no internal stops.
fn setup_sequence(rng: &mut Rng) -> String {
    let table = setup_table();
    let sense: Vec<&str> = table
        .groups()
        .filter(|(aa, _)| !aa.is_stop())
        .flat_map(|(_, entries)| entries.iter().map(|e| e.codon.as_str()))
        .collect();

    let mut seq = String::from("ATG");
    while seq.len() < 1000 {
        seq.push_str(sense[rng.usize(0..sense.len())]);
    }
    seq
}

fn criterion_benchmark(c: &mut Criterion) {
    let table = setup_table();
    let weights = ScoringWeights::default();
    let mut rng = Rng::with_seed(42);
    let seq = setup_sequence(&mut rng);

    c.bench_function("score_sequence (1 kb)", |b| {
        b.iter(|| score_sequence(black_box(&seq), &table, &weights))
    });

    c.bench_function("greedy_optimize (1 kb)", |b| {
        b.iter(|| greedy_optimize(black_box(&seq), &table))
    });

    c.bench_function("random_synonymous_swap (1 kb)", |b| {
        b.iter(|| random_synonymous_swap(black_box(&seq), &table, &mut rng))
    });

    let config = AnnealingConfig {
        iterations: 200,
        ..Default::default()
    };
    c.bench_function("stochastic_optimize (1 kb, 200 steps)", |b| {
        b.iter(|| {
            let mut rng = Rng::with_seed(7);
            stochastic_optimize(black_box(&seq), &table, &weights, &config, &mut rng)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
