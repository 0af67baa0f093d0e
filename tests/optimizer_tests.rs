use codonforge::config::{AnnealingConfig, ScoringWeights};
use codonforge::genetic_code::translate_sequence;
use codonforge::optimizer::{greedy_optimize, stochastic_optimize, Annealer};
use codonforge::scorer::{calculate_cai, score_sequence, CodonUsageTable};
use fastrand::Rng;
use rstest::rstest;

mod common;
use common::{assert_close, scenario_table, wide_table, SCENARIO_GREEDY, SCENARIO_INPUT};

fn short_anneal(iterations: usize) -> AnnealingConfig {
    AnnealingConfig {
        iterations,
        ..Default::default()
    }
}

#[test]
fn test_greedy_scenario() {
    let table = scenario_table();
    assert_eq!(greedy_optimize(SCENARIO_INPUT, &table), SCENARIO_GREEDY);
}

#[test]
fn test_greedy_is_idempotent() {
    let table = wide_table();
    let once = greedy_optimize("ATGTTACTAAAAGGTTTGCTCGGGTAA", &table);
    assert_eq!(greedy_optimize(&once, &table), once);
}

#[test]
fn test_greedy_preserves_protein() {
    let table = wide_table();
    let seq = "ATGTTACTAAAAGGTTTGCTCGGGTAA";
    let out = greedy_optimize(seq, &table);
    assert_eq!(translate_sequence(&out), translate_sequence(seq));
}

#[rstest]
#[case::stop_codon("TAA", "TAA")]
#[case::missing_amino_acid("TGG", "TGG")]
#[case::untranslatable("NNN", "NNN")]
#[case::mixed("TTTTAATGG", "TTCTAATGG")]
fn test_greedy_pass_through(#[case] seq: &str, #[case] expected: &str) {
    assert_eq!(greedy_optimize(seq, &scenario_table()), expected);
}

#[test]
fn test_greedy_drops_trailing_bases() {
    let table = scenario_table();
    assert_eq!(greedy_optimize("ATGTTTCC", &table), "ATGTTC");
    assert_eq!(greedy_optimize("AT", &table), "");
    assert_eq!(greedy_optimize("", &table), "");
}

#[test]
fn test_greedy_tie_keeps_first_listed() {
    let table =
        CodonUsageTable::from_symbols(&[("K", &[("AAG", 0.5), ("AAA", 0.5)])]).unwrap();
    assert_eq!(greedy_optimize("AAAAAA", &table), "AAGAAG");
}

#[test]
fn test_greedy_maximizes_cai() {
    let table = wide_table();
    let seq = "ATGTTACTAAAAGGTTTGCTCGGG";
    let out = greedy_optimize(seq, &table);
    assert_close(calculate_cai(&out, &table), 1.0);
    assert!(calculate_cai(seq, &table) < 1.0);
}

#[test]
fn test_zero_iterations_returns_greedy() {
    let table = wide_table();
    let weights = ScoringWeights::default();
    let config = short_anneal(0);
    let mut rng = Rng::with_seed(42);

    let seq = "ATGTTACTAAAAGGTTTGCTCGGG";
    let result = stochastic_optimize(seq, &table, &weights, &config, &mut rng).unwrap();
    assert_eq!(result.sequence, greedy_optimize(seq, &table));
    assert_eq!(result.iterations, 0);
}

#[test]
fn test_stochastic_never_worse_than_greedy() {
    let table = wide_table();
    let weights = ScoringWeights::default();
    let config = short_anneal(500);
    let seq = "ATGTTACTAAAAGGTTTGCTCGGGAAAAAGTTATAA";
    let greedy_score = score_sequence(&greedy_optimize(seq, &table), &table, &weights);

    for seed in 0..10 {
        let mut rng = Rng::with_seed(seed);
        let result = stochastic_optimize(seq, &table, &weights, &config, &mut rng).unwrap();
        assert!(
            result.score >= greedy_score,
            "seed {}: {} < {}",
            seed,
            result.score,
            greedy_score
        );
        assert_close(result.score, score_sequence(&result.sequence, &table, &weights));
        assert_eq!(translate_sequence(&result.sequence), translate_sequence(seq));
    }
}

#[test]
fn test_stochastic_escapes_homopolymer() {
    // Greedy picks AAA for every lysine, which builds a long run.
    let table =
        CodonUsageTable::from_symbols(&[("K", &[("AAA", 1.0), ("AAG", 0.95)])]).unwrap();
    let weights = ScoringWeights {
        homopolymer_penalty: 1.0,
        ..Default::default()
    };
    let seq = "AAAAAAAAAAAAAAA";
    let greedy_score = score_sequence(seq, &table, &weights);

    let mut rng = Rng::with_seed(3);
    let result =
        stochastic_optimize(seq, &table, &weights, &short_anneal(2000), &mut rng).unwrap();
    assert!(result.score > greedy_score);
    assert!(result.improvements > 0);
}

#[rstest]
#[case::empty("")]
#[case::partial("AT")]
fn test_stochastic_degenerate_input(#[case] seq: &str) {
    let table = scenario_table();
    let weights = ScoringWeights::default();
    let mut rng = Rng::with_seed(1);
    let result =
        stochastic_optimize(seq, &table, &weights, &short_anneal(100), &mut rng).unwrap();
    assert_eq!(result.sequence, "");
    assert_eq!(result.iterations, 0);
}

#[test]
fn test_stochastic_output_length_is_whole_codons() {
    let table = scenario_table();
    let weights = ScoringWeights::default();
    let mut rng = Rng::with_seed(9);
    let result =
        stochastic_optimize("ATGTTTCCCGGGTT", &table, &weights, &short_anneal(50), &mut rng)
            .unwrap();
    assert_eq!(result.sequence.len(), 12);
}

#[test]
fn test_annealer_cools_every_step() {
    let table = wide_table();
    let weights = ScoringWeights::default();
    let config = AnnealingConfig {
        initial_temperature: 2.0,
        cooling_rate: 0.5,
        ..Default::default()
    };
    let mut annealer = Annealer::new("ATGTTAAAA", &table, &weights, &config, Rng::with_seed(5));
    annealer.evolve(3).unwrap();
    assert_eq!(annealer.steps, 3);
    assert_close(annealer.temperature, 0.25);
    assert!(annealer.best_score >= annealer.current_score);
}

#[test]
fn test_greedy_keeps_bytes_of_passed_through_codons() {
    // The non-ASCII character straddles two chunks; neither translates.
    let table = scenario_table();
    assert_eq!(greedy_optimize("AAéGGG", &table), "AAéGG");
}

fn lowering_steps(config: &AnnealingConfig, steps: usize) -> usize {
    let table = wide_table();
    let weights = ScoringWeights::default();
    let mut annealer = Annealer::new(
        "ATGCTGCTGAAGGGCCTGAAGGGC",
        &table,
        &weights,
        config,
        Rng::with_seed(21),
    );

    let mut lowered = 0;
    for _ in 0..steps {
        let before = annealer.current_score;
        annealer.step().unwrap();
        // Ties between synonyms can differ by rounding noise only.
        if annealer.current_score < before - 1e-9 {
            lowered += 1;
        }
    }
    lowered
}

#[test]
fn test_hot_chain_accepts_worse_moves() {
    let config = AnnealingConfig {
        initial_temperature: 100.0,
        cooling_rate: 1.0,
        ..Default::default()
    };
    assert!(lowering_steps(&config, 200) > 0);
}

#[test]
fn test_frozen_chain_never_accepts_worse_moves() {
    let config = AnnealingConfig {
        initial_temperature: 0.0,
        ..Default::default()
    };
    assert_eq!(lowering_steps(&config, 500), 0);
}
