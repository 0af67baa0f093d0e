use super::mutation::random_synonymous_swap;
use super::{greedy_optimize, OptimizationResult};
use crate::config::{AnnealingConfig, ScoringWeights};
use crate::error::CfResult;
use crate::scorer::{score_sequence, CodonUsageTable};
use fastrand::Rng;
use tracing::debug;

/// One simulated-annealing chain.
///
/// `current` may be worse than `best`; `best` only moves on a strict
/// improvement, so its score never drops below the greedy seed.
pub struct Annealer<'a> {
    table: &'a CodonUsageTable,
    weights: &'a ScoringWeights,
    config: &'a AnnealingConfig,

    pub current: String,
    pub current_score: f64,
    pub best: String,
    pub best_score: f64,
    pub temperature: f64,
    pub rng: Rng,

    pub steps: usize,
    pub accepted: usize,
    pub improvements: usize,
}

impl<'a> Annealer<'a> {
    /// Seeds the chain with the greedy rewrite of `seq`.
    pub fn new(
        seq: &str,
        table: &'a CodonUsageTable,
        weights: &'a ScoringWeights,
        config: &'a AnnealingConfig,
        rng: Rng,
    ) -> Self {
        let current = greedy_optimize(seq, table);
        let current_score = score_sequence(&current, table, weights);

        Self {
            table,
            weights,
            config,
            best: current.clone(),
            best_score: current_score,
            current,
            current_score,
            temperature: config.initial_temperature,
            rng,
            steps: 0,
            accepted: 0,
            improvements: 0,
        }
    }

    /// A chain without a complete codon has no move to make.
    pub fn is_degenerate(&self) -> bool {
        self.current.len() < 3
    }

    /// Proposes one swap, applies the Metropolis criterion and cools.
    /// Returns whether the candidate was accepted.
    #[inline(always)]
    pub fn step(&mut self) -> CfResult<bool> {
        let candidate = random_synonymous_swap(&self.current, self.table, &mut self.rng)?;
        let candidate_score = score_sequence(&candidate, self.table, self.weights);
        let diff = candidate_score - self.current_score;

        let temp = self.temperature.max(self.config.temperature_floor);
        let accept = diff > 0.0 || self.rng.f64() < (diff / temp).exp();

        if accept {
            self.current = candidate;
            self.current_score = candidate_score;
            self.accepted += 1;
        }

        if self.current_score > self.best_score {
            self.best.clone_from(&self.current);
            self.best_score = self.current_score;
            self.improvements += 1;
        }

        self.temperature *= self.config.cooling_rate;
        self.steps += 1;
        Ok(accept)
    }

    /// Runs `steps` iterations. Returns the number of accepted moves.
    pub fn evolve(&mut self, steps: usize) -> CfResult<usize> {
        let mut accepted = 0;
        for _ in 0..steps {
            if self.step()? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Runs the configured number of iterations and returns the best sequence.
    pub fn run(mut self) -> CfResult<OptimizationResult> {
        if self.is_degenerate() {
            debug!("No complete codon to anneal; returning greedy seed");
        } else {
            self.evolve(self.config.iterations)?;
        }

        debug!(
            "Annealing finished: {} steps, {} accepted, {} improvements, best {:.4}",
            self.steps, self.accepted, self.improvements, self.best_score
        );

        Ok(OptimizationResult {
            sequence: self.best,
            score: self.best_score,
            iterations: self.steps,
            accepted: self.accepted,
            improvements: self.improvements,
        })
    }
}

/// Simulated annealing over single synonymous swaps, seeded from the greedy
/// result. The chain draws from a generator forked off `rng`, so a seeded
/// `rng` gives a reproducible run.
pub fn stochastic_optimize(
    seq: &str,
    table: &CodonUsageTable,
    weights: &ScoringWeights,
    config: &AnnealingConfig,
    rng: &mut Rng,
) -> CfResult<OptimizationResult> {
    Annealer::new(seq, table, weights, config, rng.fork()).run()
}
