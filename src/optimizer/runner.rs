use super::{stochastic_optimize, OptimizationResult};
use crate::config::AnnealingConfig;
use crate::error::CfResult;
use crate::scorer::Scorer;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

/// Runs independent annealing restarts in parallel and keeps the best.
///
/// Restart `i` is seeded with `seed + i`, so restart 0 reproduces a single
/// `stochastic_optimize` call seeded with `seed`.
pub struct Optimizer {
    scorer: Arc<Scorer>,
    config: AnnealingConfig,
}

impl Optimizer {
    pub fn new(scorer: Arc<Scorer>, config: AnnealingConfig) -> Self {
        Self { scorer, config }
    }

    pub fn run(&self, seq: &str, restarts: usize, seed: Option<u64>) -> CfResult<OptimizationResult> {
        let restarts = restarts.max(1);
        info!("Annealing with {} restart(s)", restarts);

        let mut results: Vec<OptimizationResult> = (0..restarts)
            .into_par_iter()
            .map(|i| {
                let mut rng = match seed {
                    Some(s) => fastrand::Rng::with_seed(s.wrapping_add(i as u64)),
                    None => fastrand::Rng::new(),
                };
                stochastic_optimize(
                    seq,
                    &self.scorer.table,
                    &self.scorer.weights,
                    &self.config,
                    &mut rng,
                )
            })
            .collect::<CfResult<_>>()?;

        // Order is preserved by the collect; ties keep the lowest restart.
        let mut best_idx = 0;
        for (i, r) in results.iter().enumerate() {
            debug!("Restart {}: score {:.4}", i, r.score);
            if r.score > results[best_idx].score {
                best_idx = i;
            }
        }

        Ok(results.swap_remove(best_idx))
    }
}
