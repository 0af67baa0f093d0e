pub mod engine;
pub mod loader;
pub mod table;
pub mod types;

pub use self::engine::{
    calculate_cai, gc_fraction, homopolymer_count, rare_codon_count, score_details,
    score_sequence,
};
pub use self::table::{CodonEntry, CodonUsageTable};
pub use self::types::ScoreDetails;

use crate::config::ScoringWeights;
use crate::error::CfResult;
use std::path::Path;
use std::sync::Arc;

/// A usage table paired with the weights used to score against it.
///
/// The table is shared read-only, so a `Scorer` is cheap to clone into
/// parallel runs.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub table: Arc<CodonUsageTable>,
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(table: Arc<CodonUsageTable>, weights: ScoringWeights) -> Self {
        Self { table, weights }
    }

    pub fn load<P: AsRef<Path>>(usage_path: P, weights: ScoringWeights) -> CfResult<Self> {
        weights.validate()?;
        let table = loader::load_codon_usage(usage_path)?;
        Ok(Self::new(Arc::new(table), weights))
    }

    pub fn cai(&self, seq: &str) -> f64 {
        engine::calculate_cai(seq, &self.table)
    }

    /// Composite fitness used by the optimizer (fast path).
    pub fn score(&self, seq: &str) -> f64 {
        engine::score_sequence(seq, &self.table, &self.weights)
    }

    /// Component breakdown for reports.
    pub fn score_details(&self, seq: &str) -> ScoreDetails {
        engine::score_details(seq, &self.table, &self.weights)
    }
}
