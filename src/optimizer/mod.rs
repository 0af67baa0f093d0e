pub mod anneal;
pub mod mutation;
pub mod runner;

pub use self::anneal::{stochastic_optimize, Annealer};
pub use self::mutation::random_synonymous_swap;
pub use self::runner::Optimizer;

use crate::genetic_code::translate;
use crate::scorer::CodonUsageTable;
use crate::sequence::{codons, Codon};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Most frequent synonym for every codon
    Greedy,
    /// Simulated annealing seeded from the greedy result
    Stochastic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub sequence: String,
    pub score: f64,
    pub iterations: usize,
    pub accepted: usize,
    pub improvements: usize,
}

/// Highest-frequency synonym for `codon`, or `codon` itself when it is a stop,
/// untranslatable, or its amino acid is not in the table.
#[inline(always)]
pub fn greedy_codon(codon: Codon, table: &CodonUsageTable) -> Codon {
    match translate(codon) {
        Some(aa) if !aa.is_stop() => table.best_codon(aa).unwrap_or(codon),
        _ => codon,
    }
}

/// Rewrites every codon to its amino acid's most frequent synonym.
///
/// Trailing bases that do not fill a codon are dropped. Idempotent.
/// Codons that are passed through keep their original bytes.
pub fn greedy_optimize(seq: &str, table: &CodonUsageTable) -> String {
    let mut out = Vec::with_capacity(seq.len() - seq.len() % 3);
    for c in codons(seq) {
        out.extend_from_slice(greedy_codon(c, table).as_bytes());
    }
    // Only a truncated multi-byte character can leave invalid UTF-8.
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
