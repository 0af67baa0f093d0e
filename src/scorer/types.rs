use serde::Serialize;

/// Composite score broken into its components.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreDetails {
    // Top-line
    pub total: f64,
    pub cai: f64,

    // GC balance
    pub gc_fraction: f64,
    pub gc_penalty: f64,

    // Counters
    pub rare_codons: usize,
    pub homopolymers: usize,
    pub codons: usize,
    pub scorable_codons: usize,
}
