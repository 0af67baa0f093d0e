/// Default GC fraction the composite score steers towards.
pub const DEFAULT_TARGET_GC: f64 = 0.5;

/// Relative weight below which a codon counts as rare.
pub const DEFAULT_RARE_THRESHOLD: f64 = 0.1;

/// Shortest single-nucleotide run that counts as a homopolymer.
pub const DEFAULT_HOMOPOLYMER_RUN: usize = 5;

// Composite score coefficients.
pub const DEFAULT_GC_PENALTY: f64 = 0.5;
pub const DEFAULT_RARE_PENALTY: f64 = 0.05;
pub const DEFAULT_HOMOPOLYMER_PENALTY: f64 = 0.2;

/// Annealing schedule defaults.
pub const DEFAULT_ITERATIONS: usize = 2000;
pub const DEFAULT_INITIAL_TEMPERATURE: f64 = 1.0;
pub const DEFAULT_COOLING_RATE: f64 = 0.995;

/// Lower bound on the temperature used in the Metropolis exponent.
pub const DEFAULT_TEMPERATURE_FLOOR: f64 = 1e-8;

/// Number of distinct codons over {A,C,G,T}.
pub const CODON_SPACE: usize = 64;
