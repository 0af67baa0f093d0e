use super::table::CodonUsageTable;
use super::types::ScoreDetails;
use crate::config::ScoringWeights;
use crate::sequence::codons;

/// Codon adaptation index: geometric mean of the relative weights of every
/// scorable codon, computed in log space.
///
/// Stop codons, amino acids missing from the table and zero-weight codons are
/// skipped. A sequence with nothing to score has a CAI of 0.
pub fn calculate_cai(seq: &str, table: &CodonUsageTable) -> f64 {
    let mut log_sum = 0.0;
    let mut n = 0usize;

    for codon in codons(seq) {
        if let Some(w) = table.relative_weight(codon) {
            if w > 0.0 {
                log_sum += w.ln();
                n += 1;
            }
        }
    }

    if n == 0 {
        return 0.0;
    }
    (log_sum / n as f64).exp()
}

/// Fraction of `G`/`C` over the whole sequence, trailing bases included.
pub fn gc_fraction(seq: &str) -> f64 {
    let gc = seq.bytes().filter(|&b| b == b'G' || b == b'C').count();
    gc as f64 / seq.len().max(1) as f64
}

/// Codons of table-present, non-stop amino acids whose relative weight is
/// strictly below `threshold`.
pub fn rare_codon_count(seq: &str, table: &CodonUsageTable, threshold: f64) -> usize {
    codons(seq)
        .filter_map(|c| table.relative_weight(c))
        .filter(|&w| w < threshold)
        .count()
}

/// Maximal single-nucleotide runs of length `>= run_length`.
/// A run is counted once however long it is.
pub fn homopolymer_count(seq: &str, run_length: usize) -> usize {
    let bytes = seq.as_bytes();
    let mut count = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let mut j = i + 1;
        while j < bytes.len() && bytes[j] == b {
            j += 1;
        }
        if matches!(b, b'A' | b'C' | b'G' | b'T') && j - i >= run_length {
            count += 1;
        }
        i = j;
    }
    count
}

/// Composite fitness: CAI minus GC, rare-codon and homopolymer penalties.
/// Higher is better.
pub fn score_sequence(seq: &str, table: &CodonUsageTable, weights: &ScoringWeights) -> f64 {
    let cai = calculate_cai(seq, table);
    let gc_penalty = (gc_fraction(seq) - weights.target_gc).abs();
    let rare = rare_codon_count(seq, table, weights.rare_threshold);
    let homo = homopolymer_count(seq, weights.homopolymer_run_length);
    combine(cai, gc_penalty, rare, homo, weights)
}

#[inline(always)]
fn combine(cai: f64, gc_penalty: f64, rare: usize, homo: usize, weights: &ScoringWeights) -> f64 {
    cai - weights.gc_penalty * gc_penalty
        - weights.rare_penalty * rare as f64
        - weights.homopolymer_penalty * homo as f64
}

/// Detailed scoring for reports. `total` matches [`score_sequence`].
pub fn score_details(seq: &str, table: &CodonUsageTable, weights: &ScoringWeights) -> ScoreDetails {
    let cai = calculate_cai(seq, table);
    let gc = gc_fraction(seq);
    let gc_penalty = (gc - weights.target_gc).abs();
    let rare_codons = rare_codon_count(seq, table, weights.rare_threshold);
    let homopolymers = homopolymer_count(seq, weights.homopolymer_run_length);

    let mut n_codons = 0;
    let mut scorable = 0;
    for c in codons(seq) {
        n_codons += 1;
        if table.relative_weight(c).is_some() {
            scorable += 1;
        }
    }

    ScoreDetails {
        total: combine(cai, gc_penalty, rare_codons, homopolymers, weights),
        cai,
        gc_fraction: gc,
        gc_penalty,
        rare_codons,
        homopolymers,
        codons: n_codons,
        scorable_codons: scorable,
    }
}
