use crate::error::CfResult;
use crate::genetic_code::translate;
use crate::scorer::CodonUsageTable;
use crate::sequence::Codon;
use clap::ValueEnum;
use strum_macros::{Display, EnumIter, EnumString};

/// Usage tables compiled into the binary.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, ValueEnum)]
#[strum(serialize_all = "snake_case")]
pub enum KnownTable {
    /// Homo sapiens relative adaptiveness
    Human,
}

// Relative adaptiveness per codon (H. sapiens).
#[rustfmt::skip]
const HUMAN_WEIGHTS: [(&str, f64); 64] = [
    ("TTT", 0.45), ("TTC", 1.0), ("TTA", 0.08), ("TTG", 0.13),
    ("CTT", 0.13), ("CTC", 0.2), ("CTA", 0.07), ("CTG", 1.0),
    ("ATT", 0.36), ("ATC", 0.47), ("ATA", 0.17), ("ATG", 1.0),
    ("GTT", 0.18), ("GTC", 0.24), ("GTA", 0.12), ("GTG", 1.0),
    ("TCT", 0.19), ("TCC", 0.22), ("TCA", 0.15), ("TCG", 0.05),
    ("AGT", 0.15), ("AGC", 1.0),
    ("CCT", 0.28), ("CCC", 0.32), ("CCA", 0.28), ("CCG", 0.11),
    ("ACT", 0.25), ("ACC", 0.36), ("ACA", 0.28), ("ACG", 0.11),
    ("GCT", 0.27), ("GCC", 0.4), ("GCA", 0.23), ("GCG", 0.11),
    ("TAT", 0.44), ("TAC", 1.0),
    ("CAT", 0.42), ("CAC", 1.0), ("CAA", 0.27), ("CAG", 1.0),
    ("AAT", 0.47), ("AAC", 1.0), ("AAA", 0.43), ("AAG", 1.0),
    ("GAT", 0.46), ("GAC", 1.0), ("GAA", 0.42), ("GAG", 1.0),
    ("TGT", 0.45), ("TGC", 1.0), ("TGG", 1.0),
    ("CGT", 0.08), ("CGC", 0.18), ("CGA", 0.11), ("CGG", 0.2),
    ("AGA", 0.21), ("AGG", 0.2),
    ("GGT", 0.16), ("GGC", 0.34), ("GGA", 0.25), ("GGG", 0.25),
    ("TAA", 1.0), ("TAG", 1.0), ("TGA", 1.0),
];

impl KnownTable {
    fn weights(&self) -> &'static [(&'static str, f64)] {
        match self {
            Self::Human => &HUMAN_WEIGHTS,
        }
    }

    pub fn load(&self) -> CfResult<CodonUsageTable> {
        let mut rows = Vec::with_capacity(64);
        for &(codon_str, freq) in self.weights() {
            let codon: Codon = codon_str.parse()?;
            // Every entry is a DNA codon, so translation always succeeds.
            if let Some(aa) = translate(codon) {
                rows.push((aa, codon, freq));
            }
        }
        CodonUsageTable::from_entries(rows)
    }
}
