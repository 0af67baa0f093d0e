use crate::consts::CODON_SPACE;
use crate::error::{CfResult, CodonError};
use crate::genetic_code::{translate, AminoAcid};
use crate::sequence::Codon;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodonEntry {
    pub codon: Codon,
    pub frequency: f64,
}

/// Synonymous codon frequencies per amino acid.
///
/// Immutable once built. Group order is insertion order, which decides the
/// greedy tie-break and the candidate order for random swaps.
#[derive(Debug, Clone)]
pub struct CodonUsageTable {
    groups: BTreeMap<AminoAcid, Vec<CodonEntry>>,

    // --- Lookups (indexed by Codon::index) ---
    relative_weights: [Option<f64>; CODON_SPACE],
    best_codons: BTreeMap<AminoAcid, Codon>,
}

/// Accumulates validated rows before the lookups are frozen.
#[derive(Debug)]
pub struct TableBuilder {
    groups: BTreeMap<AminoAcid, Vec<CodonEntry>>,
    seen: [bool; CODON_SPACE],
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
            seen: [false; CODON_SPACE],
        }
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one `(amino acid, codon, frequency)` row.
    pub fn add(&mut self, aa: AminoAcid, codon: Codon, frequency: f64) -> Result<(), String> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(format!(
                "frequency {} for {} is not a non-negative number",
                frequency, codon
            ));
        }
        let idx = codon
            .index()
            .ok_or_else(|| format!("'{}' is not a DNA codon", codon))?;

        match translate(codon) {
            Some(actual) if actual == aa => {}
            Some(actual) => {
                return Err(format!(
                    "codon {} encodes {} but is listed under {}",
                    codon, actual, aa
                ))
            }
            None => return Err(format!("codon {} has no translation", codon)),
        }

        if self.seen[idx] {
            return Err(format!("codon {} is listed more than once", codon));
        }
        self.seen[idx] = true;

        self.groups
            .entry(aa)
            .or_default()
            .push(CodonEntry { codon, frequency });
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn build(self) -> CodonUsageTable {
        let mut relative_weights = [None; CODON_SPACE];
        let mut best_codons = BTreeMap::new();

        for (&aa, entries) in &self.groups {
            // First maximal entry wins ties.
            let mut best = entries[0];
            for e in &entries[1..] {
                if e.frequency > best.frequency {
                    best = *e;
                }
            }
            best_codons.insert(aa, best.codon);

            if aa.is_stop() || best.frequency <= 0.0 {
                debug!("No relative weights for group {}", aa);
                continue;
            }

            // Every codon of the amino acid gets a weight, listed or not.
            for (idx, slot) in relative_weights.iter_mut().enumerate() {
                let codon = Codon::from_index(idx);
                if translate(codon) == Some(aa) {
                    let freq = entries
                        .iter()
                        .find(|e| e.codon == codon)
                        .map_or(0.0, |e| e.frequency);
                    *slot = Some(freq / best.frequency);
                }
            }
        }

        CodonUsageTable {
            groups: self.groups,
            relative_weights,
            best_codons,
        }
    }
}

impl CodonUsageTable {
    /// Builds a table from in-memory rows. Errors carry the 1-based row number.
    pub fn from_entries<I>(entries: I) -> CfResult<Self>
    where
        I: IntoIterator<Item = (AminoAcid, Codon, f64)>,
    {
        let mut builder = TableBuilder::new();
        for (i, (aa, codon, freq)) in entries.into_iter().enumerate() {
            builder
                .add(aa, codon, freq)
                .map_err(|msg| CodonError::load(i + 1, msg))?;
        }
        Ok(builder.build())
    }

    /// Convenience for literal tables: `[("F", &[("TTT", 0.3), ("TTC", 1.0)])]`.
    pub fn from_symbols(groups: &[(&str, &[(&str, f64)])]) -> CfResult<Self> {
        let mut rows = Vec::new();
        for (aa_str, codons) in groups {
            let aa: AminoAcid = aa_str.parse().map_err(|_| {
                CodonError::load(rows.len() + 1, format!("unknown amino acid '{}'", aa_str))
            })?;
            for (codon_str, freq) in codons.iter() {
                rows.push((aa, codon_str.parse::<Codon>()?, *freq));
            }
        }
        Self::from_entries(rows)
    }

    pub fn contains(&self, aa: AminoAcid) -> bool {
        self.groups.contains_key(&aa)
    }

    /// Synonyms listed for `aa`, in insertion order.
    pub fn synonyms(&self, aa: AminoAcid) -> Option<&[CodonEntry]> {
        self.groups.get(&aa).map(|v| v.as_slice())
    }

    pub fn groups(&self) -> impl Iterator<Item = (AminoAcid, &[CodonEntry])> {
        self.groups.iter().map(|(&aa, v)| (aa, v.as_slice()))
    }

    pub fn amino_acids(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        self.groups.keys().copied()
    }

    pub fn frequency(&self, codon: Codon) -> Option<f64> {
        let aa = translate(codon)?;
        self.groups
            .get(&aa)?
            .iter()
            .find(|e| e.codon == codon)
            .map(|e| e.frequency)
    }

    /// `frequency / max(group frequency)`.
    ///
    /// `None` when the amino acid is a stop, absent from the table, or its group
    /// has no positive frequency. A codon missing from a present group is `0`.
    #[inline(always)]
    pub fn relative_weight(&self, codon: Codon) -> Option<f64> {
        self.relative_weights[codon.index()?]
    }

    /// Highest-frequency synonym for `aa`.
    pub fn best_codon(&self, aa: AminoAcid) -> Option<Codon> {
        self.best_codons.get(&aa).copied()
    }

    /// Number of listed codons.
    pub fn len(&self) -> usize {
        self.groups.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
