use crate::error::{CfResult, CodonError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Three bytes read from a coding sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([u8; 3]);

impl Codon {
    pub const fn new(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Codons are only built from &str slices or ASCII literals.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Position of the codon in the 64-entry table (T, C, A, G order).
    /// `None` if any byte is not an uppercase DNA nucleotide.
    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        let mut idx = 0;
        for &b in &self.0 {
            idx = idx * 4 + nucleotide_rank(b)?;
        }
        Some(idx)
    }

    /// Inverse of [`Codon::index`].
    pub fn from_index(idx: usize) -> Self {
        const ORDER: [u8; 4] = [b'T', b'C', b'A', b'G'];
        Self([ORDER[(idx >> 4) & 3], ORDER[(idx >> 2) & 3], ORDER[idx & 3]])
    }
}

#[inline(always)]
fn nucleotide_rank(b: u8) -> Option<usize> {
    match b {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

impl FromStr for Codon {
    type Err = CodonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 3 || !s.is_ascii() {
            return Err(CodonError::Precondition(format!(
                "'{}' is not a 3-letter codon",
                s
            )));
        }
        Ok(Self([b[0], b[1], b[2]]))
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Codon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Splits `seq` into non-overlapping codons from its start.
/// Trailing bases that do not fill a codon are dropped.
pub fn codons(seq: &str) -> impl Iterator<Item = Codon> + '_ {
    seq.as_bytes()
        .chunks_exact(3)
        .map(|c| Codon([c[0], c[1], c[2]]))
}

/// Number of trailing bases that `codons` drops.
pub fn trailing_bases(seq: &str) -> usize {
    seq.len() % 3
}

/// Uppercases, maps RNA `U` to `T` and drops whitespace.
pub fn normalize(seq: &str) -> String {
    seq.chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c.to_ascii_uppercase() {
            'U' => 'T',
            other => other,
        })
        .collect()
}

/// Normalizes `seq` and rejects anything outside `A`, `C`, `G`, `T`.
/// Positions in the error are 1-based and count normalized characters.
pub fn clean_sequence(seq: &str) -> CfResult<String> {
    let cleaned = normalize(seq);
    let bad = cleaned
        .chars()
        .enumerate()
        .find(|(_, c)| !matches!(c, 'A' | 'C' | 'G' | 'T'));
    if let Some((i, found)) = bad {
        return Err(CodonError::InvalidSequence {
            position: i + 1,
            found,
        });
    }
    Ok(cleaned)
}
