use crate::sequence::Codon;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The 20 standard residues plus the stop marker.
///
/// Parses from the one-letter symbol, the three-letter symbol (any case) or
/// `*` / `Stop`. Displays as the one-letter symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum AminoAcid {
    #[strum(to_string = "A", serialize = "Ala")]
    Ala,
    #[strum(to_string = "R", serialize = "Arg")]
    Arg,
    #[strum(to_string = "N", serialize = "Asn")]
    Asn,
    #[strum(to_string = "D", serialize = "Asp")]
    Asp,
    #[strum(to_string = "C", serialize = "Cys")]
    Cys,
    #[strum(to_string = "Q", serialize = "Gln")]
    Gln,
    #[strum(to_string = "E", serialize = "Glu")]
    Glu,
    #[strum(to_string = "G", serialize = "Gly")]
    Gly,
    #[strum(to_string = "H", serialize = "His")]
    His,
    #[strum(to_string = "I", serialize = "Ile")]
    Ile,
    #[strum(to_string = "L", serialize = "Leu")]
    Leu,
    #[strum(to_string = "K", serialize = "Lys")]
    Lys,
    #[strum(to_string = "M", serialize = "Met")]
    Met,
    #[strum(to_string = "F", serialize = "Phe")]
    Phe,
    #[strum(to_string = "P", serialize = "Pro")]
    Pro,
    #[strum(to_string = "S", serialize = "Ser")]
    Ser,
    #[strum(to_string = "T", serialize = "Thr")]
    Thr,
    #[strum(to_string = "W", serialize = "Trp")]
    Trp,
    #[strum(to_string = "Y", serialize = "Tyr")]
    Tyr,
    #[strum(to_string = "V", serialize = "Val")]
    Val,
    #[strum(to_string = "*", serialize = "Stop", serialize = "Ter")]
    Stop,
}

impl AminoAcid {
    pub fn is_stop(self) -> bool {
        self == Self::Stop
    }

    pub fn from_one_letter(symbol: u8) -> Option<Self> {
        let aa = match symbol.to_ascii_uppercase() {
            b'A' => Self::Ala,
            b'R' => Self::Arg,
            b'N' => Self::Asn,
            b'D' => Self::Asp,
            b'C' => Self::Cys,
            b'Q' => Self::Gln,
            b'E' => Self::Glu,
            b'G' => Self::Gly,
            b'H' => Self::His,
            b'I' => Self::Ile,
            b'L' => Self::Leu,
            b'K' => Self::Lys,
            b'M' => Self::Met,
            b'F' => Self::Phe,
            b'P' => Self::Pro,
            b'S' => Self::Ser,
            b'T' => Self::Thr,
            b'W' => Self::Trp,
            b'Y' => Self::Tyr,
            b'V' => Self::Val,
            b'*' => Self::Stop,
            _ => return None,
        };
        Some(aa)
    }
}

/// NCBI translation table 1, indexed by `Codon::index` (T, C, A, G order).
const STANDARD_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Translates a codon with the standard genetic code.
///
/// Returns `None` for codons containing anything other than `A`, `C`, `G`, `T`.
pub fn translate(codon: Codon) -> Option<AminoAcid> {
    let idx = codon.index()?;
    AminoAcid::from_one_letter(STANDARD_CODE[idx])
}

/// Translates every complete codon of `seq`.
pub fn translate_sequence(seq: &str) -> Vec<Option<AminoAcid>> {
    crate::sequence::codons(seq).map(translate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn c(s: &str) -> Codon {
        Codon::from_str(s).unwrap()
    }

    #[test]
    fn test_known_codons() {
        assert_eq!(translate(c("ATG")), Some(AminoAcid::Met));
        assert_eq!(translate(c("TTT")), Some(AminoAcid::Phe));
        assert_eq!(translate(c("GGG")), Some(AminoAcid::Gly));
        assert_eq!(translate(c("TGG")), Some(AminoAcid::Trp));
        assert_eq!(translate(c("AGA")), Some(AminoAcid::Arg));
        assert_eq!(translate(c("ATA")), Some(AminoAcid::Ile));
    }

    #[test]
    fn test_stop_codons() {
        for s in ["TAA", "TAG", "TGA"] {
            assert_eq!(translate(c(s)), Some(AminoAcid::Stop), "{}", s);
        }
    }

    #[test]
    fn test_invalid_nucleotide_has_no_translation() {
        assert_eq!(translate(c("ANG")), None);
        assert_eq!(translate(c("atg")), None);
    }

    #[test]
    fn test_degeneracy_counts() {
        use strum::IntoEnumIterator;
        let mut total = 0;
        for aa in AminoAcid::iter() {
            let n = STANDARD_CODE
                .iter()
                .filter(|&&b| AminoAcid::from_one_letter(b) == Some(aa))
                .count();
            assert!(n >= 1, "{} has no codon", aa);
            total += n;
        }
        assert_eq!(total, 64);
        assert_eq!(
            STANDARD_CODE.iter().filter(|&&b| b == b'L').count(),
            6,
            "Leucine is six-fold degenerate"
        );
    }

    #[test]
    fn test_symbol_parsing() {
        assert_eq!(AminoAcid::from_str("F").unwrap(), AminoAcid::Phe);
        assert_eq!(AminoAcid::from_str("phe").unwrap(), AminoAcid::Phe);
        assert_eq!(AminoAcid::from_str("PHE").unwrap(), AminoAcid::Phe);
        assert_eq!(AminoAcid::from_str("*").unwrap(), AminoAcid::Stop);
        assert_eq!(AminoAcid::from_str("Stop").unwrap(), AminoAcid::Stop);
        assert!(AminoAcid::from_str("Xaa").is_err());
        assert_eq!(AminoAcid::Phe.to_string(), "F");
        assert_eq!(AminoAcid::Stop.to_string(), "*");
    }
}
