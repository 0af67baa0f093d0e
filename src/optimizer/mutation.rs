use crate::error::{CfResult, CodonError};
use crate::genetic_code::translate;
use crate::scorer::CodonUsageTable;
use crate::sequence::Codon;
use fastrand::Rng;

/// Draws a synonym uniformly from the table group of `codon`'s amino acid.
/// The codon itself is a legal draw.
pub fn pick_synonym(codon: Codon, table: &CodonUsageTable, rng: &mut Rng) -> Option<Codon> {
    let aa = translate(codon).filter(|aa| !aa.is_stop())?;
    let group = table.synonyms(aa)?;
    Some(group[rng.usize(0..group.len())].codon)
}

/// Replaces one uniformly chosen codon of `seq` with a random synonym.
///
/// Stop codons and amino acids missing from the table leave the sequence
/// unchanged. Fails when `seq` has no complete codon.
pub fn random_synonymous_swap(seq: &str, table: &CodonUsageTable, rng: &mut Rng) -> CfResult<String> {
    let n_codons = seq.len() / 3;
    if n_codons == 0 {
        return Err(CodonError::Precondition(format!(
            "cannot swap a codon in a sequence of {} bases",
            seq.len()
        )));
    }

    let start = rng.usize(0..n_codons) * 3;
    let b = &seq.as_bytes()[start..start + 3];
    let codon = Codon::new([b[0], b[1], b[2]]);

    match pick_synonym(codon, table, rng) {
        Some(new) => {
            // A translated codon is ASCII, so both cuts sit on char boundaries.
            let mut out = String::with_capacity(seq.len());
            out.push_str(&seq[..start]);
            out.push_str(new.as_str());
            out.push_str(&seq[start + 3..]);
            Ok(out)
        }
        None => Ok(seq.to_string()),
    }
}
