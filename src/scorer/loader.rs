use crate::error::{CfResult, CodonError};
use crate::genetic_code::AminoAcid;
use crate::scorer::table::{CodonUsageTable, TableBuilder};
use crate::sequence::{normalize, Codon};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const AMINO_ACID_HEADERS: &[&str] = &["aminoacid", "aa", "amino"];
const CODON_HEADERS: &[&str] = &["codon", "triplet"];
const FREQUENCY_HEADERS: &[&str] = &["frequency", "freq"];

/// Column positions resolved from the header row.
struct Columns {
    amino_acid: usize,
    codon: usize,
    frequency: usize,
}

fn header_key(h: &str) -> String {
    h.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn resolve_columns(headers: &csv::StringRecord) -> CfResult<Columns> {
    let keys: Vec<String> = headers.iter().map(header_key).collect();
    let find = |names: &[&str], label: &str| {
        keys.iter()
            .position(|k| names.contains(&k.as_str()))
            .ok_or_else(|| CodonError::load(1, format!("missing required column '{}'", label)))
    };

    Ok(Columns {
        amino_acid: find(AMINO_ACID_HEADERS, "Amino Acid")?,
        codon: find(CODON_HEADERS, "Codon")?,
        frequency: find(FREQUENCY_HEADERS, "Frequency")?,
    })
}

fn field<'r>(rec: &'r csv::StringRecord, idx: usize, label: &str, row: usize) -> CfResult<&'r str> {
    match rec.get(idx).map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CodonError::load(row, format!("missing field '{}'", label))),
    }
}

/// Loads a codon usage table from a CSV file.
pub fn load_codon_usage<P: AsRef<Path>>(path: P) -> CfResult<CodonUsageTable> {
    let path = path.as_ref();
    debug!("Loading codon usage from: {}", path.display());
    let file = File::open(path)?;
    let table = load_codon_usage_from_reader(file)?;
    info!(
        "Loaded {} codons for {} amino acids from {}",
        table.len(),
        table.amino_acids().count(),
        path.display()
    );
    Ok(table)
}

/// Loads a codon usage table from any CSV source with a header row.
///
/// Required columns: amino acid, codon, frequency. Extra columns are ignored.
/// RNA codons are accepted and stored as DNA.
pub fn load_codon_usage_from_reader<R: Read>(reader: R) -> CfResult<CodonUsageTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let cols = resolve_columns(rdr.headers()?)?;
    let mut builder = TableBuilder::new();

    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = rec.position().map_or(i + 2, |p| p.line() as usize);

        let aa_str = field(&rec, cols.amino_acid, "Amino Acid", row)?;
        let codon_str = field(&rec, cols.codon, "Codon", row)?;
        let freq_str = field(&rec, cols.frequency, "Frequency", row)?;

        let aa: AminoAcid = aa_str
            .parse()
            .map_err(|_| CodonError::load(row, format!("unknown amino acid '{}'", aa_str)))?;

        let codon: Codon = normalize(codon_str)
            .parse()
            .map_err(|_| CodonError::load(row, format!("'{}' is not a codon", codon_str)))?;

        let frequency: f64 = freq_str
            .parse()
            .map_err(|_| CodonError::load(row, format!("frequency '{}' is not a number", freq_str)))?;

        builder
            .add(aa, codon, frequency)
            .map_err(|msg| CodonError::load(row, msg))?;
    }

    if builder.is_empty() {
        return Err(CodonError::load(0, "usage table has no rows"));
    }

    Ok(builder.build())
}
