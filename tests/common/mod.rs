#![allow(dead_code)]

use codonforge::scorer::CodonUsageTable;

/// M, F, P, G table used by the worked example.
pub fn scenario_table() -> CodonUsageTable {
    CodonUsageTable::from_symbols(&[
        ("M", &[("ATG", 1.0)]),
        ("F", &[("TTT", 0.3), ("TTC", 1.0)]),
        ("P", &[("CCC", 0.2), ("CCT", 1.0)]),
        ("G", &[("GGG", 0.1), ("GGT", 1.0)]),
    ])
    .expect("scenario table")
}

/// Table with a rich synonym set so annealing has room to move.
pub fn wide_table() -> CodonUsageTable {
    CodonUsageTable::from_symbols(&[
        ("M", &[("ATG", 1.0)]),
        ("K", &[("AAA", 0.9), ("AAG", 1.0)]),
        ("L", &[
            ("CTG", 1.0),
            ("CTC", 0.4),
            ("TTA", 0.05),
            ("TTG", 0.3),
            ("CTA", 0.08),
            ("CTT", 0.2),
        ]),
        ("G", &[("GGC", 1.0), ("GGA", 0.6), ("GGG", 0.5), ("GGT", 0.4)]),
        ("*", &[("TAA", 1.0), ("TGA", 0.5)]),
    ])
    .expect("wide table")
}

pub const SCENARIO_INPUT: &str = "ATGTTTCCCGGG";
pub const SCENARIO_GREEDY: &str = "ATGTTCCCTGGT";

pub fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "{} != {}", a, b);
}
