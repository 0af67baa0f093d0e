use codonforge::config::ScoringWeights;
use codonforge::genetic_code::translate;
use codonforge::scorer::{CodonUsageTable, ScoreDetails};
use codonforge::sequence::codons;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Codon-by-codon view: codon, amino acid and relative weight per cell.
pub fn print_codon_grid(name: &str, seq: &str, usage: &CodonUsageTable, rare_threshold: f64) {
    println!("\nSequence: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cols = 10;
    let all: Vec<_> = codons(seq).collect();

    for chunk in all.chunks(cols) {
        let cells: Vec<Cell> = chunk
            .iter()
            .map(|&c| {
                let aa = translate(c).map_or("?".to_string(), |aa| aa.to_string());
                let cell = match usage.relative_weight(c) {
                    Some(w) => {
                        let cell = Cell::new(format!("{}\n{} {:.2}", c, aa, w));
                        if w < rare_threshold {
                            cell.fg(Color::Red)
                        } else if w >= 1.0 {
                            cell.fg(Color::Green)
                        } else {
                            cell
                        }
                    }
                    None => Cell::new(format!("{}\n{}  -", c, aa)),
                };
                cell.set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_score_report(results: &[(String, ScoreDetails)], w: &ScoringWeights) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Sequence").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("CAI").fg(Color::Green),
        Cell::new(format!("GC\n({:.2})", w.target_gc)),
        Cell::new(format!("GC Pen\nx{}", w.gc_penalty)),
        Cell::new(format!("Rare\n<{}", w.rare_threshold)).fg(Color::Red),
        Cell::new(format!("Homo\n>={}", w.homopolymer_run_length)).fg(Color::Red),
        Cell::new("Codons"),
        Cell::new("Scored"),
    ]);

    for i in 1..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, d) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", d.total)).fg(Color::Cyan),
            Cell::new(format!("{:.4}", d.cai)).fg(Color::Green),
            Cell::new(format!("{:.3}", d.gc_fraction)),
            Cell::new(format!("{:.3}", d.gc_penalty * w.gc_penalty)),
            Cell::new(d.rare_codons.to_string()).fg(Color::Red),
            Cell::new(d.homopolymers.to_string()).fg(Color::Red),
            Cell::new(d.codons.to_string()),
            Cell::new(d.scorable_codons.to_string()),
        ]);
    }
    println!("\n{}", table);
}

/// Deltas of every row against the first one.
pub fn print_comparison_report(results: &[(String, ScoreDetails)]) {
    let Some((base_name, base)) = results.first() else {
        return;
    };

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("vs {}", base_name)).add_attribute(Attribute::Bold),
        Cell::new("dTotal"),
        Cell::new("dCAI"),
        Cell::new("dRare"),
        Cell::new("dHomo"),
    ]);

    for (name, d) in &results[1..] {
        let color = if d.total >= base.total {
            Color::Green
        } else {
            Color::Red
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:+.4}", d.total - base.total)).fg(color),
            Cell::new(format!("{:+.4}", d.cai - base.cai)),
            Cell::new(format!("{:+}", d.rare_codons as i64 - base.rare_codons as i64)),
            Cell::new(format!("{:+}", d.homopolymers as i64 - base.homopolymers as i64)),
        ]);
    }
    println!("\n{}", table);
}
