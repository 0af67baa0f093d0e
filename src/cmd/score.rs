use crate::reports;
use clap::Args;
use codonforge::config::Config;
use codonforge::error::CfResult;
use codonforge::optimizer::greedy_optimize;
use codonforge::scorer::{CodonUsageTable, Scorer};
use codonforge::sequence::clean_sequence;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 's', long)]
    pub sequence: String,

    /// Also print the codon-by-codon grid
    #[arg(long, default_value_t = false)]
    pub grid: bool,
}

pub fn run(args: ScoreArgs, config: Config, table: Arc<CodonUsageTable>) -> CfResult<()> {
    config.weights.validate()?;
    let scorer = Scorer::new(table, config.weights);

    let input = clean_sequence(&args.sequence)?;
    let greedy = greedy_optimize(&input, &scorer.table);

    let results = vec![
        ("Input".to_string(), scorer.score_details(&input)),
        ("Greedy".to_string(), scorer.score_details(&greedy)),
    ];

    if args.grid {
        let threshold = scorer.weights.rare_threshold;
        reports::print_codon_grid("Input", &input, &scorer.table, threshold);
        reports::print_codon_grid("Greedy", &greedy, &scorer.table, threshold);
    }

    reports::print_score_report(&results, &scorer.weights);
    reports::print_comparison_report(&results);
    Ok(())
}
