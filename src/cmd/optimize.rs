use clap::{Args, ValueEnum};
use codonforge::api::{self, OptimizationRequest};
use codonforge::config::Config;
use codonforge::error::CfResult;
use codonforge::optimizer::Method;
use codonforge::scorer::CodonUsageTable;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Four positional lines
    Text,
    /// Structured report
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Input DNA (or RNA) sequence
    #[arg(short = 's', long)]
    pub sequence: String,

    #[arg(short = 'm', long, value_enum, default_value_t = Method::Stochastic)]
    pub method: Method,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Independent annealing restarts, run in parallel
    #[arg(short = 'r', long, default_value_t = 1)]
    pub restarts: usize,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: OptimizeArgs, config: Config, table: Arc<CodonUsageTable>) -> CfResult<()> {
    let mut request = OptimizationRequest::new(args.sequence, args.method)
        .with_config(config)
        .with_restarts(args.restarts);
    if let Some(seed) = args.seed {
        request = request.with_seed(seed);
    }

    let report = api::optimize_sequence(table, &request)?;

    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }
    Ok(())
}
