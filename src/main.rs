use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use codonforge::api;
use codonforge::config::Config;
use codonforge::presets::KnownTable;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

/// Without a subcommand the optimize flags are read directly, so
/// `codonforge -s SEQ -c usage.csv --method greedy` behaves like `codonforge optimize ...`.
#[derive(Parser, Debug)]
#[command(author, version, about = "Synonymous codon optimizer", long_about = None)]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    optimize: Option<cmd::optimize::OptimizeArgs>,

    /// Codon usage CSV (Amino Acid, Codon, Frequency)
    #[arg(global = true, short = 'c', long, visible_alias = "codon_csv")]
    codon_csv: Option<PathBuf>,

    /// Built-in usage table, used when no CSV is given
    #[arg(global = true, long, value_enum, default_value_t = KnownTable::Human)]
    table: KnownTable,

    /// JSON profile with weights and annealing settings
    #[arg(global = true, long)]
    profile: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Optimize a sequence and print the four-value result
    Optimize(cmd::optimize::OptimizeArgs),
    /// Break down the composite score of a sequence
    Score(cmd::score::ScoreArgs),
}

fn main() {
    // 1. Parse raw matches (to distinguish user input from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Logs go to stderr; stdout carries the positional result.
    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    // 2. Resolve the command; bare optimize flags live on the root matches
    let command = match (cli.command, cli.optimize) {
        (Some(command), _) => command,
        (None, Some(args)) => Commands::Optimize(args),
        (None, None) => {
            let _ = Cli::command().print_help();
            process::exit(2);
        }
    };
    let sub_matches = matches.subcommand().map_or(&matches, |(_, m)| m);
    let cli_config = match &command {
        Commands::Optimize(args) => &args.config,
        Commands::Score(args) => &args.config,
    };

    // 3. Resolve config: profile as base, explicit flags on top
    let config = match &cli.profile {
        Some(path) => {
            info!("Loading profile from: {}", path.display());
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("Failed to load profile '{}': {}", path.display(), e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => cli_config.clone(),
    };

    // 4. Usage table
    let table = match api::load_table(cli.codon_csv.as_deref(), cli.table) {
        Ok(t) => Arc::new(t),
        Err(e) => {
            error!("Failed to load codon usage table: {}", e);
            process::exit(1);
        }
    };

    // 5. Execute
    let result = match command {
        Commands::Optimize(args) => cmd::optimize::run(args, config, table),
        Commands::Score(args) => cmd::score::run(args, config, table),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
