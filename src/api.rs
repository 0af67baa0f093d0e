use crate::config::Config;
use crate::error::CfResult;
use crate::optimizer::{greedy_optimize, Method, Optimizer};
use crate::presets::KnownTable;
use crate::scorer::{loader, CodonUsageTable, Scorer};
use crate::sequence::{clean_sequence, trailing_bases};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Where the usage table comes from: a CSV file wins over a preset.
pub fn load_table(csv_path: Option<&Path>, preset: KnownTable) -> CfResult<CodonUsageTable> {
    match csv_path {
        Some(path) => loader::load_codon_usage(path),
        None => {
            info!("Using built-in '{}' usage table", preset);
            preset.load()
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationRequest {
    pub sequence: String,
    pub method: Method,
    pub config: Config,
    pub seed: Option<u64>,
    pub restarts: usize,
}

impl OptimizationRequest {
    pub fn new(sequence: impl Into<String>, method: Method) -> Self {
        Self {
            sequence: sequence.into(),
            method,
            config: Config::default(),
            seed: None,
            restarts: 1,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }
}

/// Result of one invocation.
///
/// The first four fields are the stable contract external tooling reads,
/// in this order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OptimizationReport {
    pub original: String,
    pub optimized: String,
    pub original_cai: f64,
    pub optimized_cai: f64,

    pub method: Method,
    pub original_score: f64,
    pub optimized_score: f64,
    pub truncated_bases: usize,
}

impl OptimizationReport {
    /// Four lines, positionally stable:
    /// original sequence, optimized sequence, original CAI, optimized CAI.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Original sequence: {}", self.original);
        let _ = writeln!(out, "Optimized sequence: {}", self.optimized);
        let _ = writeln!(out, "Original CAI: {}", self.original_cai);
        let _ = writeln!(out, "Optimized CAI: {}", self.optimized_cai);
        out
    }

    pub fn render_json(&self) -> CfResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Service: optimize one sequence against a shared usage table.
pub fn optimize_sequence(
    table: Arc<CodonUsageTable>,
    request: &OptimizationRequest,
) -> CfResult<OptimizationReport> {
    request.config.validate()?;

    let original = clean_sequence(&request.sequence)?;
    let truncated_bases = trailing_bases(&original);
    if truncated_bases > 0 {
        warn!(
            "Sequence length {} is not a multiple of 3; dropping {} trailing base(s)",
            original.len(),
            truncated_bases
        );
    }

    let scorer = Arc::new(Scorer::new(table, request.config.weights.clone()));

    let optimized = match request.method {
        Method::Greedy => greedy_optimize(&original, &scorer.table),
        Method::Stochastic => {
            let optimizer = Optimizer::new(scorer.clone(), request.config.anneal.clone());
            optimizer
                .run(&original, request.restarts, request.seed)?
                .sequence
        }
    };

    Ok(OptimizationReport {
        original_cai: scorer.cai(&original),
        optimized_cai: scorer.cai(&optimized),
        original_score: scorer.score(&original),
        optimized_score: scorer.score(&optimized),
        method: request.method,
        truncated_bases,
        original,
        optimized,
    })
}
