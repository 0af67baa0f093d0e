use crate::consts::*;
use crate::error::{CfResult, CodonError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything an optimization run is configured with.
#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub anneal: AnnealingConfig,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    /// GC fraction the score steers towards
    #[arg(long, default_value_t = DEFAULT_TARGET_GC)]
    pub target_gc: f64,

    /// Relative weight below which a codon counts as rare
    #[arg(long, default_value_t = DEFAULT_RARE_THRESHOLD)]
    pub rare_threshold: f64,

    /// Shortest single-nucleotide run counted as a homopolymer
    #[arg(long, default_value_t = DEFAULT_HOMOPOLYMER_RUN)]
    pub homopolymer_run_length: usize,

    // === PENALTY COEFFICIENTS ===
    #[arg(long, default_value_t = DEFAULT_GC_PENALTY)]
    pub gc_penalty: f64,
    #[arg(long, default_value_t = DEFAULT_RARE_PENALTY)]
    pub rare_penalty: f64,
    #[arg(long, default_value_t = DEFAULT_HOMOPOLYMER_PENALTY)]
    pub homopolymer_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            target_gc: DEFAULT_TARGET_GC,
            rare_threshold: DEFAULT_RARE_THRESHOLD,
            homopolymer_run_length: DEFAULT_HOMOPOLYMER_RUN,
            gc_penalty: DEFAULT_GC_PENALTY,
            rare_penalty: DEFAULT_RARE_PENALTY,
            homopolymer_penalty: DEFAULT_HOMOPOLYMER_PENALTY,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnnealingConfig {
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,
    #[arg(long, default_value_t = DEFAULT_INITIAL_TEMPERATURE)]
    pub initial_temperature: f64,
    /// Geometric decay applied to the temperature every iteration
    #[arg(long, default_value_t = DEFAULT_COOLING_RATE)]
    pub cooling_rate: f64,
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE_FLOOR)]
    pub temperature_floor: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            initial_temperature: DEFAULT_INITIAL_TEMPERATURE,
            cooling_rate: DEFAULT_COOLING_RATE,
            temperature_floor: DEFAULT_TEMPERATURE_FLOOR,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> CfResult<()> {
        if !(0.0..=1.0).contains(&self.target_gc) {
            return Err(CodonError::Config(format!(
                "target_gc must be within [0, 1], got {}",
                self.target_gc
            )));
        }
        if !self.rare_threshold.is_finite() || self.rare_threshold < 0.0 {
            return Err(CodonError::Config(format!(
                "rare_threshold must be a non-negative number, got {}",
                self.rare_threshold
            )));
        }
        if self.homopolymer_run_length == 0 {
            return Err(CodonError::Config(
                "homopolymer_run_length must be at least 1".to_string(),
            ));
        }
        for (name, v) in [
            ("gc_penalty", self.gc_penalty),
            ("rare_penalty", self.rare_penalty),
            ("homopolymer_penalty", self.homopolymer_penalty),
        ] {
            if !v.is_finite() {
                return Err(CodonError::Config(format!("{} must be finite", name)));
            }
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(target_gc);
        update_if_present!(rare_threshold);
        update_if_present!(homopolymer_run_length);
        update_if_present!(gc_penalty);
        update_if_present!(rare_penalty);
        update_if_present!(homopolymer_penalty);
    }
}

impl AnnealingConfig {
    pub fn validate(&self) -> CfResult<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature < 0.0 {
            return Err(CodonError::Config(format!(
                "initial_temperature must be a non-negative number, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(CodonError::Config(format!(
                "cooling_rate must be within (0, 1], got {}",
                self.cooling_rate
            )));
        }
        if !(self.temperature_floor.is_finite() && self.temperature_floor > 0.0) {
            return Err(CodonError::Config(format!(
                "temperature_floor must be positive, got {}",
                self.temperature_floor
            )));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli: &AnnealingConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(iterations);
        update_if_present!(initial_temperature);
        update_if_present!(cooling_rate);
        update_if_present!(temperature_floor);
    }
}

impl Config {
    /// Reads a JSON profile. Missing keys fall back to the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_json::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CfResult<()> {
        self.weights.validate()?;
        self.anneal.validate()
    }

    /// Applies only the flags the user typed, so profile values survive
    /// clap defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.weights.merge_from_cli(&cli.weights, matches);
        self.anneal.merge_from_cli(&cli.anneal, matches);
    }
}
