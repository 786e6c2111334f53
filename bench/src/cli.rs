use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use graph_bench_core::Weight;

use crate::config::{RepresentationArg, SweepConfig};
use crate::runner::Algorithm;

/// Time shortest-path and traversal algorithms over matrix and list graphs
#[derive(Parser, Debug)]
#[command(name = "graph-bench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log filter (e.g. "trace" or "graph_bench=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every algorithm on two small fixed graphs and print the results
    Demo {
        /// Storage used for the sample graphs
        #[arg(long, value_enum, default_value = "list")]
        representation: RepresentationArg,
    },

    /// Time algorithms over random graphs and write tab-separated results
    Sweep(SweepArgs),
}

#[derive(Args, Debug, Default)]
pub struct SweepArgs {
    /// TOML file with sweep settings; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for result files
    #[arg(long, env = "GRAPH_BENCH_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Comma-separated vertex counts
    #[arg(long, value_delimiter = ',')]
    pub vertices: Vec<usize>,

    /// Comma-separated edge densities in (0, 1]
    #[arg(long, value_delimiter = ',')]
    pub densities: Vec<f64>,

    /// Random graphs averaged per point
    #[arg(long)]
    pub trials: Option<u32>,

    /// Largest absolute edge weight
    #[arg(long)]
    pub max_weight: Option<Weight>,

    /// RNG seed for reproducible graphs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Restrict to these representations (repeatable)
    #[arg(long = "representation", value_enum)]
    pub representations: Vec<RepresentationArg>,

    /// Restrict to these algorithms (repeatable)
    #[arg(long = "algorithm", value_enum)]
    pub algorithms: Vec<Algorithm>,
}

impl SweepArgs {
    /// Overwrite every config field the user passed on the command line.
    pub fn apply(&self, config: &mut SweepConfig) {
        if let Some(dir) = &self.out_dir {
            config.out_dir = dir.clone();
        }
        if !self.vertices.is_empty() {
            config.vertex_counts = self.vertices.clone();
        }
        if !self.densities.is_empty() {
            config.densities = self.densities.clone();
        }
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(max_weight) = self.max_weight {
            config.max_weight = max_weight;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if !self.representations.is_empty() {
            config.representations = self.representations.clone();
        }
        if !self.algorithms.is_empty() {
            config.algorithms = self.algorithms.clone();
        }
    }
}
