mod cli;
mod config;
mod demo;
mod error;
mod generate;
mod logging;
mod print;
mod report;
mod runner;

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use graph_bench_core::Representation;

use cli::{Cli, Commands, SweepArgs};
use config::SweepConfig;
use error::BenchError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let result = match &cli.command {
        Commands::Demo { representation } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            demo::run_demo(&mut out, Representation::from(*representation))
                .and_then(|()| out.flush())
                .map_err(|e| BenchError::io("<stdout>", e))
        }
        Commands::Sweep(args) => sweep(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "graph-bench failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn sweep(args: &SweepArgs) -> Result<(), BenchError> {
    let mut config = SweepConfig::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    tracing::info!(
        out_dir = %config.out_dir.display(),
        vertex_counts = ?config.vertex_counts,
        densities = ?config.densities,
        trials = config.trials,
        seed = ?config.seed,
        "starting sweep"
    );

    let start = Instant::now();
    let summary = runner::run_sweep(&config);
    tracing::info!(
        rows = summary.rows_written,
        failed_points = summary.failed_points,
        failed_files = summary.failed_files.len(),
        elapsed = ?start.elapsed(),
        "sweep finished"
    );

    summary.into_result()
}
