use std::hint::black_box;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use graph_bench_core::{bellman_ford, dijkstra, reachable, Graph, GraphError, Representation, VertexId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::config::SweepConfig;
use crate::error::BenchError;
use crate::generate::{edge_count_for, EdgeGenerator};
use crate::report::{ResultWriter, TimingRow};

/// Timed runs always start from vertex 0.
const START: VertexId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    Dfs,
}

impl Algorithm {
    /// Suffix of the result file name.
    pub fn file_stem(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman",
            Algorithm::Dfs => "dfs",
        }
    }

    /// Only Bellman-Ford is fed negative weights.
    fn allows_negative(self) -> bool {
        self == Algorithm::BellmanFord
    }

    /// Run once, discarding the result.
    pub fn run<G: Graph + ?Sized>(self, graph: &G, start: VertexId) -> Result<(), GraphError> {
        match self {
            Algorithm::Dijkstra => {
                black_box(dijkstra(graph, start));
            }
            Algorithm::BellmanFord => {
                black_box(bellman_ford(graph, start)?);
            }
            Algorithm::Dfs => {
                black_box(reachable(graph, start));
            }
        }
        Ok(())
    }
}

/// Average wall time of `algorithm` over `config.trials` fresh random graphs
/// of `vertex_count` vertices at `density`. Only the algorithm call is timed.
pub fn time_trials<R: Rng + ?Sized>(
    config: &SweepConfig,
    representation: Representation,
    algorithm: Algorithm,
    vertex_count: usize,
    density: f64,
    rng: &mut R,
) -> Result<TimingRow, BenchError> {
    let edge_count = edge_count_for(vertex_count, density);
    let generator = EdgeGenerator {
        max_weight: config.max_weight,
        allow_negative: algorithm.allows_negative(),
    };

    let mut graph = representation.build(vertex_count);
    let mut total = Duration::ZERO;

    for _ in 0..config.trials {
        graph.clear();
        generator.populate(graph.as_mut(), edge_count, rng);

        let t = Instant::now();
        algorithm.run(graph.as_ref(), START)?;
        total += t.elapsed();
    }

    tracing::debug!(
        %representation,
        ?algorithm,
        vertex_count,
        density,
        edges = graph.edge_count(),
        memory_bytes = graph.memory_usage(),
        "timed"
    );

    Ok(TimingRow {
        vertex_count,
        density,
        average_secs: total.as_secs_f64() / f64::from(config.trials),
    })
}

/// Outcome of a full sweep.
#[derive(Debug, Default)]
pub struct SweepSummary {
    pub rows_written: usize,
    /// (size, density, series) points skipped because the algorithm failed.
    pub failed_points: usize,
    /// Result files that could not be opened or written. Their series were
    /// abandoned while the others continued.
    pub failed_files: Vec<PathBuf>,
}

impl SweepSummary {
    /// `Err(SeriesFailed)` naming the first abandoned file, if any.
    pub fn into_result(self) -> Result<(), BenchError> {
        match self.failed_files.first() {
            None => Ok(()),
            Some(first) => Err(BenchError::SeriesFailed {
                count: self.failed_files.len(),
                first: first.clone(),
            }),
        }
    }
}

/// One (representation, algorithm) combination and its result file.
struct Series {
    representation: Representation,
    algorithm: Algorithm,
    path: PathBuf,
    writer: ResultWriter<std::io::BufWriter<std::fs::File>>,
}

pub fn result_path(config: &SweepConfig, representation: Representation, algorithm: Algorithm) -> PathBuf {
    config
        .out_dir
        .join(format!("{}_{}.txt", representation.name(), algorithm.file_stem()))
}

/// Time every configured series at every (vertex count, density) point,
/// appending one row per point to that series' result file.
///
/// Failures stay local: a file that cannot be opened drops its series, a
/// failing algorithm run drops that single point.
pub fn run_sweep(config: &SweepConfig) -> SweepSummary {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    let mut summary = SweepSummary::default();

    let mut series: Vec<Series> = Vec::new();
    for &rep in &config.representations {
        for &algorithm in &config.algorithms {
            let representation = Representation::from(rep);
            let path = result_path(config, representation, algorithm);
            match ResultWriter::create(&path) {
                Ok(writer) => series.push(Series {
                    representation,
                    algorithm,
                    path,
                    writer,
                }),
                Err(e) => {
                    tracing::error!(error = %e, "skipping series");
                    summary.failed_files.push(path);
                }
            }
        }
    }

    for &vertex_count in &config.vertex_counts {
        for &density in &config.densities {
            tracing::info!(vertex_count, density, "sweep point");

            let mut broken = Vec::new();
            for (idx, s) in series.iter_mut().enumerate() {
                let row = match time_trials(config, s.representation, s.algorithm, vertex_count, density, &mut rng) {
                    Ok(row) => row,
                    Err(e) => {
                        tracing::warn!(
                            representation = %s.representation,
                            algorithm = ?s.algorithm,
                            vertex_count,
                            density,
                            error = %e,
                            "point failed"
                        );
                        summary.failed_points += 1;
                        continue;
                    }
                };

                match s.writer.write_row(&row) {
                    Ok(()) => summary.rows_written += 1,
                    Err(e) => {
                        tracing::error!(path = %s.path.display(), error = %e, "abandoning series");
                        broken.push(idx);
                    }
                }
            }

            for idx in broken.into_iter().rev() {
                summary.failed_files.push(series.remove(idx).path);
            }
        }
    }

    summary
}
