use std::io;
use std::path::PathBuf;

use graph_bench_core::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{count} result file(s) could not be written, first: {}", first.display())]
    SeriesFailed { count: usize, first: PathBuf },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl BenchError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }
}
