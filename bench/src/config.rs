//! Sweep configuration: built-in defaults, optionally replaced field by
//! field from a TOML file, then overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use graph_bench_core::{Representation, Weight};
use serde::Deserialize;

use crate::error::BenchError;
use crate::runner::Algorithm;

/// Command-line and config-file spelling of a graph representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepresentationArg {
    Matrix,
    List,
}

impl From<RepresentationArg> for Representation {
    fn from(arg: RepresentationArg) -> Self {
        match arg {
            RepresentationArg::Matrix => Representation::Matrix,
            RepresentationArg::List => Representation::List,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    pub vertex_counts: Vec<usize>,
    /// Fractions of the `n(n-1)` possible directed edges.
    pub densities: Vec<f64>,
    /// Random graphs timed per (size, density) point; the row holds the mean.
    pub trials: u32,
    pub max_weight: Weight,
    /// Fixed RNG seed for reproducible graphs. Unseeded runs draw from the OS.
    pub seed: Option<u64>,
    pub out_dir: PathBuf,
    pub representations: Vec<RepresentationArg>,
    pub algorithms: Vec<Algorithm>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            vertex_counts: vec![10, 50, 100, 200, 500],
            densities: vec![0.25, 0.5, 1.0],
            trials: 100,
            max_weight: 10,
            seed: None,
            out_dir: PathBuf::from("results"),
            representations: vec![RepresentationArg::Matrix, RepresentationArg::List],
            algorithms: vec![Algorithm::Dijkstra, Algorithm::BellmanFord, Algorithm::Dfs],
        }
    }
}

impl SweepConfig {
    /// Defaults, or the contents of `path` layered over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, BenchError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        let config: SweepConfig = toml::from_str(&text).map_err(|source| BenchError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.vertex_counts.is_empty() {
            return Err(BenchError::Config("no vertex counts given".into()));
        }
        if let Some(&n) = self.vertex_counts.iter().find(|&&n| n < 2) {
            return Err(BenchError::Config(format!(
                "vertex count {} is too small, need at least 2",
                n
            )));
        }
        if self.densities.is_empty() {
            return Err(BenchError::Config("no densities given".into()));
        }
        if let Some(&d) = self.densities.iter().find(|&&d| !(d > 0.0 && d <= 1.0)) {
            return Err(BenchError::Config(format!(
                "density {} is outside (0, 1]",
                d
            )));
        }
        if self.trials == 0 {
            return Err(BenchError::Config("trials must be at least 1".into()));
        }
        if self.max_weight < 1 {
            return Err(BenchError::Config(format!(
                "max weight {} must be at least 1",
                self.max_weight
            )));
        }
        if self.representations.is_empty() || self.algorithms.is_empty() {
            return Err(BenchError::Config(
                "at least one representation and one algorithm are required".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = SweepConfig::load(None).unwrap();
        assert_eq!(config, SweepConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "vertex_counts = [4, 8]\ntrials = 3\nseed = 7\nalgorithms = [\"bellman-ford\"]\nrepresentations = [\"list\"]"
        )
        .unwrap();

        let config = SweepConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.vertex_counts, vec![4, 8]);
        assert_eq!(config.trials, 3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.algorithms, vec![Algorithm::BellmanFord]);
        assert_eq!(config.representations, vec![RepresentationArg::List]);
        // Unspecified fields keep their defaults.
        assert_eq!(config.densities, vec![0.25, 0.5, 1.0]);
        assert_eq!(config.max_weight, 10);
    }

    #[test]
    fn test_load_unknown_field_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vertices = [4]").unwrap();
        let err = SweepConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, BenchError::ConfigParse { .. }), "{}", err);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SweepConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, BenchError::Io { .. }), "{}", err);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases: [fn(&mut SweepConfig); 8] = [
            |c| c.vertex_counts.clear(),
            |c| c.vertex_counts = vec![10, 1],
            |c| c.densities = vec![0.0],
            |c| c.densities = vec![1.5],
            |c| c.densities = vec![f64::NAN],
            |c| c.trials = 0,
            |c| c.max_weight = 0,
            |c| c.algorithms.clear(),
        ];
        for mutate in cases {
            let mut config = SweepConfig::default();
            mutate(&mut config);
            assert!(
                matches!(config.validate(), Err(BenchError::Config(_))),
                "{:?}",
                config
            );
        }
    }
}
