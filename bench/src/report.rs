use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::BenchError;

/// Column labels written once at the top of every result file.
pub const HEADER: &str = "Vertices\tDensity\tTime(s)";

/// One averaged measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRow {
    pub vertex_count: usize,
    pub density: f64,
    pub average_secs: f64,
}

/// Tab-separated timing results, one row per (size, density) point.
pub struct ResultWriter<W: Write> {
    out: W,
}

impl<W: Write> ResultWriter<W> {
    /// Wrap `out` and emit the header line.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{}", HEADER)?;
        out.flush()?;
        Ok(Self { out })
    }

    /// Append one row. Flushed immediately so a later failure in the sweep
    /// keeps every finished row on disk.
    pub fn write_row(&mut self, row: &TimingRow) -> io::Result<()> {
        writeln!(
            self.out,
            "{}\t{}\t{}",
            row.vertex_count, row.density, row.average_secs
        )?;
        self.out.flush()
    }
}

impl ResultWriter<BufWriter<File>> {
    /// Create (or truncate) the result file at `path`, creating missing
    /// parent directories.
    pub fn create(path: &Path) -> Result<Self, BenchError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BenchError::io(parent, e))?;
        }
        let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
        ResultWriter::new(BufWriter::new(file)).map_err(|e| BenchError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_then_rows() {
        let mut buf = Vec::new();
        let mut writer = ResultWriter::new(&mut buf).unwrap();
        writer
            .write_row(&TimingRow { vertex_count: 10, density: 0.25, average_secs: 0.5 })
            .unwrap();
        writer
            .write_row(&TimingRow { vertex_count: 50, density: 1.0, average_secs: 2.0 })
            .unwrap();
        drop(writer);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Vertices\tDensity\tTime(s)\n10\t0.25\t0.5\n50\t1\t2\n");
    }

    #[test]
    fn test_create_makes_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/list_dfs.txt");
        let mut writer = ResultWriter::create(&path).unwrap();
        writer
            .write_row(&TimingRow { vertex_count: 3, density: 0.5, average_secs: 0.125 })
            .unwrap();
        drop(writer);
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), vec![HEADER, "3\t0.5\t0.125"]);
    }

    #[test]
    fn test_create_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let err = ResultWriter::create(&blocker.join("matrix_dfs.txt")).err().unwrap();
        assert!(matches!(err, BenchError::Io { .. }), "{}", err);
    }
}
