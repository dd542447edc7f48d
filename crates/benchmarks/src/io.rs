//! I/O operations for benchmark results.
//!
//! This module resolves the logs directory, writes the results record with a
//! single fallback to the working directory, and reads result files back for
//! summary reports.

use crate::error::{BenchError, Result};
use crate::markdown;
use crate::result::BenchmarkResults;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Logs directory name under the project root.
pub const LOGS_DIR: &str = "logs";

/// Results file written by this harness.
pub const RESULTS_FILE: &str = "rust_results.json";

/// Summary file written next to the results.
pub const SUMMARY_FILE: &str = "summary.md";

/// Where the results record ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Written into the logs directory.
    Primary(PathBuf),
    /// Logs directory write failed; written to the fallback directory.
    Fallback(PathBuf),
    /// Both writes failed.
    Failed,
}

impl WriteOutcome {
    /// Path of the written file, if any write succeeded.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Primary(path) | Self::Fallback(path) => Some(path),
            Self::Failed => None,
        }
    }
}

/// Resolve the logs directory relative to the working directory.
///
/// Running from the language source directory (`src/rust`) or from a `bin`
/// directory points back to the project root's `logs`; anywhere else the
/// working directory is taken as the project root.
pub fn resolve_logs_dir(cwd: &Path) -> PathBuf {
    match cwd.file_name().and_then(|name| name.to_str()) {
        Some("rust") => cwd.join("../..").join(LOGS_DIR),
        Some("bin") => cwd.join("..").join(LOGS_DIR),
        _ => cwd.join(LOGS_DIR),
    }
}

/// Ensure a directory exists.
pub fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| BenchError::io(dir, e))
}

/// Write a results record to a JSON file.
pub fn write_results_json(results: &BenchmarkResults, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json).map_err(|e| BenchError::io(path, e))
}

/// Write the results record into `logs_dir`, falling back to `fallback_dir`.
///
/// Never fails: directory creation errors are logged and the write is still
/// attempted, and a failed fallback is logged and reported as
/// [`WriteOutcome::Failed`].
pub fn write_results(
    results: &BenchmarkResults,
    logs_dir: &Path,
    fallback_dir: &Path,
) -> WriteOutcome {
    if let Err(e) = ensure_dir(logs_dir) {
        warn!(error = %e, "could not create logs directory");
    }

    let primary = logs_dir.join(RESULTS_FILE);
    match write_results_json(results, &primary) {
        Ok(()) => {
            info!(path = %primary.display(), "results written");
            return WriteOutcome::Primary(primary);
        }
        Err(e) => warn!(error = %e, "writing results to logs directory failed"),
    }

    let fallback = fallback_dir.join(RESULTS_FILE);
    match write_results_json(results, &fallback) {
        Ok(()) => {
            info!(path = %fallback.display(), "results written to fallback directory");
            WriteOutcome::Fallback(fallback)
        }
        Err(e) => {
            warn!(error = %e, "fallback write failed");
            WriteOutcome::Failed
        }
    }
}

/// Read a results record from a JSON file.
pub fn read_results_json(path: impl AsRef<Path>) -> Result<BenchmarkResults> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
    let results: BenchmarkResults = serde_json::from_str(&content)?;
    if results.language.trim().is_empty() {
        return Err(BenchError::InvalidResults {
            path: path.to_path_buf(),
            reason: "empty language tag".to_string(),
        });
    }
    Ok(results)
}

/// Read every `*.json` results file in a directory.
///
/// Files that fail to parse are skipped with a warning. The records are
/// ordered by language, then worker count.
pub fn read_results_dir(dir: impl AsRef<Path>) -> Result<Vec<BenchmarkResults>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| BenchError::io(dir, e))?;

    let mut records = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| BenchError::io(dir, e))?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        match read_results_json(&path) {
            Ok(results) => {
                debug!(path = %path.display(), language = %results.language, "loaded results");
                records.push(results);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping results file"),
        }
    }

    records.sort_by(|a, b| {
        a.language
            .cmp(&b.language)
            .then(a.process_count.cmp(&b.process_count))
    });
    Ok(records)
}

/// Write the markdown summary for `results` into `dir`.
pub fn write_summary(results: &[BenchmarkResults], dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    ensure_dir(dir)?;
    let path = dir.join(SUMMARY_FILE);
    fs::write(&path, markdown::generate_summary(results)).map_err(|e| BenchError::io(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(language: &str, workers: usize) -> BenchmarkResults {
        let mut results = BenchmarkResults::new(workers);
        results.language = language.to_string();
        results.sort_serial = Some(0.4);
        results.sort_parallel = Some(0.1);
        results
    }

    #[test]
    fn test_resolve_logs_dir() {
        assert_eq!(
            resolve_logs_dir(Path::new("/proj/src/rust")),
            PathBuf::from("/proj/src/rust/../../logs")
        );
        assert_eq!(
            resolve_logs_dir(Path::new("/proj/bin")),
            PathBuf::from("/proj/bin/../logs")
        );
        assert_eq!(resolve_logs_dir(Path::new("/proj")), PathBuf::from("/proj/logs"));
    }

    #[test]
    fn test_write_results_creates_logs_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let logs = tmp.path().join("logs");
        let outcome = write_results(&sample("Rust", 2), &logs, tmp.path());

        let expected = logs.join(RESULTS_FILE);
        assert_eq!(outcome, WriteOutcome::Primary(expected.clone()));
        assert_eq!(read_results_json(&expected).unwrap(), sample("Rust", 2));
    }

    #[test]
    fn test_write_results_falls_back() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the logs directory should be blocks the primary write.
        let blocker = tmp.path().join("logs");
        fs::write(&blocker, "not a directory").unwrap();
        let fallback = tmp.path().join("cwd");
        fs::create_dir(&fallback).unwrap();

        let outcome = write_results(&sample("Rust", 1), &blocker, &fallback);
        assert_eq!(outcome, WriteOutcome::Fallback(fallback.join(RESULTS_FILE)));
        assert!(outcome.path().unwrap().exists());
    }

    #[test]
    fn test_write_results_reports_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing").join("deeper");
        let blocker = tmp.path().join("logs");
        fs::write(&blocker, "").unwrap();

        let outcome = write_results(&sample("Rust", 1), &blocker, &missing);
        assert_eq!(outcome, WriteOutcome::Failed);
        assert!(outcome.path().is_none());
    }

    #[test]
    fn test_read_results_dir_skips_bad_files() {
        let tmp = tempfile::tempdir().unwrap();
        write_results_json(&sample("Rust", 4), tmp.path().join("rust_results.json")).unwrap();
        write_results_json(&sample("Go", 8), tmp.path().join("go_results.json")).unwrap();
        fs::write(tmp.path().join("broken.json"), "{ not json").unwrap();
        fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

        let records = read_results_dir(tmp.path()).unwrap();
        let languages: Vec<&str> = records.iter().map(|r| r.language.as_str()).collect();
        assert_eq!(languages, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_read_results_rejects_empty_language() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("empty.json");
        write_results_json(&sample("", 1), &path).unwrap();
        assert!(matches!(
            read_results_json(&path),
            Err(BenchError::InvalidResults { .. })
        ));
    }

    #[test]
    fn test_read_results_dir_missing() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_results_dir(tmp.path().join("nope")),
            Err(BenchError::Io { .. })
        ));
    }

    #[test]
    fn test_write_summary() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_summary(&[sample("Rust", 2)], tmp.path()).unwrap();
        assert_eq!(path, tmp.path().join(SUMMARY_FILE));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("# Benchmark Summary"));
    }
}
