//! CLI for ParBench.
//!
//! This crate provides the `parbench` command: run every benchmark pair
//! and write the results record, or summarize previously written records.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use parbench_benchmarks::config::{self, BenchConfig};
use parbench_benchmarks::{io, markdown, RunReport, WriteOutcome};
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Default tracing filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// ParBench CLI.
#[derive(Parser, Debug)]
#[command(name = "parbench")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand to run; benchmarks run when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Benchmark options.
    #[command(flatten)]
    pub run: RunArgs,

    /// Tracing filter, e.g. `debug` or `parbench_benchmarks=trace`.
    #[arg(long, global = true, env = "PARBENCH_LOG")]
    pub log_level: Option<String>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize every results file in the logs directory.
    ///
    /// Prints per-test timing tables and serial/parallel speedups.
    Summary {
        /// Directory holding `*.json` results files.
        #[arg(long, env = "PARBENCH_LOGS_DIR")]
        logs_dir: Option<PathBuf>,

        /// Also write `summary.md` into the logs directory.
        #[arg(short, long)]
        write: bool,
    },
}

/// Options for a benchmark run.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Maximum number of workers; defaults to all CPUs.
    ///
    /// Values that are not positive integers are ignored.
    #[arg(allow_negative_numbers = true)]
    pub workers: Option<String>,

    /// Directory for the results file; resolved from the working directory
    /// when omitted.
    #[arg(long, env = "PARBENCH_LOGS_DIR")]
    pub logs_dir: Option<PathBuf>,

    /// Fibonacci index.
    #[arg(long, env = "PARBENCH_FIB_N")]
    pub fib_n: Option<u64>,

    /// Inclusive upper bound for the prime search.
    #[arg(long, env = "PARBENCH_PRIME_LIMIT")]
    pub prime_limit: Option<u64>,

    /// Number of random elements to sort.
    #[arg(long, env = "PARBENCH_SORT_SIZE")]
    pub sort_size: Option<usize>,

    /// Recursion depth up to which the parallel quicksort forks.
    #[arg(long, env = "PARBENCH_SORT_DEPTH")]
    pub sort_depth: Option<u32>,

    /// Seed for the sort input.
    #[arg(long, env = "PARBENCH_SEED")]
    pub seed: Option<u64>,
}

impl RunArgs {
    /// Build the run configuration, filling unset options with defaults.
    pub fn to_config(&self) -> BenchConfig {
        let defaults = BenchConfig::with_requested_workers(self.workers.as_deref());
        BenchConfig {
            fib_n: self.fib_n.unwrap_or(defaults.fib_n),
            prime_limit: self.prime_limit.unwrap_or(defaults.prime_limit),
            sort_size: self.sort_size.unwrap_or(defaults.sort_size),
            sort_depth: self.sort_depth.unwrap_or(defaults.sort_depth),
            seed: self.seed.or(defaults.seed),
            ..defaults
        }
    }
}

/// Install the stderr tracing subscriber.
///
/// `filter` wins over `RUST_LOG`; an unparsable filter falls back to
/// [`DEFAULT_LOG_FILTER`]. Safe to call more than once.
pub fn init_tracing(filter: Option<&str>) {
    let expr = filter
        .map(str::to_string)
        .or_else(|| std::env::var("RUST_LOG").ok());
    let env_filter = expr
        .and_then(|expr| EnvFilter::try_new(expr).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .try_init();
}

fn logs_dir_or_resolved(explicit: Option<PathBuf>, cwd: &Path) -> PathBuf {
    explicit.unwrap_or_else(|| io::resolve_logs_dir(cwd))
}

fn secs(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"))
}

/// Render the console report for a finished run.
pub fn render_report(report: &RunReport, config: &BenchConfig) -> String {
    let results = &report.results;
    let mut out = String::new();

    writeln!(out, "\nRust Fibonacci Sequence Test").unwrap();
    writeln!(out, "Serial Time (Dynamic): {} seconds", secs(results.fibonacci_serial)).unwrap();
    writeln!(out, "Fibonacci({}) = {}", config.fib_n, report.fibonacci_value).unwrap();
    writeln!(out, "Parallel Time: {} seconds", secs(results.fibonacci_parallel)).unwrap();
    writeln!(out, "Fibonacci sequence length: {}", report.fibonacci_sequence_len).unwrap();

    writeln!(out, "\nRust Prime Numbers Test").unwrap();
    writeln!(out, "Serial Time: {} seconds", secs(results.primes_serial)).unwrap();
    writeln!(
        out,
        "Found {} primes up to {}",
        report.primes_found_serial, config.prime_limit
    )
    .unwrap();
    writeln!(out, "Parallel Time: {} seconds", secs(results.primes_parallel)).unwrap();
    writeln!(
        out,
        "Found {} primes (parallel) up to {}",
        report.primes_found_parallel, config.prime_limit
    )
    .unwrap();

    writeln!(out, "\nRust QuickSort Test").unwrap();
    writeln!(out, "Serial Time: {} seconds", secs(results.sort_serial)).unwrap();
    writeln!(out, "Parallel Time: {} seconds", secs(results.sort_parallel)).unwrap();

    let speedups = results.speedups();
    writeln!(
        out,
        "\nSpeedup (serial/parallel): fibonacci {}, primes {}, sort {}",
        markdown::format_speedup(speedups.fibonacci),
        markdown::format_speedup(speedups.primes),
        markdown::format_speedup(speedups.sort)
    )
    .unwrap();
    out
}

fn run_benchmarks(args: &RunArgs) -> anyhow::Result<()> {
    let config = args.to_config();
    debug!(?config, "resolved configuration");
    println!("Running with {} workers", config.workers);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let logs_dir = logs_dir_or_resolved(args.logs_dir.clone(), &cwd);

    let outcome = parbench_benchmarks::run_and_write_all(&config, &logs_dir, &cwd);
    print!("{}", render_report(&outcome.report, &config));

    match &outcome.write {
        WriteOutcome::Primary(path) => println!("Results written to {}", path.display()),
        WriteOutcome::Fallback(path) => {
            println!("Results written to current directory as {}", path.display())
        }
        WriteOutcome::Failed => println!("Results could not be written"),
    }
    info!(verified = outcome.report.verified, "run complete");
    Ok(())
}

fn run_summary(logs_dir: Option<PathBuf>, write: bool) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let logs_dir = logs_dir_or_resolved(logs_dir, &cwd);

    let records = io::read_results_dir(&logs_dir)
        .with_context(|| format!("reading results from {}", logs_dir.display()))?;
    if records.is_empty() {
        println!("No results found in {}", logs_dir.display());
        return Ok(());
    }

    print!("{}", markdown::generate_summary(&records));
    if write {
        let path = io::write_summary(&records, &logs_dir)?;
        println!("Summary written to {}", path.display());
    }
    Ok(())
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails. A
/// benchmark run only fails on errors outside the benchmarks themselves.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());
    debug!(available = config::available_workers(), "detected cpus");

    match cli.command {
        Some(Commands::Summary { logs_dir, write }) => run_summary(logs_dir, write),
        None => run_benchmarks(&cli.run),
    }
}
