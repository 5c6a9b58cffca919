//! marshal-bench binary
//!
//! Generates the corpus once, then runs serde_json, sonic-rs, simd-json and
//! Avro binary in that order, printing each report to stdout as it finishes.
//! Any encoding failure ends the process with exit status 1.

use clap::Parser;
use marshal_bench::{BenchConfig, Result, default_encodings, generate_corpus, run_all};
use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line overrides; every flag defaults to the standard setup
#[derive(Debug, Parser)]
#[command(name = "marshal-bench", version, about)]
struct Args {
    /// Number of records to generate
    #[arg(long, default_value_t = marshal_bench::config::DEFAULT_TARGET_RECORDS)]
    records: usize,

    /// Seed for the record generator
    #[arg(long, default_value_t = marshal_bench::config::DEFAULT_SEED)]
    seed: u64,

    /// Wall-clock cap on corpus generation, in seconds
    #[arg(long, default_value_t = marshal_bench::config::DEFAULT_GENERATION_CAP.as_secs())]
    generation_cap_secs: u64,

    /// Wall-clock budget per encoding, in seconds
    #[arg(long, default_value_t = marshal_bench::config::DEFAULT_RUNNER_BUDGET.as_secs())]
    runner_budget_secs: u64,

    /// Maximum length of list and map fields
    #[arg(long, default_value_t = marshal_bench::config::DEFAULT_MAX_COLLECTION_SIZE)]
    max_collection_size: usize,
}

impl Args {
    fn into_config(self) -> BenchConfig {
        BenchConfig::new()
            .with_target_records(self.records)
            .with_seed(self.seed)
            .with_generation_cap(Duration::from_secs(self.generation_cap_secs))
            .with_runner_budget(Duration::from_secs(self.runner_budget_secs))
            .with_max_collection_size(self.max_collection_size)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();

    exit_code(run(&config), &mut std::io::stderr())
}

/// Map the run result to the process exit status, printing a fatal error
/// as `error: <message>`
fn exit_code(result: Result<()>, err_out: &mut impl Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing better to do if stderr itself is gone
            let _ = writeln!(err_out, "error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &BenchConfig) -> Result<()> {
    info!(?config, "starting marshal benchmark");

    let encodings = default_encodings()?;
    let records = generate_corpus(&config.corpus);
    run_all(config, &records, &encodings, &mut std::io::stdout().lock())?;

    Ok(())
}
