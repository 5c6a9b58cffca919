//! Time-boxed marshal/unmarshal loop
//!
//! One loop, parameterized over an [`Encoding`]. Records are processed in
//! corpus order: encode, account size and time, decode the bytes just
//! produced, account time. The budget is checked once per record, after the
//! record is fully processed, so a run always covers whole round trips.

use crate::config::BenchConfig;
use crate::encoding::Encoding;
use crate::error::Result;
use marshal_bench_domain::{Record, Stats};
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Benchmark loop bound to a wall-clock budget
#[derive(Debug, Clone, Copy)]
pub struct Runner {
    budget: Duration,
}

impl Runner {
    /// Create a runner that stops once `budget` has elapsed
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    /// Create a runner with the configured per-encoding budget
    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(config.runner_budget)
    }

    /// Run `encoding` over `records` and return finalized statistics.
    ///
    /// The first encode or decode error aborts the run; no partial
    /// statistics are returned.
    pub fn run<E>(&self, records: &[Record], encoding: &E) -> Result<Stats>
    where
        E: Encoding + ?Sized,
    {
        let mut stats = Stats::new(encoding.name());
        info!(encoding = encoding.name(), records = records.len(), "run started");

        let started = Instant::now();
        for record in records {
            let timer = Instant::now();
            let bytes = encoding.encode(black_box(record))?;
            stats.record_marshal(bytes.len(), timer.elapsed());

            let timer = Instant::now();
            let decoded = encoding.decode(black_box(&bytes))?;
            stats.record_unmarshal(timer.elapsed());
            black_box(decoded);

            if started.elapsed() > self.budget {
                break;
            }
        }
        stats.finalize();

        if (stats.records as usize) < records.len() {
            warn!(
                encoding = encoding.name(),
                processed = stats.records,
                available = records.len(),
                budget = ?self.budget,
                "budget exhausted before corpus"
            );
        }
        info!(
            encoding = encoding.name(),
            records = stats.records,
            avg_payload_bytes = stats.avg_payload_size(),
            elapsed = ?started.elapsed(),
            "run finished"
        );

        Ok(stats)
    }
}
