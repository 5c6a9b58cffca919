//! Per-encoding run statistics
//!
//! A `Stats` is created empty when a run starts, fed once per processed
//! record, and finalized after the loop. Averages and rates are derived from
//! the cumulative totals in [`Stats::finalize`] only, so they can never drift
//! from the totals they summarize.

use std::time::Duration;

/// Aggregate timing and size results for one encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Encoding label
    pub encoding: String,
    /// Records processed
    pub records: u64,
    /// Cumulative size of every encoded payload, in bytes
    pub data_size: u64,
    /// Cumulative marshal time
    pub marshal_all: Duration,
    /// Average marshal time per record
    pub marshal_avg: Duration,
    /// Marshal operations per second of cumulative marshal time
    pub marshal_ops_per_sec: f64,
    /// Cumulative unmarshal time
    pub unmarshal_all: Duration,
    /// Average unmarshal time per record
    pub unmarshal_avg: Duration,
    /// Unmarshal operations per second of cumulative unmarshal time
    pub unmarshal_ops_per_sec: f64,
}

impl Stats {
    /// Create empty statistics for an encoding label
    pub fn new(encoding: impl Into<String>) -> Self {
        Self {
            encoding: encoding.into(),
            records: 0,
            data_size: 0,
            marshal_all: Duration::ZERO,
            marshal_avg: Duration::ZERO,
            marshal_ops_per_sec: 0.0,
            unmarshal_all: Duration::ZERO,
            unmarshal_avg: Duration::ZERO,
            unmarshal_ops_per_sec: 0.0,
        }
    }

    /// Account one marshal call: counts the record and its payload size.
    pub fn record_marshal(&mut self, encoded_len: usize, elapsed: Duration) {
        self.records += 1;
        self.data_size += encoded_len as u64;
        self.marshal_all += elapsed;
    }

    /// Account one unmarshal call for the record counted by the preceding
    /// [`Stats::record_marshal`].
    pub fn record_unmarshal(&mut self, elapsed: Duration) {
        self.unmarshal_all += elapsed;
    }

    /// Compute averages and rates from the cumulative totals.
    ///
    /// Safe to call more than once; each call recomputes from scratch.
    pub fn finalize(&mut self) {
        self.marshal_avg = average(self.marshal_all, self.records);
        self.unmarshal_avg = average(self.unmarshal_all, self.records);
        self.marshal_ops_per_sec = ops_per_sec(self.records, self.marshal_all);
        self.unmarshal_ops_per_sec = ops_per_sec(self.records, self.unmarshal_all);
    }

    /// Average encoded payload size in bytes, zero when nothing was processed
    #[must_use]
    pub fn avg_payload_size(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.data_size as f64 / self.records as f64
        }
    }
}

/// `total / count`, truncated to whole nanoseconds; zero for an empty run.
#[must_use]
pub fn average(total: Duration, count: u64) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / u128::from(count);
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// Operations per second of `elapsed`; zero when `elapsed` is zero.
#[must_use]
pub fn ops_per_sec(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { count as f64 / secs } else { 0.0 }
}
