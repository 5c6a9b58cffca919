//! # marshal-bench
//!
//! Marshal/unmarshal throughput and payload size comparison for
//! `serde_json`, `sonic-rs`, `simd-json` and Apache Avro binary datums.
//!
//! A seeded generator builds a corpus of synthetic [`Record`]s once. Each
//! [`Encoding`] then runs through the same time-boxed loop ([`Runner`]),
//! which accumulates sizes and timings into a [`Stats`] and hands it to the
//! reporter.
//!
//! ```no_run
//! use marshal_bench::{BenchConfig, default_encodings, generate_corpus, run_all};
//!
//! # fn main() -> marshal_bench::Result<()> {
//! let config = BenchConfig::new().with_target_records(1_000);
//! let records = generate_corpus(&config.corpus);
//! let encodings = default_encodings()?;
//! run_all(&config, &records, &encodings, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

#![warn(rust_2018_idioms)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod generator;
pub mod report;
pub mod runner;
pub mod suite;

pub use config::{BenchConfig, CorpusConfig};
pub use encoding::{AvroBinary, Encoding, SerdeJson, SimdJson, SonicJson, default_encodings};
pub use error::{Error, Phase, Result};
pub use generator::{RecordGenerator, generate_corpus};
pub use marshal_bench_domain::{Record, Stats};
pub use report::print_stats;
pub use runner::Runner;
pub use suite::run_all;
