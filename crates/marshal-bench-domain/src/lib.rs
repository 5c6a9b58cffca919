//! marshal-bench Domain Layer
//!
//! Plain data types shared by the benchmark harness:
//! - **Record**: the synthetic flat record every encoding serializes
//! - **Stats**: running totals and derived rates for one encoding run
//!
//! Nothing here knows about a particular encoder or about wall-clock budgets;
//! those live in the `marshal-bench` crate.

#![warn(missing_docs)]

pub mod record;
pub mod stats;

pub use record::Record;
pub use stats::Stats;
