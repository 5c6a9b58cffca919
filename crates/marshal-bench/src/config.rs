//! Benchmark configuration
//!
//! All tunables of a run. Defaults reproduce the classic setup: twenty
//! elements per collection, a two minute budget per encoding and a fifteen
//! second cap on corpus generation.

use crate::error::{Error, Result};
use std::time::Duration;

/// Default seed for the record generator
pub const DEFAULT_SEED: u64 = 42;
/// Default number of records to generate
pub const DEFAULT_TARGET_RECORDS: usize = 100_000;
/// Default wall-clock cap on corpus generation
pub const DEFAULT_GENERATION_CAP: Duration = Duration::from_secs(15);
/// Default maximum length of list and map fields
pub const DEFAULT_MAX_COLLECTION_SIZE: usize = 20;
/// Default wall-clock budget for one encoding run
pub const DEFAULT_RUNNER_BUDGET: Duration = Duration::from_secs(120);

/// Corpus generation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    /// RNG seed; equal seeds and counts give equal corpora
    pub seed: u64,
    /// Number of records to generate
    pub target_records: usize,
    /// Generation stops early once this much wall-clock time has passed
    pub generation_cap: Duration,
    /// Upper bound for `str_array`, `map_string` and `map_int` sizes
    pub max_collection_size: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            target_records: DEFAULT_TARGET_RECORDS,
            generation_cap: DEFAULT_GENERATION_CAP,
            max_collection_size: DEFAULT_MAX_COLLECTION_SIZE,
        }
    }
}

/// Full benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Corpus generation settings
    pub corpus: CorpusConfig,
    /// Wall-clock budget for each encoding run
    pub runner_budget: Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchConfig {
    /// Create configuration with default values
    pub fn new() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            runner_budget: DEFAULT_RUNNER_BUDGET,
        }
    }

    /// Set the generator seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.corpus.seed = seed;
        self
    }

    /// Set the number of records to generate
    pub fn with_target_records(mut self, target_records: usize) -> Self {
        self.corpus.target_records = target_records;
        self
    }

    /// Set the corpus generation time cap
    pub fn with_generation_cap(mut self, cap: Duration) -> Self {
        self.corpus.generation_cap = cap;
        self
    }

    /// Set the maximum collection size for generated records
    pub fn with_max_collection_size(mut self, size: usize) -> Self {
        self.corpus.max_collection_size = size;
        self
    }

    /// Set the per-encoding wall-clock budget
    pub fn with_runner_budget(mut self, budget: Duration) -> Self {
        self.runner_budget = budget;
        self
    }

    /// Reject settings that make a run meaningless
    pub fn validate(&self) -> Result<()> {
        if self.runner_budget.is_zero() {
            return Err(Error::invalid_config("runner budget must be non-zero"));
        }
        if self.corpus.generation_cap.is_zero() {
            return Err(Error::invalid_config("generation cap must be non-zero"));
        }
        Ok(())
    }
}
