//! Synthetic record generation
//!
//! Records are drawn from a seeded RNG so a corpus can be reproduced exactly.
//! Generation is bounded by a record count; the wall-clock cap only guards
//! against slow machines.

use crate::config::CorpusConfig;
use chrono::{DateTime, Utc};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName};
use marshal_bench_domain::Record;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, warn};

// 2020-01-01T00:00:00Z .. 2030-01-01T00:00:00Z
const DATE_RANGE_SECS: std::ops::Range<i64> = 1_577_836_800..1_893_456_000;
const MAP_INT_KEY_SPACE: i64 = 10_000;
const PROGRESS_EVERY: usize = 10_000;
const PREALLOC_LIMIT: usize = 1 << 16;

/// Seeded generator of synthetic records
pub struct RecordGenerator {
    config: CorpusConfig,
    rng: StdRng,
}

impl RecordGenerator {
    /// Create a generator for the given corpus settings
    pub fn new(config: &CorpusConfig) -> Self {
        Self {
            config: config.clone(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Generate the corpus.
    ///
    /// Stops at `target_records` or once `generation_cap` has elapsed,
    /// whichever comes first.
    pub fn generate(&mut self) -> Vec<Record> {
        let target = self.config.target_records;
        let started = Instant::now();
        let mut records = Vec::with_capacity(target.min(PREALLOC_LIMIT));

        while records.len() < target {
            if started.elapsed() > self.config.generation_cap {
                warn!(
                    generated = records.len(),
                    target,
                    cap = ?self.config.generation_cap,
                    "generation cap reached before target record count"
                );
                break;
            }

            records.push(self.next_record());

            if records.len() % PROGRESS_EVERY == 0 {
                debug!(generated = records.len(), target, "generating records");
            }
        }

        info!(
            records = records.len(),
            elapsed = ?started.elapsed(),
            "corpus generated"
        );
        records
    }

    /// Draw one record
    pub fn next_record(&mut self) -> Record {
        let secs = self.rng.random_range(DATE_RANGE_SECS);
        let nanos = self.rng.random_range(0..1_000_000_000u32);
        let date =
            DateTime::<Utc>::from_timestamp(secs, nanos).unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        Record {
            id: self.rng.random_range(1..=i64::MAX),
            date,
            name_a: FirstName().fake_with_rng(&mut self.rng),
            name_b: LastName().fake_with_rng(&mut self.rng),
            name_c: CompanyName().fake_with_rng(&mut self.rng),
            count1: self.rng.random(),
            count2: self.rng.random(),
            count3: self.rng.random(),
            amt1: self.amount(),
            amt2: self.amount(),
            flag: self.rng.random_bool(0.5),
            str_array: self.str_array(),
            map_str: self.map_str(),
            map_int: self.map_int(),
        }
    }

    /// Monetary amount with two decimal places
    fn amount(&mut self) -> f64 {
        self.rng.random_range(0..100_000_000i64) as f64 / 100.0
    }

    fn collection_len(&mut self) -> usize {
        self.rng.random_range(0..=self.config.max_collection_size)
    }

    fn str_array(&mut self) -> Vec<String> {
        let len = self.collection_len();
        (0..len).map(|_| Word().fake_with_rng(&mut self.rng)).collect()
    }

    // Duplicate keys collapse, so maps can be shorter than the drawn length.
    fn map_str(&mut self) -> HashMap<String, String> {
        let len = self.collection_len();
        (0..len)
            .map(|_| {
                let key: String = Word().fake_with_rng(&mut self.rng);
                let value: String = Word().fake_with_rng(&mut self.rng);
                (key, value)
            })
            .collect()
    }

    fn map_int(&mut self) -> HashMap<i64, i64> {
        let len = self.collection_len();
        (0..len)
            .map(|_| {
                (
                    self.rng.random_range(0..MAP_INT_KEY_SPACE),
                    self.rng.random(),
                )
            })
            .collect()
    }
}

/// Generate a corpus in one call
pub fn generate_corpus(config: &CorpusConfig) -> Vec<Record> {
    RecordGenerator::new(config).generate()
}
