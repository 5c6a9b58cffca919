//! Property-based tests for corpus generation
//!
//! Generated records must respect the collection bound for any seed and
//! bound, and generation must be reproducible from the seed.

use marshal_bench::{CorpusConfig, RecordGenerator, generate_corpus};
use proptest::prelude::*;

fn config(seed: u64, target_records: usize, max_collection_size: usize) -> CorpusConfig {
    CorpusConfig {
        seed,
        target_records,
        max_collection_size,
        ..CorpusConfig::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// No collection field ever exceeds the configured maximum
    #[test]
    fn collections_within_bound(seed in any::<u64>(), max in 0usize..=20) {
        for record in generate_corpus(&config(seed, 20, max)) {
            prop_assert!(record.str_array.len() <= max);
            prop_assert!(record.map_str.len() <= max);
            prop_assert!(record.map_int.len() <= max);
        }
    }

    /// Equal seeds give equal corpora
    #[test]
    fn seed_reproducible(seed in any::<u64>()) {
        let first = generate_corpus(&config(seed, 5, 20));
        let second = generate_corpus(&config(seed, 5, 20));
        prop_assert_eq!(first, second);
    }

    /// Exactly the requested number of records when the cap is generous
    #[test]
    fn count_bounded(target in 0usize..50) {
        prop_assert_eq!(generate_corpus(&config(1, target, 3)).len(), target);
    }
}

#[test]
fn test_default_bound_is_twenty() {
    let mut generator = RecordGenerator::new(&CorpusConfig::default());
    let longest = (0..500)
        .map(|_| generator.next_record().max_collection_len())
        .max()
        .unwrap_or(0);
    assert!(longest <= 20);
    assert!(longest > 0);
}
