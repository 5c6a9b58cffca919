//! Comprehensive tests for Stats accumulation
//!
//! Covers accumulation, finalization, derived rates and the arithmetic
//! invariants between averages and totals.

use marshal_bench_domain::Stats;
use marshal_bench_domain::stats::{average, ops_per_sec};
use proptest::prelude::*;
use std::time::Duration;

// ============================================================================
// Accumulation Tests
// ============================================================================

#[test]
fn test_totals_never_decrease() {
    let mut stats = Stats::new("monotonic");
    let mut previous = (0, Duration::ZERO, Duration::ZERO);

    for i in 0..50u64 {
        stats.record_marshal(i as usize, Duration::from_nanos(i * 3));
        stats.record_unmarshal(Duration::from_nanos(i * 5));

        let current = (stats.records, stats.marshal_all, stats.unmarshal_all);
        assert!(current.0 > previous.0);
        assert!(current.1 >= previous.1);
        assert!(current.2 >= previous.2);
        previous = current;
    }
}

#[test]
fn test_finalize_is_idempotent() {
    let mut stats = Stats::new("twice");
    stats.record_marshal(100, Duration::from_millis(2));
    stats.record_unmarshal(Duration::from_millis(4));

    stats.finalize();
    let first = stats.clone();
    stats.finalize();

    assert_eq!(first, stats);
}

#[test]
fn test_rates_use_phase_time_not_wall_time() {
    let mut stats = Stats::new("phases");
    for _ in 0..4 {
        stats.record_marshal(8, Duration::from_millis(250));
        stats.record_unmarshal(Duration::from_millis(500));
    }
    stats.finalize();

    assert!((stats.marshal_ops_per_sec - 4.0).abs() < 1e-9);
    assert!((stats.unmarshal_ops_per_sec - 2.0).abs() < 1e-9);
}

// ============================================================================
// Helper Function Tests
// ============================================================================

#[test]
fn test_ops_per_sec_zero_elapsed() {
    assert_eq!(ops_per_sec(0, Duration::ZERO), 0.0);
    assert_eq!(ops_per_sec(1_000, Duration::ZERO), 0.0);
}

#[test]
fn test_average_zero_count() {
    assert_eq!(average(Duration::from_secs(1), 0), Duration::ZERO);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// avg * count stays within count nanoseconds of the total
    #[test]
    fn average_times_count_matches_total(
        samples in prop::collection::vec(0u64..10_000_000, 1..200)
    ) {
        let mut stats = Stats::new("prop");
        for nanos in &samples {
            stats.record_marshal(1, Duration::from_nanos(*nanos));
            stats.record_unmarshal(Duration::from_nanos(nanos / 2));
        }
        stats.finalize();

        let count = samples.len() as u128;
        let rebuilt = stats.marshal_avg.as_nanos() * count;
        let total = stats.marshal_all.as_nanos();
        prop_assert!(rebuilt <= total);
        prop_assert!(total - rebuilt < count);

        let rebuilt = stats.unmarshal_avg.as_nanos() * count;
        let total = stats.unmarshal_all.as_nanos();
        prop_assert!(rebuilt <= total);
        prop_assert!(total - rebuilt < count);
    }

    /// Rates are always finite and non-negative
    #[test]
    fn rates_finite_and_non_negative(
        samples in prop::collection::vec(0u64..1_000_000, 0..100)
    ) {
        let mut stats = Stats::new("prop");
        for nanos in &samples {
            stats.record_marshal(4, Duration::from_nanos(*nanos));
            stats.record_unmarshal(Duration::from_nanos(*nanos));
        }
        stats.finalize();

        prop_assert!(stats.marshal_ops_per_sec.is_finite());
        prop_assert!(stats.marshal_ops_per_sec >= 0.0);
        prop_assert!(stats.unmarshal_ops_per_sec.is_finite());
        prop_assert!(stats.unmarshal_ops_per_sec >= 0.0);
        prop_assert_eq!(stats.data_size, 4 * samples.len() as u64);
    }
}
