//! Human-readable report output

use marshal_bench_domain::Stats;
use num_format::{Locale, ToFormattedString};
use std::io::{self, Write};

/// Write one finalized [`Stats`] block.
///
/// Counts and rates are comma separated, durations use `Duration`'s debug
/// form (`1.5ms`, `250ns`). The block ends with a blank line.
pub fn print_stats<W: Write>(out: &mut W, stats: &Stats) -> io::Result<()> {
    writeln!(out, "System: {}", stats.encoding)?;
    writeln!(out, "\t {} Records Processed", format_count(stats.records))?;
    writeln!(out, "\t {} Total Bytes", format_count(stats.data_size))?;
    writeln!(out)?;
    writeln!(out, "\t {:?} UnMarshal Average", stats.unmarshal_avg)?;
    writeln!(out, "\t {:?} UnMarshal Total Time", stats.unmarshal_all)?;
    writeln!(
        out,
        "\t {} UnMarshal Op/sec",
        format_rate(stats.unmarshal_ops_per_sec)
    )?;
    writeln!(out)?;
    writeln!(out, "\t {:?} Marshal Average", stats.marshal_avg)?;
    writeln!(out, "\t {:?} Marshal Total Time", stats.marshal_all)?;
    writeln!(
        out,
        "\t {} Marshal Op/sec",
        format_rate(stats.marshal_ops_per_sec)
    )?;
    writeln!(out)?;
    Ok(())
}

/// Format a number with comma thousands separators
pub fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Round a rate to a whole number and format it with thousands separators.
///
/// Non-finite or negative rates print as `0`.
pub fn format_rate(rate: f64) -> String {
    if rate.is_finite() && rate > 0.0 {
        format_count(rate.round() as u64)
    } else {
        format_count(0)
    }
}
