//! Sequential run of every encoding with immediate reporting

use crate::config::BenchConfig;
use crate::encoding::Encoding;
use crate::error::Result;
use crate::report::print_stats;
use crate::runner::Runner;
use marshal_bench_domain::{Record, Stats};
use std::io::Write;

/// Run each encoding over `records` in order, writing each report as soon as
/// its run finishes.
///
/// The first failing encoding stops the suite: it gets no report and the
/// encodings after it do not run.
pub fn run_all<E, W>(
    config: &BenchConfig,
    records: &[Record],
    encodings: &[E],
    out: &mut W,
) -> Result<Vec<Stats>>
where
    E: Encoding,
    W: Write,
{
    config.validate()?;
    let runner = Runner::from_config(config);
    let mut results = Vec::with_capacity(encodings.len());

    for encoding in encodings {
        let stats = runner.run(records, encoding)?;
        print_stats(out, &stats)?;
        out.flush()?;
        results.push(stats);
    }

    Ok(results)
}
