use rayon::prelude::*;
use tracing::info;

use crate::config::ConversionConfig;
use crate::nano::{from_nano_with_decimals, to_nano_with_decimals};
use crate::result::{BatchResult, ConversionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToNano,
    FromNano,
}

/// Converts one amount per line. Blank lines are skipped, and a failing line
/// is recorded in its result without stopping the rest. Output keeps input order.
pub fn convert_batch<S>(
    lines: &[S],
    direction: Direction,
    config: &ConversionConfig,
) -> anyhow::Result<BatchResult>
where
    S: AsRef<str> + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_count())
        .build()?;

    let decimals = config.decimals;
    let results: Vec<ConversionResult> = pool.install(|| {
        lines
            .par_iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let input = line.as_ref().trim();
                if input.is_empty() {
                    return None;
                }
                let output = match direction {
                    Direction::ToNano => {
                        to_nano_with_decimals(input, decimals).map(|v| v.to_string())
                    }
                    Direction::FromNano => from_nano_with_decimals(input, decimals),
                };
                Some(ConversionResult {
                    line: i + 1,
                    input: input.to_string(),
                    output,
                })
            })
            .collect()
    });

    let result = BatchResult::from_results(results);
    info!(
        total = result.n_total(),
        failed = result.n_failed(),
        ?direction,
        decimals,
        "batch conversion finished"
    );
    Ok(result)
}
