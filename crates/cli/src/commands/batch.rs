use std::io::Read;
use std::time::Instant;

use anyhow::Context;
use nano_units_core::batch::{convert_batch, Direction};
use nano_units_core::config::ConversionConfig;

use crate::output;

pub fn run(
    file: &str,
    direction: Direction,
    decimals: Option<u32>,
    workers: Option<usize>,
) -> anyhow::Result<()> {
    let text = if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read amounts from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?
    };
    let lines: Vec<&str> = text.lines().collect();

    let config = ConversionConfig::from_env()
        .with_decimals(decimals)
        .with_workers(workers);

    let start = Instant::now();
    let result = convert_batch(&lines, direction, &config)?;
    output::print_batch(&result, start.elapsed());

    if result.n_failed() > 0 {
        anyhow::bail!(
            "{} of {} amounts failed to convert",
            result.n_failed(),
            result.n_total()
        );
    }
    Ok(())
}
