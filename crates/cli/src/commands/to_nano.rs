use anyhow::Context;
use nano_units_core::config::ConversionConfig;
use nano_units_core::{to_nano_with_decimals, AmountKind, RawAmount};

use crate::output;

pub fn run(value: &str, kind: AmountKind, decimals: Option<u32>) -> anyhow::Result<()> {
    let config = ConversionConfig::from_env().with_decimals(decimals);
    let amount = RawAmount::parse_as(kind, value)?;

    let nano = to_nano_with_decimals(amount, config.decimals).with_context(|| {
        format!(
            "Failed to convert {} to nano units ({} decimals)",
            value, config.decimals
        )
    })?;

    output::print_value(&nano.to_string());
    Ok(())
}
