use nano_units_core::SendMode;

use crate::output;

pub fn run(names: &[String]) -> anyhow::Result<()> {
    let modes = names
        .iter()
        .map(|name| name.parse::<SendMode>().map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<Vec<_>>>()?;

    output::print_value(&SendMode::combine(&modes).to_string());
    Ok(())
}
