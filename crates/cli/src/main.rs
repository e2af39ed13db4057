use anyhow::Context;

use parcelflow_cli::{CliConfig, script};
use parcelflow_delivery::Delivery;

fn main() -> anyhow::Result<()> {
    parcelflow_observability::init();

    let config = CliConfig::from_args(std::env::args().skip(1))?;
    let raw = std::fs::read_to_string(&config.script_path)
        .with_context(|| format!("failed to read {}", config.script_path.display()))?;
    let steps = script::parse_script(&raw)?;

    let mut delivery = Delivery::draft();
    tracing::info!(
        delivery_id = %delivery.id_typed(),
        script = %config.script_path.display(),
        steps = steps.len(),
        "replaying script"
    );

    let events = script::run(steps, &mut delivery)?;
    println!("{}", script::render_report(&delivery, &events)?);
    Ok(())
}
