//! Command script replay.
//!
//! A script is a JSON array of [`DeliveryCommand`]s. Item ids are generated at
//! runtime, so an `item_id` may be written as `"#N"` to mean the N-th item added
//! by the script (zero-based).

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;

use parcelflow_core::{AggregateRoot, ItemId};
use parcelflow_delivery::{CommandOutcome, Delivery, DeliveryCommand, DeliveryEvent};
use parcelflow_events::{Event, EventEnvelope};

pub fn parse_script(raw: &str) -> Result<Vec<Value>> {
    serde_json::from_str(raw).context("script must be a JSON array of commands")
}

/// Execute every step in order, stopping at the first failure.
///
/// Returns the events drained from the delivery along the way.
pub fn run(steps: Vec<Value>, delivery: &mut Delivery) -> Result<Vec<EventEnvelope<DeliveryEvent>>> {
    let mut added: Vec<ItemId> = Vec::new();
    let mut events = Vec::new();

    for (index, mut step) in steps.into_iter().enumerate() {
        resolve_item_ref(&mut step, &added).with_context(|| format!("step {index}"))?;
        let command: DeliveryCommand = serde_json::from_value(step)
            .with_context(|| format!("step {index}: malformed command"))?;

        let outcome = delivery
            .execute(&command)
            .with_context(|| format!("step {index}: {} failed", command.name()))?;
        if let CommandOutcome::ItemAdded(item_id) = outcome {
            added.push(item_id);
        }

        tracing::info!(
            step = index,
            command = command.name(),
            status = %delivery.status(),
            version = delivery.version(),
            "command applied"
        );

        for envelope in delivery.take_events() {
            tracing::info!(
                event_type = envelope.payload().event_type(),
                sequence = envelope.sequence_number(),
                "event recorded"
            );
            events.push(envelope);
        }
    }

    Ok(events)
}

#[derive(Serialize)]
struct Report<'a> {
    delivery: &'a Delivery,
    events: &'a [EventEnvelope<DeliveryEvent>],
}

pub fn render_report(delivery: &Delivery, events: &[EventEnvelope<DeliveryEvent>]) -> Result<String> {
    serde_json::to_string_pretty(&Report { delivery, events }).context("failed to render report")
}

fn resolve_item_ref(step: &mut Value, added: &[ItemId]) -> Result<()> {
    let Some(slot) = step.get_mut("item_id") else {
        return Ok(());
    };
    let Some(reference) = slot.as_str().and_then(|raw| raw.strip_prefix('#')) else {
        return Ok(());
    };

    let index: usize = reference
        .parse()
        .with_context(|| format!("invalid item reference #{reference}"))?;
    let Some(item_id) = added.get(index) else {
        bail!(
            "item reference #{index} points past the {} items added so far",
            added.len()
        );
    };

    *slot = Value::String(item_id.to_string());
    Ok(())
}
