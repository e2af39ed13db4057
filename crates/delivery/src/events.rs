use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parcelflow_core::{CourierId, DeliveryId};
use parcelflow_events::Event;

/// Event: DeliveryPlaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPlaced {
    pub delivery_id: DeliveryId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: DeliveryPickedUp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPickedUp {
    pub delivery_id: DeliveryId,
    pub courier_id: CourierId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: DeliveryFulfilled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFulfilled {
    pub delivery_id: DeliveryId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryEvent {
    DeliveryPlaced(DeliveryPlaced),
    DeliveryPickedUp(DeliveryPickedUp),
    DeliveryFulfilled(DeliveryFulfilled),
}

impl DeliveryEvent {
    pub fn delivery_id(&self) -> DeliveryId {
        match self {
            DeliveryEvent::DeliveryPlaced(e) => e.delivery_id,
            DeliveryEvent::DeliveryPickedUp(e) => e.delivery_id,
            DeliveryEvent::DeliveryFulfilled(e) => e.delivery_id,
        }
    }
}

impl Event for DeliveryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DeliveryEvent::DeliveryPlaced(_) => "delivery.placed",
            DeliveryEvent::DeliveryPickedUp(_) => "delivery.picked_up",
            DeliveryEvent::DeliveryFulfilled(_) => "delivery.fulfilled",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            DeliveryEvent::DeliveryPlaced(e) => e.occurred_at,
            DeliveryEvent::DeliveryPickedUp(e) => e.occurred_at,
            DeliveryEvent::DeliveryFulfilled(e) => e.occurred_at,
        }
    }
}
