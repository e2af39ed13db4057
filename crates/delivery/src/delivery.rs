use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use parcelflow_core::{
    AggregateRoot, Clock, CourierId, DeliveryId, DomainError, DomainResult, ItemId, Money,
    SystemClock,
};
use parcelflow_events::EventEnvelope;

use crate::contact_point::ContactPoint;
use crate::events::{DeliveryEvent, DeliveryFulfilled, DeliveryPickedUp, DeliveryPlaced};
use crate::item::{self, Item};
use crate::preparation::PreparationDetails;
use crate::status::DeliveryStatus;

/// Aggregate type tag stamped on every event envelope.
pub const AGGREGATE_TYPE: &str = "delivery";

/// Aggregate root: Delivery.
///
/// Owns its items, stamps lifecycle timestamps from the injected [`Clock`] and
/// records a [`DeliveryEvent`] for every status change. Every operation either
/// applies all of its effects or fails before touching any field.
#[derive(Debug, Clone, Serialize)]
pub struct Delivery {
    id: DeliveryId,
    courier_id: Option<CourierId>,
    status: DeliveryStatus,

    placed_at: Option<DateTime<Utc>>,
    assigned_at: Option<DateTime<Utc>>,
    expected_delivery_at: Option<DateTime<Utc>>,
    fulfilled_at: Option<DateTime<Utc>>,

    distance_fee: Money,
    courier_payout: Money,
    total_cost: Money,

    /// Derived: sum of item quantities.
    total_items: u64,

    sender: Option<ContactPoint>,
    recipient: Option<ContactPoint>,

    items: Vec<Item>,
    version: u64,

    #[serde(skip)]
    pending_events: Vec<EventEnvelope<DeliveryEvent>>,
    #[serde(skip)]
    clock: Arc<dyn Clock>,
}

impl Delivery {
    /// Start a new, empty delivery in `DRAFT` using the wall clock.
    pub fn draft() -> Self {
        Self::draft_with_clock(Arc::new(SystemClock))
    }

    /// Start a new, empty delivery in `DRAFT` with an injected clock.
    pub fn draft_with_clock(clock: Arc<dyn Clock>) -> Self {
        let delivery = Self {
            id: DeliveryId::new(),
            courier_id: None,
            status: DeliveryStatus::Draft,
            placed_at: None,
            assigned_at: None,
            expected_delivery_at: None,
            fulfilled_at: None,
            distance_fee: Money::ZERO,
            courier_payout: Money::ZERO,
            total_cost: Money::ZERO,
            total_items: 0,
            sender: None,
            recipient: None,
            items: Vec::new(),
            version: 0,
            pending_events: Vec::new(),
            clock,
        };
        tracing::debug!(delivery_id = %delivery.id, "delivery drafted");
        delivery
    }

    pub fn id_typed(&self) -> DeliveryId {
        self.id
    }

    pub fn courier_id(&self) -> Option<CourierId> {
        self.courier_id
    }

    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        self.placed_at
    }

    pub fn assigned_at(&self) -> Option<DateTime<Utc>> {
        self.assigned_at
    }

    pub fn expected_delivery_at(&self) -> Option<DateTime<Utc>> {
        self.expected_delivery_at
    }

    pub fn fulfilled_at(&self) -> Option<DateTime<Utc>> {
        self.fulfilled_at
    }

    pub fn distance_fee(&self) -> Money {
        self.distance_fee
    }

    pub fn courier_payout(&self) -> Money {
        self.courier_payout
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn sender(&self) -> Option<&ContactPoint> {
        self.sender.as_ref()
    }

    pub fn recipient(&self) -> Option<&ContactPoint> {
        self.recipient.as_ref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id_typed() == item_id)
    }

    /// Sender, recipient and total cost are all present.
    ///
    /// `total_cost` defaults to zero and is therefore always present.
    pub fn is_filled(&self) -> bool {
        self.sender.is_some() && self.recipient.is_some()
    }

    /// Events recorded since the last [`take_events`](Self::take_events).
    pub fn pending_events(&self) -> &[EventEnvelope<DeliveryEvent>] {
        &self.pending_events
    }

    /// Drain recorded events, oldest first.
    pub fn take_events(&mut self) -> Vec<EventEnvelope<DeliveryEvent>> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn add_item(&mut self, name: impl Into<String>, quantity: u32) -> DomainResult<ItemId> {
        let item = Item::brand_new(name, quantity, self.id)?;
        let item_id = item.id_typed();

        self.items.push(item);
        self.calculate_total_items();
        self.touch();

        tracing::debug!(delivery_id = %self.id, %item_id, quantity, "item added");
        Ok(item_id)
    }

    /// Remove an item. Unknown ids are ignored.
    pub fn remove_item(&mut self, item_id: ItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id_typed() != item_id);
        self.calculate_total_items();

        if self.items.len() != before {
            self.touch();
            tracing::debug!(delivery_id = %self.id, %item_id, "item removed");
        }
    }

    pub fn remove_items(&mut self) {
        let had_items = !self.items.is_empty();
        self.items.clear();
        self.calculate_total_items();

        if had_items {
            self.touch();
            tracing::debug!(delivery_id = %self.id, "all items removed");
        }
    }

    pub fn change_item_quantity(&mut self, item_id: ItemId, quantity: u32) -> DomainResult<()> {
        let delivery_id = self.id;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id_typed() == item_id)
            .ok_or_else(|| {
                DomainError::not_found(format!("item {item_id} in delivery {delivery_id}"))
            })?;
        item::ensure_quantity(quantity)?;

        item.set_quantity(quantity);
        self.calculate_total_items();
        self.touch();

        tracing::debug!(delivery_id = %self.id, %item_id, quantity, "item quantity changed");
        Ok(())
    }

    pub fn edit_preparation_details(&mut self, details: PreparationDetails) -> DomainResult<()> {
        self.verify_if_can_be_edited()?;

        if details.expected_delivery_time < Duration::zero() {
            return Err(DomainError::validation(
                "expected delivery time cannot be negative",
            ));
        }
        let total_cost = details
            .distance_fee
            .checked_add(details.courier_payout)
            .ok_or_else(|| DomainError::validation("total cost overflows"))?;
        let expected_delivery_at = self
            .clock
            .now()
            .checked_add_signed(details.expected_delivery_time)
            .ok_or_else(|| DomainError::validation("expected delivery time is out of range"))?;

        self.sender = details.sender;
        self.recipient = details.recipient;
        self.distance_fee = details.distance_fee;
        self.courier_payout = details.courier_payout;
        self.expected_delivery_at = Some(expected_delivery_at);
        self.total_cost = total_cost;
        self.touch();

        tracing::debug!(
            delivery_id = %self.id,
            total_cost = %self.total_cost,
            %expected_delivery_at,
            "preparation details edited"
        );
        Ok(())
    }

    /// Hand the delivery over to the courier pool.
    pub fn place(&mut self) -> DomainResult<()> {
        self.verify_if_can_be_placed()?;
        self.change_status_to(DeliveryStatus::WaitingForCourier)?;

        let now = self.clock.now();
        self.placed_at = Some(now);
        self.touch();
        self.record(DeliveryEvent::DeliveryPlaced(DeliveryPlaced {
            delivery_id: self.id,
            occurred_at: now,
        }));
        Ok(())
    }

    pub fn pick_up(&mut self, courier_id: CourierId) -> DomainResult<()> {
        self.change_status_to(DeliveryStatus::InTransit)?;

        let now = self.clock.now();
        self.courier_id = Some(courier_id);
        self.assigned_at = Some(now);
        self.touch();
        self.record(DeliveryEvent::DeliveryPickedUp(DeliveryPickedUp {
            delivery_id: self.id,
            courier_id,
            occurred_at: now,
        }));
        Ok(())
    }

    pub fn mark_as_delivered(&mut self) -> DomainResult<()> {
        self.change_status_to(DeliveryStatus::Delivered)?;

        let now = self.clock.now();
        self.fulfilled_at = Some(now);
        self.touch();
        self.record(DeliveryEvent::DeliveryFulfilled(DeliveryFulfilled {
            delivery_id: self.id,
            occurred_at: now,
        }));
        Ok(())
    }

    fn verify_if_can_be_placed(&self) -> DomainResult<()> {
        if !self.is_filled() {
            return Err(DomainError::invalid_state(
                "delivery must have sender, recipient and total cost before it is placed",
            ));
        }
        if self.status != DeliveryStatus::Draft {
            return Err(DomainError::invalid_state(format!(
                "only draft deliveries can be placed (current status: {})",
                self.status
            )));
        }
        Ok(())
    }

    fn verify_if_can_be_edited(&self) -> DomainResult<()> {
        if self.status != DeliveryStatus::Draft {
            return Err(DomainError::invalid_state(format!(
                "preparation details can only be edited in DRAFT (current status: {})",
                self.status
            )));
        }
        Ok(())
    }

    /// Single enforcement point for the status lifecycle.
    fn change_status_to(&mut self, new_status: DeliveryStatus) -> DomainResult<()> {
        if self.status.can_not_change_to(new_status) {
            return Err(DomainError::invalid_state(format!(
                "invalid status transition from {} to {}",
                self.status, new_status
            )));
        }

        tracing::info!(
            delivery_id = %self.id,
            from = %self.status,
            to = %new_status,
            "delivery status changed"
        );
        self.status = new_status;
        Ok(())
    }

    fn calculate_total_items(&mut self) {
        self.total_items = self.items.iter().map(|item| u64::from(item.quantity())).sum();
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    fn record(&mut self, event: DeliveryEvent) {
        self.pending_events.push(EventEnvelope::new(
            Uuid::now_v7(),
            *self.id.as_uuid(),
            AGGREGATE_TYPE,
            self.version,
            event,
        ));
    }
}

impl AggregateRoot for Delivery {
    type Id = DeliveryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl PartialEq for Delivery {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Delivery {}
