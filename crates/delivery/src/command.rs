use chrono::Duration;
use serde::{Deserialize, Serialize};

use parcelflow_core::{CourierId, DomainError, DomainResult, ItemId, Money};

use crate::contact_point::ContactPoint;
use crate::delivery::Delivery;
use crate::preparation::PreparationDetails;

/// Serializable request for one [`Delivery`] operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeliveryCommand {
    AddItem {
        name: String,
        quantity: u32,
    },
    RemoveItem {
        item_id: ItemId,
    },
    RemoveItems,
    ChangeItemQuantity {
        item_id: ItemId,
        quantity: u32,
    },
    EditPreparationDetails {
        #[serde(default)]
        sender: Option<ContactPoint>,
        #[serde(default)]
        recipient: Option<ContactPoint>,
        #[serde(default)]
        distance_fee: Money,
        #[serde(default)]
        courier_payout: Money,
        expected_delivery_minutes: i64,
    },
    Place,
    PickUp {
        courier_id: CourierId,
    },
    MarkAsDelivered,
}

impl DeliveryCommand {
    pub fn name(&self) -> &'static str {
        match self {
            DeliveryCommand::AddItem { .. } => "add_item",
            DeliveryCommand::RemoveItem { .. } => "remove_item",
            DeliveryCommand::RemoveItems => "remove_items",
            DeliveryCommand::ChangeItemQuantity { .. } => "change_item_quantity",
            DeliveryCommand::EditPreparationDetails { .. } => "edit_preparation_details",
            DeliveryCommand::Place => "place",
            DeliveryCommand::PickUp { .. } => "pick_up",
            DeliveryCommand::MarkAsDelivered => "mark_as_delivered",
        }
    }
}

/// What a successfully executed command produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    ItemAdded(ItemId),
    Applied,
}

impl Delivery {
    /// Dispatch a command to the matching operation.
    pub fn execute(&mut self, command: &DeliveryCommand) -> DomainResult<CommandOutcome> {
        match command {
            DeliveryCommand::AddItem { name, quantity } => self
                .add_item(name.as_str(), *quantity)
                .map(CommandOutcome::ItemAdded),
            DeliveryCommand::RemoveItem { item_id } => {
                self.remove_item(*item_id);
                Ok(CommandOutcome::Applied)
            }
            DeliveryCommand::RemoveItems => {
                self.remove_items();
                Ok(CommandOutcome::Applied)
            }
            DeliveryCommand::ChangeItemQuantity { item_id, quantity } => self
                .change_item_quantity(*item_id, *quantity)
                .map(|()| CommandOutcome::Applied),
            DeliveryCommand::EditPreparationDetails {
                sender,
                recipient,
                distance_fee,
                courier_payout,
                expected_delivery_minutes,
            } => {
                let expected_delivery_time = Duration::try_minutes(*expected_delivery_minutes)
                    .ok_or_else(|| {
                        DomainError::validation("expected delivery minutes out of range")
                    })?;
                self.edit_preparation_details(PreparationDetails {
                    sender: sender.clone(),
                    recipient: recipient.clone(),
                    distance_fee: *distance_fee,
                    courier_payout: *courier_payout,
                    expected_delivery_time,
                })
                .map(|()| CommandOutcome::Applied)
            }
            DeliveryCommand::Place => self.place().map(|()| CommandOutcome::Applied),
            DeliveryCommand::PickUp { courier_id } => {
                self.pick_up(*courier_id).map(|()| CommandOutcome::Applied)
            }
            DeliveryCommand::MarkAsDelivered => {
                self.mark_as_delivered().map(|()| CommandOutcome::Applied)
            }
        }
    }
}
