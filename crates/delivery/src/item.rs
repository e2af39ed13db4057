use serde::Serialize;

use parcelflow_core::{DeliveryId, DomainError, DomainResult, Entity, ItemId};

/// Item line of a delivery.
///
/// Items only exist inside their [`Delivery`](crate::Delivery): construction and
/// quantity changes are crate-private and reached through the owning aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: u32,
    /// Owning delivery. Bookkeeping only; never followed back into the owner.
    delivery_id: DeliveryId,
}

impl Item {
    pub(crate) fn brand_new(
        name: impl Into<String>,
        quantity: u32,
        delivery_id: DeliveryId,
    ) -> DomainResult<Self> {
        let name = name.into();
        ensure_name(&name)?;
        ensure_quantity(quantity)?;

        Ok(Self {
            id: ItemId::new(),
            name,
            quantity,
            delivery_id,
        })
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn delivery_id(&self) -> DeliveryId {
        self.delivery_id
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Item {}

fn ensure_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("item name cannot be empty"));
    }
    Ok(())
}

pub(crate) fn ensure_quantity(quantity: u32) -> DomainResult<()> {
    if quantity == 0 {
        return Err(DomainError::validation("item quantity must be positive"));
    }
    Ok(())
}
