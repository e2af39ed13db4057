//! Delivery tracking domain module.
//!
//! This crate contains the business rules for a single delivery order, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod command;
pub mod contact_point;
pub mod delivery;
pub mod events;
pub mod item;
pub mod preparation;
pub mod status;

pub use command::{CommandOutcome, DeliveryCommand};
pub use contact_point::ContactPoint;
pub use delivery::{AGGREGATE_TYPE, Delivery};
pub use events::{DeliveryEvent, DeliveryFulfilled, DeliveryPickedUp, DeliveryPlaced};
pub use item::Item;
pub use preparation::{PreparationDetails, PreparationDetailsBuilder};
pub use status::DeliveryStatus;
