//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (two value objects with same values are equal),
///   e.g. a sender's contact point or an amount of money.
/// - **Entity**: has identity (two entities with same ID are the same entity),
///   e.g. an item line inside a delivery.
///
/// Value objects are immutable: to "modify" one, build a new one and replace it
/// wholesale on the owning entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
