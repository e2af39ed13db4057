//! Domain events.
//!
//! Aggregates record events as facts about state changes; callers drain them
//! wrapped in an [`EventEnvelope`] after a successful operation.

pub mod envelope;
pub mod event;

pub use envelope::EventEnvelope;
pub use event::Event;
