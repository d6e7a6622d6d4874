//! Domain Events
//!
//! Return types from aggregate mutations, communicating what changed when a
//! composition was modified.

pub mod composition_events;

pub use composition_events::CompositionChange;
