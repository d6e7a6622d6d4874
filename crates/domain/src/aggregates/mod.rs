//! Aggregate roots - entities that own their capabilities
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its capabilities by value (no sharing between entities)
//! - Is valid by construction (builders enforce the mandatory capability)
//! - Returns a `CompositionChange` from every mutation

pub mod ball;
pub mod creature;
pub mod entity;
pub mod player;

pub use ball::Ball;
pub use creature::{Creature, CreatureBuilder};
pub use entity::{Composable, Entity, EntityShape};
pub use player::{Player, PlayerBuilder};
