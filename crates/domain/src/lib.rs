extern crate self as reefkick_domain;

pub mod aggregates;
pub mod capabilities;
pub mod catalog;
pub mod effects;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{
    Ball, Composable, Creature, CreatureBuilder, Entity, EntityShape, Player, PlayerBuilder,
};
pub use capabilities::{Action, Capability, CapabilityFamily, Locomotion, Resource, SwimPace};
pub use catalog::{Catalog, MarketplaceItem};
pub use effects::{Effect, EffectSink};
pub use error::DomainError;
pub use events::CompositionChange;
pub use ids::{EntityId, ItemId, SessionId};
pub use value_objects::{AnimationName, Credits, EntityName, ItemName};
