//! Entity - either composition shape behind one type
//!
//! The marketplace never looks inside an entity. It only needs the
//! `Composable` seam: who the buyer is, what shape it has, and how to apply a
//! capability to it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::capabilities::Capability;
use crate::effects::EffectSink;
use crate::error::DomainError;
use crate::events::CompositionChange;
use crate::value_objects::EntityName;
use reefkick_domain::EntityId;

use super::{Creature, Player};

/// Composition shape of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityShape {
    /// One locomotion, many actions, many resources
    Composite,
    /// One replaceable kick
    Slot,
}

impl fmt::Display for EntityShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Composite => write!(f, "composite entity"),
            Self::Slot => write!(f, "slot entity"),
        }
    }
}

/// Something whose composition can be changed by applying a capability.
pub trait Composable {
    fn id(&self) -> EntityId;

    fn shape(&self) -> EntityShape;

    /// Apply a capability according to the entity's shape.
    ///
    /// On `Err` the composition is exactly what it was before the call.
    fn apply(&mut self, capability: Capability) -> Result<CompositionChange, DomainError>;
}

/// A live entity of either shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Entity {
    Creature(Creature),
    Player(Player),
}

impl Entity {
    pub fn name(&self) -> &EntityName {
        match self {
            Self::Creature(creature) => creature.name(),
            Self::Player(player) => player.name(),
        }
    }

    pub fn as_creature(&self) -> Option<&Creature> {
        match self {
            Self::Creature(creature) => Some(creature),
            Self::Player(_) => None,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Self::Player(player) => Some(player),
            Self::Creature(_) => None,
        }
    }

    /// Run every dispatch the entity has once: creatures move, act and
    /// collect; players kick.
    pub fn run(&self, sink: &mut dyn EffectSink) {
        match self {
            Self::Creature(creature) => {
                creature.locomote(sink);
                creature.act(sink);
                creature.collect(sink);
            }
            Self::Player(player) => player.perform(sink),
        }
    }
}

impl Composable for Entity {
    fn id(&self) -> EntityId {
        match self {
            Self::Creature(creature) => creature.id(),
            Self::Player(player) => player.id(),
        }
    }

    fn shape(&self) -> EntityShape {
        match self {
            Self::Creature(_) => EntityShape::Composite,
            Self::Player(_) => EntityShape::Slot,
        }
    }

    fn apply(&mut self, capability: Capability) -> Result<CompositionChange, DomainError> {
        match self {
            Self::Creature(creature) => creature.apply(capability),
            Self::Player(player) => player.apply(capability),
        }
    }
}

impl From<Creature> for Entity {
    fn from(value: Creature) -> Self {
        Self::Creature(value)
    }
}

impl From<Player> for Entity {
    fn from(value: Player) -> Self {
        Self::Player(value)
    }
}
