//! Player aggregate - the slot entity shape
//!
//! A player holds exactly one replaceable kick. Upgrading swaps the kick in
//! place; the previous one is returned to the caller and not kept.

use serde::{Deserialize, Deserializer, Serialize};

use crate::capabilities::{Action, Capability, CapabilityFamily};
use crate::effects::EffectSink;
use crate::error::DomainError;
use crate::events::CompositionChange;
use crate::value_objects::EntityName;
use reefkick_domain::EntityId;

use super::entity::{Composable, EntityShape};

/// A player whose kick can be upgraded.
///
/// # Invariants
///
/// - `kick` is always an `Action::Kick`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    id: EntityId,
    name: EntityName,
    kick: Action,
}

/// Accepts only kicks; everything else is an invalid capability for the slot.
fn require_kick(capability: Capability) -> Result<Action, DomainError> {
    match capability {
        Capability::Action(action) if action.is_kick() => Ok(action),
        other => Err(DomainError::invalid_capability("kick", Some(&other))),
    }
}

impl Player {
    pub fn builder(name: EntityName) -> PlayerBuilder {
        PlayerBuilder::new(name)
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &EntityName {
        &self.name
    }

    /// Returns the currently equipped kick.
    #[inline]
    pub fn kick(&self) -> &Action {
        &self.kick
    }

    /// Kick using the current capability.
    pub fn perform(&self, sink: &mut dyn EffectSink) {
        self.kick.act(sink);
    }

    /// Replace the kick.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidCapability` if `capability` is not a kick; the
    /// player keeps the current kick.
    pub fn upgrade(&mut self, capability: Capability) -> Result<CompositionChange, DomainError> {
        let to = require_kick(capability)?;
        let from = std::mem::replace(&mut self.kick, to.clone());
        Ok(CompositionChange::KickUpgraded { from, to })
    }
}

impl Composable for Player {
    fn id(&self) -> EntityId {
        self.id
    }

    fn shape(&self) -> EntityShape {
        EntityShape::Slot
    }

    fn apply(&mut self, capability: Capability) -> Result<CompositionChange, DomainError> {
        self.upgrade(capability)
    }
}

/// Fallible builder enforcing the mandatory initial kick.
#[derive(Debug, Clone)]
pub struct PlayerBuilder {
    id: Option<EntityId>,
    name: EntityName,
    kick: Option<Capability>,
}

impl PlayerBuilder {
    pub fn new(name: EntityName) -> Self {
        Self {
            id: None,
            name,
            kick: None,
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn kick(mut self, capability: impl Into<Capability>) -> Self {
        self.kick = Some(capability.into());
        self
    }

    /// Set or clear the initial kick from an optional source (e.g. config data).
    pub fn maybe_kick(mut self, capability: Option<Capability>) -> Self {
        self.kick = capability;
        self
    }

    /// # Errors
    ///
    /// - `DomainError::IncompleteComposition` if no kick was supplied
    /// - `DomainError::InvalidCapability` if the supplied capability is not a kick
    pub fn build(self) -> Result<Player, DomainError> {
        let capability = self.kick.ok_or_else(|| {
            DomainError::incomplete_composition(EntityShape::Slot, CapabilityFamily::Action)
        })?;
        Ok(Player {
            id: self.id.unwrap_or_default(),
            name: self.name,
            kick: require_kick(capability)?,
        })
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Wire format for deserialization; the kick is checked before a `Player`
/// exists.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerWireFormat {
    id: EntityId,
    name: EntityName,
    kick: Action,
}

impl<'de> Deserialize<'de> for Player {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = PlayerWireFormat::deserialize(deserializer)?;
        PlayerBuilder::new(wire.name)
            .with_id(wire.id)
            .kick(wire.kick)
            .build()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::Locomotion;
    use crate::effects::Effect;

    fn kick(style: &str) -> Action {
        Action::kick(style).unwrap()
    }

    fn striker() -> Player {
        Player::builder(EntityName::new("Striker").unwrap())
            .kick(kick("basic"))
            .build()
            .unwrap()
    }

    mod constructor {
        use super::*;

        #[test]
        fn build_without_kick_fails() {
            let err = Player::builder(EntityName::new("Benchwarmer").unwrap())
                .maybe_kick(None)
                .build()
                .unwrap_err();
            assert!(matches!(
                err,
                DomainError::IncompleteComposition {
                    shape: EntityShape::Slot,
                    missing: CapabilityFamily::Action,
                }
            ));
        }

        #[test]
        fn build_with_non_kick_fails() {
            let err = Player::builder(EntityName::new("Confused").unwrap())
                .kick(Action::PuffUp)
                .build()
                .unwrap_err();
            assert!(matches!(err, DomainError::InvalidCapability { .. }));
        }

        #[test]
        fn perform_dispatches_to_initial_kick() {
            let player = striker();
            let mut effects: Vec<Effect> = Vec::new();
            player.perform(&mut effects);
            assert_eq!(effects, vec![Effect::Acted(kick("basic"))]);
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn round_trips_through_json() {
            let player = striker();
            let json = serde_json::to_string(&player).unwrap();
            let back: Player = serde_json::from_str(&json).unwrap();
            assert_eq!(back, player);
        }

        #[test]
        fn non_kick_in_slot_fails_to_deserialize() {
            let json = format!(
                r#"{{"id":"{}","name":"Imposter","kick":{{"kind":"puff_up"}}}}"#,
                EntityId::new()
            );
            let err = serde_json::from_str::<Player>(&json).unwrap_err();
            assert!(err.to_string().contains("expected kick"));
        }

        #[test]
        fn entity_enum_uses_the_same_check() {
            let json = format!(
                r#"{{"shape":"player","id":"{}","name":"Imposter","kick":{{"kind":"blow_bubble"}}}}"#,
                EntityId::new()
            );
            assert!(serde_json::from_str::<crate::aggregates::Entity>(&json).is_err());
        }
    }

    mod upgrade {
        use super::*;

        #[test]
        fn upgrade_swaps_and_returns_previous() {
            let mut player = striker();
            let change = player.upgrade(kick("bicycle").into()).unwrap();
            assert_eq!(
                change,
                CompositionChange::KickUpgraded {
                    from: kick("basic"),
                    to: kick("bicycle"),
                }
            );
            assert_eq!(player.kick(), &kick("bicycle"));
        }

        #[test]
        fn rejected_upgrade_keeps_current_kick() {
            let mut player = striker();
            let before = player.clone();

            let err = player.upgrade(Locomotion::Crawl.into()).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid capability: expected kick, found Crawl"
            );
            assert_eq!(player, before);
        }

        #[test]
        fn thousand_upgrades_only_expose_latest() {
            let mut player = striker();
            for i in 0..1_000 {
                let next = kick(&format!("style-{}", i));
                player.upgrade(next.clone().into()).unwrap();

                let mut effects: Vec<Effect> = Vec::new();
                player.perform(&mut effects);
                assert_eq!(effects, vec![Effect::Acted(next)]);
            }
        }

        #[test]
        fn apply_delegates_to_upgrade() {
            let mut player = striker();
            player.apply(kick("scorpion").into()).unwrap();
            assert_eq!(player.kick(), &kick("scorpion"));
            assert!(player.apply(crate::capabilities::Resource::Pearl.into()).is_err());
        }
    }
}
