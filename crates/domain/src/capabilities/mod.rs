//! Capability families.
//!
//! A capability is a stateless unit of behavior belonging to exactly one
//! family. Each family has a single operation:
//!
//! | Family       | Operation  |
//! |--------------|------------|
//! | `Locomotion` | `locomote` |
//! | `Action`     | `act`      |
//! | `Resource`   | `collect`  |
//!
//! Entities hold family values directly and dispatch through the family
//! operation, so a new variant only touches its family module.

mod action;
mod locomotion;
mod resource;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::effects::EffectSink;

pub use action::Action;
pub use locomotion::{Locomotion, SwimPace};
pub use resource::Resource;

/// Family tag of a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityFamily {
    Locomotion,
    Action,
    Resource,
}

impl fmt::Display for CapabilityFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locomotion => write!(f, "locomotion"),
            Self::Action => write!(f, "action"),
            Self::Resource => write!(f, "resource"),
        }
    }
}

/// A capability from any family.
///
/// Serialized as an internally tagged object, e.g.
/// `{"family":"locomotion","kind":"swim","pace":"fast"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Capability {
    Locomotion(Locomotion),
    Action(Action),
    Resource(Resource),
}

impl Capability {
    pub fn family(&self) -> CapabilityFamily {
        match self {
            Self::Locomotion(_) => CapabilityFamily::Locomotion,
            Self::Action(_) => CapabilityFamily::Action,
            Self::Resource(_) => CapabilityFamily::Resource,
        }
    }

    /// Run the family operation of this capability.
    pub fn dispatch(&self, sink: &mut dyn EffectSink) {
        match self {
            Self::Locomotion(locomotion) => locomotion.locomote(sink),
            Self::Action(action) => action.act(sink),
            Self::Resource(resource) => resource.collect(sink),
        }
    }
}

impl From<Locomotion> for Capability {
    fn from(value: Locomotion) -> Self {
        Self::Locomotion(value)
    }
}

impl From<Action> for Capability {
    fn from(value: Action) -> Self {
        Self::Action(value)
    }
}

impl From<Resource> for Capability {
    fn from(value: Resource) -> Self {
        Self::Resource(value)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locomotion(locomotion) => write!(f, "{}", locomotion),
            Self::Action(action) => write!(f, "{}", action),
            Self::Resource(resource) => write!(f, "{}", resource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Effect;

    #[test]
    fn family_matches_variant() {
        assert_eq!(
            Capability::from(Locomotion::Crawl).family(),
            CapabilityFamily::Locomotion
        );
        assert_eq!(
            Capability::from(Action::PuffUp).family(),
            CapabilityFamily::Action
        );
        assert_eq!(
            Capability::from(Resource::Shell).family(),
            CapabilityFamily::Resource
        );
    }

    #[test]
    fn dispatch_runs_family_operation() {
        let mut effects: Vec<Effect> = Vec::new();
        Capability::from(Locomotion::swim_fast()).dispatch(&mut effects);
        Capability::from(Action::PuffUp).dispatch(&mut effects);
        Capability::from(Resource::Pearl).dispatch(&mut effects);
        assert_eq!(
            effects,
            vec![
                Effect::Moved(Locomotion::swim_fast()),
                Effect::Acted(Action::PuffUp),
                Effect::Collected(Resource::Pearl),
            ]
        );
    }

    #[test]
    fn same_variant_is_interchangeable() {
        assert_eq!(
            Capability::from(Action::change_color("red")),
            Capability::from(Action::change_color("red"))
        );
    }

    mod serde {
        use super::*;

        #[test]
        fn nested_tags_serialize_flat() {
            let json = serde_json::to_value(Capability::from(Locomotion::swim_fast())).unwrap();
            assert_eq!(
                json,
                serde_json::json!({"family": "locomotion", "kind": "swim", "pace": "fast"})
            );
        }

        #[test]
        fn deserialize_kick_action() {
            let cap: Capability = serde_json::from_str(
                r#"{"family":"action","kind":"kick","animation":"bicycle"}"#,
            )
            .unwrap();
            assert_eq!(cap, Capability::from(Action::kick("bicycle").unwrap()));
        }

        #[test]
        fn unknown_family_is_rejected() {
            let result =
                serde_json::from_str::<Capability>(r#"{"family":"flight","kind":"soar"}"#);
            assert!(result.is_err());
        }
    }
}
