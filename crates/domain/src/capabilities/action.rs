//! Action family - situational behaviors, including a player's kick.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::effects::{Effect, EffectSink};
use crate::error::DomainError;
use crate::value_objects::AnimationName;

/// An action capability.
///
/// `Kick` is the replaceable capability held by a player; the others are
/// creature behaviors. Any action may be held by a creature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    BlowBubble,
    PuffUp,
    ChangeColor { color: String },
    Kick { animation: AnimationName },
}

impl Action {
    pub fn change_color(color: impl Into<String>) -> Self {
        Self::ChangeColor {
            color: color.into(),
        }
    }

    /// Build a kick with the given animation style.
    pub fn kick(animation: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::Kick {
            animation: AnimationName::new(animation)?,
        })
    }

    pub fn is_kick(&self) -> bool {
        matches!(self, Self::Kick { .. })
    }

    /// Perform this action.
    pub fn act(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::Acted(self.clone()));
    }

    pub fn narration(&self) -> String {
        match self {
            Self::BlowBubble => "blows a bubble".to_string(),
            Self::PuffUp => "puffs up".to_string(),
            Self::ChangeColor { color } => format!("turns {}", color),
            Self::Kick { animation } => format!("kicks with a {} animation", animation),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlowBubble => write!(f, "BlowBubble"),
            Self::PuffUp => write!(f, "PuffUp"),
            Self::ChangeColor { color } => write!(f, "ChangeColor({})", color),
            Self::Kick { animation } => write!(f, "Kick({})", animation),
        }
    }
}
