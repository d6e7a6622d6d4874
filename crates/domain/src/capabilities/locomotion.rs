//! Locomotion family - how an entity gets around.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::effects::{Effect, EffectSink};

/// How fast a swimmer moves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwimPace {
    #[default]
    Normal,
    Fast,
}

/// A locomotion capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Locomotion {
    Swim {
        #[serde(default)]
        pace: SwimPace,
    },
    Crawl,
    Stationary,
}

impl Locomotion {
    pub fn swim() -> Self {
        Self::Swim {
            pace: SwimPace::Normal,
        }
    }

    pub fn swim_fast() -> Self {
        Self::Swim {
            pace: SwimPace::Fast,
        }
    }

    /// Move using this mode of locomotion.
    pub fn locomote(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::Moved(self.clone()));
    }

    /// What the entity visibly does when it moves.
    pub fn narration(&self) -> &'static str {
        match self {
            Self::Swim {
                pace: SwimPace::Normal,
            } => "swims along",
            Self::Swim {
                pace: SwimPace::Fast,
            } => "darts through the water",
            Self::Crawl => "crawls across the seabed",
            Self::Stationary => "stays anchored in place",
        }
    }
}

impl fmt::Display for Locomotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swim {
                pace: SwimPace::Normal,
            } => write!(f, "Swim"),
            Self::Swim {
                pace: SwimPace::Fast,
            } => write!(f, "SwimFast"),
            Self::Crawl => write!(f, "Crawl"),
            Self::Stationary => write!(f, "Stationary"),
        }
    }
}
