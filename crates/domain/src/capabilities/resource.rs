//! Resource family - what can be harvested from an entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::effects::{Effect, EffectSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resource {
    Pearl,
    Shell,
    FishFillet,
}

impl Resource {
    /// Harvest this resource.
    pub fn collect(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::Collected(*self));
    }

    pub fn narration(&self) -> &'static str {
        match self {
            Self::Pearl => "yields a pearl",
            Self::Shell => "yields a shell",
            Self::FishFillet => "yields a fish fillet",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pearl => write!(f, "Pearl"),
            Self::Shell => write!(f, "Shell"),
            Self::FishFillet => write!(f, "FishFillet"),
        }
    }
}
