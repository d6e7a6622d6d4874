//! Ball aggregate - the shared kickable object of a session

use serde::{Deserialize, Serialize};

use crate::effects::{Effect, EffectSink};

/// A game ball. Its kick is independent of any entity capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    color: String,
}

impl Ball {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    /// The standard purple kickball.
    pub fn purple() -> Self {
        Self::new("purple")
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn kick(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::BallKicked {
            color: self.color.clone(),
        });
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::purple()
    }
}
