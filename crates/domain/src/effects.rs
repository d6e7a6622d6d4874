//! Effects - the observable output of dispatching a capability.
//!
//! Capabilities return nothing; each dispatch writes one `Effect` into the
//! `EffectSink` the caller provides. Rendering, animation and scoring live
//! behind the sink.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::capabilities::{Action, Locomotion, Resource};

/// One dispatched behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    Moved(Locomotion),
    Acted(Action),
    Collected(Resource),
    BallKicked { color: String },
}

impl Effect {
    pub fn narration(&self) -> String {
        match self {
            Self::Moved(locomotion) => locomotion.narration().to_string(),
            Self::Acted(action) => action.narration(),
            Self::Collected(resource) => resource.narration().to_string(),
            Self::BallKicked { color } => format!("the {} ball flies", color),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.narration())
    }
}

/// Receives the effects of capability dispatch.
#[cfg_attr(test, mockall::automock)]
pub trait EffectSink {
    fn emit(&mut self, effect: Effect);
}

/// Collecting effects into a `Vec` keeps them in emission order.
impl EffectSink for Vec<Effect> {
    fn emit(&mut self, effect: Effect) {
        self.push(effect);
    }
}
