//! Effect sink that reports dispatched behavior through `tracing`.

use reefkick_domain::{Effect, EffectSink};

/// Production sink: every effect becomes an `info` event.
///
/// Rendering would replace this; the domain only knows the `EffectSink` trait.
#[derive(Debug, Default)]
pub struct TracingEffectSink {
    emitted: usize,
}

impl TracingEffectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of effects seen so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl EffectSink for TracingEffectSink {
    fn emit(&mut self, effect: Effect) {
        self.emitted += 1;
        tracing::info!(effect = ?effect, "{}", effect.narration());
    }
}
