//=========================================================================
// Fade
//=========================================================================
//
// Interpolates a shared opacity on the standard tick.
//
//=========================================================================

use serde::{Deserialize, Serialize};

use super::{ProcessControl, ProcessHooks, Shared};

//=== FadeParameters ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeParameters {
    /// Opacity written on start and on reset.
    pub from: f32,
    /// Opacity written on end.
    pub to: f32,
    /// Seconds. Non-positive durations end on the first update.
    pub duration: f32,
}

impl Default for FadeParameters {
    fn default() -> Self {
        Self { from: 0.0, to: 1.0, duration: 0.5 }
    }
}

//=== Fade ================================================================

/// Fades a shared opacity value from `from` to `to`.
#[derive(Debug)]
pub struct Fade {
    target: Shared<f32>,
    parameters: FadeParameters,
    elapsed: f32,
}

impl Fade {
    pub fn new(target: Shared<f32>, parameters: FadeParameters) -> Self {
        Self { target, parameters, elapsed: 0.0 }
    }

    /// Fade from transparent to opaque.
    pub fn fade_in(target: Shared<f32>, duration: f32) -> Self {
        Self::new(target, FadeParameters { from: 0.0, to: 1.0, duration })
    }

    /// Fade from opaque to transparent.
    pub fn fade_out(target: Shared<f32>, duration: f32) -> Self {
        Self::new(target, FadeParameters { from: 1.0, to: 0.0, duration })
    }

    pub fn parameters(&self) -> FadeParameters {
        self.parameters
    }

    fn progress(&self) -> f32 {
        if self.parameters.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.parameters.duration).clamp(0.0, 1.0)
        }
    }
}

impl ProcessHooks for Fade {
    fn on_start(&mut self) {
        self.elapsed = 0.0;
        self.target.set(self.parameters.from);
    }

    fn on_update(&mut self, dt: f32) -> ProcessControl {
        self.elapsed += dt.max(0.0);

        let FadeParameters { from, to, .. } = self.parameters;
        let t = self.progress();
        self.target.set(from + (to - from) * t);

        if t >= 1.0 {
            ProcessControl::End
        } else {
            ProcessControl::Continue
        }
    }

    fn on_end(&mut self) {
        self.target.set(self.parameters.to);
    }

    fn reset(&mut self) {
        self.elapsed = 0.0;
        self.target.set(self.parameters.from);
    }
}

//=========================================================================
// Tests
//=========================================================================
