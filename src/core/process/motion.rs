//=========================================================================
// Motion
//=========================================================================
//
// Moves a shared position between two points. Stepped on the fixed tick
// so the path does not depend on the rendering frame rate.
//
//=========================================================================

use serde::{Deserialize, Serialize};
use vek::{Lerp, Vec3};

use super::{ProcessControl, ProcessHooks, Shared};

//=== MotionParameters ====================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParameters {
    pub from: Vec3<f32>,
    pub to: Vec3<f32>,
    /// Seconds. Non-positive durations end on the first fixed update.
    pub duration: f32,
}

impl Default for MotionParameters {
    fn default() -> Self {
        Self {
            from: Vec3::zero(),
            to: Vec3::zero(),
            duration: 1.0,
        }
    }
}

//=== Motion ==============================================================

/// Linear move of a shared position.
#[derive(Debug)]
pub struct Motion {
    target: Shared<Vec3<f32>>,
    parameters: MotionParameters,
    elapsed: f32,
}

impl Motion {
    pub fn new(target: Shared<Vec3<f32>>, parameters: MotionParameters) -> Self {
        Self { target, parameters, elapsed: 0.0 }
    }

    pub fn parameters(&self) -> MotionParameters {
        self.parameters
    }
}

impl ProcessHooks for Motion {
    fn on_start(&mut self) {
        self.elapsed = 0.0;
        self.target.set(self.parameters.from);
    }

    fn on_fixed_update(&mut self, dt: f32) -> ProcessControl {
        self.elapsed += dt.max(0.0);

        let t = if self.parameters.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.parameters.duration).min(1.0)
        };
        self.target.set(Lerp::lerp(self.parameters.from, self.parameters.to, t));

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
