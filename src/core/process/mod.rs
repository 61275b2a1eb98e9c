//=========================================================================
// Content Processes
//=========================================================================
//
// A content process is a single transition bound to a slide: fading a
// canvas item, moving an object, and so on. It only receives per-frame
// calls while its owning content keeps it active.
//
// Architecture:
//   ContentProcess
//     ├─ state: ProcessState        (Inactive → Started → Ended)
//     ├─ parameters: ProcessParameters
//     └─ hooks: Box<dyn ProcessHooks> (Fade, Motion, user types...)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

//=== Module Declarations =================================================

mod content_process;
pub mod fade;
pub mod motion;

//=== Public API ==========================================================

pub use content_process::ContentProcess;
pub use fade::{Fade, FadeParameters};
pub use motion::{Motion, MotionParameters};

/// Handle to a value owned by the host scene and mutated by a process.
pub type Shared<T> = Rc<Cell<T>>;

/// Creates a new [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(Cell::new(value))
}

//=== ProcessState ========================================================

/// Lifecycle state of a content process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcessState {
    /// Never started, or reset since.
    #[default]
    Inactive,

    /// Started and not yet ended.
    Started,

    /// Ended, either forced or self-terminated.
    Ended,
}

//=== ProcessControl ======================================================

/// Returned by per-frame hooks to tell the owning process whether its
/// own logic has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessControl {
    #[default]
    Continue,
    End,
}

//=== ProcessParameters ===================================================

/// Per-process configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessParameters {
    /// Whether an external forced end (skip) is honored.
    pub can_be_forced_to_end: bool,
}

impl Default for ProcessParameters {
    fn default() -> Self {
        Self { can_be_forced_to_end: true }
    }
}

//=== ProcessHooks ========================================================

/// Behavior of a concrete transition.
///
/// Only the lifecycle edges are required. Per-frame hooks default to doing
/// nothing and never ending on their own.
///
/// ```rust
/// # use aetheric_presentation::prelude::*;
/// struct Blink { visible: Shared<bool> }
///
/// impl ProcessHooks for Blink {
///     fn on_start(&mut self) { self.visible.set(false); }
///     fn on_update(&mut self, _dt: f32) -> ProcessControl { ProcessControl::End }
///     fn on_end(&mut self) { self.visible.set(true); }
///     fn reset(&mut self) { self.visible.set(false); }
/// }
/// ```
pub trait ProcessHooks {
    /// Called when the process is started.
    fn on_start(&mut self);

    /// Called on every standard tick while the process is active.
    fn on_update(&mut self, _dt: f32) -> ProcessControl {
        ProcessControl::Continue
    }

    /// Called on every fixed tick while the process is active.
    ///
    /// Use for anything that must be stepped at a constant rate.
    fn on_fixed_update(&mut self, _dt: f32) -> ProcessControl {
        ProcessControl::Continue
    }

    /// Called when the process ends. Must leave the target at its end state.
    fn on_end(&mut self);

    /// Restores the target to its pre-start appearance.
    fn reset(&mut self);
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(ProcessState::default(), ProcessState::Inactive);
        assert_eq!(ProcessControl::default(), ProcessControl::Continue);
        assert!(ProcessParameters::default().can_be_forced_to_end);
    }

    #[test]
    fn parameters_deserialize_with_defaults() {
        let params: ProcessParameters = serde_json::from_str("{}").unwrap();
        assert!(params.can_be_forced_to_end);

        let params: ProcessParameters =
            serde_json::from_str(r#"{ "can_be_forced_to_end": false }"#).unwrap();
        assert!(!params.can_be_forced_to_end);
    }

    #[test]
    fn shared_handle_is_visible_to_both_sides() {
        let opacity = shared(0.0_f32);
        let process_side = opacity.clone();
        process_side.set(0.5);
        assert_eq!(opacity.get(), 0.5);
    }
}
