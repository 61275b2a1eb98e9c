//=========================================================================
// Content Process
//=========================================================================
//
// Lifecycle wrapper around a `ProcessHooks` implementation.
//
// State machine:
//   Inactive ──start_process()──> Started ──end()──> Ended
//      ^                                               │
//      └──────────────────── reset() ─────────────────┘
//
// Redundant starts and ends are reported to the sink and otherwise
// ignored.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{ProcessControl, ProcessHooks, ProcessParameters, ProcessState};
use crate::core::diagnostics::{log_sink, Diagnostic, SharedSink};

//=== ContentProcess ======================================================

/// A single transition with a three-state lifecycle.
///
/// The owning [`PresentationContent`](crate::core::content::PresentationContent)
/// is responsible for only forwarding per-frame calls while the process
/// is active.
pub struct ContentProcess {
    name: String,
    parameters: ProcessParameters,
    state: ProcessState,
    hooks: Box<dyn ProcessHooks>,
    sink: SharedSink,
}

impl ContentProcess {
    //--- Construction -----------------------------------------------------

    /// Creates an inactive process with default parameters, reporting
    /// diagnostics through the `log` facade.
    pub fn new<H>(name: impl Into<String>, hooks: H) -> Self
    where
        H: ProcessHooks + 'static,
    {
        Self {
            name: name.into(),
            parameters: ProcessParameters::default(),
            state: ProcessState::Inactive,
            hooks: Box::new(hooks),
            sink: log_sink(),
        }
    }

    /// Replaces the process parameters.
    pub fn with_parameters(mut self, parameters: ProcessParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Replaces the diagnostic sink.
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    //--- Queries ----------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn parameters(&self) -> ProcessParameters {
        self.parameters
    }

    pub fn can_be_forced_to_end(&self) -> bool {
        self.parameters.can_be_forced_to_end
    }

    //--- Lifecycle --------------------------------------------------------

    /// Starts the process.
    ///
    /// A process that is already started is left untouched and a
    /// [`Diagnostic::RedundantStart`] is reported. An ended process may be
    /// started again.
    pub fn start_process(&mut self) {
        if self.state == ProcessState::Started {
            self.sink.report(Diagnostic::RedundantStart { process: self.name.clone() });
            return;
        }

        debug!("Starting content process {:?}", self.name);
        self.state = ProcessState::Started;
        self.hooks.on_start();
    }

    /// Forwards a standard tick to the hooks, regardless of state.
    pub fn update_process(&mut self, dt: f32) {
        if let ProcessControl::End = self.hooks.on_update(dt) {
            self.end();
        }
    }

    /// Forwards a fixed tick to the hooks, regardless of state.
    pub fn fixed_update_process(&mut self, dt: f32) {
        if let ProcessControl::End = self.hooks.on_fixed_update(dt) {
            self.end();
        }
    }

    /// Ends the process from the outside, if its parameters allow it.
    pub fn end_process(&mut self) {
        if self.parameters.can_be_forced_to_end {
            self.end();
        } else {
            debug!("Content process {:?} cannot be forced to end", self.name);
        }
    }

    /// Restores the target to its pre-start appearance and the state to
    /// [`ProcessState::Inactive`], so the process can be started again.
    pub fn reset(&mut self) {
        self.hooks.reset();
        self.state = ProcessState::Inactive;
    }

    //--- Internal Helpers -------------------------------------------------

    fn end(&mut self) {
        if self.state == ProcessState::Ended {
            self.sink.report(Diagnostic::RedundantEnd { process: self.name.clone() });
            return;
        }

        debug!("Ending content process {:?}", self.name);
        self.state = ProcessState::Ended;
        self.hooks.on_end();
    }
}

impl fmt::Debug for ContentProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentProcess")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Tests
//=========================================================================
