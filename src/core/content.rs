//=========================================================================
// Presentation Content
//=========================================================================
//
// One slide: a fixed batch of content processes started together.
//
// Architecture:
//   PresentationContent
//     ├─ processes: Vec<ContentProcess>   (configured, ordered)
//     └─ active: Vec<usize>               (indices, started and not yet
//                                          observed Ended)
//
// Flow:
//   start_transitions() → update_transitions() ... → prune Ended
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::diagnostics::{log_sink, Diagnostic, SharedSink};
use crate::core::process::{ContentProcess, ProcessState};

//=== PresentationContent =================================================

/// Coordinates a batch of [`ContentProcess`]es as one slide.
///
/// Only active processes receive per-frame calls. A process leaves the
/// active set once this content observes it in [`ProcessState::Ended`].
#[derive(Debug)]
pub struct PresentationContent {
    name: String,
    processes: Vec<ContentProcess>,
    active: Vec<usize>,
}

impl PresentationContent {
    //--- Construction -----------------------------------------------------

    /// Composes a content, warning through the `log` facade when it has no
    /// process.
    pub fn new(name: impl Into<String>, processes: Vec<ContentProcess>) -> Self {
        Self::with_sink(name, processes, log_sink())
    }

    /// Composes a content, reporting an empty process list to `sink`.
    ///
    /// An empty content stays usable; every operation is a no-op.
    pub fn with_sink(
        name: impl Into<String>,
        processes: Vec<ContentProcess>,
        sink: SharedSink,
    ) -> Self {
        let name = name.into();
        if processes.is_empty() {
            sink.report(Diagnostic::EmptyContent { content: name.clone() });
        }

        Self {
            name,
            active: Vec::with_capacity(processes.len()),
            processes,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether any process is still active.
    pub fn is_transiting(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn processes(&self) -> &[ContentProcess] {
        &self.processes
    }

    pub fn process(&self, index: usize) -> Option<&ContentProcess> {
        self.processes.get(index)
    }

    /// Iterates over the currently active processes, in configuration order.
    pub fn active_processes(&self) -> impl Iterator<Item = &ContentProcess> + '_ {
        self.active.iter().map(move |&i| &self.processes[i])
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    //--- Lifecycle --------------------------------------------------------

    /// Starts every configured process.
    ///
    /// Does nothing while the content is already transiting, so the same
    /// slide cannot be activated twice on top of itself.
    pub fn start_transitions(&mut self) {
        if self.is_transiting() {
            debug!("Content {:?} is already transiting, skipping start", self.name);
            return;
        }

        debug!("Starting {} transitions of content {:?}", self.processes.len(), self.name);
        self.active.extend(0..self.processes.len());
        for process in &mut self.processes {
            process.start_process();
        }
    }

    /// Forwards a standard tick to active processes.
    pub fn update_transitions(&mut self, dt: f32) {
        let processes = &mut self.processes;
        self.active.retain(|&i| {
            let process = &mut processes[i];
            process.update_process(dt);
            process.state() != ProcessState::Ended
        });
    }

    /// Forwards a fixed tick to active processes.
    pub fn fixed_update_transitions(&mut self, dt: f32) {
        let processes = &mut self.processes;
        self.active.retain(|&i| {
            let process = &mut processes[i];
            process.fixed_update_process(dt);
            process.state() != ProcessState::Ended
        });
    }

    /// Sets transitions to their end state.
    ///
    /// While transiting only the active processes are forced (each one
    /// still honoring its own policy). Otherwise every configured process
    /// is forced, which covers contents skipped without ever being started.
    pub fn force_end_transitions(&mut self) {
        if self.is_transiting() {
            let processes = &mut self.processes;
            self.active.retain(|&i| {
                let process = &mut processes[i];
                process.end_process();
                process.state() != ProcessState::Ended
            });
        } else {
            for process in &mut self.processes {
                process.end_process();
            }
        }
    }

    /// Resets every process to its original state and discards any active
    /// transition.
    pub fn reset_transitions(&mut self) {
        debug!("Resetting content {:?}", self.name);
        for process in &mut self.processes {
            process.reset();
        }
        self.active.clear();
    }
}

//=========================================================================
// Tests
//=========================================================================
