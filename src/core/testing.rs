//=========================================================================
// Test Doubles
//=========================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::core::diagnostics::{Diagnostic, RecordingSink, SharedSink};
use crate::core::process::{ContentProcess, ProcessControl, ProcessHooks, ProcessParameters};

/// Hook call counters shared between a `Probe` and the test body.
#[derive(Debug, Default)]
pub struct ProbeCalls {
    pub starts: Cell<u32>,
    pub updates: Cell<u32>,
    pub fixed_updates: Cell<u32>,
    pub ends: Cell<u32>,
    pub resets: Cell<u32>,
}

/// Hooks that count calls and optionally end themselves after a number
/// of standard or fixed updates.
pub struct Probe {
    calls: Rc<ProbeCalls>,
    end_after_updates: Option<u32>,
    end_after_fixed_updates: Option<u32>,
}

impl Probe {
    pub fn new() -> (Self, Rc<ProbeCalls>) {
        let calls = Rc::new(ProbeCalls::default());
        let probe = Self {
            calls: calls.clone(),
            end_after_updates: None,
            end_after_fixed_updates: None,
        };
        (probe, calls)
    }

    pub fn ending_after(updates: u32) -> (Self, Rc<ProbeCalls>) {
        let (mut probe, calls) = Self::new();
        probe.end_after_updates = Some(updates);
        (probe, calls)
    }

    pub fn ending_after_fixed(fixed_updates: u32) -> (Self, Rc<ProbeCalls>) {
        let (mut probe, calls) = Self::new();
        probe.end_after_fixed_updates = Some(fixed_updates);
        (probe, calls)
    }
}

fn bump(counter: &Cell<u32>) {
    counter.set(counter.get() + 1);
}

impl ProcessHooks for Probe {
    fn on_start(&mut self) {
        bump(&self.calls.starts);
    }

    fn on_update(&mut self, _dt: f32) -> ProcessControl {
        bump(&self.calls.updates);
        match self.end_after_updates {
            Some(limit) if self.calls.updates.get() >= limit => ProcessControl::End,
            _ => ProcessControl::Continue,
        }
    }

    fn on_fixed_update(&mut self, _dt: f32) -> ProcessControl {
        bump(&self.calls.fixed_updates);
        match self.end_after_fixed_updates {
            Some(limit) if self.calls.fixed_updates.get() >= limit => ProcessControl::End,
            _ => ProcessControl::Continue,
        }
    }

    fn on_end(&mut self) {
        bump(&self.calls.ends);
    }

    fn reset(&mut self) {
        bump(&self.calls.resets);
    }
}

/// Recording sink plus its shared-sink view.
pub fn recording() -> (Rc<RecordingSink>, SharedSink) {
    let recording = Rc::new(RecordingSink::new());
    let shared: SharedSink = recording.clone();
    (recording, shared)
}

/// Builds a probed process reporting into `sink`.
pub fn probed_process(
    name: &str,
    can_be_forced_to_end: bool,
    sink: &SharedSink,
) -> (ContentProcess, Rc<ProbeCalls>) {
    let (probe, calls) = Probe::new();
    let process = ContentProcess::new(name, probe)
        .with_parameters(ProcessParameters { can_be_forced_to_end })
        .with_sink(sink.clone());
    (process, calls)
}

pub fn is_redundant_start(d: &Diagnostic) -> bool {
    matches!(d, Diagnostic::RedundantStart { .. })
}

pub fn is_redundant_end(d: &Diagnostic) -> bool {
    matches!(d, Diagnostic::RedundantEnd { .. })
}
