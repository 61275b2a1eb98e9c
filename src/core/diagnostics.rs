//=========================================================================
// Diagnostics
//=========================================================================
//
// Advisory warnings raised by the presentation core.
//
// Architecture:
//   ContentProcess / PresentationContent / Presentation
//        └─ report(Diagnostic) ──> SharedSink (Rc<dyn DiagnosticSink>)
//                                     ├─ LogSink       → log::warn!
//                                     └─ RecordingSink → Vec<Diagnostic>
//
// Diagnostics are never fatal: the reporting call always continues.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use thiserror::Error;

//=== Diagnostic ==========================================================

/// Recoverable condition observed by the presentation core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A process was started while already started.
    #[error("{process}: cannot start content process, it has already been started")]
    RedundantStart { process: String },

    /// A process was ended while already ended.
    #[error("{process}: cannot end content process, it has already been ended")]
    RedundantEnd { process: String },

    /// A content was composed without any process.
    #[error("{content}: has no content process to use")]
    EmptyContent { content: String },

    /// A presentation was composed without any content.
    #[error("presentation has no slide to work with")]
    EmptyPresentation,
}

//=== DiagnosticSink ======================================================

/// Receiver for advisory diagnostics.
///
/// Injected into every core object so the core never depends on a
/// concrete logging backend.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Shared handle to a sink. The core is single-threaded.
pub type SharedSink = Rc<dyn DiagnosticSink>;

//=== LogSink =============================================================

/// Default sink forwarding every diagnostic to `log::warn!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
    }
}

/// Returns a fresh shared [`LogSink`].
pub fn log_sink() -> SharedSink {
    Rc::new(LogSink)
}

//=== RecordingSink =======================================================

/// Sink that keeps every reported diagnostic in memory.
///
/// Meant for hosts (and tests) that assert on warnings without a live
/// logging backend.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all diagnostics reported so far.
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Counts diagnostics matching the predicate.
    pub fn count(&self, predicate: impl Fn(&Diagnostic) -> bool) -> usize {
        self.records.borrow().iter().filter(|d| predicate(d)).count()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.records.borrow_mut().push(diagnostic);
    }
}

//=========================================================================
// Tests
//=========================================================================
