//=========================================================================
// Presentation Core
//
// Frame-driven slide lifecycle, independent of any host engine.
//
// Responsibilities:
// - Run each transition through Inactive → Started → Ended
// - Group transitions into slides and track which ones are active
// - Forward host ticks only to what is currently transitioning
// - Move between slides on navigation requests
//
// Notes:
// Everything here is single-threaded and passive. The host (or the
// `Player`) owns the frame loop and calls in once per tick.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod content;
pub mod diagnostics;
pub mod error;
pub mod presentation;
pub mod process;

#[cfg(test)]
pub(crate) mod testing;

//=== Public API ==========================================================

pub use content::PresentationContent;
pub use diagnostics::{log_sink, Diagnostic, DiagnosticSink, LogSink, RecordingSink, SharedSink};
pub use error::PresentationError;
pub use presentation::{NavigationCommand, NavigationOutcome, Presentation, TickKind};
pub use process::{
    shared, ContentProcess, Fade, FadeParameters, Motion, MotionParameters, ProcessControl,
    ProcessHooks, ProcessParameters, ProcessState, Shared,
};
