//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_presentation::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Player
pub use crate::player::{Player, PlayerBuilder, PlayerRemote};

// Presentation and slides
pub use crate::core::content::PresentationContent;
pub use crate::core::presentation::{NavigationCommand, NavigationOutcome, Presentation, TickKind};

// Content processes
pub use crate::core::process::{
    shared, ContentProcess, Fade, FadeParameters, Motion, MotionParameters, ProcessControl,
    ProcessHooks, ProcessParameters, ProcessState, Shared,
};

// Diagnostics and errors
pub use crate::core::diagnostics::{Diagnostic, DiagnosticSink, LogSink, RecordingSink, SharedSink};
pub use crate::core::error::PresentationError;
