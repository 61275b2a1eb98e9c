//=========================================================================
// Presentation
//=========================================================================
//
// Ordered collection of slides plus per-frame forwarding to whichever
// slides are currently transitioning.
//
// Architecture:
//   Presentation
//     ├─ contents: Vec<PresentationContent>
//     ├─ active: Vec<usize>     (transitioning contents, activation order)
//     └─ current: Option<usize> (navigation cursor)
//
// Flow:
//   tick(kind, dt) → forward to active contents → prune idle contents
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::content::PresentationContent;
use crate::core::diagnostics::{log_sink, Diagnostic, SharedSink};
use crate::core::error::{PresentationError, Result};

//=== Module Declarations =================================================

mod navigation;

//=== Public API ==========================================================

pub use navigation::{NavigationCommand, NavigationOutcome};

//=== TickKind ============================================================

/// The two per-frame callbacks a host provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickKind {
    /// Once per rendered frame.
    Standard,
    /// Once per fixed-rate step.
    Fixed,
}

//=== Presentation ========================================================

/// Slides and the frame forwarding for those currently transitioning.
///
/// The presentation is passive: the host drives it through [`tick`]
/// (directly, or via a [`Player`](crate::Player)).
///
/// [`tick`]: Presentation::tick
#[derive(Debug)]
pub struct Presentation {
    contents: Vec<PresentationContent>,
    active: Vec<usize>,
    current: Option<usize>,
}

impl Presentation {
    //--- Construction -----------------------------------------------------

    /// Composes a presentation, warning through the `log` facade when it
    /// has no content.
    pub fn new(contents: Vec<PresentationContent>) -> Self {
        Self::with_sink(contents, log_sink())
    }

    /// Composes a presentation, reporting an empty content list to `sink`.
    ///
    /// A presentation without slides remains operable: ticks forward
    /// nothing and navigation reports the bounds.
    pub fn with_sink(contents: Vec<PresentationContent>, sink: SharedSink) -> Self {
        if contents.is_empty() {
            sink.report(Diagnostic::EmptyPresentation);
        }

        Self {
            contents,
            active: Vec::new(),
            current: None,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn contents(&self) -> &[PresentationContent] {
        &self.contents
    }

    pub fn content(&self, index: usize) -> Option<&PresentationContent> {
        self.contents.get(index)
    }

    pub fn content_mut(&mut self, index: usize) -> Option<&mut PresentationContent> {
        self.contents.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// The slide the navigation cursor is on, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Indices of the contents receiving frame ticks, in activation order.
    pub fn active_contents(&self) -> &[usize] {
        &self.active
    }

    pub fn is_content_active(&self, index: usize) -> bool {
        self.active.contains(&index)
    }

    /// Whether any content is receiving frame ticks.
    pub fn is_transiting(&self) -> bool {
        !self.active.is_empty()
    }

    //--- Transitioning Set ------------------------------------------------

    /// Adds a content to the transitioning set.
    pub fn activate(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if !self.active.contains(&index) {
            debug!("Activating content {} ({:?})", index, self.contents[index].name());
            self.active.push(index);
        }
        Ok(())
    }

    /// Removes a content from the transitioning set.
    pub fn deactivate(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if let Some(pos) = self.active.iter().position(|&i| i == index) {
            debug!("Deactivating content {} ({:?})", index, self.contents[index].name());
            self.active.remove(pos);
        }
        Ok(())
    }

    //--- Update Loop ------------------------------------------------------

    /// Forwards one host tick to every transitioning content.
    ///
    /// Contents that stop transiting during the tick leave the set.
    pub fn tick(&mut self, kind: TickKind, dt: f32) {
        if self.active.is_empty() {
            return;
        }

        let contents = &mut self.contents;
        self.active.retain(|&i| {
            let content = &mut contents[i];
            match kind {
                TickKind::Standard => content.update_transitions(dt),
                TickKind::Fixed => content.fixed_update_transitions(dt),
            }
            content.is_transiting()
        });
    }

    /// Standard tick shorthand.
    pub fn update(&mut self, dt: f32) {
        self.tick(TickKind::Standard, dt);
    }

    /// Fixed tick shorthand.
    pub fn fixed_update(&mut self, dt: f32) {
        self.tick(TickKind::Fixed, dt);
    }

    //--- Internal Helpers -------------------------------------------------

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.contents.len() {
            Ok(())
        } else {
            Err(PresentationError::ContentOutOfRange {
                index,
                len: self.contents.len(),
            })
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
