//=========================================================================
// Navigation
//=========================================================================
//
// Moves the presentation cursor back and forth between slides.
//
// Invariants kept by every command:
// - slides after the cursor are untouched or reset (never mid-transition)
// - slides before the cursor are forced to their end state; processes that
//   cannot be forced to end keep running until they end themselves
// - the entered slide has started its transitions and is active
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::Presentation;
use crate::core::error::Result;

//=== NavigationCommand ===================================================

/// Slide navigation requests, typically bound to host input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationCommand {
    /// Skip the running transitions, or advance to the following slide.
    Next,

    /// Reset the current slide and step back.
    Previous,

    /// Jump to a slide and play its transitions.
    GoTo(usize),

    /// Reset every slide and clear the cursor.
    Restart,
}

//=== NavigationOutcome ===================================================

/// What a navigation command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationOutcome {
    /// The current slide was transiting and has been forced to end.
    Skipped(usize),

    /// The current slide is still transiting after a forced end, because
    /// some of its processes cannot be forced to end.
    Blocked(usize),

    /// The slide was entered and its transitions started.
    Entered(usize),

    /// The cursor stepped back to this slide.
    Returned(usize),

    /// Already on the last slide.
    AtEnd,

    /// Already on the first slide, or before any slide.
    AtStart,

    /// Every slide was reset.
    Restarted,
}

//=== Presentation Navigation =============================================

impl Presentation {
    /// Applies a navigation command.
    ///
    /// Only [`NavigationCommand::GoTo`] can fail, when its index is outside
    /// of the presentation.
    pub fn navigate(&mut self, command: NavigationCommand) -> Result<NavigationOutcome> {
        debug!("Navigation command {:?} (current: {:?})", command, self.current);

        let outcome = match command {
            NavigationCommand::Next => self.next(),
            NavigationCommand::Previous => self.previous(),
            NavigationCommand::GoTo(index) => self.go_to(index)?,
            NavigationCommand::Restart => self.restart(),
        };

        debug!("Navigation outcome {:?}", outcome);
        Ok(outcome)
    }

    /// Skips the current slide's transitions if they are running, otherwise
    /// enters the following slide.
    ///
    /// Returns [`NavigationOutcome::Blocked`] when the running transitions
    /// refuse to be forced to end.
    pub fn next(&mut self) -> NavigationOutcome {
        if let Some(index) = self.current {
            if self.contents[index].is_transiting() {
                self.contents[index].force_end_transitions();
                self.settle(index);
                return if self.contents[index].is_transiting() {
                    NavigationOutcome::Blocked(index)
                } else {
                    NavigationOutcome::Skipped(index)
                };
            }
        }

        let target = self.current.map_or(0, |index| index + 1);
        if target >= self.contents.len() {
            return NavigationOutcome::AtEnd;
        }

        self.enter(target)
    }

    /// Resets the current slide and moves the cursor to the previous one,
    /// which keeps its end state.
    pub fn previous(&mut self) -> NavigationOutcome {
        match self.current {
            Some(index) if index > 0 => {
                self.rewind(index);
                self.current = Some(index - 1);
                NavigationOutcome::Returned(index - 1)
            }
            _ => NavigationOutcome::AtStart,
        }
    }

    /// Jumps to `target` and plays its transitions.
    ///
    /// Forward jumps end the current slide (when transiting) and every
    /// skipped slide. Backward jumps, including jumping to the current
    /// slide, reset everything down to `target` first.
    ///
    /// A forward jump never waits: if the current slide has processes that
    /// cannot be forced to end, it stays active and keeps receiving ticks
    /// alongside `target` until those processes end themselves.
    pub fn go_to(&mut self, target: usize) -> Result<NavigationOutcome> {
        self.check_index(target)?;

        match self.current {
            Some(index) if target <= index => {
                for rewound in (target..=index).rev() {
                    self.rewind(rewound);
                }
            }
            current => {
                let first_skipped = match current {
                    Some(index) => {
                        if self.contents[index].is_transiting() {
                            self.contents[index].force_end_transitions();
                            self.settle(index);
                        }
                        index + 1
                    }
                    None => 0,
                };

                for skipped in first_skipped..target {
                    self.contents[skipped].force_end_transitions();
                }
            }
        }

        Ok(self.enter(target))
    }

    /// Resets every slide, last to first, and clears the cursor.
    pub fn restart(&mut self) -> NavigationOutcome {
        for content in self.contents.iter_mut().rev() {
            content.reset_transitions();
        }
        self.active.clear();
        self.current = None;
        NavigationOutcome::Restarted
    }

    //--- Internal Helpers -------------------------------------------------

    fn enter(&mut self, index: usize) -> NavigationOutcome {
        self.current = Some(index);
        self.contents[index].start_transitions();
        if !self.active.contains(&index) {
            self.active.push(index);
        }
        NavigationOutcome::Entered(index)
    }

    fn rewind(&mut self, index: usize) {
        self.contents[index].reset_transitions();
        self.active.retain(|&i| i != index);
    }

    fn settle(&mut self, index: usize) {
        if !self.contents[index].is_transiting() {
            self.active.retain(|&i| i != index);
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
