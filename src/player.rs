//=========================================================================
// Presentation Player
//
// Host-facing driver that turns one call per rendered frame into the two
// tick kinds a presentation expects.
//
// Architecture:
// ```text
//     PlayerBuilder  ──build()──>  Player  ──advance(dt)──>  Presentation
//         │                          │
//         ├─ with_fixed_rate()       ├─ 1. apply queued NavigationCommands
//         └─ with_max_fixed_steps()  ├─ 2. N × TickKind::Fixed
//                                    └─ 3. 1 × TickKind::Standard
//
//     PlayerRemote ──(channel)──> Player
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::error::{PresentationError, Result};
use crate::core::presentation::{NavigationCommand, Presentation, TickKind};

//=== PlayerBuilder =======================================================

/// Builder for configuring a [`Player`].
///
/// # Default Values
///
/// - **Fixed rate**: 50.0 fixed ticks per second
/// - **Max fixed steps**: 8 per frame
///
/// # Examples
///
/// ```rust
/// use aetheric_presentation::prelude::*;
///
/// let presentation = Presentation::new(Vec::new());
/// let mut player = PlayerBuilder::new()
///     .with_fixed_rate(60.0)
///     .with_max_fixed_steps(4)
///     .build(presentation);
///
/// player.remote().next().unwrap();
/// player.advance(1.0 / 60.0);
/// ```
#[derive(Debug, Clone)]
pub struct PlayerBuilder {
    fixed_rate: f64,
    max_fixed_steps: u32,
}

impl PlayerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fixed_rate: 50.0,
            max_fixed_steps: 8,
        }
    }

    /// Sets how many fixed ticks run per second of frame time.
    ///
    /// Default: 50.0
    ///
    /// # Panics
    ///
    /// Panics if `rate <= 0.0`.
    pub fn with_fixed_rate(mut self, rate: f64) -> Self {
        assert!(rate > 0.0, "Fixed rate must be positive, got {}", rate);
        self.fixed_rate = rate;
        self
    }

    /// Caps the number of fixed ticks run by a single frame. Backlog past
    /// the cap is dropped.
    ///
    /// Default: 8
    ///
    /// # Panics
    ///
    /// Panics if `steps == 0`.
    pub fn with_max_fixed_steps(mut self, steps: u32) -> Self {
        assert!(steps > 0, "Max fixed steps must be positive");
        self.max_fixed_steps = steps;
        self
    }

    /// Wraps `presentation` in a configured [`Player`].
    pub fn build(self, presentation: Presentation) -> Player {
        info!(
            "Building presentation player (fixed rate: {}, max fixed steps: {}, slides: {})",
            self.fixed_rate,
            self.max_fixed_steps,
            presentation.len()
        );

        let (commands_tx, commands_rx) = unbounded();

        Player {
            presentation,
            fixed_step: (1.0 / self.fixed_rate) as f32,
            max_fixed_steps: self.max_fixed_steps,
            accumulator: 0.0,
            commands_tx,
            commands_rx,
        }
    }
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Player ==============================================================

/// Frame driver for a [`Presentation`].
///
/// The player owns no loop: the host calls [`Player::advance`] once per
/// rendered frame.
#[derive(Debug)]
pub struct Player {
    presentation: Presentation,
    fixed_step: f32,
    max_fixed_steps: u32,
    accumulator: f32,
    commands_tx: Sender<NavigationCommand>,
    commands_rx: Receiver<NavigationCommand>,
}

impl Player {
    //--- Access -----------------------------------------------------------

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut Presentation {
        &mut self.presentation
    }

    pub fn into_presentation(self) -> Presentation {
        self.presentation
    }

    /// Seconds of simulated time per fixed tick.
    pub fn fixed_step(&self) -> f32 {
        self.fixed_step
    }

    /// Returns a handle for queuing navigation commands.
    pub fn remote(&self) -> PlayerRemote {
        PlayerRemote { commands: self.commands_tx.clone() }
    }

    //--- Frame ------------------------------------------------------------

    /// Advances the presentation by one rendered frame.
    ///
    /// # Order
    ///
    /// 1. Applies every queued navigation command
    /// 2. Runs the fixed ticks owed by the accumulated frame time
    /// 3. Runs one standard tick with `frame_dt`
    ///
    /// Negative or non-finite frame times count as zero.
    ///
    /// Returns the number of fixed ticks that ran.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() { frame_dt.max(0.0) } else { 0.0 };

        //--- Step 1: Apply navigation at the tick boundary ---------------
        self.apply_commands();

        //--- Step 2: Fixed ticks ------------------------------------------
        self.accumulator += frame_dt;
        let mut steps = 0;
        while self.accumulator >= self.fixed_step && steps < self.max_fixed_steps {
            self.presentation.tick(TickKind::Fixed, self.fixed_step);
            self.accumulator -= self.fixed_step;
            steps += 1;
        }

        if self.accumulator >= self.fixed_step {
            debug!(
                "Dropping {:.4}s of fixed-tick backlog after {} steps",
                self.accumulator, steps
            );
            self.accumulator %= self.fixed_step;
        }

        //--- Step 3: Standard tick ----------------------------------------
        self.presentation.tick(TickKind::Standard, frame_dt);

        steps
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply_commands(&mut self) {
        while let Ok(command) = self.commands_rx.try_recv() {
            match self.presentation.navigate(command) {
                Ok(outcome) => debug!("Applied {:?}: {:?}", command, outcome),
                Err(e) => warn!("Ignoring navigation command {:?}: {}", command, e),
            }
        }
    }
}

//=== PlayerRemote ========================================================

/// Cloneable handle that queues navigation commands for a [`Player`].
///
/// Commands take effect at the start of the next [`Player::advance`].
#[derive(Debug, Clone)]
pub struct PlayerRemote {
    commands: Sender<NavigationCommand>,
}

impl PlayerRemote {
    /// Queues a navigation command.
    pub fn send(&self, command: NavigationCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| PresentationError::PlayerDisconnected)
    }

    pub fn next(&self) -> Result<()> {
        self.send(NavigationCommand::Next)
    }

    pub fn previous(&self) -> Result<()> {
        self.send(NavigationCommand::Previous)
    }

    pub fn go_to(&self, index: usize) -> Result<()> {
        self.send(NavigationCommand::GoTo(index))
    }

    pub fn restart(&self) -> Result<()> {
        self.send(NavigationCommand::Restart)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::core::content::PresentationContent;
    use crate::core::process::{shared, ContentProcess, Fade, ProcessState};
    use crate::core::testing::{probed_process, recording, ProbeCalls};

    //=====================================================================
    // PlayerBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = PlayerBuilder::new();
        assert_eq!(builder.fixed_rate, 50.0);
        assert_eq!(builder.max_fixed_steps, 8);
    }

    #[test]
    #[should_panic(expected = "Fixed rate must be positive")]
    fn builder_with_fixed_rate_panics_on_zero() {
        PlayerBuilder::new().with_fixed_rate(0.0);
    }

    #[test]
    #[should_panic(expected = "Max fixed steps must be positive")]
    fn builder_with_max_fixed_steps_panics_on_zero() {
        PlayerBuilder::new().with_max_fixed_steps(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let player = PlayerBuilder::new()
            .with_fixed_rate(100.0)
            .with_max_fixed_steps(2)
            .build(Presentation::new(Vec::new()));

        assert!((player.fixed_step() - 0.01).abs() < 1e-6);
        assert_eq!(player.max_fixed_steps, 2);
    }

    //=====================================================================
    // Player Tests
    //=====================================================================

    fn single_slide_player(builder: PlayerBuilder) -> (Player, Rc<ProbeCalls>) {
        let (_, sink) = recording();
        let (process, calls) = probed_process("probe", true, &sink);
        let content = PresentationContent::with_sink("slide", vec![process], sink.clone());
        let player = builder.build(Presentation::with_sink(vec![content], sink));
        (player, calls)
    }

    #[test]
    fn fixed_ticks_follow_accumulated_time() {
        let (mut player, calls) = single_slide_player(PlayerBuilder::new().with_fixed_rate(10.0));
        player.remote().next().unwrap();

        assert_eq!(player.advance(0.06), 0);
        assert_eq!(player.advance(0.06), 1);
        assert_eq!(player.advance(0.25), 2);

        assert_eq!(calls.fixed_updates.get(), 3);
        assert_eq!(calls.updates.get(), 3);
    }

    #[test]
    fn fixed_backlog_is_capped() {
        let (mut player, calls) = single_slide_player(
            PlayerBuilder::new().with_fixed_rate(10.0).with_max_fixed_steps(3),
        );
        player.remote().next().unwrap();

        assert_eq!(player.advance(1.0), 3);
        assert_eq!(player.advance(0.0), 0);
        assert_eq!(calls.fixed_updates.get(), 3);
    }

    #[test]
    fn non_finite_frame_time_does_not_stall_fixed_ticks() {
        let (mut player, calls) = single_slide_player(PlayerBuilder::new().with_fixed_rate(10.0));
        player.remote().next().unwrap();

        assert_eq!(player.advance(0.2), 2);
        assert_eq!(player.advance(f32::INFINITY), 0);
        assert_eq!(player.advance(f32::NAN), 0);
        assert!(player.accumulator.is_finite());

        let mut later = 0;
        for _ in 0..5 {
            later += player.advance(0.15);
        }
        assert!(later >= 6);
        assert_eq!(calls.fixed_updates.get(), 2 + later);
    }

    #[test]
    fn commands_apply_before_ticks() {
        let (mut player, calls) = single_slide_player(PlayerBuilder::new());
        let remote = player.remote();

        player.advance(0.016);
        assert_eq!(player.presentation().current(), None);

        remote.next().unwrap();
        player.advance(0.016);
        assert_eq!(player.presentation().current(), Some(0));
        assert_eq!(calls.starts.get(), 1);
        assert_eq!(calls.updates.get(), 1);

        remote.next().unwrap();
        player.advance(0.016);
        assert_eq!(
            player.presentation().content(0).map(|c| c.processes()[0].state()),
            Some(ProcessState::Ended)
        );
    }

    #[test]
    fn invalid_commands_are_ignored() {
        let (mut player, _) = single_slide_player(PlayerBuilder::new());
        player.remote().go_to(42).unwrap();
        player.remote().next().unwrap();

        player.advance(0.016);
        assert_eq!(player.presentation().current(), Some(0));
    }

    #[test]
    fn remote_outliving_player_reports_disconnect() {
        let (player, _) = single_slide_player(PlayerBuilder::new());
        let remote = player.remote();
        drop(player);

        assert_eq!(remote.restart(), Err(PresentationError::PlayerDisconnected));
    }

    #[test]
    fn fade_plays_through_player() {
        let opacity = shared(0.0_f32);
        let process = ContentProcess::new("title", Fade::fade_in(opacity.clone(), 0.5));
        let content = PresentationContent::new("title-slide", vec![process]);
        let mut player = PlayerBuilder::new().build(Presentation::new(vec![content]));

        player.remote().next().unwrap();
        for _ in 0..30 {
            player.advance(0.02);
        }

        assert!((opacity.get() - 1.0).abs() < 1e-5);
        assert!(!player.presentation().is_transiting());
    }
}
