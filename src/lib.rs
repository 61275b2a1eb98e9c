//=========================================================================
// Aetheric Presentation - Library Root
//
// Slide presentations whose contents play lifecycle-managed transitions
// (fades, moves, ...) while the host engine ticks them.
//
// Responsibilities:
// - Expose the presentation core (`Presentation`, `PresentationContent`,
//   `ContentProcess`) and its hook trait
// - Provide the `Player` facade that turns rendered frames into the
//   standard and fixed ticks the core expects
//
// Typical usage:
// ```no_run
// use aetheric_presentation::prelude::*;
//
// let opacity = shared(0.0);
// let title = ContentProcess::new("title", Fade::fade_in(opacity.clone(), 0.5));
// let slide = PresentationContent::new("intro", vec![title]);
// let mut player = PlayerBuilder::new().build(Presentation::new(vec![slide]));
//
// player.remote().next().unwrap();
// loop {
//     player.advance(1.0 / 60.0);
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the lifecycle types. Hosts that drive ticks themselves
// only need this module.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `player` is the frame-driver facade, re-exported below.
//
mod player;

//--- Public Exports ------------------------------------------------------

pub use player::{Player, PlayerBuilder, PlayerRemote};
