//! The game controller and its construction.
//!
//! A `Game` is driven by one external trigger, `make_move`, which plays a
//! full turn for whoever's turn it is. Everything else is read-only state
//! for the presentation layer.

mod builder;
mod controller;
mod outcome;
mod snapshot;

pub use builder::GameBuilder;
pub use controller::Game;
pub use outcome::{GamePhase, GameResult, Resolution, TurnOutcome};
pub use snapshot::GameSnapshot;
