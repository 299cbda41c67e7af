//! # memory-match
//!
//! A pairs-matching "memory" card game played by 2-4 automated agents.
//!
//! ## Design Principles
//!
//! 1. **Memory-Driven Agents**: Each agent remembers the cards it has seen
//!    and plays a certain pair as soon as it knows one.
//!
//! 2. **Explicit Construction**: Board size, roster, colors and the random
//!    seed are passed in through `GameConfig` / `GameBuilder`. No global
//!    factories or id counters.
//!
//! 3. **Deterministic**: All randomness flows through an injected
//!    `GameRng`; the same seed replays the same game.
//!
//! ## Example
//!
//! ```
//! use memory_match::game::GameBuilder;
//!
//! let mut game = GameBuilder::new().player_count(2).card_count(16).build(42).unwrap();
//! while !game.is_game_over() {
//!     game.make_move().unwrap();
//! }
//! let total: u32 = game.players().iter().map(|p| p.points).sum();
//! assert_eq!(total, 8 * 100);
//! ```
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration, errors
//! - `cards`: Card ids, symbols, per-card state
//! - `board`: The card grid and its read-only snapshot
//! - `agents`: Agent memory and guessing strategy
//! - `game`: The turn controller

pub mod agents;
pub mod board;
pub mod cards;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap, Result};

pub use crate::cards::{Card, CardFace, CardId, Symbol};

pub use crate::board::{Board, BoardSnapshot, CellView};

pub use crate::agents::{Agent, AgentMemory, PlayerView};

pub use crate::game::{Game, GameBuilder, GamePhase, GameResult, GameSnapshot, Resolution, TurnOutcome};
