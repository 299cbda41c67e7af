//! The board: a fixed rectangular grid of cards built once per game.
//!
//! - `Board`: owns every card, lookup by id, cover/uncover/match operations
//! - `BoardSnapshot`: read-only view for rendering

pub mod grid;
pub mod snapshot;

pub use grid::{grid_dimensions, Board, CardIds, MAX_CARD_COUNT};
pub use snapshot::{BoardSnapshot, CellView};
