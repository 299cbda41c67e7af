//! Whole-game view for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::agents::PlayerView;
use crate::board::BoardSnapshot;
use crate::core::player::PlayerId;

/// Everything a renderer needs: board cells, scores, mover, round, game-over flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub players: Vec<PlayerView>,
    pub current_player: PlayerId,
    pub round: u32,
    pub game_over: bool,
}
