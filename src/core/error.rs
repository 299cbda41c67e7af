//! Error type shared by board, agents and the game controller.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;

/// Everything that can go wrong while building or playing a game.
///
/// None of these are transient: a game has no I/O, so an error means the
/// configuration was rejected or an internal invariant was broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0} does not exist on the board")]
    CardNotFound(CardId),

    #[error("invalid card count {0}: must be even, at least 4 and fill a rectangular grid")]
    InvalidCardCount(usize),

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error("invalid player count {0}: a game needs 2 to 4 players with a color each")]
    InvalidPlayerCount(usize),

    #[error("{player} has no card left to guess")]
    NoGuessAvailable { player: PlayerId },

    #[error("the game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, GameError>;
