//! Turn and game results.

use serde::{Deserialize, Serialize};

use crate::cards::CardFace;
use crate::core::player::PlayerId;

/// Externally visible controller state between `make_move` calls.
///
/// Inside a turn the controller walks through cover, guess, reveal and
/// resolve steps, but a turn always runs to completion, so callers only
/// ever observe one of these two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the next `make_move`.
    AwaitingMove,
    /// Every pair is matched. Terminal.
    GameOver,
}

/// How the two revealed cards resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Same symbol: the pair is removed and the mover keeps the turn.
    Matched,
    /// Different symbols: the turn passes to the next agent.
    Mismatched,
}

/// Everything that happened in one `make_move` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// Round the turn was played in.
    pub round: u32,
    pub mover: PlayerId,
    pub first: CardFace,
    pub second: CardFace,
    pub resolution: Resolution,
    /// Who moves next (the mover again after a match).
    pub next_mover: PlayerId,
    pub game_over: bool,
}

impl TurnOutcome {
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.resolution == Resolution::Matched
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single top scorer.
    Winner(PlayerId),
    /// Several agents share the top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Build a result from every agent's final score.
    ///
    /// Returns `None` when `scores` is empty.
    pub fn from_scores(scores: impl IntoIterator<Item = (PlayerId, u32)>) -> Option<Self> {
        let scores: Vec<_> = scores.into_iter().collect();
        let best = scores.iter().map(|&(_, points)| points).max()?;
        let mut winners: Vec<PlayerId> = scores
            .into_iter()
            .filter(|&(_, points)| points == best)
            .map(|(player, _)| player)
            .collect();

        if winners.len() == 1 {
            winners.pop().map(GameResult::Winner)
        } else {
            Some(GameResult::Winners(winners))
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}
