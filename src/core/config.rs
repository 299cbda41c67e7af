//! Game configuration.
//!
//! Every parameter a game needs is passed explicitly through `GameConfig`;
//! there are no global factories or counters.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::rng::GameRng;

/// Fewest agents a game can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most agents a game can seat.
pub const MAX_PLAYERS: usize = 4;

/// Default display colors, one per seat.
pub const DEFAULT_COLORS: [&str; MAX_PLAYERS] = ["red", "black", "blue", "orange"];

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Total cards on the board. Even, at least 4, and must fill the
    /// `rows = n / 4`, `cols = n / rows` grid exactly.
    pub card_count: usize,

    /// Number of agents (2-4). `None` draws a count from the RNG.
    pub player_count: Option<usize>,

    /// Display colors, assigned to agents in seat order.
    pub colors: Vec<String>,

    /// Points awarded for each matched pair.
    pub points_per_pair: u32,

    /// Seed for board layout, roster and guesses.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            card_count: 16,
            player_count: None,
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            points_per_pair: 100,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom card count.
    pub fn with_card_count(mut self, count: usize) -> Self {
        self.card_count = count;
        self
    }

    /// Create a new config with a fixed number of players.
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = Some(count);
        self
    }

    /// Create a new config with a custom color palette.
    pub fn with_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Create a new config with custom pair points.
    pub fn with_points_per_pair(mut self, points: u32) -> Self {
        self.points_per_pair = points;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Resolve the number of seats, drawing one from `rng` when unset.
    pub fn resolve_player_count(&self, rng: &mut GameRng) -> Result<usize> {
        let count = match self.player_count {
            Some(count) => count,
            None => rng.gen_range_usize(MIN_PLAYERS..MAX_PLAYERS + 1),
        };
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) || count > self.colors.len() {
            return Err(GameError::InvalidPlayerCount(count));
        }
        Ok(count)
    }
}
