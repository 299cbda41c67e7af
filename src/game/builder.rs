//! Game construction.

use super::controller::Game;
use crate::agents::Agent;
use crate::board::Board;
use crate::cards::Symbol;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::player::PlayerMap;
use crate::core::rng::GameRng;

/// Builder for creating a `Game`.
///
/// Board layout and roster size draw from independent RNG streams derived
/// from the seed, so fixing one (e.g. with `layout`) leaves the others
/// unchanged.
///
/// ```
/// use memory_match::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player_count(3)
///     .card_count(20)
///     .build(7)
///     .unwrap();
/// assert_eq!(game.players().len(), 3);
/// assert_eq!(game.board().card_count(), 20);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    layout: Option<Vec<Symbol>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self { config, layout: None }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = Some(count);
        self
    }

    pub fn card_count(mut self, count: usize) -> Self {
        self.config.card_count = count;
        self
    }

    pub fn colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.config = self.config.with_colors(colors);
        self
    }

    pub fn points_per_pair(mut self, points: u32) -> Self {
        self.config.points_per_pair = points;
        self
    }

    /// Use a fixed row-major symbol layout instead of a random one.
    /// Overrides the configured card count.
    pub fn layout(mut self, symbols: Vec<Symbol>) -> Self {
        self.layout = Some(symbols);
        self
    }

    /// Build with the seed from the config.
    pub fn build_from_config(self) -> Result<Game> {
        let seed = self.config.seed;
        self.build(seed)
    }

    /// Build the game.
    pub fn build(mut self, seed: u64) -> Result<Game> {
        self.config.seed = seed;
        let rng = GameRng::new(seed);

        let board = match self.layout {
            Some(symbols) => Board::from_symbols(symbols)?,
            None => Board::random(self.config.card_count, &mut rng.for_context("board"))?,
        };

        let player_count = self
            .config
            .resolve_player_count(&mut rng.for_context("players"))?;
        let colors = &self.config.colors;
        let agents = PlayerMap::new(player_count, |id| {
            Agent::new(id, colors[id.index()].clone(), board.card_ids())
        });

        log::info!(
            "new game: seed {}, {}x{} board with {} pairs, {} players",
            seed,
            board.rows(),
            board.cols(),
            board.symbol_count(),
            player_count
        );

        Ok(Game::new(board, agents, self.config.points_per_pair, rng))
    }
}
