//! The game controller: one full turn per `make_move`.
//!
//! ## Turn sequence
//!
//! 1. Re-cover last turn's face-up, unmatched cards
//! 2. Ask the mover for two guesses, resolved against the board
//! 3. Let the mover remember both cards
//! 4. Turn both cards face up
//! 5. Same symbol: mark matched, score, tell every agent, check for game over.
//!    The mover keeps the turn.
//!    Different symbols: pass the turn; wrapping past the last agent
//!    starts a new round.

use super::outcome::{GamePhase, GameResult, Resolution, TurnOutcome};
use super::snapshot::GameSnapshot;
use crate::agents::{Agent, PlayerView};
use crate::board::{Board, BoardSnapshot, CardIds};
use crate::cards::{CardFace, CardId};
use crate::core::error::{GameError, Result};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;

/// A running game. Owns the board, the agents, and the guessing RNG.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    agents: PlayerMap<Agent>,
    current: PlayerId,
    /// Starts at 1.
    round: u32,
    /// Completed turns.
    turn: u32,
    game_over: bool,
    matched: Vec<CardId>,
    points_per_pair: u32,
    rng: GameRng,
}

impl Game {
    /// Assemble a game from parts. `GameBuilder` is the usual entry point.
    ///
    /// Agents must have been created over this board's card ids.
    pub fn new(board: Board, agents: PlayerMap<Agent>, points_per_pair: u32, rng: GameRng) -> Self {
        Self {
            board,
            agents,
            current: PlayerId::new(0),
            round: 1,
            turn: 0,
            game_over: false,
            matched: Vec::new(),
            points_per_pair,
            rng,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn agents(&self) -> &PlayerMap<Agent> {
        &self.agents
    }

    #[must_use]
    pub fn agent(&self, player: PlayerId) -> &Agent {
        &self.agents[player]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::AwaitingMove
        }
    }

    /// Matched card ids in the order they were matched.
    #[must_use]
    pub fn matched_cards(&self) -> &[CardId] {
        &self.matched
    }

    #[must_use]
    pub fn players(&self) -> Vec<PlayerView> {
        self.agents.values().map(Agent::view).collect()
    }

    #[must_use]
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board_snapshot(),
            players: self.players(),
            current_player: self.current,
            round: self.round,
            game_over: self.game_over,
        }
    }

    /// Final standings, once every pair is matched.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.game_over {
            return None;
        }
        GameResult::from_scores(self.agents.iter().map(|(id, agent)| (id, agent.points())))
    }

    // === Turn ===

    /// Re-cover every face-up card that is not matched. Idempotent.
    pub fn cover_all_visible_cards(&mut self) -> CardIds {
        self.board.cover_all_visible()
    }

    /// Play one full turn for whoever's turn it is.
    pub fn make_move(&mut self) -> Result<TurnOutcome> {
        if self.game_over {
            return Err(GameError::GameOver);
        }

        let recovered = self.cover_all_visible_cards();
        if !recovered.is_empty() {
            log::trace!("re-covered {:?}", recovered);
        }

        let mover = self.current;
        let round = self.round;
        let (first, second) = self.guess_pair(mover)?;

        self.agents[mover].update_known_cards(&[first, second]);
        self.board.uncover(&[first.id, second.id])?;
        self.turn += 1;

        let resolution = if first.symbol == second.symbol {
            self.resolve_match(mover, first, second)?;
            Resolution::Matched
        } else {
            self.pass_turn();
            Resolution::Mismatched
        };

        log::debug!(
            "turn {} round {}: {} revealed {} ({}) and {} ({}): {:?}",
            self.turn,
            round,
            mover,
            first.id,
            first.symbol,
            second.id,
            second.symbol,
            resolution
        );
        log::debug!(
            "{} known cards: {:?}",
            mover,
            self.agents[mover].memory().known_symbols_sorted()
        );

        Ok(TurnOutcome {
            turn: self.turn,
            round,
            mover,
            first,
            second,
            resolution,
            next_mover: self.current,
            game_over: self.game_over,
        })
    }

    /// Keep playing until the game ends or `max_turns` turns were played.
    ///
    /// Returns how many turns this call played.
    pub fn play_to_end(&mut self, max_turns: u32) -> Result<u32> {
        let mut played = 0;
        while !self.game_over && played < max_turns {
            self.make_move()?;
            played += 1;
        }
        Ok(played)
    }

    fn guess_pair(&mut self, mover: PlayerId) -> Result<(CardFace, CardFace)> {
        let agent = &self.agents[mover];

        let first_id = agent.first_guess(&mut self.rng)?;
        let first = self.board.card(first_id)?.face();

        let second_id = agent.second_guess(first, &mut self.rng)?;
        let second = self.board.card(second_id)?.face();

        Ok((first, second))
    }

    fn resolve_match(&mut self, mover: PlayerId, first: CardFace, second: CardFace) -> Result<()> {
        let pair = [first.id, second.id];
        self.board.mark_matched(&pair)?;
        self.matched.extend_from_slice(&pair);
        self.agents[mover].add_points(self.points_per_pair);

        for (_, agent) in self.agents.iter_mut() {
            agent.handle_matched_cards(&[first, second]);
        }
        log::trace!("all agents forgot {} and {}", first.id, second.id);

        if self.matched.len() == self.board.card_count() {
            self.game_over = true;
            log::info!(
                "game over after {} turns in round {}: {:?}",
                self.turn,
                self.round,
                self.result()
            );
        }
        Ok(())
    }

    fn pass_turn(&mut self) {
        let (next, wrapped) = self.current.next(self.agents.player_count());
        self.current = next;
        if wrapped {
            self.round += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;
    use crate::game::GameBuilder;

    fn small_game(seed: u64) -> Game {
        GameBuilder::new()
            .layout(vec![Symbol(0), Symbol(0), Symbol(1), Symbol(1)])
            .player_count(2)
            .build(seed)
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let game = small_game(0);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.round(), 1);
        assert_eq!(game.turns_played(), 0);
        assert_eq!(game.phase(), GamePhase::AwaitingMove);
        assert!(game.matched_cards().is_empty());
        assert_eq!(game.result(), None);
    }

    #[test]
    fn test_make_move_reveals_two_distinct_cards() {
        let mut game = small_game(3);
        let outcome = game.make_move().unwrap();

        assert_ne!(outcome.first.id, outcome.second.id);
        assert_eq!(outcome.turn, 1);
        assert_eq!(outcome.mover, PlayerId::new(0));
        for id in [outcome.first.id, outcome.second.id] {
            assert!(!game.board().card(id).unwrap().is_covered());
        }
    }

    #[test]
    fn test_only_latest_guesses_stay_face_up() {
        let mut game = GameBuilder::new().player_count(3).card_count(16).build(21).unwrap();
        for _ in 0..10 {
            let outcome = game.make_move().unwrap();
            for card in game.board().cards() {
                if !card.is_covered() {
                    assert!(
                        card.is_matched() || card.id() == outcome.first.id || card.id() == outcome.second.id
                    );
                }
            }
            if outcome.game_over {
                break;
            }
        }
    }

    #[test]
    fn test_play_to_end_finishes_small_game() {
        let mut game = small_game(5);
        game.play_to_end(1_000).unwrap();

        assert!(game.is_game_over());
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.matched_cards().len(), 4);
        let total: u32 = game.players().iter().map(|p| p.points).sum();
        assert_eq!(total, 200);
        assert!(game.result().is_some());
    }

    #[test]
    fn test_make_move_after_game_over() {
        let mut game = small_game(5);
        game.play_to_end(1_000).unwrap();

        let before = game.snapshot();
        assert_eq!(game.make_move(), Err(GameError::GameOver));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_cover_all_visible_cards_is_idempotent() {
        let mut game = small_game(8);
        game.make_move().unwrap();

        game.cover_all_visible_cards();
        let once = game.board_snapshot();
        assert!(game.cover_all_visible_cards().is_empty());
        assert_eq!(game.board_snapshot(), once);
    }
}
