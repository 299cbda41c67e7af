//! Automated memory players.
//!
//! An `Agent` guesses from its own `AgentMemory` and is mutated only
//! through the controller's notifications:
//!
//! - `update_known_cards`: after its own turn, with the two revealed cards
//! - `handle_matched_cards`: broadcast to every agent when a pair is removed
//!
//! ## Guessing
//!
//! First guess: the first-discovered card of a certain pair if one is
//! known, otherwise a random available card. Second guess: the known
//! partner of the first card if remembered (no randomness consumed),
//! otherwise a random available card other than the first.

use serde::{Deserialize, Serialize};

use super::memory::AgentMemory;
use crate::cards::{CardFace, CardId};
use crate::core::error::{GameError, Result};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// One automated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    id: PlayerId,
    color: String,
    points: u32,
    memory: AgentMemory,
}

impl Agent {
    /// Create an agent that considers every id in `card_ids` guessable.
    pub fn new(id: PlayerId, color: impl Into<String>, card_ids: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            id,
            color: color.into(),
            points: 0,
            memory: AgentMemory::new(card_ids),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Display name, e.g. "Player 1" for id 0.
    #[must_use]
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn add_points(&mut self, points: u32) {
        self.points += points;
    }

    #[must_use]
    pub fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    #[must_use]
    pub fn known_cards(&self) -> &im::Vector<CardFace> {
        self.memory.known_cards()
    }

    pub fn first_guess(&self, rng: &mut GameRng) -> Result<CardId> {
        if let Some((first, _)) = self.memory.certain_pair() {
            return Ok(first);
        }
        self.memory
            .random_available(rng)
            .ok_or(GameError::NoGuessAvailable { player: self.id })
    }

    pub fn second_guess(&self, first: CardFace, rng: &mut GameRng) -> Result<CardId> {
        if let Some(partner) = self.memory.partner_of(first) {
            return Ok(partner);
        }
        self.memory
            .random_available_except(first.id, rng)
            .ok_or(GameError::NoGuessAvailable { player: self.id })
    }

    /// Remember the cards revealed on this agent's own turn.
    pub fn update_known_cards(&mut self, cards: &[CardFace]) {
        for &face in cards {
            if self.memory.remember(face) {
                log::trace!("{} now knows both {} cards", self.id, face.symbol);
            }
        }
    }

    /// Remove matched cards from memory. Safe to call more than once.
    pub fn handle_matched_cards(&mut self, cards: &[CardFace]) {
        for &face in cards {
            self.memory.forget_matched(face);
        }
    }

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn view(&self) -> PlayerView {
        PlayerView {
            id: self.id,
            color: self.color.clone(),
            points: self.points,
            name: self.name(),
        }
    }
}

/// What the presentation layer sees of an agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub color: String,
    pub points: u32,
    pub name: String,
}
