//! Per-agent card memory.
//!
//! `AgentMemory` holds what one agent has personally seen:
//!
//! - **known cards**: revealed cards not yet removed from play, in discovery order
//! - **pair symbols**: symbols for which two distinct known cards are held
//! - **available ids**: cards not yet ruled out as matched
//!
//! Uses `im` persistent vectors so cloning an agent (for snapshots or
//! look-ahead) is O(1).
//!
//! ## Invariants
//!
//! - Known cards have distinct ids and every known id is available.
//! - Every pair symbol has exactly two known cards carrying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, CardId, Symbol};
use crate::core::rng::GameRng;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMemory {
    known_cards: Vector<CardFace>,
    pair_symbols: Vector<Symbol>,
    available_ids: Vector<CardId>,
}

impl AgentMemory {
    /// Fresh memory that considers every id in `available` guessable.
    pub fn new(available: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            known_cards: Vector::new(),
            pair_symbols: Vector::new(),
            available_ids: available.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn known_cards(&self) -> &Vector<CardFace> {
        &self.known_cards
    }

    #[must_use]
    pub fn pair_symbols(&self) -> &Vector<Symbol> {
        &self.pair_symbols
    }

    #[must_use]
    pub fn available_ids(&self) -> &Vector<CardId> {
        &self.available_ids
    }

    #[must_use]
    pub fn knows(&self, id: CardId) -> bool {
        self.known_cards.iter().any(|face| face.id == id)
    }

    #[must_use]
    pub fn is_available(&self, id: CardId) -> bool {
        self.available_ids.iter().any(|&available| available == id)
    }

    /// Is `symbol` backed by two known cards?
    #[must_use]
    pub fn has_pair(&self, symbol: Symbol) -> bool {
        self.pair_symbols.iter().any(|&pair| pair == symbol)
    }

    /// Known symbols, sorted. Used for logging.
    #[must_use]
    pub fn known_symbols_sorted(&self) -> Vec<Symbol> {
        let mut symbols: Vec<_> = self.known_cards.iter().map(|face| face.symbol).collect();
        symbols.sort();
        symbols
    }

    /// The first pair symbol (in discovery order) backed by exactly two
    /// known cards, as `(first discovered, second discovered)`.
    #[must_use]
    pub fn certain_pair(&self) -> Option<(CardId, CardId)> {
        self.pair_symbols.iter().find_map(|&symbol| {
            let mut ids = self
                .known_cards
                .iter()
                .filter(|face| face.symbol == symbol)
                .map(|face| face.id);
            match (ids.next(), ids.next(), ids.next()) {
                (Some(a), Some(b), None) => Some((a, b)),
                _ => None,
            }
        })
    }

    /// A known card with `face`'s symbol but a different id.
    #[must_use]
    pub fn partner_of(&self, face: CardFace) -> Option<CardId> {
        self.known_cards
            .iter()
            .find(|known| known.symbol == face.symbol && known.id != face.id)
            .map(|known| known.id)
    }

    /// Uniformly random available id, or `None` when nothing is left.
    pub fn random_available(&self, rng: &mut GameRng) -> Option<CardId> {
        if self.available_ids.is_empty() {
            return None;
        }
        let index = rng.gen_range_usize(0..self.available_ids.len());
        self.available_ids.get(index).copied()
    }

    /// Uniformly random available id other than `excluded`.
    ///
    /// Redraws until the id differs, so each draw consumes randomness the
    /// same way a fresh guess would. Returns `None` when `excluded` is the
    /// only candidate.
    pub fn random_available_except(&self, excluded: CardId, rng: &mut GameRng) -> Option<CardId> {
        if !self.available_ids.iter().any(|&id| id != excluded) {
            return None;
        }
        loop {
            let id = self.random_available(rng)?;
            if id != excluded {
                return Some(id);
            }
        }
    }

    /// Record a revealed card. Cards already known by id are ignored.
    ///
    /// Returns `true` when this card completed a pair symbol.
    pub fn remember(&mut self, face: CardFace) -> bool {
        if self.knows(face.id) {
            return false;
        }
        let completes_pair = self.known_cards.iter().any(|known| known.symbol == face.symbol);
        self.known_cards.push_back(face);
        if completes_pair && !self.has_pair(face.symbol) {
            self.pair_symbols.push_back(face.symbol);
        }
        completes_pair
    }

    /// Drop a matched card from every part of memory.
    pub fn forget_matched(&mut self, face: CardFace) {
        self.known_cards.retain(|known| known.id != face.id);
        self.pair_symbols.retain(|&symbol| symbol != face.symbol);
        self.available_ids.retain(|&id| id != face.id);
    }
}
