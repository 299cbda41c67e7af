//! Cards on the board.
//!
//! A `Card` has an immutable identity (`id`, `symbol`) and two mutable
//! flags. `covered` flips every turn; `matched` flips once and stays set.
//!
//! Toggles are unconditional flips. Callers check the current state first
//! when they need "set" rather than "flip" semantics.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Unique identifier for a card on the board.
///
/// Ids are assigned `0..card_count` in row-major board order and are never
/// reused for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of this card in row-major board order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    symbol: Symbol,
    covered: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            covered: true,
            matched: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    #[must_use]
    pub const fn is_covered(&self) -> bool {
        self.covered
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    /// Does `other` carry the same symbol?
    #[must_use]
    pub fn same_symbol(&self, other: &Card) -> bool {
        self.symbol == other.symbol
    }

    pub fn toggle_covered(&mut self) {
        self.covered = !self.covered;
    }

    pub fn toggle_matched(&mut self) {
        self.matched = !self.matched;
    }

    /// Identity-only view of this card, as remembered by agents.
    #[must_use]
    pub const fn face(&self) -> CardFace {
        CardFace {
            id: self.id,
            symbol: self.symbol,
        }
    }
}

/// What an agent remembers about a revealed card: where it is and what it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    pub id: CardId,
    pub symbol: Symbol,
}

impl From<&Card> for CardFace {
    fn from(card: &Card) -> Self {
        card.face()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_covered_and_unmatched() {
        let card = Card::new(CardId::new(3), Symbol::new(1));
        assert_eq!(card.id(), CardId::new(3));
        assert_eq!(card.symbol(), Symbol::new(1));
        assert!(card.is_covered());
        assert!(!card.is_matched());
    }

    #[test]
    fn test_toggles_flip_state() {
        let mut card = Card::new(CardId::new(0), Symbol::new(0));

        card.toggle_covered();
        assert!(!card.is_covered());
        card.toggle_covered();
        assert!(card.is_covered());

        card.toggle_matched();
        assert!(card.is_matched());
    }

    #[test]
    fn test_same_symbol() {
        let a1 = Card::new(CardId::new(0), Symbol::new(0));
        let a2 = Card::new(CardId::new(1), Symbol::new(0));
        let b = Card::new(CardId::new(2), Symbol::new(1));

        assert!(a1.same_symbol(&a2));
        assert!(!a1.same_symbol(&b));
    }

    #[test]
    fn test_face() {
        let card = Card::new(CardId::new(5), Symbol::new(2));
        let face = CardFace::from(&card);
        assert_eq!(face.id, CardId::new(5));
        assert_eq!(face.symbol, Symbol::new(2));
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId::new(1), Symbol::new(4));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
