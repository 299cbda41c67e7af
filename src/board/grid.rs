//! The card grid.
//!
//! The `Board` owns every card of a game in a fixed `rows x cols` grid,
//! built once at game start. Card ids are row-major positions, so lookup
//! by id is a bounds-checked index.
//!
//! ## Usage
//!
//! ```
//! use memory_match::board::Board;
//! use memory_match::cards::{CardId, Symbol};
//! use memory_match::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let board = Board::random(16, &mut rng).unwrap();
//! assert_eq!((board.rows(), board.cols()), (4, 4));
//!
//! let fixed = Board::from_symbols(vec![Symbol(0), Symbol(0), Symbol(1), Symbol(1)]).unwrap();
//! assert_eq!(fixed.card(CardId(2)).unwrap().symbol(), Symbol(1));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::snapshot::{BoardSnapshot, CellView};
use crate::cards::{Card, CardId, Symbol};
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

/// Card ids touched by a single board operation. A turn only ever
/// reveals two cards, so this rarely spills to the heap.
pub type CardIds = SmallVec<[CardId; 2]>;

/// Largest board: one pair per distinct `Symbol`.
pub const MAX_CARD_COUNT: usize = 2 * (u16::MAX as usize + 1);

/// Rectangular arrangement of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major; `cards[i].id() == CardId(i)`.
    cards: Vec<Card>,
}

/// Grid shape for `card_count` cards: `rows = n / 4`, `cols = n / rows`.
///
/// Rejects odd counts, fewer than 4 cards, more than `MAX_CARD_COUNT`,
/// and counts the formula cannot lay out exactly (e.g. 14 would give a 3x4 grid).
pub fn grid_dimensions(card_count: usize) -> Result<(usize, usize)> {
    if card_count < 4 || card_count % 2 != 0 || card_count > MAX_CARD_COUNT {
        return Err(GameError::InvalidCardCount(card_count));
    }
    let rows = card_count / 4;
    let cols = card_count / rows;
    if rows * cols != card_count {
        return Err(GameError::InvalidCardCount(card_count));
    }
    Ok((rows, cols))
}

impl Board {
    /// Build a board of `card_count` cards with `card_count / 2` symbols,
    /// each placed twice at random positions.
    pub fn random(card_count: usize, rng: &mut GameRng) -> Result<Self> {
        let (rows, cols) = grid_dimensions(card_count)?;

        let mut symbols: Vec<Symbol> = Symbol::alphabet(card_count / 2)
            .flat_map(|symbol| [symbol, symbol])
            .collect();
        rng.shuffle(&mut symbols);

        Ok(Self::with_layout(rows, cols, symbols))
    }

    /// Build a board from an explicit row-major symbol layout.
    ///
    /// Every symbol must appear exactly twice.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self> {
        let (rows, cols) = grid_dimensions(symbols.len())?;

        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for symbol in &symbols {
            *counts.entry(*symbol).or_default() += 1;
        }
        let mut unpaired: Vec<_> = counts
            .into_iter()
            .filter(|&(_, count)| count != 2)
            .collect();
        if !unpaired.is_empty() {
            unpaired.sort();
            let (symbol, count) = unpaired[0];
            return Err(GameError::InvalidLayout(format!(
                "symbol {} appears {} times, expected 2",
                symbol, count
            )));
        }

        Ok(Self::with_layout(rows, cols, symbols))
    }

    fn with_layout(rows: usize, cols: usize, symbols: Vec<Symbol>) -> Self {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(CardId(i as u32), symbol))
            .collect();
        Self { rows, cols, cards }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Number of distinct symbols in play.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Every card id on the board, in row-major order.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(Card::id)
    }

    /// Look up a card by id.
    pub fn card(&self, id: CardId) -> Result<&Card> {
        self.cards
            .get(id.index())
            .filter(|card| card.id() == id)
            .ok_or(GameError::CardNotFound(id))
    }

    /// Look up a card by id for mutation.
    pub fn card_mut(&mut self, id: CardId) -> Result<&mut Card> {
        self.cards
            .get_mut(id.index())
            .filter(|card| card.id() == id)
            .ok_or(GameError::CardNotFound(id))
    }

    /// All cards in row-major order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards grouped by row.
    pub fn grid(&self) -> impl Iterator<Item = &[Card]> {
        self.cards.chunks(self.cols)
    }

    /// Re-cover every face-up card that is not matched.
    ///
    /// Returns the ids that were flipped back. Calling it again right away
    /// flips nothing.
    pub fn cover_all_visible(&mut self) -> CardIds {
        let mut covered = CardIds::new();
        for card in &mut self.cards {
            if !card.is_covered() && !card.is_matched() {
                card.toggle_covered();
                covered.push(card.id());
            }
        }
        covered
    }

    /// Turn the given cards face up. Already face-up cards are left alone.
    pub fn uncover(&mut self, ids: &[CardId]) -> Result<()> {
        for &id in ids {
            let card = self.card_mut(id)?;
            if card.is_covered() {
                card.toggle_covered();
            }
        }
        Ok(())
    }

    /// Mark the given cards as matched. Already matched cards are left alone.
    pub fn mark_matched(&mut self, ids: &[CardId]) -> Result<()> {
        for &id in ids {
            let card = self.card_mut(id)?;
            if !card.is_matched() {
                card.toggle_matched();
            }
        }
        Ok(())
    }

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: self.rows,
            cols: self.cols,
            cells: self.cards.iter().map(CellView::from).collect(),
        }
    }
}
