//! Card system: identities, symbols, and per-card state.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identifier, also the card's row-major board position
//! - `Symbol`: Matching key; exactly two cards share each symbol
//! - `Card`: Runtime card state (covered, matched)
//! - `CardFace`: The id/symbol pair an agent remembers

pub mod card;
pub mod symbol;

pub use card::{Card, CardFace, CardId};
pub use symbol::Symbol;
