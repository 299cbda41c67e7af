//! Card symbols - the matching key shared by exactly two cards.

use serde::{Deserialize, Serialize};

/// Symbol printed on a card face.
///
/// Symbols come from a finite alphabet indexed from 0. They render as
/// letters (`A`, `B`, ...) for the first 26 and as `S26`, `S27`, ... beyond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw alphabet index.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The first `count` symbols of the alphabet, capped at the full `u16` range.
    pub fn alphabet(count: usize) -> impl Iterator<Item = Symbol> {
        (0..=u16::MAX).take(count).map(Symbol)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 26 {
            write!(f, "{}", char::from(b'A' + self.0 as u8))
        } else {
            write!(f, "S{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new(0).to_string(), "A");
        assert_eq!(Symbol::new(25).to_string(), "Z");
        assert_eq!(Symbol::new(26).to_string(), "S26");
    }

    #[test]
    fn test_alphabet() {
        let symbols: Vec<_> = Symbol::alphabet(3).collect();
        assert_eq!(symbols, vec![Symbol(0), Symbol(1), Symbol(2)]);
    }

    #[test]
    fn test_alphabet_does_not_wrap() {
        assert_eq!(Symbol::alphabet(70_000).count(), 65_536);
        assert_eq!(Symbol::alphabet(65_536).last(), Some(Symbol(u16::MAX)));
    }
}
