//! Read-only board views for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Symbol};

/// One grid cell as seen from outside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub id: CardId,
    pub symbol: Symbol,
    pub covered: bool,
    pub matched: bool,
}

impl From<&Card> for CellView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            symbol: card.symbol(),
            covered: card.is_covered(),
            matched: card.is_matched(),
        }
    }
}

/// Grid dimensions plus every cell in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<CellView>,
}

impl BoardSnapshot {
    /// The cell at `(row, col)`, if inside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellView> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }
}

impl std::fmt::Display for BoardSnapshot {
    /// Face-up cards show their symbol, matched cards `.`, covered cards `#`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .filter_map(|col| self.cell(row, col))
                .map(|cell| {
                    if cell.matched {
                        ".".to_string()
                    } else if cell.covered {
                        "#".to_string()
                    } else {
                        cell.symbol.to_string()
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
