use crate::board::Phase;
use crate::types::{Coord, PieceTypeId};

/// Read-only copy of the board for renderers and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    /// Row-major piece types (`y * width + x`), `None` for empty cells.
    pub cells: Vec<Option<PieceTypeId>>,
    /// Chain cells in touch order.
    pub selected: Vec<Coord>,
    pub phase: Phase,
}

impl BoardSnapshot {
    pub fn kind_at(&self, c: Coord) -> Option<PieceTypeId> {
        if c.x < 0 || c.x >= self.width || c.y < 0 || c.y >= self.height {
            return None;
        }
        self.cells[(c.y * self.width + c.x) as usize]
    }

    /// Column `x` from bottom to top.
    pub fn column(&self, x: i32) -> Vec<Option<PieceTypeId>> {
        (0..self.height)
            .map(|y| self.kind_at(Coord::new(x, y)))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }
}
