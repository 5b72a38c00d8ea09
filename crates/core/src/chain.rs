//! Selection chain - the ordered run of same-type pieces under the pointer.

use crate::grid::Grid;
use crate::types::{Coord, PieceTypeId};

/// Touch-ordered cells of the current gesture, without duplicates.
///
/// Cells stand in for the pieces: nothing moves while a gesture is active,
/// and the chain is drained before the board resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionChain {
    cells: Vec<Coord>,
    kind: Option<PieceTypeId>,
}

impl SelectionChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Type shared by every piece in the chain.
    pub fn kind(&self) -> Option<PieceTypeId> {
        self.kind
    }

    pub fn first(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Second-to-last cell, the backtrack target.
    pub fn previous(&self) -> Option<Coord> {
        self.cells.len().checked_sub(2).map(|i| self.cells[i])
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub(crate) fn push(&mut self, c: Coord, kind: PieceTypeId) {
        debug_assert!(!self.contains(c));
        debug_assert!(self.kind.map_or(true, |k| k == kind));
        self.kind = Some(kind);
        self.cells.push(c);
    }

    pub(crate) fn pop(&mut self) -> Option<Coord> {
        let popped = self.cells.pop();
        if self.cells.is_empty() {
            self.kind = None;
        }
        popped
    }

    /// Empty the chain, returning its cells in touch order.
    pub(crate) fn drain(&mut self) -> Vec<Coord> {
        self.kind = None;
        std::mem::take(&mut self.cells)
    }

    /// True when consecutive cells are adjacent and all hold the chain's type.
    pub fn is_well_formed(&self, grid: &Grid) -> bool {
        let same_type = self
            .cells
            .iter()
            .all(|&c| grid.piece(c).map(|p| Some(p.kind) == self.kind).unwrap_or(false));
        let adjacent = self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]));
        same_type && adjacent
    }
}
