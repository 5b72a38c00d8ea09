//! Grid module - the board's cells and the pieces in them
//!
//! Pieces are stored by coordinate only: a piece's position *is* the cell
//! that holds it, so there is no separate coordinate field to keep in sync.
//! Uses a flat row-major vector (`y * width + x`).
//! Coordinates: `x` grows to the right, `y` grows upwards (row 0 is the bottom).

use crate::types::{Coord, PieceId, PieceTypeId};

/// A live piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceTypeId,
    pub selected: bool,
    /// Cosmetic: not of the active chain's type.
    pub external: bool,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceTypeId) -> Self {
        Self {
            id,
            kind,
            selected: false,
            external: false,
        }
    }
}

/// A cell is either empty or holds exactly one piece.
pub type Cell = Option<Piece>;

/// A piece that fell during compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fall {
    pub id: PieceId,
    pub column: i32,
    pub from_y: i32,
    pub to_y: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Non-positive dimensions give an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![None; (width as usize) * (height as usize)],
        }
    }

    #[inline(always)]
    fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.y as usize) * (self.width as usize) + (c.x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    /// Cell at `c`, or `None` if out of bounds.
    pub fn get(&self, c: Coord) -> Option<Cell> {
        self.index(c).map(|idx| self.cells[idx])
    }

    pub fn piece(&self, c: Coord) -> Option<&Piece> {
        self.index(c).and_then(|idx| self.cells[idx].as_ref())
    }

    pub fn piece_mut(&mut self, c: Coord) -> Option<&mut Piece> {
        self.index(c).and_then(move |idx| self.cells[idx].as_mut())
    }

    /// Set the cell at `c`. Returns false if out of bounds.
    pub fn set(&mut self, c: Coord, cell: Cell) -> bool {
        match self.index(c) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Remove and return the piece at `c`.
    pub fn take(&mut self, c: Coord) -> Cell {
        self.index(c).and_then(|idx| self.cells[idx].take())
    }

    pub fn is_occupied(&self, c: Coord) -> bool {
        matches!(self.get(c), Some(Some(_)))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// All coordinates, column by column, bottom to top.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Coord::new(x, y)))
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, &Piece)> + '_ {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.as_ref()
                .map(|p| (Coord::new((idx % width) as i32, (idx / width) as i32), p))
        })
    }

    pub fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.cells.iter_mut().filter_map(|cell| cell.as_mut())
    }

    /// Drop every piece in column `x` down over the empty cells below it.
    ///
    /// Relative order within the column is kept. Returns the moves bottom to
    /// top; the column's empty cells end up at the top.
    pub fn compact_column(&mut self, x: i32) -> Vec<Fall> {
        let mut falls = Vec::new();
        if x < 0 || x >= self.width {
            return falls;
        }

        let mut write_y = 0;
        for read_y in 0..self.height {
            let from = Coord::new(x, read_y);
            if !self.is_occupied(from) {
                continue;
            }
            if write_y != read_y {
                let cell = self.take(from);
                if let Some(piece) = cell {
                    falls.push(Fall {
                        id: piece.id,
                        column: x,
                        from_y: read_y,
                        to_y: write_y,
                    });
                }
                self.set(Coord::new(x, write_y), cell);
            }
            write_y += 1;
        }
        falls
    }

    /// True when no column has an empty cell below an occupied one.
    pub fn is_settled(&self) -> bool {
        (0..self.width).all(|x| {
            let mut seen_gap = false;
            for y in 0..self.height {
                match self.get(Coord::new(x, y)) {
                    Some(None) => seen_gap = true,
                    Some(Some(_)) if seen_gap => return false,
                    _ => {}
                }
            }
            true
        })
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
