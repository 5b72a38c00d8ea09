//! Mapping from terminal coordinates and keys to board input.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Where the board is drawn on screen.
///
/// Each board cell covers `cell_w` x `cell_h` terminal cells starting at
/// `(origin_col, origin_row)`. Board row 0 is drawn at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellHitMap {
    pub origin_col: u16,
    pub origin_row: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub width: i32,
    pub height: i32,
}

impl CellHitMap {
    pub fn new(
        origin_col: u16,
        origin_row: u16,
        cell_w: u16,
        cell_h: u16,
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            origin_col,
            origin_row,
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            width,
            height,
        }
    }

    /// Board cell under terminal position `(col, row)`.
    pub fn cell_at(&self, col: u16, row: u16) -> Option<(i32, i32)> {
        if col < self.origin_col || row < self.origin_row {
            return None;
        }
        let x = ((col - self.origin_col) / self.cell_w) as i32;
        let from_top = ((row - self.origin_row) / self.cell_h) as i32;
        if x >= self.width || from_top >= self.height {
            return None;
        }
        Some((x, self.height - 1 - from_top))
    }

    /// Terminal position of the top-left corner of board cell `(x, y)`.
    pub fn screen_at(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let col = self.origin_col as i32 + x * self.cell_w as i32;
        let row = self.origin_row as i32 + (self.height - 1 - y) * self.cell_h as i32;
        Some((col as u16, row as u16))
    }
}

/// Press over the board cell at a terminal position, if any.
pub fn cell_event(hits: &CellHitMap, col: u16, row: u16) -> Option<InputEvent> {
    hits.cell_at(col, row)
        .map(|(x, y)| InputEvent::PointerDown { x, y })
}

/// Check if key should quit the demo.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should reset the board.
pub fn is_reset(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
