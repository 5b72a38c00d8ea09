//! Pointer gesture tracking.
//!
//! Terminals report a press, a stream of drags and a release. The tracker
//! turns that into board input: one `PointerDown` per newly entered cell
//! while the button is held, and a single `PointerUp` on release.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::map::CellHitMap;
use crate::types::InputEvent;

#[derive(Debug, Default, Clone)]
pub struct PointerTracker {
    down: bool,
    last_cell: Option<(i32, i32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Feed a mouse event; returns the board input it produces, if any.
    pub fn handle_mouse(&mut self, event: MouseEvent, hits: &CellHitMap) -> Option<InputEvent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.down = true;
                self.last_cell = None;
                self.enter(hits.cell_at(event.column, event.row))
            }
            MouseEventKind::Drag(MouseButton::Left) if self.down => {
                self.enter(hits.cell_at(event.column, event.row))
            }
            MouseEventKind::Up(MouseButton::Left) if self.down => {
                self.down = false;
                self.last_cell = None;
                Some(InputEvent::PointerUp)
            }
            _ => None,
        }
    }

    fn enter(&mut self, cell: Option<(i32, i32)>) -> Option<InputEvent> {
        let (x, y) = cell?;
        if self.last_cell == Some((x, y)) {
            return None;
        }
        self.last_cell = Some((x, y));
        Some(InputEvent::PointerDown { x, y })
    }
}
