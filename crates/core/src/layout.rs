//! Render-space placement of cells.

use crate::types::Coord;

/// Maps cells to render-space positions, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub spacing: f32,
}

impl Layout {
    pub fn new(width: i32, height: i32, spacing: f32) -> Self {
        Self {
            width,
            height,
            spacing,
        }
    }

    /// Resting position of a piece in cell `c`.
    ///
    /// Cell centres sit `spacing` apart and are shifted down-left by half a
    /// cell from the board's centre line. The half-board offset
    /// `(n - 1) * spacing / 2` is exact, not truncated to a whole unit, so
    /// boards with an odd `(n - 1) * spacing` stay centred.
    pub fn position_at(&self, c: Coord) -> (f32, f32) {
        let half_w = (self.width - 1).max(0) as f32 * self.spacing / 2.0;
        let half_h = (self.height - 1).max(0) as f32 * self.spacing / 2.0;
        let x = self.spacing * c.x as f32 - half_w - self.spacing * 0.5;
        let y = self.spacing * c.y as f32 - half_h - self.spacing * 0.5;
        (x, y)
    }

    /// Where a piece spawned into `c` starts its fall.
    pub fn spawn_position(&self, c: Coord, fall_from: f32) -> (f32, f32) {
        let (x, y) = self.position_at(c);
        (x, y + fall_from)
    }
}
