//! Grid-cell to screen-space mapping for the playing field
//!
//! The embedding game decides where the field sits on screen and how big a
//! cell is; the simulation only ever asks for cell origins and the field
//! boundary rectangle.

use serde::{Deserialize, Serialize};

use crate::common::constants::{CELL_SIZE, FIELD_COLS, FIELD_ROWS};
use crate::utils::{Rect, Vector2};

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Grid {
    /// Side length of a square cell in screen units
    pub cell_size: f64,
    /// Screen position of the field's top-left corner
    pub offset: Vector2,
    pub cols: u32,
    pub rows: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            offset: Vector2::zero(),
            cols: FIELD_COLS,
            rows: FIELD_ROWS,
        }
    }
}

impl Grid {
    /// Screen position of the top-left corner of a cell
    pub fn cell_to_screen(&self, col: u32, row: u32) -> Vector2 {
        Vector2 {
            x: self.offset.x + col as f64 * self.cell_size,
            y: self.offset.y + row as f64 * self.cell_size,
        }
    }

    /// Boundary rectangle of the playable field in screen space
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.offset.x,
            y: self.offset.y,
            w: self.cols as f64 * self.cell_size,
            h: self.rows as f64 * self.cell_size,
        }
    }
}
