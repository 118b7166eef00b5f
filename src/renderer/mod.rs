//! Canvas 2D rendering of game snapshots
//!
//! Geometry and palette are plain functions so they can be tested natively;
//! the drawing itself is wasm only.

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::consts::{GRID_HEIGHT, GRID_WIDTH};
use crate::sim::{Direction, Position, PowerUpKind};

/// Colors (CSS strings)
pub mod palette {
    pub const BACKGROUND: &str = "#f0f0f0";
    pub const GRID_LINE: &str = "#e0e0e0";
    pub const FOOD: &str = "#ff0000";
    pub const BONUS: &str = "#ffd700";
    pub const HEAD: &str = "#8B4513";
    pub const BODY: &str = "#CD853F";
    pub const SEGMENT_BORDER: &str = "#5D2E0D";
    pub const EYE: &str = "#000000";
    pub const POWER_UP_SLOW: &str = "#4fc3f7";
    pub const POWER_UP_SCORE: &str = "#ab47bc";
    /// Wash over the board while slow-motion is active
    pub const SLOW_TINT: &str = "rgba(79, 195, 247, 0.12)";
}

pub fn power_up_color(kind: PowerUpKind) -> &'static str {
    match kind {
        PowerUpKind::Slow => palette::POWER_UP_SLOW,
        PowerUpKind::ScoreBonus => palette::POWER_UP_SCORE,
    }
}

/// Pixel rectangle of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Cells stretch to fill the whole canvas
pub fn cell_rect(canvas_w: f64, canvas_h: f64, pos: Position) -> CellRect {
    let w = canvas_w / GRID_WIDTH as f64;
    let h = canvas_h / GRID_HEIGHT as f64;
    CellRect {
        x: pos.x as f64 * w,
        y: pos.y as f64 * h,
        w,
        h,
    }
}

/// Eye centers for the head, as fractions of the cell, facing `dir`
pub fn eye_offsets(dir: Direction) -> [(f64, f64); 2] {
    match dir {
        Direction::Right => [(0.7, 0.3), (0.7, 0.7)],
        Direction::Left => [(0.3, 0.3), (0.3, 0.7)],
        Direction::Up => [(0.3, 0.3), (0.7, 0.3)],
        Direction::Down => [(0.3, 0.7), (0.7, 0.7)],
    }
}
