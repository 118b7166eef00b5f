//! Grid geometry: positions, directions and bounds

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GRID_HEIGHT, GRID_WIDTH};

/// A grid cell. Origin is the top-left corner, y grows downward.
pub type Position = IVec2;

/// One of the four cardinal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// All directions, in the fixed order used for tie-breaking
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Unit vector for this direction
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Right => IVec2::new(1, 0),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Down => IVec2::new(0, 1),
            Direction::Up => IVec2::new(0, -1),
        }
    }

    /// Parse a unit vector. Diagonal and zero vectors are rejected.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (1, 0) => Some(Direction::Right),
            (-1, 0) => Some(Direction::Left),
            (0, 1) => Some(Direction::Down),
            (0, -1) => Some(Direction::Up),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Whether a cell lies inside `[0, W) x [0, H)`
#[inline]
pub fn in_bounds(pos: Position) -> bool {
    pos.x >= 0 && pos.y >= 0 && pos.x < GRID_WIDTH && pos.y < GRID_HEIGHT
}

/// Total number of cells on the board
pub const CELL_COUNT: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;
