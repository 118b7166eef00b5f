//! Bear Snake - a grid snake arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, speed)
//! - `engine`: Lifecycle control wrapping the host tick scheduler
//! - `command`: Player commands and key mapping
//! - `platform`: Browser/native scheduler abstraction
//! - `tuning`: Data-driven game balance
//! - `renderer`: Canvas 2D drawing of snapshots
//! - `audio`: Procedural sound effects for game events

pub mod audio;
pub mod command;
pub mod engine;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use command::Command;
pub use engine::Engine;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    use crate::sim::Direction;

    /// Grid dimensions in cells (fixed for the lifetime of the process)
    pub const GRID_WIDTH: i32 = 30;
    pub const GRID_HEIGHT: i32 = 30;

    /// Starting snake, head first
    pub const START_SNAKE: [(i32, i32); 3] = [(15, 15), (14, 15), (13, 15)];
    pub const START_DIRECTION: Direction = Direction::Right;

    /// Canvas size in CSS pixels (15 px cells)
    pub const CELL_SIZE: f64 = 15.0;
}
