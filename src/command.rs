//! Player commands
//!
//! Keyboard and on-screen buttons are translated to [`Command`]s so the
//! engine never sees a UI technology.

use serde::{Deserialize, Serialize};

use crate::sim::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Turn(Direction),
    Start,
    Reset,
}

impl Command {
    /// Arrow keys and WASD (`KeyboardEvent.key` values)
    pub fn from_key(key: &str) -> Option<Self> {
        let dir = match key {
            "ArrowLeft" | "a" | "A" => Direction::Left,
            "ArrowUp" | "w" | "W" => Direction::Up,
            "ArrowRight" | "d" | "D" => Direction::Right,
            "ArrowDown" | "s" | "S" => Direction::Down,
            _ => return None,
        };
        Some(Command::Turn(dir))
    }

    /// On-screen buttons by element id
    pub fn from_button_id(id: &str) -> Option<Self> {
        match id {
            "upButton" => Some(Command::Turn(Direction::Up)),
            "leftButton" => Some(Command::Turn(Direction::Left)),
            "rightButton" => Some(Command::Turn(Direction::Right)),
            "downButton" => Some(Command::Turn(Direction::Down)),
            "startButton" => Some(Command::Start),
            "resetButton" => Some(Command::Reset),
            _ => None,
        }
    }

    /// Element ids the host wires up
    pub const BUTTON_IDS: [&'static str; 6] = [
        "upButton",
        "leftButton",
        "rightButton",
        "downButton",
        "startButton",
        "resetButton",
    ];
}
