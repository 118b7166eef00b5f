//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, driven by an external scheduler
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod grid;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionKind, check_collision, is_collision};
pub use grid::{Direction, Position, in_bounds};
pub use state::{
    ActiveEffects, BonusFood, GameEvent, GamePhase, GameState, PowerUp, PowerUpKind, Snapshot,
};
pub use tick::{effective_interval_ms, tick};
