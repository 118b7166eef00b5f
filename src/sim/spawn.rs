//! Entity placement by rejection sampling
//!
//! Candidates are drawn uniformly from the grid until one is free. After
//! `placement_attempts` misses the board is scanned and a free cell is picked
//! uniformly from what is left, so placement always terminates. `None` means
//! the board is full and the spawn is skipped.

use glam::IVec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::grid::Position;
use super::state::{BonusFood, GameEvent, GameState, PowerUp, PowerUpKind};
use crate::consts::{GRID_HEIGHT, GRID_WIDTH};

/// Find a cell for which `blocked` is false
pub fn find_free_cell<R: Rng>(
    rng: &mut R,
    max_attempts: u32,
    blocked: impl Fn(Position) -> bool,
) -> Option<Position> {
    for _ in 0..max_attempts {
        let pos = IVec2::new(
            rng.random_range(0..GRID_WIDTH),
            rng.random_range(0..GRID_HEIGHT),
        );
        if !blocked(pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = (0..GRID_HEIGHT)
        .flat_map(|y| (0..GRID_WIDTH).map(move |x| IVec2::new(x, y)))
        .filter(|&pos| !blocked(pos))
        .collect();
    free.choose(rng).copied()
}

/// Move regular food to a cell free of the snake, bonus food and power-up
pub fn regenerate_food(state: &mut GameState) {
    let snake = &state.snake;
    let bonus = state.bonus.map(|b| b.pos);
    let power_up = state.power_up.map(|p| p.pos);

    state.food = find_free_cell(&mut state.rng, state.tuning.placement_attempts, |pos| {
        snake.contains(&pos) || bonus == Some(pos) || power_up == Some(pos)
    });
    if state.food.is_none() {
        log::warn!("No free cell for food; board is full");
    }
}

/// Place bonus food with a fresh lifetime. Returns whether it was placed.
pub fn spawn_bonus_food(state: &mut GameState) -> bool {
    let snake = &state.snake;
    let food = state.food;
    let power_up = state.power_up.map(|p| p.pos);

    let Some(pos) = find_free_cell(&mut state.rng, state.tuning.placement_attempts, |pos| {
        snake.contains(&pos) || food == Some(pos) || power_up == Some(pos)
    }) else {
        log::warn!("No free cell for bonus food; skipping spawn");
        return false;
    };

    state.bonus = Some(BonusFood {
        pos,
        ticks_left: state.tuning.bonus_lifetime_ticks,
    });
    state.push_event(GameEvent::BonusSpawned { pos });
    log::debug!("Bonus food at ({}, {})", pos.x, pos.y);
    true
}

/// Place a power-up of the given kind. Returns whether it was placed.
pub fn spawn_power_up(state: &mut GameState, kind: PowerUpKind) -> bool {
    let snake = &state.snake;
    let food = state.food;
    let bonus = state.bonus.map(|b| b.pos);

    let Some(pos) = find_free_cell(&mut state.rng, state.tuning.placement_attempts, |pos| {
        snake.contains(&pos) || food == Some(pos) || bonus == Some(pos)
    }) else {
        log::warn!("No free cell for {:?} power-up; skipping spawn", kind);
        return false;
    };

    state.power_up = Some(PowerUp {
        kind,
        pos,
        ttl_ticks: state.tuning.power_up_lifetime_ticks,
    });
    state.push_event(GameEvent::PowerUpSpawned { kind, pos });
    log::debug!("{:?} power-up at ({}, {})", kind, pos.x, pos.y);
    true
}
