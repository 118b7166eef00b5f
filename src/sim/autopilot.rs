//! Demo mode - the game plays itself
//!
//! Greedy steering: among the turns that are legal and safe for one step,
//! head for the nearest pickup. Good enough for attract screens and soak runs.

use super::collision::is_collision;
use super::grid::{Direction, Position};
use super::state::{GamePhase, GameState};

/// Cheapest Manhattan distance from `pos` to any pickup on the board
fn distance_to_target(state: &GameState, pos: Position) -> i32 {
    state
        .food
        .into_iter()
        .chain(state.bonus.map(|b| b.pos))
        .chain(state.power_up.map(|p| p.pos))
        .map(|target| (target - pos).abs().element_sum())
        .min()
        .unwrap_or(0)
}

/// Pick the direction for the next tick, or `None` if every move collides
pub fn choose_direction(state: &GameState) -> Option<Direction> {
    if state.phase != GamePhase::Running {
        return None;
    }
    let head = state.head();

    Direction::ALL
        .into_iter()
        .filter(|dir| !dir.is_opposite(state.last_direction))
        .filter(|dir| !is_collision(head + dir.delta(), &state.snake))
        // min_by_key keeps the first of equal keys, so ALL's order breaks ties
        .min_by_key(|dir| distance_to_target(state, head + dir.delta()))
}

/// Steer the state for one tick; returns the direction applied, if any
pub fn steer(state: &mut GameState) -> Option<Direction> {
    let dir = choose_direction(state)?;
    state.turn(dir).then_some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::tick;
    use glam::IVec2;

    #[test]
    fn test_heads_toward_food() {
        let mut state = GameState::new(1);
        state.start();
        state.food = Some(IVec2::new(15, 5));
        assert_eq!(choose_direction(&state), Some(Direction::Up));

        state.food = Some(IVec2::new(15, 25));
        assert_eq!(choose_direction(&state), Some(Direction::Down));
    }

    #[test]
    fn test_never_reverses() {
        let mut state = GameState::new(1);
        state.start();
        // Food straight behind the snake
        state.food = Some(IVec2::new(2, 15));
        let dir = choose_direction(&state).unwrap();
        assert_ne!(dir, Direction::Left);
    }

    #[test]
    fn test_avoids_wall() {
        let mut state = GameState::new(1);
        state.start();
        state.snake = [(29, 10), (28, 10), (27, 10)]
            .iter()
            .map(|&(x, y)| IVec2::new(x, y))
            .collect();
        state.food = Some(IVec2::new(29, 0));
        assert_eq!(choose_direction(&state), Some(Direction::Up));
    }

    #[test]
    fn test_none_when_idle() {
        let state = GameState::new(1);
        assert_eq!(choose_direction(&state), None);
    }

    #[test]
    fn test_autopilot_scores() {
        let mut state = GameState::new(2024);
        state.start();
        for _ in 0..300 {
            if state.phase != GamePhase::Running {
                break;
            }
            steer(&mut state);
            tick(&mut state);
        }
        assert!(state.score > 0);
    }
}
