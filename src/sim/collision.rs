//! Collision detection for the snake's next head cell
//!
//! The whole pre-move body counts as occupied, tail included. Moving into the
//! cell the tail is about to vacate is therefore a collision too.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::grid::{Position, in_bounds};

/// What the head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Left the `[0, W) x [0, H)` board
    Wall,
    /// Hit any existing body segment
    Body,
}

/// Classify a candidate head position against the current (pre-insertion) snake
pub fn check_collision(pos: Position, snake: &VecDeque<Position>) -> Option<CollisionKind> {
    if !in_bounds(pos) {
        return Some(CollisionKind::Wall);
    }
    if snake.contains(&pos) {
        return Some(CollisionKind::Body);
    }
    None
}

#[inline]
pub fn is_collision(pos: Position, snake: &VecDeque<Position>) -> bool {
    check_collision(pos, snake).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn snake(cells: &[(i32, i32)]) -> VecDeque<Position> {
        cells.iter().map(|&(x, y)| IVec2::new(x, y)).collect()
    }

    #[test]
    fn test_free_cell() {
        let s = snake(&[(15, 15), (14, 15), (13, 15)]);
        assert_eq!(check_collision(IVec2::new(16, 15), &s), None);
    }

    #[test]
    fn test_walls() {
        let s = snake(&[(0, 0)]);
        assert_eq!(check_collision(IVec2::new(-1, 0), &s), Some(CollisionKind::Wall));
        assert_eq!(check_collision(IVec2::new(0, -1), &s), Some(CollisionKind::Wall));
        assert_eq!(check_collision(IVec2::new(30, 0), &s), Some(CollisionKind::Wall));
        assert_eq!(check_collision(IVec2::new(0, 30), &s), Some(CollisionKind::Wall));
    }

    #[test]
    fn test_body_hit_anywhere() {
        let s = snake(&[(5, 5), (5, 6), (6, 6), (6, 5)]);
        assert_eq!(check_collision(IVec2::new(5, 6), &s), Some(CollisionKind::Body));
        assert!(is_collision(IVec2::new(5, 5), &s));
    }

    #[test]
    fn test_tail_cell_counts_as_occupied() {
        // Head (5,5) circling back onto its tail (6,5): still a collision
        let s = snake(&[(5, 5), (5, 6), (6, 6), (6, 5)]);
        assert_eq!(check_collision(IVec2::new(6, 5), &s), Some(CollisionKind::Body));
    }
}
